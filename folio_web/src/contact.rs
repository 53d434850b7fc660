// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact-form fallback.
//!
//! While the contact form still points at an unconfigured form-service
//! endpoint, submitting it opens the visitor's mail client with a prefilled
//! `mailto:` link instead. A configured endpoint is never touched.

use folio_core::config::SiteConfig;
use folio_core::contact::{
    ContactMessage, NOTE_CLASS, OPENING_NOTE, form_selector, is_unconfigured, resolve_recipient,
};
use log::{debug, error, info};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::Error;

/// What the submit handler needs, captured once at attach time.
struct Fallback {
    window: Window,
    document: Document,
    form: Element,
    placeholder_token: &'static str,
    contact_email_id: &'static str,
    contact_fallback: Option<String>,
}

/// Attaches the submit interceptor if the page has a contact form.
///
/// Returns `false` when there is no form to attach to.
pub(crate) fn attach(window: &Window, document: &Document, config: &SiteConfig) -> Result<bool, Error> {
    let Some(form) = document.query_selector(&form_selector(config.form_marker))? else {
        debug!("no contact form on this page");
        return Ok(false);
    };

    let fallback = Fallback {
        window: window.clone(),
        document: document.clone(),
        form: form.clone(),
        placeholder_token: config.placeholder_token,
        contact_email_id: config.ids.contact_email,
        contact_fallback: config.contact_fallback.clone(),
    };

    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        // Nothing in here may break the rest of the page.
        if let Err(err) = fallback.on_submit(&event) {
            error!("contact mailto fallback failed: {err}");
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(true)
}

impl Fallback {
    fn on_submit(&self, event: &Event) -> Result<(), Error> {
        let action = self.form.get_attribute("action").unwrap_or_default();
        if !is_unconfigured(&action, self.placeholder_token) {
            return Ok(());
        }
        event.prevent_default();

        let message = ContactMessage {
            name: self.field("name")?,
            email: self.field("email")?,
            message: self.field("message")?,
        };
        let visible = self
            .document
            .get_element_by_id(self.contact_email_id)
            .and_then(|el| el.text_content());
        let recipient = resolve_recipient(visible.as_deref(), self.contact_fallback.as_deref());

        info!("contact form has no endpoint; opening mail client");
        self.window.location().set_href(&message.mailto(recipient))?;

        let note = self.document.create_element("p")?;
        note.set_class_name(NOTE_CLASS);
        note.set_text_content(Some(OPENING_NOTE));
        self.form.insert_adjacent_element("afterend", &note)?;
        Ok(())
    }

    /// Value of the form control named `name`; empty if it is missing.
    fn field(&self, name: &str) -> Result<String, Error> {
        let Some(el) = self.form.query_selector(&format!(r#"[name="{name}"]"#))? else {
            return Ok(String::new());
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Ok(area.value());
        }
        Ok(String::new())
    }
}
