// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth scrolling for in-page anchors.
//!
//! One shared click handler is registered on every `a[href^="#"]`. It reads
//! the clicked anchor from `currentTarget`, so anchors never need their own
//! closure.

use folio_core::scroll::{IN_PAGE_ANCHORS, destination, target_id};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

use crate::Error;

/// Attaches the smooth-scroll handler. Returns how many anchors it covers.
pub(crate) fn attach(window: &Window, document: &Document, margin: f64) -> Result<u32, Error> {
    let anchors = document.query_selector_all(IN_PAGE_ANCHORS)?;
    if anchors.length() == 0 {
        return Ok(0);
    }

    let handler_window = window.clone();
    let handler_document = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(anchor) = event
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(target) = target_id(&href).and_then(|id| handler_document.get_element_by_id(id))
        else {
            // Unknown target: let the browser navigate normally.
            return;
        };
        event.prevent_default();
        if let Err(err) = scroll_to(&handler_window, &target, margin) {
            log::warn!("smooth scroll to {href} failed: {err}");
        }
    }) as Box<dyn FnMut(_)>);

    for i in 0..anchors.length() {
        if let Some(anchor) = anchors.item(i) {
            anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        }
    }
    on_click.forget();
    Ok(anchors.length())
}

fn scroll_to(window: &Window, target: &Element, margin: f64) -> Result<(), Error> {
    let top = target.get_bounding_client_rect().top() + window.scroll_y()?;
    let options = ScrollToOptions::new();
    options.set_top(destination(top, margin));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
