// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binds the timeline "show more" controls.
//!
//! Called once per timeline mount, right after the fragment is in place. Each
//! control gets its own [`ToggleState`] and one closure that serves both
//! `click` and `keydown`. The controls are rendered as `role="button"` spans,
//! so no native button activation doubles up with the key handler.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::render::TOGGLE_CLASS;
use folio_core::toggle::{COLLAPSED_CLASS, ToggleState, is_activation_key};
use log::debug;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, KeyboardEvent};

use crate::Error;

/// Binds every toggle control inside `container`. Returns how many were bound.
pub(crate) fn bind_all(container: &Element) -> Result<u32, Error> {
    let Some(document) = container.owner_document() else {
        return Err(Error::NoDocument);
    };
    let controls = container.query_selector_all(&format!(".{TOGGLE_CLASS}"))?;

    let mut bound = 0;
    for i in 0..controls.length() {
        let Some(control) = controls.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(list) = control
            .get_attribute("aria-controls")
            .and_then(|id| document.get_element_by_id(&id))
        else {
            debug!("toggle control {i} has no target list; leaving it unbound");
            continue;
        };
        bind(&control, list)?;
        bound += 1;
    }
    Ok(bound)
}

fn bind(control: &Element, list: Element) -> Result<(), Error> {
    let state = Rc::new(Cell::new(ToggleState::default()));
    let target = control.clone();

    let on_activate = Closure::wrap(Box::new(move |event: Event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            if !is_activation_key(&key.key()) {
                return;
            }
            // Keeps Space from scrolling the page.
            event.prevent_default();
        }
        let next = state.get().toggled();
        state.set(next);
        if let Err(err) = apply(next, &target, &list) {
            log::warn!("toggle update failed: {err}");
        }
    }) as Box<dyn FnMut(_)>);

    control.add_event_listener_with_callback("click", on_activate.as_ref().unchecked_ref())?;
    control.add_event_listener_with_callback("keydown", on_activate.as_ref().unchecked_ref())?;
    on_activate.forget();
    Ok(())
}

fn apply(state: ToggleState, control: &Element, list: &Element) -> Result<(), Error> {
    list.class_list()
        .toggle_with_force(COLLAPSED_CLASS, state.is_collapsed())?;
    control.set_attribute("aria-expanded", state.aria_expanded())?;
    control.set_text_content(Some(state.label()));
    Ok(())
}
