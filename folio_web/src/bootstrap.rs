// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page setup.
//!
//! ```text
//!   run()
//!     ├─ config::from_document      <body data-*> overrides
//!     ├─ #year ← current year
//!     ├─ spawn_local(load_projects)  ──► #projects-list
//!     ├─ spawn_local(load_timeline)  ──► #timeline ──► toggle::bind_all
//!     ├─ scroll::attach
//!     └─ contact::attach
//! ```
//!
//! The two loads run concurrently and write to disjoint containers. A failing
//! step is logged and never stops the steps after it.

use folio_core::config::SiteConfig;
use folio_core::mount::Mount as _;
use folio_core::render::{PROJECTS_NOT_FOUND, mount_projects, mount_timeline};
use log::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Window};

use crate::mount::DomMount;
use crate::{Error, config, contact, fetch, logger, scroll, toggle};

pub(crate) fn run() -> Result<(), Error> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    let config = config::from_document(&document);
    logger::init(config.log_level);
    debug!("site config: {config:?}");

    set_year(&document, config.ids.year);

    match document.get_element_by_id(config.ids.projects) {
        Some(container) => spawn_local(load_projects(
            window.clone(),
            container,
            config.projects_src.clone(),
        )),
        None => warn!("#{} is missing; projects not loaded", config.ids.projects),
    }

    match document.get_element_by_id(config.ids.timeline) {
        Some(container) => spawn_local(load_timeline(
            window.clone(),
            container,
            config.timeline_src.clone(),
            config.visible_bullets,
        )),
        None => debug!("no #{} on this page", config.ids.timeline),
    }

    match scroll::attach(&window, &document, config.scroll_margin) {
        Ok(count) => debug!("smooth scroll bound to {count} anchors"),
        Err(err) => error!("smooth scroll setup failed: {err}"),
    }

    attach_contact(&window, &document, &config);
    Ok(())
}

fn set_year(document: &Document, id: &str) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
}

fn attach_contact(window: &Window, document: &Document, config: &SiteConfig) {
    match contact::attach(window, document, config) {
        Ok(true) => debug!("contact fallback attached"),
        Ok(false) => {}
        Err(err) => error!("contact mailto fallback error: {err}"),
    }
}

async fn load_projects(window: Window, container: Element, src: String) {
    let mut mount = DomMount::new(container);
    match fetch::projects(&window, &src).await {
        Ok(projects) => {
            info!("loaded {} projects from {src}", projects.len());
            mount_projects(&mut mount, Some(&projects));
        }
        Err(err) => {
            error!("could not load {src}: {err}");
            mount.replace_contents(PROJECTS_NOT_FOUND);
        }
    }
}

async fn load_timeline(window: Window, container: Element, src: String, visible_bullets: usize) {
    let entries = match fetch::timeline(&window, &src).await {
        Ok(entries) => entries,
        Err(err) => {
            // The container keeps whatever static markup the page shipped.
            error!("could not load {src}: {err}");
            return;
        }
    };
    info!("loaded {} timeline entries from {src}", entries.len());

    let mut mount = DomMount::new(container);
    mount_timeline(Some(&mut mount), Some(&entries), visible_bullets, |mounted| {
        match toggle::bind_all(mounted.element()) {
            Ok(count) => debug!("bound {count} timeline toggles"),
            Err(err) => error!("timeline toggle binding failed: {err}"),
        }
    });
}
