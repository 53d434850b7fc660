// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser glue for the Folio portfolio page.
//!
//! This crate wires [`folio_core`] to the DOM:
//!
//! - [`start`]: the `wasm_bindgen(start)` entry point. Installs the console
//!   logger, reads [`SiteConfig`] overrides from `<body data-*>`, sets the
//!   year, fetches both data documents and attaches the controllers.
//! - [`DomMount`]: [`Mount`](folio_core::mount::Mount) for page elements.
//! - Toggle, smooth-scroll and contact-fallback controllers, each bound once
//!   and kept alive for the page's lifetime.
//!
//! Build with: `wasm-pack build --target web folio_web`

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "DOM glue only runs in the browser")
)]

mod bootstrap;
mod config;
mod contact;
mod error;
mod fetch;
mod logger;
mod mount;
mod scroll;
mod toggle;

pub use error::Error;
pub use folio_core::config::SiteConfig;
pub use mount::DomMount;

/// Entry point, run once when the module is instantiated.
///
/// Never fails: every step logs its own error and the remaining steps still
/// run.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn start() {
    logger::init(SiteConfig::new().log_level);
    if let Err(err) = bootstrap::run() {
        log::error!("page setup failed: {err}");
    }
}
