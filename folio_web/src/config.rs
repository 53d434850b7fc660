// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reads [`SiteConfig`] overrides from the host page.
//!
//! The page can tune the glue without a rebuild through `data-*` attributes
//! on `<body>`:
//!
//! ```html
//! <body data-contact-fallback="me@example.org" data-scroll-margin="64">
//! ```

use folio_core::config::SiteConfig;
use web_sys::Document;

/// Returns the stock configuration with `<body data-*>` overrides applied.
pub(crate) fn from_document(document: &Document) -> SiteConfig {
    let mut config = SiteConfig::new();
    if let Some(body) = document.body() {
        let dataset = body.dataset();
        config.apply_overrides(|key| dataset.get(key));
    }
    config
}
