// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-page anchor handling for smooth scrolling.

/// CSS selector matching every anchor that may point inside the page.
pub const IN_PAGE_ANCHORS: &str = r##"a[href^="#"]"##;

/// Returns the element id an in-page `href` points at.
///
/// Only hrefs of the form `#id` qualify; a bare `#` has no target and any
/// other href is left to normal navigation.
#[must_use]
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Computes the scroll destination for a target element.
///
/// `target_top` is the element's top edge in document coordinates; the result
/// leaves `margin` pixels above it and never goes above the document start.
#[must_use]
pub fn destination(target_top: f64, margin: f64) -> f64 {
    (target_top - margin).max(0.0)
}
