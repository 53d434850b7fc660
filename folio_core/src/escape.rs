// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML escaping for untrusted record fields.
//!
//! The five HTML-significant characters are replaced in a single left-to-right
//! pass, so an entity produced for one character is never re-examined. The
//! function is deliberately **not** idempotent: escaping already-escaped text
//! escapes the ampersands again. Every raw field is escaped exactly once,
//! right before it is interpolated into markup.
//!
//! Absent fields never reach this module. The [`data`](crate::data) parsers
//! default a missing or `null` field to the empty string, which escapes to
//! itself.

use alloc::borrow::Cow;
use alloc::string::String;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Returns `text` with `&`, `<`, `>`, `"` and `'` replaced by entities.
///
/// Text without any of them is returned borrowed.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(SPECIAL) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Appends the escaped form of `text` to `out`.
///
/// Renderers use this for every field. An empty field appends nothing.
pub fn push_escaped(out: &mut String, text: &str) {
    out.push_str(&escape_html(text));
}
