// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for page setup and the event handlers.

use thiserror::Error;
use wasm_bindgen::{JsCast as _, JsValue};

/// Everything that can go wrong while setting up the page.
///
/// None of these escape [`start`](crate::start): each task or event handler
/// logs the error it hits and the rest of the page keeps working.
#[derive(Debug, Error)]
pub enum Error {
    /// No global `window` (not running in a browser main thread).
    #[error("no global `window`")]
    NoWindow,
    /// The window has no document.
    #[error("window has no `document`")]
    NoDocument,
    /// A data document answered with a non-success status.
    #[error("GET {path} returned HTTP {status}")]
    Http {
        /// Requested path.
        path: String,
        /// HTTP status code.
        status: u16,
    },
    /// A response body did not resolve to text.
    #[error("response body of {0} is not text")]
    NotText(String),
    /// A data document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A DOM or fetch call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

/// Best-effort message for a thrown JS value.
fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
