// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data document loading.

use folio_core::data::{Project, TimelineEntry, parse_projects, parse_timeline};
use wasm_bindgen::JsCast as _;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::Error;

/// Fetches `path` and returns the body as text. One attempt, no retries.
async fn fetch_text(window: &Window, path: &str) -> Result<String, Error> {
    let response: Response = JsFuture::from(window.fetch_with_str(path))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(Error::Http {
            path: path.to_string(),
            status: response.status(),
        });
    }
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| Error::NotText(path.to_string()))
}

/// Loads and parses the projects document.
pub(crate) async fn projects(window: &Window, path: &str) -> Result<Vec<Project>, Error> {
    let text = fetch_text(window, path).await?;
    Ok(parse_projects(&text)?)
}

/// Loads and parses the timeline document.
pub(crate) async fn timeline(window: &Window, path: &str) -> Result<Vec<TimelineEntry>, Error> {
    let text = fetch_text(window, path).await?;
    Ok(parse_timeline(&text)?)
}
