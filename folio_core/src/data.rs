// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project and timeline records, and their lenient JSON boundary.
//!
//! Both data files are arrays of flat objects. Parsing never fails because a
//! field is missing or `null`: every field falls back to its default. Only
//! text that is not JSON at all is reported as an error. A document whose top
//! level is valid JSON but not an array is read as an empty list, and an
//! array element that cannot be read as a record is skipped (with a warning)
//! so that its siblings still render.

use alloc::string::String;
use alloc::vec::Vec;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One portfolio project, rendered as a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Card heading.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Technology tags, shown in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stack: Vec<String>,
    /// Short description paragraph.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Link target for "View project".
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Optional thumbnail URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    /// Returns the thumbnail URL, treating an empty string as absent.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

/// One career-timeline entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    /// Start of the period, free text (e.g. `"2021"`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    /// End of the period, free text (e.g. `"Present"`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: String,
    /// Employer or organisation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    /// Role title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Summary paragraph.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Highlights; the first one is emphasized. Empty means no list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

/// Parses the projects document.
///
/// # Errors
///
/// Returns the parser error if `json` is not valid JSON.
pub fn parse_projects(json: &str) -> Result<Vec<Project>, serde_json::Error> {
    parse_records(json, "project")
}

/// Parses the timeline document.
///
/// # Errors
///
/// Returns the parser error if `json` is not valid JSON.
pub fn parse_timeline(json: &str) -> Result<Vec<TimelineEntry>, serde_json::Error> {
    parse_records(json, "timeline entry")
}

fn parse_records<T: DeserializeOwned>(json: &str, kind: &str) -> Result<Vec<T>, serde_json::Error> {
    let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
        warn!("{kind} document is not a JSON array; treating it as empty");
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(record) => records.push(record),
            Err(err) => warn!("skipping {kind} #{index}: {err}"),
        }
    }
    Ok(records)
}

/// Reads `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
