// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternating career timeline.
//!
//! Entries alternate between the `left` and `right` layout classes by
//! position. Bullet lists longer than the visible limit are split into a
//! visible list and a collapsed list, with a toggle control after them:
//!
//! ```text
//!   <div class="timeline-item left">        index 0, 2, 4, …
//!     … date, title, company, description …
//!     <ul class="timeline-bullets">          first `visible` bullets
//!     <ul class="… hidden" id="timeline-more-0">   the rest
//!     <span class="timeline-toggle" aria-controls="timeline-more-0" …>
//!   <div class="timeline-item right">       index 1, 3, 5, …
//! ```

use alloc::format;
use alloc::string::String;

use crate::data::TimelineEntry;
use crate::escape::push_escaped;
use crate::toggle::{COLLAPSED_CLASS, ToggleState};

/// Class carried by every timeline entry.
pub const ENTRY_CLASS: &str = "timeline-item";

/// Class of the "show more" controls the toggle controller binds to.
pub const TOGGLE_CLASS: &str = "timeline-toggle";

/// Prefix of the id given to each collapsed bullet list.
pub const MORE_ID_PREFIX: &str = "timeline-more-";

/// Shown when the timeline document holds no records.
pub const NO_TIMELINE: &str = r#"<p class="muted">No timeline entries yet.</p>"#;

/// Id of the collapsed bullet list of the entry at `index`.
#[must_use]
pub fn more_list_id(index: usize) -> String {
    format!("{MORE_ID_PREFIX}{index}")
}

/// Renders the timeline, alternating sides and collapsing long bullet lists
/// beyond `visible_bullets`.
///
/// An absent or empty list renders [`NO_TIMELINE`]. A limit of `0` is treated
/// as `1`.
#[must_use]
pub fn render_timeline(entries: Option<&[TimelineEntry]>, visible_bullets: usize) -> String {
    let entries = entries.unwrap_or_default();
    if entries.is_empty() {
        return String::from(NO_TIMELINE);
    }

    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        push_entry(&mut out, index, entry, visible_bullets);
    }
    out
}

fn push_entry(out: &mut String, index: usize, entry: &TimelineEntry, visible: usize) {
    let side = if index % 2 == 0 { "left" } else { "right" };
    out.push_str(&format!(
        "<div class=\"{ENTRY_CLASS} {side}\">\n  <div class=\"timeline-content\">"
    ));

    out.push_str("\n    <p class=\"timeline-date muted text-sm\">");
    push_escaped(out, &entry.start);
    out.push_str(" – ");
    push_escaped(out, &entry.end);
    out.push_str("</p>\n    <h4 class=\"timeline-title text-slate-900\">");
    push_escaped(out, &entry.title);
    out.push_str("</h4>\n    <p class=\"timeline-company text-brand font-medium\">");
    push_escaped(out, &entry.company);
    out.push_str("</p>\n    <p class=\"timeline-description mt-2 text-slate-700\">");
    push_escaped(out, &entry.description);
    out.push_str("</p>");

    push_bullets(out, index, &entry.bullets, visible);

    out.push_str("\n  </div>\n</div>");
}

fn push_bullets(out: &mut String, index: usize, bullets: &[String], visible: usize) {
    if bullets.is_empty() {
        return;
    }
    // At least one bullet always stays visible.
    let visible = visible.max(1);
    if bullets.len() <= visible {
        push_list(out, "timeline-bullets", None, bullets, 0);
        return;
    }

    let (shown, more) = bullets.split_at(visible);
    let id = more_list_id(index);
    let state = ToggleState::default();

    push_list(out, "timeline-bullets", None, shown, 0);
    push_list(
        out,
        &format!("timeline-bullets timeline-more {COLLAPSED_CLASS}"),
        Some(id.as_str()),
        more,
        shown.len(),
    );
    out.push_str(&format!(
        "\n    <span class=\"{TOGGLE_CLASS} text-brand font-medium\" role=\"button\" \
         tabindex=\"0\" aria-controls=\"{id}\" aria-expanded=\"{}\">{}</span>",
        state.aria_expanded(),
        state.label(),
    ));
}

/// Writes one `<ul>`; `first` is the position of `items[0]` within the entry,
/// so only the entry's very first bullet is emphasized.
fn push_list(out: &mut String, class: &str, id: Option<&str>, items: &[String], first: usize) {
    out.push_str("\n    <ul class=\"");
    out.push_str(class);
    out.push('"');
    if let Some(id) = id {
        out.push_str(" id=\"");
        out.push_str(id);
        out.push('"');
    }
    out.push('>');
    for (offset, item) in items.iter().enumerate() {
        if first + offset == 0 {
            out.push_str("\n      <li><strong>");
            push_escaped(out, item);
            out.push_str("</strong></li>");
        } else {
            out.push_str("\n      <li>");
            push_escaped(out, item);
            out.push_str("</li>");
        }
    }
    out.push_str("\n    </ul>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;

    fn entry(title: &str, bullets: usize) -> TimelineEntry {
        TimelineEntry {
            start: "2020".to_string(),
            end: "2022".to_string(),
            company: "Acme".to_string(),
            title: title.to_string(),
            description: "Built things.".to_string(),
            bullets: (1..=bullets).map(|n| format!("bullet {n}")).collect(),
        }
    }

    /// Splits a rendered timeline into per-entry chunks.
    fn entries_of(html: &str) -> Vec<&str> {
        html.split("<div class=\"timeline-item ")
            .skip(1)
            .collect()
    }

    #[test]
    fn empty_and_absent_render_placeholder() {
        assert_eq!(render_timeline(None, 3), NO_TIMELINE);
        assert_eq!(render_timeline(Some(&[]), 3), NO_TIMELINE);
    }

    #[test]
    fn sides_alternate_by_index() {
        let entries: Vec<TimelineEntry> = (0..5).map(|i| entry(&format!("t{i}"), 0)).collect();
        let html = render_timeline(Some(&entries), 3);
        let chunks = entries_of(&html);
        assert_eq!(chunks.len(), 5);
        for (index, chunk) in chunks.iter().enumerate() {
            let expected = if index % 2 == 0 { "left\"" } else { "right\"" };
            assert!(chunk.starts_with(expected), "entry {index}: {chunk}");
            assert!(chunk.contains(&format!(">t{index}</h4>")));
        }
    }

    #[test]
    fn no_bullets_means_no_list() {
        let html = render_timeline(Some(&[entry("none", 0)]), 3);
        assert!(!html.contains("<ul"));
        assert!(!html.contains(TOGGLE_CLASS));
    }

    #[test]
    fn short_list_has_single_group_and_no_toggle() {
        for count in 1..=3 {
            let html = render_timeline(Some(&[entry("short", count)]), 3);
            assert_eq!(html.matches("<ul").count(), 1);
            assert_eq!(html.matches("<li>").count(), count);
            assert!(!html.contains(TOGGLE_CLASS));
            assert!(!html.contains(MORE_ID_PREFIX));
        }
    }

    #[test]
    fn long_list_splits_with_one_toggle() {
        for count in [4, 7] {
            let html = render_timeline(Some(&[entry("long", count)]), 3);
            assert_eq!(html.matches(TOGGLE_CLASS).count(), 1);
            assert_eq!(html.matches("<ul").count(), 2);

            let (visible, hidden) = html.split_once("timeline-more").unwrap();
            assert_eq!(visible.matches("<li>").count(), 3);
            assert_eq!(hidden.matches("<li>").count(), count - 3);
        }
    }

    #[test]
    fn collapsed_list_and_toggle_markup() {
        let entries = [entry("a", 0), entry("b", 5)];
        let html = render_timeline(Some(&entries), 3);
        assert!(html.contains(
            r#"<ul class="timeline-bullets timeline-more hidden" id="timeline-more-1">"#
        ));
        assert!(html.contains(r#"aria-controls="timeline-more-1" aria-expanded="false">Show more</span>"#));
        assert!(html.contains(r#"role="button" tabindex="0""#));
    }

    #[test]
    fn only_first_bullet_is_emphasized() {
        let html = render_timeline(Some(&[entry("e", 5)]), 3);
        assert_eq!(html.matches("<strong>").count(), 1);
        assert!(html.contains("<li><strong>bullet 1</strong></li>"));
        assert!(html.contains("<li>bullet 4</li>"));
    }

    #[test]
    fn visible_limit_is_configurable() {
        let html = render_timeline(Some(&[entry("e", 5)]), 5);
        assert!(!html.contains(TOGGLE_CLASS));
        let html = render_timeline(Some(&[entry("e", 5)]), 1);
        let (visible, hidden) = html.split_once("timeline-more").unwrap();
        assert_eq!(visible.matches("<li>").count(), 1);
        assert_eq!(hidden.matches("<li>").count(), 4);
    }

    #[test]
    fn zero_limit_keeps_first_bullet_visible() {
        let html = render_timeline(Some(&[entry("short", 1)]), 0);
        assert!(!html.contains(TOGGLE_CLASS));
        assert_eq!(html.matches("<ul").count(), 1);
        assert!(html.contains("<li><strong>bullet 1</strong></li>"));

        let html = render_timeline(Some(&[entry("long", 3)]), 0);
        let (visible, hidden) = html.split_once("timeline-more").unwrap();
        assert!(visible.contains("<li><strong>bullet 1</strong></li>"));
        assert_eq!(hidden.matches("<li>").count(), 2);
        assert_eq!(html.matches(TOGGLE_CLASS).count(), 1);
    }

    #[test]
    fn fields_and_bullets_are_escaped() {
        let mut hostile = entry("A & B", 0);
        hostile.company = "<Corp>".to_string();
        hostile.bullets = ["<b>bold</b>".to_string(), "it's".to_string()].into();
        let html = render_timeline(Some(&[hostile]), 3);
        assert!(html.contains(">A &amp; B</h4>"));
        assert!(html.contains("&lt;Corp&gt;"));
        assert!(html.contains("<strong>&lt;b&gt;bold&lt;/b&gt;</strong>"));
        assert!(html.contains("<li>it&#39;s</li>"));
    }
}
