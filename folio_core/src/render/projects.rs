// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project cards.

use alloc::string::String;

use crate::data::Project;
use crate::escape::push_escaped;

/// Opening tag of every project card.
pub const CARD_MARKER: &str = r#"<article class="card">"#;

/// Shown when the projects document holds no records.
pub const NO_PROJECTS: &str = r#"<p class="muted">No projects yet.</p>"#;

/// Shown when the projects document could not be loaded.
pub const PROJECTS_NOT_FOUND: &str = r#"<p class="muted">No projects found.</p>"#;

const STACK_SEPARATOR: &str = " • ";

/// Renders one card per project, in order.
///
/// An absent or empty list renders [`NO_PROJECTS`].
#[must_use]
pub fn render_projects(projects: Option<&[Project]>) -> String {
    let projects = projects.unwrap_or_default();
    if projects.is_empty() {
        return String::from(NO_PROJECTS);
    }

    let mut out = String::new();
    for (index, project) in projects.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        push_card(&mut out, project);
    }
    out
}

fn push_card(out: &mut String, project: &Project) {
    out.push_str(CARD_MARKER);

    if let Some(src) = project.thumbnail() {
        out.push_str("\n  <img src=\"");
        push_escaped(out, src);
        out.push_str("\" alt=\"");
        push_escaped(out, &project.title);
        out.push_str(" thumbnail\" class=\"w-full h-40 object-cover rounded-md mb-3\">");
    }

    out.push_str("\n  <h4 class=\"text-slate-900\">");
    push_escaped(out, &project.title);
    out.push_str("</h4>\n  <p class=\"muted text-sm\">");
    for (index, tag) in project.stack.iter().enumerate() {
        if index > 0 {
            out.push_str(STACK_SEPARATOR);
        }
        push_escaped(out, tag);
    }
    out.push_str("</p>\n  <p class=\"mt-2 text-slate-700\">");
    push_escaped(out, &project.description);
    out.push_str("</p>\n  <p class=\"mt-3\"><a class=\"text-brand font-medium\" href=\"");
    push_escaped(out, &project.url);
    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">View project</a></p>\n</article>");
}
