// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML fragment renderers and the helpers that mount them.
//!
//! Each renderer is a pure function from an ordered slice of records to one
//! fragment. Every record field is escaped exactly once on the way in.
//! [`mount_projects`] and [`mount_timeline`] push a fragment into a
//! [`Mount`], replacing whatever the container held.

mod projects;
mod timeline;

pub use projects::{CARD_MARKER, NO_PROJECTS, PROJECTS_NOT_FOUND, render_projects};
pub use timeline::{
    ENTRY_CLASS, MORE_ID_PREFIX, NO_TIMELINE, TOGGLE_CLASS, more_list_id, render_timeline,
};

use crate::data::{Project, TimelineEntry};
use crate::mount::Mount;

/// Renders `projects` and replaces the contents of `target` with the result.
pub fn mount_projects<M: Mount + ?Sized>(target: &mut M, projects: Option<&[Project]>) {
    target.replace_contents(&render_projects(projects));
}

/// Renders `entries` into `target`, then signals render completion.
///
/// Does nothing when `target` is `None` (the page has no timeline). Otherwise
/// the container is fully replaced and `rendered` is called with it, which is
/// where a backend binds the toggle controls that now exist inside it.
///
/// Returns `true` if the timeline was mounted.
pub fn mount_timeline<M: Mount>(
    target: Option<&mut M>,
    entries: Option<&[TimelineEntry]>,
    visible_bullets: usize,
    rendered: impl FnOnce(&mut M),
) -> bool {
    let Some(target) = target else {
        return false;
    };
    target.replace_contents(&render_timeline(entries, visible_bullets));
    rendered(target);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn mount_projects_replaces_container() {
        let mut target = String::from("<p>Loading…</p>");
        mount_projects(&mut target, Some(&[]));
        assert_eq!(target, NO_PROJECTS);
    }

    #[test]
    fn mount_timeline_without_container_is_a_no_op() {
        let mut called = false;
        let mounted = mount_timeline::<String>(None, Some(&[]), 3, |_| called = true);
        assert!(!mounted);
        assert!(!called);
    }

    #[test]
    fn mount_timeline_signals_after_contents_are_in_place() {
        let entries = vec![TimelineEntry {
            bullets: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..TimelineEntry::default()
        }];
        let mut target = String::new();
        let mut toggles_seen = 0;
        let mounted = mount_timeline(Some(&mut target), Some(&entries), 3, |container| {
            toggles_seen = container.matches(TOGGLE_CLASS).count();
        });
        assert!(mounted);
        assert_eq!(toggles_seen, 1);
    }
}
