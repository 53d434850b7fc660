// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machine behind the timeline "show more" controls.
//!
//! Each control starts [`Collapsed`](ToggleState::Collapsed) and flips on every
//! activation. The state alone determines everything the backend writes to the
//! page: the control's label, its `aria-expanded` value, and whether the
//! collapsed class sits on the hidden bullet list.

/// Label of a collapsed control.
pub const SHOW_MORE: &str = "Show more";
/// Label of an open control.
pub const SHOW_LESS: &str = "Show less";
/// Class that visually collapses a bullet list.
pub const COLLAPSED_CLASS: &str = "hidden";

/// Whether a control's secondary bullet list is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleState {
    /// Secondary list hidden. Initial state after every render.
    #[default]
    Collapsed,
    /// Secondary list shown.
    Open,
}

impl ToggleState {
    /// Returns the state after one activation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Open,
            Self::Open => Self::Collapsed,
        }
    }

    /// Text shown on the control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collapsed => SHOW_MORE,
            Self::Open => SHOW_LESS,
        }
    }

    /// Value of the control's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        match self {
            Self::Collapsed => "false",
            Self::Open => "true",
        }
    }

    /// Whether the secondary list carries [`COLLAPSED_CLASS`].
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

/// Returns `true` for the `KeyboardEvent.key` values that activate a control.
///
/// `"Spacebar"` is what older browsers report for the space key.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_activation_opens() {
        let state = ToggleState::default().toggled();
        assert_eq!(state, ToggleState::Open);
        assert_eq!(state.label(), "Show less");
        assert_eq!(state.aria_expanded(), "true");
        assert!(!state.is_collapsed());
    }

    #[test]
    fn two_activations_restore_initial_state() {
        let initial = ToggleState::default();
        let state = initial.toggled().toggled();
        assert_eq!(state, initial);
        assert_eq!(state.label(), "Show more");
        assert_eq!(state.aria_expanded(), "false");
        assert!(state.is_collapsed());
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("enter"));
    }
}
