// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact-form fallback planning.
//!
//! The page ships a form that posts to a hosted form service. Until the
//! owner fills in their form id, the `action` still contains a placeholder
//! token; in that state the backend intercepts submission and opens the
//! visitor's mail client instead. This module decides *whether* to intercept
//! and *what* to open. The backend only reads fields and navigates.

use alloc::format;
use alloc::string::String;

/// Note inserted after the form once the mail client has been asked to open.
pub const OPENING_NOTE: &str = "Opening your email client to send the message...";

/// Class list of the inserted note.
pub const NOTE_CLASS: &str = "text-slate-700 mt-3";

/// Returns the CSS selector for the contact form given its action marker.
#[must_use]
pub fn form_selector(marker: &str) -> String {
    format!(r#"form[action*="{marker}"]"#)
}

/// Returns `true` when a form `action` still carries the unresolved
/// placeholder `token`, i.e. no real endpoint has been configured.
#[must_use]
pub fn is_unconfigured(action: &str, token: &str) -> bool {
    action.trim().contains(token)
}

/// Chooses the `mailto:` recipient.
///
/// The address shown on the page wins if it looks like one (contains `@`);
/// otherwise the configured fallback is used; otherwise the recipient is left
/// empty and the mail client asks for one.
#[must_use]
pub fn resolve_recipient<'a>(visible: Option<&'a str>, fallback: Option<&'a str>) -> &'a str {
    visible
        .map(str::trim)
        .filter(|address| address.contains('@'))
        .or(fallback)
        .unwrap_or_default()
}

/// The three values a visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    /// Visitor name; may be empty.
    pub name: String,
    /// Visitor email; may be empty.
    pub email: String,
    /// Free-form message; may be empty.
    pub message: String,
}

impl ContactMessage {
    /// Subject line: the visitor's name, or their email if no name was given.
    #[must_use]
    pub fn subject(&self) -> String {
        let from = if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        };
        format!("Portfolio contact from {from}")
    }

    /// Message body listing all three fields.
    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }

    /// Builds the `mailto:` URI with percent-encoded recipient, subject and
    /// body.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn mailto(&self, recipient: &str) -> String {
        use urlencoding::encode;

        format!(
            "mailto:{}?subject={}&body={}",
            encode(recipient),
            encode(&self.subject()),
            encode(&self.body()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    fn message(name: &str, email: &str, text: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: text.to_string(),
        }
    }

    #[test]
    fn placeholder_action_is_unconfigured() {
        assert!(is_unconfigured("https://formspree.io/f/{your-form-id}", "{"));
        assert!(is_unconfigured("  https://formspree.io/f/{id}  ", "{"));
        assert!(!is_unconfigured("https://formspree.io/f/xyzabcd", "{"));
        assert!(!is_unconfigured("", "{"));
    }

    #[test]
    fn selector_matches_marker() {
        assert_eq!(form_selector("formspree.io"), r#"form[action*="formspree.io"]"#);
    }

    #[test]
    fn subject_prefers_name() {
        assert_eq!(
            message("Ada", "ada@example.org", "").subject(),
            "Portfolio contact from Ada"
        );
        assert_eq!(
            message("", "ada@example.org", "").subject(),
            "Portfolio contact from ada@example.org"
        );
        assert_eq!(ContactMessage::default().subject(), "Portfolio contact from ");
    }

    #[test]
    fn body_lists_all_fields() {
        assert_eq!(
            message("Ada", "ada@example.org", "Hello!").body(),
            "Name: Ada\nEmail: ada@example.org\n\nHello!"
        );
    }

    #[test]
    fn recipient_resolution() {
        assert_eq!(
            resolve_recipient(Some(" owner@example.org\n"), Some("fallback@example.org")),
            "owner@example.org"
        );
        assert_eq!(
            resolve_recipient(Some("email me"), Some("fallback@example.org")),
            "fallback@example.org"
        );
        assert_eq!(resolve_recipient(None, Some("fallback@example.org")), "fallback@example.org");
        assert_eq!(resolve_recipient(None, None), "");
    }

    #[cfg(feature = "std")]
    #[test]
    fn mailto_is_percent_encoded() {
        let uri = message("Ada L", "ada@example.org", "Hi & bye").mailto("owner@example.org");
        assert_eq!(
            uri,
            "mailto:owner%40example.org\
             ?subject=Portfolio%20contact%20from%20Ada%20L\
             &body=Name%3A%20Ada%20L%0AEmail%3A%20ada%40example.org%0A%0AHi%20%26%20bye"
        );
    }
}
