// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration.
//!
//! [`SiteConfig`] collects everything the page glue would otherwise hard-code:
//! where the data lives, which elements it writes to, and the few tunables of
//! the interactive behaviors. Backends start from [`SiteConfig::new`] and
//! overlay whatever the host page supplies.

use alloc::string::{String, ToString as _};

use log::LevelFilter;

/// Fixed identifiers of the elements the page glue reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementIds {
    /// Container replaced with project cards.
    pub projects: &'static str,
    /// Container replaced with the timeline.
    pub timeline: &'static str,
    /// Element whose text becomes the current year.
    pub year: &'static str,
    /// Element whose visible text is the contact address.
    pub contact_email: &'static str,
}

impl ElementIds {
    /// The identifiers used by the portfolio page markup.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            projects: "projects-list",
            timeline: "timeline",
            year: "year",
            contact_email: "contact-email",
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration for one page load.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Relative URL of the projects document.
    pub projects_src: String,
    /// Relative URL of the timeline document.
    pub timeline_src: String,
    /// Element identifiers.
    pub ids: ElementIds,
    /// Substring of a form's `action` that marks it as the contact form.
    pub form_marker: &'static str,
    /// Substring of the contact form's `action` that marks it as unconfigured.
    pub placeholder_token: &'static str,
    /// Bullets shown before the rest of a timeline entry is collapsed.
    ///
    /// Never zero when set through [`apply_overrides`](Self::apply_overrides).
    pub visible_bullets: usize,
    /// Gap, in CSS pixels, left above an in-page scroll target.
    pub scroll_margin: f64,
    /// Recipient used when the page shows no contact address.
    ///
    /// `None` produces a `mailto:` link without a recipient.
    pub contact_fallback: Option<String>,
    /// Maximum level passed to the logger.
    pub log_level: LevelFilter,
}

impl SiteConfig {
    /// Default location of the projects document.
    pub const PROJECTS_SRC: &'static str = "assets/data/projects.json";
    /// Default location of the timeline document.
    pub const TIMELINE_SRC: &'static str = "assets/data/timeline.json";

    /// Configuration matching the stock page layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects_src: Self::PROJECTS_SRC.to_string(),
            timeline_src: Self::TIMELINE_SRC.to_string(),
            ids: ElementIds::standard(),
            form_marker: "formspree.io",
            placeholder_token: "{",
            visible_bullets: 3,
            scroll_margin: 80.0,
            contact_fallback: None,
            log_level: LevelFilter::Info,
        }
    }

    /// Applies page-supplied overrides.
    ///
    /// `lookup` maps a camel-case key (`projectsSrc`, `timelineSrc`,
    /// `contactFallback`, `scrollMargin`, `visibleBullets`, `logLevel`) to its
    /// raw value. Blank or unparsable values leave the field unchanged, and so
    /// does a `visibleBullets` of `0`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(src) = get("projectsSrc") {
            self.projects_src = src;
        }
        if let Some(src) = get("timelineSrc") {
            self.timeline_src = src;
        }
        if let Some(address) = get("contactFallback").filter(|a| a.contains('@')) {
            self.contact_fallback = Some(address);
        }
        if let Some(margin) = get("scrollMargin")
            .and_then(|m| m.trim_end_matches("px").parse::<f64>().ok())
            .filter(|m| m.is_finite() && *m >= 0.0)
        {
            self.scroll_margin = margin;
        }
        if let Some(count) = get("visibleBullets")
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            self.visible_bullets = count;
        }
        if let Some(level) = get("logLevel").and_then(|l| l.parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_match_stock_page() {
        let config = SiteConfig::default();
        assert_eq!(config.projects_src, "assets/data/projects.json");
        assert_eq!(config.ids.projects, "projects-list");
        assert_eq!(config.visible_bullets, 3);
        assert_eq!(config.contact_fallback, None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn overrides_replace_fields() {
        let mut config = SiteConfig::new();
        config.apply_overrides(lookup(&[
            ("projectsSrc", "data/p.json"),
            ("contactFallback", " me@example.org "),
            ("scrollMargin", "64px"),
            ("visibleBullets", "5"),
            ("logLevel", "debug"),
        ]));
        assert_eq!(config.projects_src, "data/p.json");
        assert_eq!(config.timeline_src, SiteConfig::TIMELINE_SRC);
        assert_eq!(config.contact_fallback.as_deref(), Some("me@example.org"));
        assert_eq!(config.scroll_margin, 64.0);
        assert_eq!(config.visible_bullets, 5);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_overrides_are_ignored() {
        let mut config = SiteConfig::new();
        config.apply_overrides(lookup(&[
            ("projectsSrc", "   "),
            ("contactFallback", "nobody"),
            ("scrollMargin", "-3"),
            ("visibleBullets", "many"),
            ("logLevel", "loud"),
        ]));
        assert_eq!(config, SiteConfig::new());
    }

    #[test]
    fn zero_visible_bullets_is_ignored() {
        let mut config = SiteConfig::new();
        config.apply_overrides(lookup(&[("visibleBullets", "0")]));
        assert_eq!(config.visible_bullets, SiteConfig::new().visible_bullets);

        config.apply_overrides(lookup(&[("visibleBullets", "1")]));
        assert_eq!(config.visible_bullets, 1);
    }
}
