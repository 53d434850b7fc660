// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM containers.

use folio_core::mount::Mount;
use web_sys::Element;

/// A page element whose contents the renderers replace wholesale.
///
/// Replacing goes through `innerHTML`, so by the time
/// [`replace_contents`](Mount::replace_contents) returns the new elements
/// exist and can be queried.
pub struct DomMount {
    element: Element,
}

impl core::fmt::Debug for DomMount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomMount")
            .field("id", &self.element.id())
            .finish()
    }
}

impl DomMount {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Mount for DomMount {
    fn replace_contents(&mut self, fragment: &str) {
        self.element.set_inner_html(fragment);
    }
}
