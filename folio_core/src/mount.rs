// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract between the renderers and a backend's container elements.
//!
//! Renderers only produce fragments. A backend wraps each container element
//! it owns in a [`Mount`] implementation and the helpers in
//! [`render`](crate::render) push complete fragments through it. Nothing is
//! ever patched in place: every update replaces the whole container.

use alloc::string::String;

/// A container whose contents can be replaced with a rendered fragment.
///
/// The DOM backend implements this for page elements; `String` implements it
/// so renderers can be exercised without a browser.
pub trait Mount {
    /// Replaces everything inside the container with `fragment`.
    fn replace_contents(&mut self, fragment: &str);
}

impl Mount for String {
    fn replace_contents(&mut self, fragment: &str) {
        self.clear();
        self.push_str(fragment);
    }
}

impl<M: Mount + ?Sized> Mount for &mut M {
    fn replace_contents(&mut self, fragment: &str) {
        (**self).replace_contents(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_mount_replaces_everything() {
        let mut target = String::from("<p>old</p>");
        target.replace_contents("<p>new</p>");
        assert_eq!(target, "<p>new</p>");
    }
}
