// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records, fragment renderers, and interaction state for a portfolio page.
//!
//! `folio_core` holds everything about the page that does not need a
//! browser. It is `no_std` compatible (with `alloc`) so the same code runs in
//! the WebAssembly build and in native unit tests.
//!
//! # Architecture
//!
//! ```text
//!   JSON text ──► data::parse_* ──► [Project] / [TimelineEntry]
//!                                          │
//!                 ┌────────────────────────┘
//!                 ▼
//!   render::{projects, timeline} ──► fragment ──► Mount::replace_contents()
//!                                                       │
//!                 ┌─────────────────────────────────────┘
//!                 ▼
//!   render-complete callback ──► toggle controls bound by the backend
//! ```
//!
//! **[`data`]**: Project and timeline record types, parsed leniently at the
//! fetch boundary.
//!
//! **[`escape`]**: HTML escaping applied to every untrusted field.
//!
//! **[`render`]**: Project cards and the alternating timeline, plus the
//! [`Mount`](mount::Mount)-based helpers that inject them.
//!
//! **[`mount`]**: The [`Mount`](mount::Mount) trait that backends implement
//! for their container elements.
//!
//! **[`toggle`]**: Collapsed/open state machine for "show more" controls.
//!
//! **[`scroll`]**: In-page anchor parsing and scroll destination maths.
//!
//! **[`contact`]**: Placeholder detection and `mailto:` construction for the
//! contact-form fallback.
//!
//! **[`config`]**: [`SiteConfig`](config::SiteConfig): data paths, element
//! ids, and tunables.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` in dependencies and the
//!   percent-encoded [`ContactMessage::mailto`](contact::ContactMessage::mailto).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod contact;
pub mod data;
pub mod escape;
pub mod mount;
pub mod render;
pub mod scroll;
pub mod toggle;
