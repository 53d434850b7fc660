// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `log` backend that writes to the browser console.
//!
//! Records are routed by level to `console.error`, `console.warn`,
//! `console.info` and `console.debug`, prefixed with their target so the
//! source module is visible in devtools. Panic messages go to `console.error`
//! through `console_error_panic_hook`.

use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

static LOGGER: ConsoleLogger = ConsoleLogger;
static INSTALL: Once = Once::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        passes(metadata.level(), log::max_level())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn passes(level: Level, max: LevelFilter) -> bool {
    level <= max
}

fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}", record.target(), record.args())
}

/// Installs the console logger and panic hook once, and sets the level.
///
/// Later calls only change the level.
pub(crate) fn init(level: LevelFilter) {
    INSTALL.call_once(|| {
        console_error_panic_hook::set_once();
        // A logger installed earlier by the host page stays in place.
        let _ = log::set_logger(&LOGGER);
    });
    log::set_max_level(level);
}
