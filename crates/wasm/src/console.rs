//! `log` backend that writes to the browser console.
//!
//! Warnings go to `console.warn` and errors to `console.error`, so they show
//! up with the browser's own styling; everything else goes to `console.log`.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Which console method a record is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

impl ConsoleMethod {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Error => ConsoleMethod::Error,
            Level::Warn => ConsoleMethod::Warn,
            Level::Info | Level::Debug | Level::Trace => ConsoleMethod::Log,
        }
    }
}

/// Formats a record the way it appears in the console.
///
/// Warnings and errors are printed bare; lower levels carry the level and
/// target so debug noise is easy to tell apart.
pub fn format_record(level: Level, target: &str, message: &str) -> String {
    match ConsoleMethod::for_level(level) {
        ConsoleMethod::Error | ConsoleMethod::Warn => message.to_string(),
        ConsoleMethod::Log => format!("[{level} {target}] {message}"),
    }
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = format_record(
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let text = wasm_bindgen::JsValue::from_str(&text);
        match ConsoleMethod::for_level(record.level()) {
            ConsoleMethod::Error => web_sys::console::error_1(&text),
            ConsoleMethod::Warn => web_sys::console::warn_1(&text),
            ConsoleMethod::Log => web_sys::console::log_1(&text),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger at `max_level`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init(max_level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_and_errors_use_their_own_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::Error), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::Warn), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::Info), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(Level::Trace), ConsoleMethod::Log);
    }

    #[test]
    fn warnings_are_printed_bare() {
        let text = format_record(
            Level::Warn,
            "quad_canvas_core::render::canvas",
            "A canvas element was not specified. Creating a new canvas element.",
        );
        assert_eq!(
            text,
            "A canvas element was not specified. Creating a new canvas element."
        );
    }

    #[test]
    fn debug_records_carry_level_and_target() {
        let text = format_record(Level::Debug, "quad_canvas_core::render::buffer", "uploaded");
        assert_eq!(text, "[DEBUG quad_canvas_core::render::buffer] uploaded");
    }
}
