//! Logging setup. Events go through `tracing`; in the browser a
//! `tracing-subscriber` fmt layer formats them and writes each line to the
//! devtools console at the matching console level. Panics are routed to the
//! console as well.

use tracing::Level;

/// Parses a verbosity setting given as a level name or a number (0 = error .. 4 = trace).
pub fn parse_log_level(value: &str) -> Option<Level> {
    let value = value.trim();
    if let Ok(number) = value.parse::<u8>() {
        return match number {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 | 5 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Turns the configured log level into `EnvFilter` directives. Bare levels
/// and numbers become a global level; anything else (e.g.
/// `studybuddy_web=debug,warn`) is passed through as directives.
pub fn filter_directives(log_level: &str) -> String {
    let log_level = log_level.trim();
    if log_level.is_empty() {
        return Level::INFO.to_string().to_lowercase();
    }
    match parse_log_level(log_level) {
        Some(level) => level.to_string().to_lowercase(),
        None => log_level.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::init;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::filter_directives;
    use crate::app_lib::errors::AppError;
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::{
        EnvFilter, Registry, fmt, fmt::MakeWriter, layer::SubscriberExt,
        util::SubscriberInitExt,
    };
    use wasm_bindgen::JsValue;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }

    /// Installs the panic hook and the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(log_level: &str) -> Result<(), AppError> {
        console_error_panic_hook::set_once();

        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_writer(ConsoleMakeWriter);

        let filter = EnvFilter::builder()
            .with_default_directive(Level::INFO.into())
            .parse_lossy(filter_directives(log_level));

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|err| AppError::Config(format!("Failed to install logger: {err}")))
    }
}
