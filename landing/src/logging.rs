//! Log output for the page.
//!
//! A plain `tracing-subscriber` fmt layer, minus timestamps and ANSI colors,
//! whose writer forwards each formatted event to the browser console. On
//! native targets (SSR, tests) the same writer goes to stderr.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{LandingError, Result};

/// Verbose in debug builds, quiet in release.
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|err| LandingError::Logging(err.to_string()))
}

/// Which console method an event ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleLevel {
    Error,
    Warn,
    Log,
}

impl ConsoleLevel {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            _ => Self::Log,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::for_level(meta.level()))
    }
}

/// Buffers one formatted event and emits it as a single console line.
#[derive(Debug)]
struct ConsoleWriter {
    level: ConsoleLevel,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        write_console(self.level, line);
        self.buf.clear();
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: ConsoleLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        ConsoleLevel::Error => web_sys::console::error_1(&value),
        ConsoleLevel::Warn => web_sys::console::warn_1(&value),
        ConsoleLevel::Log => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: ConsoleLevel, line: &str) {
    let _ = writeln!(io::stderr(), "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_level_follows_tracing_level() {
        assert_eq!(ConsoleLevel::for_level(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(&Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::new(ConsoleLevel::Log);
        writer.write_all(b"section ").unwrap();
        writer.write_all(b"resolved\n").unwrap();
        assert_eq!(writer.buf, b"section resolved\n");

        writer.flush().unwrap();
        assert!(writer.buf.is_empty());
    }

    #[test]
    fn second_init_is_reported() {
        let _ = init(Level::DEBUG);
        let second = init(Level::DEBUG);
        assert!(matches!(second, Err(LandingError::Logging(_))));
    }
}
