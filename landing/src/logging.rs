//! tracing subscriber that prints to the browser console.
//!
//! `fmt` output is line buffered and flushed to `console.log` when the writer
//! for an event is dropped. Timestamps are disabled: `std::time` is not
//! available on `wasm32-unknown-unknown`.

use crate::error::{Result, SiteError};
use std::io;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber with an `EnvFilter` directive such as
/// `info` or `axie_landing=debug`.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| SiteError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(ConsoleWriter::default)
        .try_init()
        .map_err(|e| SiteError::Logging(e.to_string()))
}

/// Collects one formatted event and forwards it on drop.
#[derive(Default)]
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn take_line(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        self.buffer.clear();
        (!line.is_empty()).then_some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(&line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(&line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}
