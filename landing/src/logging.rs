//! `tracing` output routed to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// One formatted event, flushed to the console method matching its level.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let line = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

struct Console;

impl<'a> MakeWriter<'a> for Console {
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

/// Install the global subscriber. No timestamps: the browser clock is not
/// reachable through `std` on wasm32.
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let installed = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_max_level(max_level)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "logging already initialised: {err}"
        )));
    }
}
