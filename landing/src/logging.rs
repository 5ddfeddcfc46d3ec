//! tracing output routed to the browser console.

use std::io;

use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands it to `console.log` on drop.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
    }
}

/// [`MakeWriter`] producing a fresh [`ConsoleWriter`] per event.
pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// Install the global subscriber. No timestamps: wasm32 has no system clock.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(Console)
        .without_time()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .init();
}
