// Routes `tracing` output to the browser console.
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

const DEFAULT_FILTER: &str = "info";

/// Buffers one formatted event and hands it to `console.log` on drop.
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

pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Installs the console subscriber. The filter comes from `STP_LOG` at build
/// time, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_new(option_env!("STP_LOG").unwrap_or(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // No clock on wasm32-unknown-unknown, so no timestamps.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Console)
        .with_ansi(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        web_sys::console::log_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}
