//! Tracing setup. In the browser, formatted events go to the devtools console.

use tracing_subscriber::EnvFilter;

#[cfg(target_arch = "wasm32")]
pub fn init(filter: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(console::MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("logging already initialised: {err}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(filter: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = result {
        eprintln!("logging already initialised: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};

    use tracing_subscriber::fmt::MakeWriter;

    pub struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter(Vec::new())
        }
    }

    /// Buffers one formatted event and emits it as a single console line on drop.
    pub struct ConsoleWriter(Vec<u8>);

    impl Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.0);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&line.into());
            }
        }
    }
}
