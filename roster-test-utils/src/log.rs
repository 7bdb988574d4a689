//! Captured log output.
//!
//! `LogCapture` installs a `tracing` subscriber for the current thread that writes formatted
//! events into memory, so tests can assert that a failure was reported. `#[tokio::test]`
//! runs on a current-thread runtime, so events from awaited service calls are captured too.

use std::{
    io,
    sync::{Arc, Mutex},
};

use dioxus_logger::tracing::{subscriber::DefaultGuard, Level};
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records every event logged on the current thread until dropped.
pub struct LogCapture {
    buffer: SharedBuffer,
    _guard: DefaultGuard,
}

impl LogCapture {
    pub fn start() -> Self {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .without_time(),
        );

        Self {
            buffer,
            _guard: dioxus_logger::tracing::subscriber::set_default(subscriber),
        }
    }

    /// Formatted log lines captured so far.
    pub fn lines(&self) -> Vec<String> {
        let bytes = match self.buffer.0.lock() {
            Ok(bytes) => bytes.clone(),
            Err(_) => return Vec::new(),
        };

        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Number of captured events at `level` whose line contains `message`.
    pub fn count(&self, level: Level, message: &str) -> usize {
        let level = level.to_string();
        self.lines()
            .iter()
            .filter(|line| line.contains(&level) && line.contains(message))
            .count()
    }
}
