// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapts any [`std::io::Write`] into a [`Sink`].
//!
//! Files, sockets, pipes and `Vec<u8>` buffers all become sinks this way. The
//! writer sits behind a mutex held for exactly one `write_all` per line, so
//! concurrent loggers never interleave partial lines.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`Sink`] that writes each line to a wrapped [`Write`] implementation.
///
/// # Example
///
/// ```rust,no_run
/// use prefixlog::{WriterSink, set_outputs, logger_for};
/// use std::sync::Arc;
///
/// let errors = Arc::new(WriterSink::new(std::io::sink()));
/// let debug = Arc::new(WriterSink::new(Vec::<u8>::new()));
/// set_outputs(errors, debug.clone());
///
/// logger_for("doc").debug("captured");
/// let written = debug.with_writer(|buf| String::from_utf8_lossy(buf).into_owned());
/// assert!(written.contains("DEBUG doc: "));
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Runs `f` with exclusive access to the wrapped writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // a panic inside another writer must not take logging down with it
    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> std::fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterSink")
            .field("writer", &std::any::type_name::<W>())
            .finish()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn finish_log_record(&self, record: &LogRecord) {
        let line = record.to_line();
        let _ = self.lock().write_all(line.as_bytes());
    }

    fn write_text(&self, text: &str) {
        let _ = self.lock().write_all(text.as_bytes());
    }

    fn flush(&self) {
        let _ = self.lock().flush();
    }
}
