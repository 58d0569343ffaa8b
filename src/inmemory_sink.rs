// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! An in-memory [`Sink`] for tests and for programs that want to inspect what was
//! logged. Lines are appended, newline included, to a shared buffer exactly as a
//! stream sink would have written them, so assertions can match the wire format
//! byte for byte.
//!
//! ## Eventual output
//!
//! Lines produced by a [`crate::TraceWriter`] are written by a background worker,
//! so they show up some time after the bytes were written. [`InMemorySink::wait_for`]
//! polls the buffer until a condition holds or a deadline passes.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(2);

/// A sink that stores every line in memory.
///
/// # Example
///
/// ```rust
/// use prefixlog::{InMemorySink, Sink, LogRecord, Level};
///
/// let sink = InMemorySink::new();
/// let mut record = LogRecord::new(Level::Debug);
/// record.log("DEBUG p: main.rs:3 hi");
/// sink.finish_log_record(&record);
///
/// assert_eq!(sink.drain_logs(), "DEBUG p: main.rs:3 hi\n");
/// // Buffer is now empty
/// assert_eq!(sink.drain_logs(), "");
/// ```
///
/// # Test Isolation Pattern
///
/// ```rust,no_run
/// use prefixlog::{InMemorySink, DiscardSink, logger_for, outputs, set_outputs};
/// use std::sync::Arc;
///
/// let original = outputs();
/// let sink = Arc::new(InMemorySink::new());
/// set_outputs(Arc::new(DiscardSink), sink.clone());
///
/// logger_for("myprefix").debug("Hello world");
/// assert!(sink.contents().contains("DEBUG myprefix: "));
///
/// set_outputs(original.error.clone(), original.debug.clone());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    logs: Mutex<String>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Default: derived (empty buffer)
// - Clone: NOT implemented - share through Arc so every logger writes the same buffer
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex-guarded buffers is racy
// - Send/Sync: automatic through Mutex

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(String::new()),
        }
    }

    /// Returns everything written so far and clears the buffer.
    pub fn drain_logs(&self) -> String {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a copy of everything written so far.
    pub fn contents(&self) -> String {
        self.lock().clone()
    }

    /// The buffered lines, without their newlines.
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines().map(str::to_owned).collect()
    }

    /// Polls until `condition` holds for the buffered text, or `timeout` elapses.
    ///
    /// Returns whether the condition was met.
    pub fn wait_for(&self, timeout: Duration, condition: impl Fn(&str) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if condition(&self.lock()) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for InMemorySink {
    fn finish_log_record(&self, record: &LogRecord) {
        let line = record.to_line();
        self.lock().push_str(&line);
    }

    fn write_text(&self, text: &str) {
        self.lock().push_str(text);
    }

    fn flush(&self) {
        // nothing is buffered outside the string itself
    }
}
