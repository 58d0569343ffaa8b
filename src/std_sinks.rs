// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::io::Write;

/**
A sink that writes to the process's stderr.  The default error sink.
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StdErrSink;

/**
A sink that writes to the process's stdout.  The default debug sink.
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StdOutSink;

/**
A sink that discards everything written to it.
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DiscardSink;

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// All three are zero-sized, so Copy/Eq/Hash/Default are derived: every instance
// is equivalent. Display and From/Into are not implemented.

impl StdErrSink {
    pub const fn new() -> Self {
        Self
    }
}

impl StdOutSink {
    pub const fn new() -> Self {
        Self
    }
}

impl DiscardSink {
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for StdErrSink {
    fn finish_log_record(&self, record: &LogRecord) {
        // the stream lock serializes whole lines across threads
        let mut lock = std::io::stderr().lock();
        let _ = lock.write_all(record.to_line().as_bytes());
    }

    fn write_text(&self, text: &str) {
        let _ = std::io::stderr().lock().write_all(text.as_bytes());
    }

    fn flush(&self) {
        //stderr is unbuffered
    }
}

impl Sink for StdOutSink {
    fn finish_log_record(&self, record: &LogRecord) {
        let mut lock = std::io::stdout().lock();
        let _ = lock.write_all(record.to_line().as_bytes());
    }

    fn write_text(&self, text: &str) {
        let _ = std::io::stdout().lock().write_all(text.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stdout().lock().flush();
    }
}

impl Sink for DiscardSink {
    fn finish_log_record(&self, _record: &LogRecord) {}

    fn write_text(&self, _text: &str) {}

    fn flush(&self) {}
}
