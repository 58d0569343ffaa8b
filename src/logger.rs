// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named loggers.
//!
//! A [`Logger`] pairs a prefix with the trace gate that decides whether its TRACE
//! calls produce output. It holds no sink: every call resolves the sink from the
//! output registry at the moment it writes.
//!
//! Every user-facing method is `#[track_caller]`, so the `file:line` written on each
//! line is the caller's, not this module's.

use crate::Level;
use crate::log_record::{CallSite, LogRecord};
use crate::outputs;
use crate::std_logger::StdLogger;
use crate::trace_gate::{EnvSwitch, TraceGate};
use crate::trace_writer::TraceWriter;
use std::backtrace::Backtrace;
use std::fmt::{self, Display, Write as _};
use std::sync::Arc;

/// Returns a logger writing lines prefixed with `prefix`.
///
/// TRACE output is controlled by the `TRACE` environment variable, read on every
/// call. Each call returns a fresh logger; two loggers with the same prefix behave
/// identically.
///
/// ```rust,no_run
/// let log = prefixlog::logger_for("myprefix");
/// log.debug("Hello world");
/// log.debugf(format_args!("Hello {}", 5));
/// // DEBUG myprefix: main.rs:3 Hello world
/// // DEBUG myprefix: main.rs:4 Hello 5
/// ```
pub fn logger_for(prefix: impl Into<Arc<str>>) -> Logger {
    Logger::with_gate(prefix, Arc::new(EnvSwitch::trace()))
}

#[derive(Debug, Clone)]
pub struct Logger {
    prefix: Arc<str>,
    gate: Arc<dyn TraceGate>,
    stack_gate: Arc<dyn TraceGate>,
}

impl Logger {
    /// A logger whose TRACE output is controlled by `gate` instead of the environment.
    pub fn with_gate(prefix: impl Into<Arc<str>>, gate: Arc<dyn TraceGate>) -> Self {
        Self {
            prefix: prefix.into(),
            gate,
            stack_gate: Arc::new(EnvSwitch::print_stack()),
        }
    }

    /// Replaces the switch deciding whether ERROR lines are followed by a backtrace.
    ///
    /// Defaults to the `PRINT_STACK` environment variable.
    pub fn with_stack_gate(mut self, stack_gate: Arc<dyn TraceGate>) -> Self {
        self.stack_gate = stack_gate;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.emit(Level::Debug, CallSite::caller(), message);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.emit(Level::Error, CallSite::caller(), message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, CallSite::caller(), args);
    }

    /// Logs at ERROR, flushes both sinks and exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        self.emit(Level::Error, CallSite::caller(), message);
        exit_after_flush()
    }

    /// Logs at ERROR, flushes both sinks and exits the process with status 1.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Level::Error, CallSite::caller(), args);
        exit_after_flush()
    }

    /// Logs at TRACE if the trace gate is on right now; otherwise does nothing.
    #[track_caller]
    pub fn trace(&self, message: impl Display) {
        if self.gate.enabled() {
            self.emit(Level::Trace, CallSite::caller(), message);
        }
    }

    /// Logs at TRACE if the trace gate is on right now.
    ///
    /// The arguments are only formatted when the line is written.
    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        if self.gate.enabled() {
            self.emit(Level::Trace, CallSite::caller(), args);
        }
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.gate.enabled()
    }

    /**
    Returns a writer that turns each newline-terminated line written to it into a
    TRACE line of this logger.

    If tracing is off when this is called, the writer discards everything. Lines
    carry the location of this call.
    */
    #[track_caller]
    pub fn trace_out(&self) -> TraceWriter {
        TraceWriter::spawn(self, CallSite::caller())
    }

    /// Wraps this logger in an adapter whose every output is an ERROR line.
    #[track_caller]
    pub fn as_std_logger(&self) -> StdLogger {
        StdLogger::new(self.clone(), CallSite::caller())
    }

    /// Formats one line and writes it to the sink the registry holds right now.
    pub(crate) fn emit(&self, level: Level, callsite: CallSite<'_>, message: impl Display) {
        let mut record = LogRecord::with_prelude(level, &self.prefix, callsite);
        let mut text = String::new();
        // a failing Display impl leaves whatever it wrote so far
        let _ = write!(text, "{message}");
        record.log_owned(text);

        let outputs = outputs::current();
        outputs.sink_for(level).finish_log_record(&record);
        if level == Level::Error && self.stack_gate.enabled() {
            let mut stack = Backtrace::force_capture().to_string();
            if !stack.ends_with('\n') {
                stack.push('\n');
            }
            outputs.error.write_text(&stack);
        }
    }
}

fn exit_after_flush() -> ! {
    outputs::current().flush();
    std::process::exit(1)
}

/*
Boilerplate notes for Logger:

- Clone: derived, cheap (three Arcs); trace writers and adapters hold their own clone
- Debug: derived
- PartialEq/Eq/Hash: NOT implemented, gates are trait objects with no equality
- Default: NOT implemented, a logger needs a prefix
*/
