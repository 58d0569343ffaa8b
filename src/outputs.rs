// SPDX-License-Identifier: MIT OR Apache-2.0

//! The output registry: the process-wide pair of sinks every logger writes to.
//!
//! All loggers share one registry. ERROR lines go to the error sink; DEBUG and
//! TRACE lines go to the debug sink. Loggers never cache a sink: each log call
//! loads the current [`Outputs`] snapshot, so redirecting output with
//! [`set_outputs`] affects loggers created before the call as well as after it.
//!
//! # Architecture
//!
//! The registry is an [`ArcSwap`] holding an immutable `Arc<Outputs>`.
//!
//! - Readers load the current snapshot without taking a lock.
//! - [`set_outputs`] builds a new snapshot and swaps the pointer in one step, so a
//!   reader sees either the old pair or the new pair, never a mix.
//! - A snapshot that was replaced stays alive until the last in-flight log call
//!   holding it finishes, then its sinks are dropped.
//!
//! # Default Behavior
//!
//! Until configured, errors go to stderr ([`StdErrSink`]) and debug/trace output
//! goes to stdout ([`StdOutSink`]).
//!
//! # Examples
//!
//! ```rust,no_run
//! use prefixlog::{set_outputs, reset_outputs, logger_for, InMemorySink, DiscardSink};
//! use std::sync::Arc;
//!
//! let log = logger_for("myprefix");
//! let captured = Arc::new(InMemorySink::new());
//!
//! // redirect after the logger exists; it still follows the registry
//! set_outputs(captured.clone(), Arc::new(DiscardSink));
//! log.error("Hello world");
//! assert!(captured.contents().starts_with("ERROR myprefix: "));
//!
//! reset_outputs();
//! ```

use crate::Level;
use crate::sink::Sink;
use crate::std_sinks::{StdErrSink, StdOutSink};
use crate::writer_sink::WriterSink;
use arc_swap::{ArcSwap, Guard};
use std::io::Write;
use std::sync::{Arc, OnceLock};

/// One immutable snapshot of the registry.
#[derive(Debug, Clone)]
pub struct Outputs {
    /// Receives ERROR lines.
    pub error: Arc<dyn Sink>,
    /// Receives DEBUG and TRACE lines.
    pub debug: Arc<dyn Sink>,
}

impl Outputs {
    pub fn new(error: Arc<dyn Sink>, debug: Arc<dyn Sink>) -> Self {
        Self { error, debug }
    }

    /// The sink lines of `level` are written to.
    pub fn sink_for(&self, level: Level) -> &Arc<dyn Sink> {
        match level {
            Level::Error => &self.error,
            Level::Debug | Level::Trace => &self.debug,
        }
    }

    /// Flushes both sinks.
    pub fn flush(&self) {
        self.error.flush();
        self.debug.flush();
    }
}

impl Default for Outputs {
    fn default() -> Self {
        Self::new(Arc::new(StdErrSink::new()), Arc::new(StdOutSink::new()))
    }
}

static OUTPUTS: OnceLock<ArcSwap<Outputs>> = OnceLock::new();

fn registry() -> &'static ArcSwap<Outputs> {
    OUTPUTS.get_or_init(|| ArcSwap::from_pointee(Outputs::default()))
}

/// Borrow the current snapshot for the duration of one log call.
pub(crate) fn current() -> Guard<Arc<Outputs>> {
    registry().load()
}

/// Returns the current snapshot.
///
/// The snapshot is immutable; a later [`set_outputs`] does not change it.
pub fn outputs() -> Arc<Outputs> {
    registry().load_full()
}

/// Replaces both sinks atomically.
///
/// Takes effect for every existing and future logger on its next call. Cannot fail.
pub fn set_outputs(error: Arc<dyn Sink>, debug: Arc<dyn Sink>) {
    registry().store(Arc::new(Outputs::new(error, debug)));
}

/// Replaces both sinks with plain [`Write`] implementations.
///
/// Each writer is wrapped in a [`WriterSink`], which serializes writes per line.
///
/// ```rust,no_run
/// use std::fs::File;
///
/// let errors = File::create("errors.log").unwrap();
/// prefixlog::set_output_writers(errors, std::io::sink());
/// ```
pub fn set_output_writers<E, D>(error: E, debug: D)
where
    E: Write + Send + 'static,
    D: Write + Send + 'static,
{
    set_outputs(Arc::new(WriterSink::new(error)), Arc::new(WriterSink::new(debug)));
}

/// Restores the default sinks: stderr for errors, stdout for debug and trace.
pub fn reset_outputs() {
    set_outputs(Arc::new(StdErrSink::new()), Arc::new(StdOutSink::new()));
}

/// Serializes tests that reconfigure the process-wide registry.
#[cfg(test)]
pub(crate) static TEST_OUTPUTS_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn lock_test_outputs() -> std::sync::MutexGuard<'static, ()> {
    TEST_OUTPUTS_GUARD
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
