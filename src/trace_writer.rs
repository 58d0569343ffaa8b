// SPDX-License-Identifier: MIT OR Apache-2.0

//! A writer that folds byte streams into a logger's TRACE output.
//!
//! [`Logger::trace_out`](crate::Logger::trace_out) returns a [`TraceWriter`]. Bytes
//! written to it travel over a bounded channel to a dedicated worker thread, which
//! splits them on `\n` and emits one TRACE line per complete line. This makes it
//! easy to pipe a child process's output into the log:
//!
//! ```rust,no_run
//! use std::io::Write;
//! use std::process::{Command, Stdio};
//!
//! let log = prefixlog::logger_for("child");
//! let mut trace = log.trace_out();
//! let output = Command::new("ls").stdout(Stdio::piped()).output().unwrap();
//! trace.write_all(&output.stdout).unwrap();
//! trace.close().unwrap();
//! ```
//!
//! # Lifecycle
//!
//! - Created while tracing is off: a discard writer. Writes succeed and nothing is
//!   logged, ever.
//! - Created while tracing is on: a running writer with its own worker thread.
//!   Output appears some time after the write; it is not synchronous.
//! - [`TraceWriter::close`] (or dropping the writer) ends the stream. The worker
//!   logs `TraceWriter closed due to unexpected error: EOF` and exits. Bytes after
//!   the last newline are dropped.
//! - Writing after close fails with [`std::io::ErrorKind::BrokenPipe`].

use crate::Level;
use crate::error::Error;
use crate::log_record::CallSite;
use crate::logger::Logger;
use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

/// Chunks the channel holds before a writer blocks on the worker.
const CHANNEL_CAPACITY: usize = 64;

/// The message logged when the stream ends.
///
/// Downstream log consumers match on this exact text.
pub const CLOSED_MESSAGE: &str = "TraceWriter closed due to unexpected error: EOF";

#[derive(Debug)]
enum State {
    Discard,
    Running(SyncSender<Vec<u8>>),
    Closed,
}

/// An [`io::Write`] whose lines become TRACE lines.
///
/// See the [module documentation](self).
#[derive(Debug)]
pub struct TraceWriter {
    state: State,
    worker: Option<JoinHandle<()>>,
}

impl TraceWriter {
    /// A writer that discards everything.
    pub fn discard() -> Self {
        Self {
            state: State::Discard,
            worker: None,
        }
    }

    pub(crate) fn spawn(logger: &Logger, callsite: CallSite<'static>) -> Self {
        if !logger.is_trace_enabled() {
            return Self::discard();
        }

        let (sender, receiver) = mpsc::sync_channel(CHANNEL_CAPACITY);
        let worker_logger = logger.clone();
        let spawned = thread::Builder::new()
            .name("prefixlog-trace".to_string())
            .spawn(move || trace_loop(worker_logger, callsite, receiver));

        match spawned {
            Ok(worker) => Self {
                state: State::Running(sender),
                worker: Some(worker),
            },
            Err(err) => {
                logger.emit(Level::Error, callsite, Error::SpawnWorker(err));
                Self::discard()
            }
        }
    }

    /// Whether this writer forwards to a worker (as opposed to discarding).
    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    /**
    Closes the producer side of the stream.

    Returns as soon as the stream is closed; the worker logs the closing line
    afterwards, on its own schedule. Closing twice, or closing a discard writer,
    does nothing.
    */
    pub fn close(&mut self) -> io::Result<()> {
        if let State::Running(_) = self.state {
            // dropping the sender is what the worker observes as end-of-stream
            self.state = State::Closed;
        }
        Ok(())
    }

    /**
    Closes the stream and waits until the worker has logged every complete line
    and the closing line.
    */
    pub fn join(mut self) -> io::Result<()> {
        self.close()?;
        match self.worker.take() {
            Some(worker) => worker
                .join()
                .map_err(|_| io::Error::other("TraceWriter worker panicked")),
            None => Ok(()),
        }
    }
}

impl io::Write for TraceWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.state {
            State::Discard => Ok(buf.len()),
            State::Closed => Err(Error::TraceWriterClosed.into()),
            State::Running(_) if buf.is_empty() => Ok(0),
            State::Running(sender) => {
                if sender.send(buf.to_vec()).is_err() {
                    // the worker is gone; nothing will ever read this stream again
                    self.state = State::Closed;
                    return Err(Error::TraceWriterClosed.into());
                }
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for TraceWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn trace_loop(logger: Logger, callsite: CallSite<'static>, receiver: Receiver<Vec<u8>>) {
    let mut pending: Vec<u8> = Vec::new();
    while let Ok(chunk) = receiver.recv() {
        pending.extend_from_slice(&chunk);
        let mut start = 0;
        while let Some(offset) = pending[start..].iter().position(|&b| b == b'\n') {
            let end = start + offset;
            logger.emit(
                Level::Trace,
                callsite,
                String::from_utf8_lossy(&pending[start..end]),
            );
            start = end + 1;
        }
        pending.drain(..start);
    }
    logger.emit(Level::Trace, callsite, CLOSED_MESSAGE);
}
