// SPDX-License-Identifier: MIT OR Apache-2.0

//! An ERROR-only adapter for code that expects a generic logger.
//!
//! [`StdLogger`] exposes three interfaces, all of which produce ERROR lines of the
//! wrapped [`Logger`]:
//!
//! - [`StdLogger::print`] / [`StdLogger::printf`], located at their caller.
//! - [`std::io::Write`], one line per write with a single trailing newline removed,
//!   located where the adapter was created.
//! - [`log::Log`], so the adapter can be installed as the `log` crate's logger.
//!   Every record that passes [`log::max_level`], whatever its `log` level, becomes
//!   an ERROR line located at the record's own file and line.

use crate::Level;
use crate::error::Error;
use crate::log_record::CallSite;
use crate::logger::Logger;
use crate::outputs;
use std::fmt::{self, Display};
use std::io;

#[derive(Debug, Clone)]
pub struct StdLogger {
    logger: Logger,
    created_at: CallSite<'static>,
}

impl StdLogger {
    pub(crate) fn new(logger: Logger, created_at: CallSite<'static>) -> Self {
        Self { logger, created_at }
    }

    /// The wrapped logger.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    #[track_caller]
    pub fn print(&self, message: impl Display) {
        self.logger.emit(Level::Error, CallSite::caller(), message);
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.logger.emit(Level::Error, CallSite::caller(), args);
    }

    /// Installs this adapter as the global logger of the `log` crate.
    ///
    /// Fails if a `log` logger is already installed.
    ///
    /// ```rust,no_run
    /// prefixlog::logger_for("legacy")
    ///     .as_std_logger()
    ///     .install(log::LevelFilter::Warn)
    ///     .unwrap();
    /// log::warn!("disk almost full");
    /// // ERROR legacy: main.rs:5 disk almost full
    /// ```
    pub fn install(self, max_level: log::LevelFilter) -> Result<(), Error> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl io::Write for StdLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let line = text.strip_suffix('\n').unwrap_or(&text);
        self.logger.emit(Level::Error, self.created_at, line);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        outputs::current().error.flush();
        Ok(())
    }
}

impl log::Log for StdLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let callsite = CallSite {
            file: record.file().unwrap_or("<unknown>"),
            line: record.line().unwrap_or(0),
        };
        self.logger.emit(Level::Error, callsite, record.args());
    }

    fn flush(&self) {
        outputs::current().error.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use crate::outputs::{lock_test_outputs, reset_outputs, set_outputs};
    use crate::trace_gate::StaticSwitch;
    use log::Log;
    use std::io::Write;
    use std::sync::Arc;

    fn capture() -> (Arc<InMemorySink>, Arc<InMemorySink>) {
        let error = Arc::new(InMemorySink::new());
        let debug = Arc::new(InMemorySink::new());
        set_outputs(error.clone(), debug.clone());
        (error, debug)
    }

    fn logger() -> Logger {
        Logger::with_gate("myprefix", Arc::new(StaticSwitch::new(true)))
            .with_stack_gate(Arc::new(StaticSwitch::new(false)))
    }

    #[test]
    fn printf_matches_errorf() {
        let _guard = lock_test_outputs();
        let (error, debug) = capture();
        let log = logger();
        let adapter = log.as_std_logger();

        let line = line!() + 1;
        adapter.printf(format_args!("Hello {}", 5));
        let via_adapter = error.drain_logs();
        let line2 = line!() + 1;
        log.errorf(format_args!("Hello {}", 5));
        let direct = error.drain_logs();

        assert_eq!(via_adapter, format!("ERROR myprefix: std_logger.rs:{line} Hello 5\n"));
        assert_eq!(direct, format!("ERROR myprefix: std_logger.rs:{line2} Hello 5\n"));
        assert_eq!(debug.contents(), "");
        reset_outputs();
    }

    #[test]
    fn print_logs_at_error() {
        let _guard = lock_test_outputs();
        let (error, _debug) = capture();
        logger().as_std_logger().print("Hello world");
        assert!(error.contents().starts_with("ERROR myprefix: std_logger.rs:"));
        assert!(error.contents().ends_with(" Hello world\n"));
        reset_outputs();
    }

    #[test]
    fn write_strips_one_newline_and_uses_creation_site() {
        let _guard = lock_test_outputs();
        let (error, _debug) = capture();
        let line = line!() + 1;
        let mut adapter = logger().as_std_logger();
        adapter.write_all(b"from a writer\n").unwrap();
        Write::flush(&mut adapter).unwrap();
        assert_eq!(
            error.contents(),
            format!("ERROR myprefix: std_logger.rs:{line} from a writer\n")
        );
        reset_outputs();
    }

    #[test]
    fn log_records_become_error_lines() {
        let _guard = lock_test_outputs();
        let (error, debug) = capture();
        let adapter = logger().as_std_logger();

        // no `log` logger is installed in this binary, only the level filter is shared
        log::set_max_level(log::LevelFilter::Info);
        adapter.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("filtered"))
                .build(),
        );
        assert_eq!(error.contents(), "");

        log::set_max_level(log::LevelFilter::Trace);
        adapter.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .file(Some("src/legacy.rs"))
                .line(Some(42))
                .args(format_args!("from {}", "log"))
                .build(),
        );
        Log::flush(&adapter);
        assert_eq!(error.contents(), "ERROR myprefix: legacy.rs:42 from log\n");
        assert_eq!(debug.contents(), "");
        reset_outputs();
    }
}
