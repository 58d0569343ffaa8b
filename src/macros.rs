// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting shorthands for the `*f` methods of [`crate::Logger`].
//!
//! Each macro takes a logger expression followed by `format!`-style arguments and
//! forwards them with `format_args!`, so nothing is allocated before the logger
//! decides to write. The location written on the line is the macro invocation.
//!
//! ```rust,no_run
//! let log = prefixlog::logger_for("myprefix");
//! prefixlog::debug!(log, "Hello {}", 5);
//! prefixlog::error!(log, "failed after {attempts} attempts", attempts = 3);
//! prefixlog::trace!(log, "only formatted when TRACE=true: {:?}", vec![1, 2]);
//! ```

/// Logs at DEBUG through [`crate::Logger::debugf`].
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Logs at ERROR through [`crate::Logger::errorf`].
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Logs at TRACE through [`crate::Logger::tracef`]; nothing is formatted when tracing is off.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(::std::format_args!($($arg)+))
    };
}

/// Logs at ERROR and exits through [`crate::Logger::fatalf`].
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
