// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for prefixlog.
//!
//! A [`LogRecord`] accumulates the parts of one output line: the level label, the
//! logger prefix, the caller location and finally the message. Parts are stored
//! separately and joined only when a sink writes the record.
//!
//! Every record renders as
//!
//! ```text
//! {LEVEL} {prefix}: {file}:{line} {message}
//! ```
//!
//! where `file` is the base name of the caller's source file. Sinks append the
//! terminating newline.
//!
//! # Example
//!
//! ```rust
//! use prefixlog::{Level, LogRecord};
//!
//! let mut record = LogRecord::new(Level::Debug);
//! record.log("DEBUG myprefix: ");
//! record.log_owned(format!("main.rs:{} ", 12));
//! record.log("Hello world");
//! assert_eq!(record.to_string(), "DEBUG myprefix: main.rs:12 Hello world");
//! ```

use crate::Level;
use std::fmt::{Debug, Display};
use std::panic::Location;

/// Where a log call came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl CallSite<'static> {
    /// The location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl<'a> From<&'a Location<'a>> for CallSite<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/**
A log record.

Records are built progressively and then handed to a [`crate::Sink`], which writes the
rendered record followed by a newline as a single write.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
        }
    }

    /**
    Starts a record with the line prelude: level label, prefix and caller location.
    */
    pub(crate) fn with_prelude(level: Level, prefix: &str, callsite: CallSite<'_>) -> Self {
        let mut record = Self::new(level);
        record.log(level.label());
        record.log(" ");
        record.log(prefix);
        record.log(": ");
        record.log_callsite(callsite);
        record
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append the message to the record, taking ownership of the message.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    /**
    Log `file:line ` for the given call site, using the base name of the file.
    */
    pub fn log_callsite(&mut self, callsite: CallSite<'_>) {
        self.log_owned(format!("{}:{} ", base_name(callsite.file), callsite.line));
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /**
    The rendered record with its terminating newline, ready for a single write.
    */
    pub fn to_line(&self) -> String {
        let len = self.parts.iter().map(String::len).sum::<usize>() + 1;
        let mut line = String::with_capacity(len);
        for part in &self.parts {
            line.push_str(part);
        }
        line.push('\n');
        line
    }
}

fn base_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone: derived, records are forwarded to sinks by reference and cloned in tests
- PartialEq/Eq/Hash: derived, consistent with each other
- Display: renders the line without its newline

NOT IMPLEMENTED:
- Default: a record without a level and prelude is not a line we ever write
- Copy: heap data
- Ord/PartialOrd: no meaningful ordering
*/
