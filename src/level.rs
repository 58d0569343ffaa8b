//SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Diagnostic output, always enabled, written to the debug sink
    Debug,
    /// Runtime error, always enabled, written to the error sink
    Error,
    /// Detailed output, gated at runtime, written to the debug sink
    Trace,
}

impl Level {
    /// The label written at the start of every line of this level.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
            Level::Trace => "TRACE",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
