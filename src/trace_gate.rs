// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime switches deciding whether TRACE output is produced.
//!
//! A [`TraceGate`] is consulted on every `trace`/`tracef` call and whenever a
//! [`crate::TraceWriter`] is created. Nothing is cached: flipping the switch
//! between two calls changes the behavior of the second one.
//!
//! Two implementations are provided:
//!
//! - [`EnvSwitch`] reads an environment variable (`TRACE` by default) on every call.
//! - [`StaticSwitch`] is an in-process flag, useful for tests and for embedders that
//!   want to drive tracing from their own configuration.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable read by [`EnvSwitch::trace`].
pub const TRACE_ENV: &str = "TRACE";
/// Environment variable read by [`EnvSwitch::print_stack`].
pub const PRINT_STACK_ENV: &str = "PRINT_STACK";

pub trait TraceGate: std::fmt::Debug + Send + Sync {
    /// Whether the switch reads enabled right now.
    fn enabled(&self) -> bool;
}

/// A switch backed by an environment variable, read on every call.
///
/// The switch is on iff the variable's value is `true`, compared
/// case-insensitively and ignoring surrounding whitespace. Unset, empty,
/// non-unicode and any other value read as off.
///
/// ```rust
/// use prefixlog::{EnvSwitch, TraceGate};
///
/// let gate = EnvSwitch::new("PREFIXLOG_DOC_UNSET_SWITCH");
/// assert!(!gate.enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvSwitch {
    var: Cow<'static, str>,
}

impl EnvSwitch {
    pub fn new(var: impl Into<Cow<'static, str>>) -> Self {
        Self { var: var.into() }
    }

    /// The `TRACE` switch used by [`crate::logger_for`].
    pub const fn trace() -> Self {
        Self {
            var: Cow::Borrowed(TRACE_ENV),
        }
    }

    /// The `PRINT_STACK` switch: when on, ERROR lines are followed by a backtrace.
    pub const fn print_stack() -> Self {
        Self {
            var: Cow::Borrowed(PRINT_STACK_ENV),
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvSwitch {
    fn default() -> Self {
        Self::trace()
    }
}

impl TraceGate for EnvSwitch {
    fn enabled(&self) -> bool {
        std::env::var(self.var.as_ref())
            .map(|value| is_truthy(&value))
            .unwrap_or(false)
    }
}

pub(crate) fn is_truthy(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// An in-process switch.
///
/// ```rust
/// use prefixlog::{StaticSwitch, TraceGate};
///
/// let gate = StaticSwitch::new(false);
/// assert!(!gate.enabled());
/// gate.set(true);
/// assert!(gate.enabled());
/// ```
#[derive(Debug, Default)]
pub struct StaticSwitch {
    enabled: AtomicBool,
}

impl StaticSwitch {
    #[inline]
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    #[inline]
    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

impl From<bool> for StaticSwitch {
    fn from(enabled: bool) -> Self {
        Self::new(enabled)
    }
}

impl TraceGate for StaticSwitch {
    #[inline]
    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values() {
        assert!(is_truthy("true"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy("True"));
        assert!(is_truthy(" true\n"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("1"));
        assert!(!is_truthy("yes"));
        assert!(!is_truthy("truthy"));
    }

    #[test]
    fn unset_variable_reads_off() {
        let gate = EnvSwitch::new("PREFIXLOG_TEST_NEVER_SET_3F1A");
        assert!(!gate.enabled());
        assert_eq!(gate.var(), "PREFIXLOG_TEST_NEVER_SET_3F1A");
    }

    #[test]
    fn env_switch_is_read_on_every_call() {
        // a variable private to this test, so no other test observes it
        let name = "PREFIXLOG_TEST_ENV_SWITCH_TOGGLE";
        let gate = EnvSwitch::new(name);
        // SAFETY: no other test reads or writes this variable
        unsafe { std::env::set_var(name, "true") };
        assert!(gate.enabled());
        unsafe { std::env::set_var(name, "false") };
        assert!(!gate.enabled());
        unsafe { std::env::set_var(name, "tRuE") };
        assert!(gate.enabled());
        unsafe { std::env::remove_var(name) };
        assert!(!gate.enabled());
    }

    #[test]
    fn well_known_switches() {
        assert_eq!(EnvSwitch::trace().var(), TRACE_ENV);
        assert_eq!(EnvSwitch::print_stack().var(), PRINT_STACK_ENV);
        assert_eq!(EnvSwitch::default(), EnvSwitch::trace());
    }

    #[test]
    fn static_switch_toggles() {
        let gate = StaticSwitch::from(true);
        assert!(gate.enabled());
        gate.set(false);
        assert!(!gate.enabled());
    }
}
