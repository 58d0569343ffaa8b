//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# prefixlog

prefixlog is a small leveled logging facade built around named, prefixed loggers.

# The levels

| Name  | Usecase                                   | Destination | Conditions                          |
|-------|-------------------------------------------|-------------|-------------------------------------|
| debug | Things an operator may want to see        | debug sink  | always                              |
| error | Something went wrong                      | error sink  | always                              |
| trace | Detailed debugging, off in production     | debug sink  | only while `TRACE=true` at call time |

`fatal` logs at ERROR, flushes both sinks and exits the process with status 1.

# The line format

Every line looks like

```text
DEBUG myprefix: main.rs:12 Hello world
```

that is, `{LEVEL} {prefix}: {file}:{line} {message}` followed by a newline. `file` is the
base name of the source file that made the call and `line` is the line of the call,
captured with `#[track_caller]`.

# The API

```rust,no_run
let log = prefixlog::logger_for("myprefix");
log.debug("Hello world");
log.errorf(format_args!("failed after {} attempts", 3));
prefixlog::trace!(log, "only formatted when tracing: {:?}", vec![1, 2, 3]);
```

A trace call checks the `TRACE` environment variable every time it runs, so tracing can
be turned on and off while the program is running. When tracing is off the message is
never formatted.

# Outputs

All loggers share one process-wide pair of sinks. ERROR lines go to the error sink and
DEBUG and TRACE lines go to the debug sink. By default they are stderr and stdout.
[`set_outputs`] swaps both sinks atomically; loggers created before the swap follow it.

```rust,no_run
use prefixlog::{InMemorySink, set_outputs, logger_for};
use std::sync::Arc;

let errors = Arc::new(InMemorySink::new());
let debug = Arc::new(InMemorySink::new());
set_outputs(errors.clone(), debug.clone());

logger_for("myprefix").error("Hello world");
assert!(errors.contents().starts_with("ERROR myprefix: "));
assert_eq!(debug.contents(), "");
```

# Trace writers

[`Logger::trace_out`] returns a [`TraceWriter`], an [`std::io::Write`] whose lines are
logged at TRACE by a background thread. It is meant for piping the output of a child
process or another line-oriented stream into the log.

# Interop

[`Logger::as_std_logger`] returns a [`StdLogger`], which logs everything it receives at
ERROR. It implements [`std::io::Write`] and [`log::Log`], so it can be installed as the
`log` crate's logger with [`StdLogger::install`].
*/

mod error;
mod inmemory_sink;
mod level;
mod log_record;
mod logger;
mod macros;
mod outputs;
mod sink;
mod std_logger;
mod std_sinks;
mod trace_gate;
mod trace_writer;
mod writer_sink;

pub use error::Error;
pub use inmemory_sink::InMemorySink;
pub use level::Level;
pub use log_record::{CallSite, LogRecord};
pub use logger::{Logger, logger_for};
pub use outputs::{Outputs, outputs, reset_outputs, set_output_writers, set_outputs};
pub use sink::Sink;
pub use std_logger::StdLogger;
pub use std_sinks::{DiscardSink, StdErrSink, StdOutSink};
pub use trace_gate::{EnvSwitch, PRINT_STACK_ENV, StaticSwitch, TRACE_ENV, TraceGate};
pub use trace_writer::{CLOSED_MESSAGE, TraceWriter};
pub use writer_sink::WriterSink;
