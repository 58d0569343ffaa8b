//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

pub trait Sink: Debug + Send + Sync {
    /**
    Writes the record, followed by a newline, to the destination.

    Implementations must write the whole line as one write so that concurrent
    callers never interleave partial lines. Failures are swallowed; logging never
    reports errors back to the caller.
    */
    fn finish_log_record(&self, record: &LogRecord);

    /**
    Writes free-form text (e.g. a backtrace) as-is, as one write.
    */
    fn write_text(&self, text: &str);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self);
}

/*
Boilerplate notes.

# Sink

Clone on a trait object makes no sense; sinks are shared through Arc instead.
PartialEq/Eq are unclear (data equality vs. "same destination"), so not required.
Send/Sync are required: the same sink is written from every thread that logs.
*/
