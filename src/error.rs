// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors surfaced by prefixlog.
///
/// Logging calls themselves never fail; these only appear at the edges where a
/// caller can act on them: writing to a closed [`crate::TraceWriter`], or
/// installing a [`crate::StdLogger`] as the `log` facade's logger.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("write to a closed TraceWriter")]
    TraceWriterClosed,
    #[error("unable to spawn TraceWriter worker: {0}")]
    SpawnWorker(#[source] std::io::Error),
    #[error("unable to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::TraceWriterClosed => std::io::Error::new(std::io::ErrorKind::BrokenPipe, err),
            Error::SpawnWorker(inner) => inner,
            other => std::io::Error::other(other),
        }
    }
}
