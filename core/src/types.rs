use std::fmt;
use std::io;

use crate::stream::types::InvalidInput;

/// Unified stream error covering I/O and input validation.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - Messages aim to be stable and contextual for logs and CLI output.
#[derive(Debug)]
pub enum StreamError {
    /// I/O error on the underlying reader or writer.
    Io(io::Error),

    /// Rejected input; aborts the whole pass immediately.
    Invalid(InvalidInput),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {}", e),
            StreamError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StreamError {}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<InvalidInput> for StreamError {
    fn from(e: InvalidInput) -> Self {
        StreamError::Invalid(e)
    }
}
