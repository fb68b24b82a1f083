//! Error types and handling for rusty-iterators
//!
//! Every failure the crate reports is one of three kinds: a full traversal
//! requested on an unbounded stream, an adapter built with an invalid size,
//! or a file producer that could not read its source.

use thiserror::Error;

/// Main error type for stream operations
#[derive(Debug, Error)]
pub enum StreamError {
    /// A terminal operation would have to traverse an unbounded stream
    #[error("`{operation}` on an unbounded stream would never terminate")]
    Unbounded { operation: &'static str },

    /// An adapter was constructed with a size it cannot work with
    #[error("{adapter}: `{argument}` must be greater than zero, got {value}")]
    InvalidArgument { adapter: &'static str, argument: &'static str, value: usize },

    /// A file backed producer could not open its source
    #[error("could not open `{path}`: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file backed producer failed while reading its source eagerly
    #[error("could not read line {line} of `{path}`: {source}")]
    ReadFailed {
        path: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl StreamError {
    pub(crate) fn unbounded(operation: &'static str) -> Self {
        StreamError::Unbounded { operation }
    }

    /// Returns an `InvalidArgument` error when `value` is zero.
    pub(crate) fn require_non_zero(
        adapter: &'static str,
        argument: &'static str,
        value: usize,
    ) -> StreamResult<usize> {
        if value == 0 {
            Err(StreamError::InvalidArgument { adapter, argument, value })
        } else {
            Ok(value)
        }
    }

    /// True for the "unbounded stream" misuse error.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, StreamError::Unbounded { .. })
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;

/// Unwraps a construction result, turning an invalid argument into a panic.
///
/// Builders on the extension traits treat a zero size as programmer error.
pub(crate) fn expect_valid<T>(result: StreamResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}
