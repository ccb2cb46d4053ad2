//! Error types for the growline library.
//!
//! This module provides the error handling using the `thiserror` crate, with
//! one variant per failure mode an operation can return. Reporting to the
//! configured [`ErrorHook`](crate::hook::ErrorHook) happens at the point of
//! failure, before one of these values is returned; there is no unwinding.

use thiserror::Error;

/// Result type alias for growline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all growline operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Memory for the buffer could not be allocated
    #[error("failed to allocate {requested} bytes")]
    Alloc {
        /// Number of bytes the failed reservation asked for
        requested: usize,
    },

    /// A precondition on an argument was violated
    #[error("invalid argument: {details}")]
    InvalidArgument {
        /// Description of the violated precondition
        details: String,
    },

    /// The underlying stream failed with a genuine I/O error (not EOF)
    #[error("read from stream failed: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new allocation-failure error
    pub fn alloc(requested: usize) -> Self {
        Self::Alloc { requested }
    }

    /// Creates a new invalid-argument error
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument {
            details: details.into(),
        }
    }

    /// Returns true if this error came from the stream rather than the library
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
