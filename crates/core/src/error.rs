//! Error taxonomy for the core operations.

use thiserror::Error;

/// Error type for rank generation and slicing operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliceError {
    /// An argument was rejected before any work was done.
    #[error("Invalid argument {name}={value}: {reason}")]
    InvalidArgument { name: &'static str, value: i64, reason: &'static str },

    /// A date string did not match `YYYY-MM-DD`.
    #[error("Invalid date '{input}', expected format YYYY-MM-DD")]
    InvalidDate { input: String },

    /// A computed date fell outside the calendar range chrono can represent.
    #[error("Date out of range: {context}")]
    DateOutOfRange { context: String },
}

impl SliceError {
    pub(crate) fn invalid(name: &'static str, value: i64, reason: &'static str) -> Self {
        SliceError::InvalidArgument { name, value, reason }
    }

    pub(crate) fn out_of_range(context: impl Into<String>) -> Self {
        SliceError::DateOutOfRange { context: context.into() }
    }
}

/// Convenience result type for core operations.
pub type SliceResult<T> = Result<T, SliceError>;
