//! Core error type for misuse of the value algebra.
//!
//! Misuse is explicit and recoverable: every fallible accessor returns
//! [`crate::Result`] instead of panicking.

use thiserror::Error;

/// Core error type for funky operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller passed an argument the operation cannot accept: a missing
    /// payload for a success variant, or a value that is not an
    /// `Optional`/`Outcome` record where one was required.
    #[error("{operation} expected @{argument} {reason}")]
    InvalidArgument {
        operation: String,
        argument: String,
        reason: String,
    },

    /// A variant-specific accessor was called on the variant that does not
    /// hold the requested payload.
    #[error("{operation}: {reason}")]
    IllegalState { operation: String, reason: String },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(
        operation: impl Into<String>,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            operation: operation.into(),
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create an illegal state error.
    pub fn illegal_state(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IllegalState {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create the error returned when a success variant is built from a
    /// missing payload.
    pub(crate) fn missing_payload(operation: &str) -> Self {
        Self::invalid_argument(operation, "value", "to be present, but it was missing")
    }

    /// Returns the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::IllegalState { .. } => "ILLEGAL_STATE",
        }
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[must_use]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }
}
