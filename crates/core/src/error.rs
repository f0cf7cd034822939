//! Centralized error types for the seqops workspace.

use thiserror::Error;

/// Top-level error enum.
///
/// Faults raised by caller closures are never wrapped in here; the `try_*`
/// combinators hand back the caller's own error type untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SeqError {
    /// An operation was handed an absent (`None`) collection.
    #[error("Missing sequence: `{operation}` requires a collection, got none")]
    MissingSequence { operation: &'static str },
}

pub type SeqResult<T> = Result<T, SeqError>;
