//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while validating action inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The allowed update value is not one of `major`, `minor`, `patch` or `any`.
    #[error("unrecognized allowance '{value}', expected one of: major, minor, patch, any")]
    UnrecognizedAllowance { value: String },

    /// The merge method is not one of `merge`, `squash` or `rebase`.
    #[error("unrecognized merge method '{value}', expected one of: merge, squash, rebase")]
    UnrecognizedMergeMethod { value: String },

    /// The mergeability retry bound must allow at least one check.
    #[error("max attempts must be at least 1, got {value}")]
    InvalidMaxAttempts { value: u32 },
}
