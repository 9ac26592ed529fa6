//! Merge coordination error types.

use crate::client::RemoteError;
use thiserror::Error;

/// Errors that end a merge attempt.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The pull request conflicts with its base branch.
    #[error("PR #{number} has conflicts, will not merge")]
    Conflict { number: u64 },

    /// Mergeability stayed unknown for every allowed check.
    #[error("gave up waiting for mergeable state to be determined after {attempts} attempts")]
    Timeout { attempts: u32 },

    /// The remote failed or refused the request.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
