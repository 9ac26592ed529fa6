//! Repository client error types.

use thiserror::Error;

/// Errors reported by the remote repository.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The remote answered the merge request without merging.
    #[error("PR was not merged: {message}")]
    NotMerged { message: String },

    /// Request failed for a reason other than an API error.
    #[error("Remote request failed: {message}")]
    Request { message: String },
}
