//! Pull request reference.

use super::MergeableState;

/// The pull request a run decides on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// Repository owner login.
    pub owner: String,

    /// Repository name.
    pub repository_name: String,

    /// Pull request number.
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// Last known mergeability; refreshed only by re-fetching.
    pub mergeable_state: MergeableState,
}

impl PullRequestRef {
    /// Returns `owner/repository_name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository_name)
    }
}
