//! Remote repository access.
//!
//! The merge coordinator only talks to the remote through [`RepositoryClient`],
//! so it can be driven by [`GitHubClient`] in production and by a test double
//! in tests.

mod error;
mod github;
mod mergeable_state;
mod pull_request;

pub use error::RemoteError;
pub use github::GitHubClient;
pub use mergeable_state::MergeableState;
pub use pull_request::PullRequestRef;

use crate::merge::MergeMethod;
use async_trait::async_trait;

/// Response to a merge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResponse {
    /// Whether the remote merged the pull request.
    pub merged: bool,
    /// Message supplied by the remote.
    pub message: String,
    /// SHA of the resulting commit, if merged.
    pub sha: Option<String>,
}

/// Pull request operations needed to gate and merge an upgrade.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Fetches the current state of a pull request.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestRef, RemoteError>;

    /// Requests a merge of a pull request with the given method.
    async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        method: MergeMethod,
    ) -> Result<MergeResponse, RemoteError>;
}
