//! GitHub implementation of [`RepositoryClient`].

use super::{MergeResponse, MergeableState, PullRequestRef, RemoteError, RepositoryClient};
use crate::merge::MergeMethod;
use async_trait::async_trait;
use octocrab::models::pulls::PullRequest;
use octocrab::Octocrab;
use tracing::debug;

/// Repository client backed by the GitHub REST API.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(token: String) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self { octocrab })
    }

    /// Wraps an existing octocrab instance.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestRef, RemoteError> {
        debug!(owner, repo, number, "Fetching pull request");

        let pr = self.octocrab.pulls(owner, repo).get(number).await?;

        Ok(PullRequestRef {
            owner: owner.to_string(),
            repository_name: repo.to_string(),
            number: pr.number,
            title: pr.title.clone().unwrap_or_default(),
            mergeable_state: mergeable_state(&pr),
        })
    }

    async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        method: MergeMethod,
    ) -> Result<MergeResponse, RemoteError> {
        debug!(owner, repo, number, %method, "Merging pull request");

        let result = self
            .octocrab
            .pulls(owner, repo)
            .merge(number)
            .method(octocrab::params::pulls::MergeMethod::from(method))
            .send()
            .await?;

        Ok(MergeResponse {
            merged: result.merged,
            message: result.message.unwrap_or_default(),
            sha: result.sha,
        })
    }
}

/// Maps octocrab's mergeable state onto [`MergeableState`] via its wire name.
fn mergeable_state(pr: &PullRequest) -> MergeableState {
    pr.mergeable_state
        .as_ref()
        .and_then(|state| serde_json::to_value(state).ok())
        .and_then(|value| value.as_str().map(MergeableState::from))
        .unwrap_or_default()
}
