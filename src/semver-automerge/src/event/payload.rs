//! Pull request event payload.

use super::EventError;
use crate::client::{MergeableState, PullRequestRef};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    pull_request: PullRequestPayload,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    title: Option<String>,
    #[serde(default)]
    mergeable_state: MergeableState,
    base: BasePayload,
}

#[derive(Debug, Deserialize)]
struct BasePayload {
    repo: RepositoryPayload,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

/// Parses a pull request event payload.
///
/// # Errors
///
/// Returns [`EventError::JsonError`] if the payload is malformed, or
/// [`EventError::MissingTitle`] if the pull request has no title.
pub fn parse_pull_request(json: &str, source: &str) -> Result<PullRequestRef, EventError> {
    let event: PullRequestEvent =
        serde_json::from_str(json).map_err(|e| EventError::JsonError {
            path: source.to_string(),
            source: e,
        })?;

    let pr = event.pull_request;
    let title = pr.title.ok_or(EventError::MissingTitle)?;

    Ok(PullRequestRef {
        owner: pr.base.repo.owner.login,
        repository_name: pr.base.repo.name,
        number: pr.number,
        title,
        mergeable_state: pr.mergeable_state,
    })
}

/// Reads and parses the pull request event payload at `path`.
///
/// # Errors
///
/// Returns [`EventError::IoError`] if the file cannot be read, otherwise see
/// [`parse_pull_request`].
pub fn load_pull_request(path: &Path) -> Result<PullRequestRef, EventError> {
    debug!(path = %path.display(), "Loading event payload");

    let content = std::fs::read_to_string(path).map_err(|e| EventError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_pull_request(&content, &path.display().to_string())
}
