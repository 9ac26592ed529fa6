//! Merge coordination.
//!
//! The remote computes mergeability lazily. When the coordinator is configured
//! to wait for it, the pull request is re-fetched with exponential backoff
//! until the state is known, then merged with a single request:
//!
//! ```text
//! Start -> AwaitingMergeability (optional) -> Merging -> Merged | Failed
//! ```

mod backoff;
mod error;
mod method;
mod outcome;

pub use backoff::{backoff_delay, Sleeper, TokioSleeper};
pub use error::MergeError;
pub use method::MergeMethod;
pub use outcome::MergeOutcome;

use crate::client::{PullRequestRef, RemoteError, RepositoryClient};
use crate::config::DEFAULT_MAX_ATTEMPTS;
use crate::policy::Decision;
use tracing::{info, info_span, warn, Instrument};

/// Merge protocol settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSettings {
    /// Strategy used for the merge request.
    pub method: MergeMethod,
    /// Maximum number of mergeability checks; at least 1.
    pub max_attempts: u32,
    /// Whether to wait for the remote to settle mergeability before merging.
    pub await_mergeable: bool,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            method: MergeMethod::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            await_mergeable: true,
        }
    }
}

/// Drives a single merge attempt against a [`RepositoryClient`].
pub struct MergeCoordinator<'a> {
    client: &'a dyn RepositoryClient,
    sleeper: &'a dyn Sleeper,
    settings: MergeSettings,
}

impl<'a> MergeCoordinator<'a> {
    /// Creates a coordinator.
    pub fn new(
        client: &'a dyn RepositoryClient,
        sleeper: &'a dyn Sleeper,
        settings: MergeSettings,
    ) -> Self {
        Self {
            client,
            sleeper,
            settings,
        }
    }

    /// Returns the merge settings.
    #[must_use]
    pub fn settings(&self) -> &MergeSettings {
        &self.settings
    }

    /// Merges `pr` if `decision` permits it.
    ///
    /// `pr.mergeable_state` is updated with every re-fetch. At most one merge
    /// request is sent, and only after the last mergeability check.
    ///
    /// # Errors
    ///
    /// - [`MergeError::Conflict`] if the pull request conflicts with its base.
    /// - [`MergeError::Timeout`] if mergeability stayed unknown for `max_attempts` checks.
    /// - [`MergeError::Remote`] if a request fails or the remote declines to merge.
    pub async fn coordinate(
        &self,
        pr: &mut PullRequestRef,
        decision: &Decision,
    ) -> Result<MergeOutcome, MergeError> {
        if !decision.is_permitted() {
            return Ok(MergeOutcome::Skipped);
        }

        let span = info_span!("coordinate", repo = %pr.full_name(), number = pr.number);

        async {
            if self.settings.await_mergeable {
                self.await_mergeability(pr).await?;
            }
            self.merge(pr).await
        }
        .instrument(span)
        .await
    }

    /// Re-fetches the pull request until its mergeable state is known.
    async fn await_mergeability(&self, pr: &mut PullRequestRef) -> Result<(), MergeError> {
        let max_attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let fetched = self
                .client
                .fetch_pull_request(&pr.owner, &pr.repository_name, pr.number)
                .await?;
            pr.mergeable_state = fetched.mergeable_state;
            info!(attempt, state = %pr.mergeable_state, "Current PR state");

            if pr.mergeable_state.is_conflicting() {
                return Err(MergeError::Conflict { number: pr.number });
            }
            if !pr.mergeable_state.is_unknown() {
                return Ok(());
            }
            if attempt < max_attempts {
                let delay = backoff_delay(attempt);
                info!(attempt, wait_secs = delay.as_secs(), "Mergeable state unknown, waiting");
                self.sleeper.sleep(delay).await;
            }
        }

        warn!(attempts = max_attempts, "Mergeable state still unknown");
        Err(MergeError::Timeout {
            attempts: max_attempts,
        })
    }

    /// Sends the merge request.
    async fn merge(&self, pr: &PullRequestRef) -> Result<MergeOutcome, MergeError> {
        // The snapshot may predate policy evaluation.
        if pr.mergeable_state.is_conflicting() {
            return Err(MergeError::Conflict { number: pr.number });
        }

        let response = self
            .client
            .merge_pull_request(
                &pr.owner,
                &pr.repository_name,
                pr.number,
                self.settings.method,
            )
            .await?;

        if !response.merged {
            return Err(RemoteError::NotMerged {
                message: response.message,
            }
            .into());
        }

        info!(method = %self.settings.method, sha = ?response.sha, "{}", response.message);
        Ok(MergeOutcome::Merged {
            message: response.message,
            sha: response.sha,
        })
    }
}
