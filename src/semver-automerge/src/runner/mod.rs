//! Orchestrates a single auto-merge run.
//!
//! A run handles exactly one pull request event: it reads the event, gates the
//! upgrade against the allowance and, if permitted, merges the pull request.

mod config;
mod error;
mod outcome;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use outcome::RunOutcome;

use crate::client::{GitHubClient, PullRequestRef, RepositoryClient};
use crate::event::{load_pull_request, EventKind};
use crate::merge::{MergeCoordinator, MergeOutcome, Sleeper, TokioSleeper};
use crate::policy::{evaluate, Allowance, Decision};
use std::sync::Arc;
use tracing::info;

/// Runs the auto-merge flow for the configured event.
pub struct Runner {
    config: RunnerConfig,
    client: Arc<dyn RepositoryClient>,
    sleeper: Arc<dyn Sleeper>,
}

impl Runner {
    /// Builds a runner backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::new(config.token().to_string())?;
        Ok(Self::with_client(
            config,
            Arc::new(client),
            Arc::new(TokioSleeper),
        ))
    }

    /// Builds a runner with a custom repository client and sleeper.
    pub fn with_client(
        config: RunnerConfig,
        client: Arc<dyn RepositoryClient>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            config,
            client,
            sleeper,
        }
    }

    /// Executes the run.
    pub async fn run(&self) -> Result<RunOutcome, RunnerError> {
        let trigger = self.config.trigger();
        if trigger.kind().is_none() {
            info!(
                event = %trigger.event_name,
                accepted = ?EventKind::ALL.map(|kind| kind.as_str()),
                "Event is not an accepted pull request event, exiting"
            );
            return Ok(RunOutcome::Ignored {
                event: trigger.event_name.clone(),
            });
        }

        let mut pr = load_pull_request(&trigger.payload_path)?;
        info!(repo = %pr.full_name(), number = pr.number, title = %pr.title, "Loaded pull request");

        let coordinator =
            MergeCoordinator::new(self.client.as_ref(), self.sleeper.as_ref(), *self.config.merge());
        process_pull_request(&mut pr, self.config.allowance(), &coordinator).await
    }
}

/// Gates a pull request against `allowance` and merges it if permitted.
///
/// A denied upgrade is a successful [`RunOutcome::Denied`], not an error.
///
/// # Errors
///
/// Returns [`RunnerError::Parse`] if the title does not contain two versions,
/// or [`RunnerError::Merge`] if the merge attempt fails.
pub async fn process_pull_request(
    pr: &mut PullRequestRef,
    allowance: &Allowance,
    coordinator: &MergeCoordinator<'_>,
) -> Result<RunOutcome, RunnerError> {
    let decision = evaluate(allowance, &pr.title).map_err(|source| RunnerError::Parse {
        title: pr.title.clone(),
        source,
    })?;

    match coordinator.coordinate(pr, &decision).await? {
        MergeOutcome::Skipped => {
            if let Decision::Denied {
                magnitude,
                allowance,
                ..
            } = &decision
            {
                info!(%magnitude, %allowance, "{magnitude} upgrade not allowed, skipping");
            }
            Ok(RunOutcome::Denied { decision })
        }
        outcome => Ok(RunOutcome::Merged { decision, outcome }),
    }
}
