//! CLI for semver-automerge.
//!
//! Reads the GitHub Action inputs and the triggering pull request event, then
//! merges the pull request if its version bump is within the allowance.

use clap::Parser;
use semver_automerge::{
    RunOutcome, Runner, RunnerConfig, RunnerError, TriggerContext,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// semver-automerge - Merge dependency upgrade PRs within an allowed semver bump.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token with permission to merge pull requests.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Largest upgrade merged automatically: patch, minor, major or any.
    #[arg(long, env = "INPUT_ALLOWED_UPDATE")]
    allowed_update: String,

    /// Merge strategy: merge, squash or rebase.
    #[arg(long, env = "INPUT_MERGE_METHOD", default_value = "rebase")]
    merge_method: String,

    /// Maximum mergeability checks before giving up.
    #[arg(long, env = "INPUT_MAX_ATTEMPTS", default_value_t = semver_automerge::config::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Wait for GitHub to compute mergeability before merging.
    #[arg(
        long,
        env = "INPUT_WAIT_FOR_MERGEABLE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    wait_for_mergeable: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(outcome) => {
            report(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Uses compact single-line output and reads the level filter from `RUST_LOG`,
/// defaulting to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, RunnerError> {
    let trigger = TriggerContext::from_env()?;
    let config = RunnerConfig::from_inputs(
        args.token,
        &args.allowed_update,
        &args.merge_method,
        args.max_attempts,
        args.wait_for_mergeable,
        trigger,
    )?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Logs the final outcome.
fn report(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Ignored { event } => info!(event = %event, "Nothing to do"),
        RunOutcome::Denied { .. } => info!("Upgrade not allowed, pull request left open"),
        RunOutcome::Merged { .. } => info!("Pull request merged"),
    }
}
