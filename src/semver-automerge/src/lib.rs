#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod event;
pub mod merge;
pub mod policy;
pub mod runner;
pub mod version;

pub use client::{
    GitHubClient, MergeResponse, MergeableState, PullRequestRef, RemoteError, RepositoryClient,
};
pub use config::ConfigError;
pub use event::{load_pull_request, EventError, EventKind, TriggerContext};
pub use merge::{
    backoff_delay, MergeCoordinator, MergeError, MergeMethod, MergeOutcome, MergeSettings,
    Sleeper, TokioSleeper,
};
pub use policy::{evaluate, is_allowed, parse_allowance, Allowance, Decision};
pub use runner::{process_pull_request, RunOutcome, Runner, RunnerConfig, RunnerError};
pub use version::{
    classify, extract, ParseError, SemanticVersion, UpgradeMagnitude, VersionUpgrade,
};
