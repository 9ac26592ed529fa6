//! Runner error types.

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Action input validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Trigger event reading errors.
    #[error(transparent)]
    Event(#[from] crate::event::EventError),

    /// The pull request title does not describe a version upgrade.
    #[error("error parsing upgrade from PR title '{title}': {source}")]
    Parse {
        title: String,
        #[source]
        source: crate::version::ParseError,
    },

    /// The merge attempt failed.
    #[error("error merging PR: {0}")]
    Merge(#[from] crate::merge::MergeError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
