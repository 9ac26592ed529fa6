//! Triggering event handling.
//!
//! GitHub Actions exposes the event name and the path to its JSON payload via
//! `GITHUB_EVENT_NAME` and `GITHUB_EVENT_PATH`. Only pull request events are
//! acted upon.

mod error;
mod payload;

pub use error::EventError;
pub use payload::{load_pull_request, parse_pull_request};

use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the triggering event name.
pub const EVENT_NAME_VARIABLE: &str = "GITHUB_EVENT_NAME";

/// Environment variable holding the path to the event payload.
pub const EVENT_PATH_VARIABLE: &str = "GITHUB_EVENT_PATH";

/// Events this action acts upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `pull_request`
    PullRequest,
    /// `pull_request_target`
    PullRequestTarget,
}

impl EventKind {
    /// All accepted event kinds.
    pub const ALL: [EventKind; 2] = [Self::PullRequest, Self::PullRequestTarget];

    /// Parses an event name, returning `None` for events that are not acted upon.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Returns the GitHub event name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PullRequest => "pull_request",
            Self::PullRequestTarget => "pull_request_target",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the triggering event comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    /// Raw event name.
    pub event_name: String,
    /// Path to the JSON event payload.
    pub payload_path: PathBuf,
}

impl TriggerContext {
    /// Creates a trigger context.
    pub fn new(event_name: impl Into<String>, payload_path: impl Into<PathBuf>) -> Self {
        Self {
            event_name: event_name.into(),
            payload_path: payload_path.into(),
        }
    }

    /// Reads the trigger context from the GitHub Actions environment.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingVariable`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self, EventError> {
        let event_name = required_env(EVENT_NAME_VARIABLE)?;
        let payload_path = required_env(EVENT_PATH_VARIABLE)?;
        Ok(Self::new(event_name, payload_path))
    }

    /// Returns the event kind, or `None` if the event is not acted upon.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::parse(&self.event_name)
    }
}

fn required_env(name: &'static str) -> Result<String, EventError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(EventError::MissingVariable { name }),
    }
}
