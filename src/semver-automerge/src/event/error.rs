//! Trigger event error types.

use thiserror::Error;

/// Errors that can occur while reading the triggering event.
#[derive(Debug, Error)]
pub enum EventError {
    /// A required environment variable is not set.
    #[error("required env variable {name} not set")]
    MissingVariable { name: &'static str },

    /// Failed to read the event payload.
    #[error("error opening {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the event payload.
    #[error("error parsing event JSON in '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The payload has no pull request title.
    #[error("no pull request title in event payload")]
    MissingTitle,
}
