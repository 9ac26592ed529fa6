//! Version parsing error types.

use thiserror::Error;

/// Errors that can occur while extracting versions from text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Fewer than two version-like substrings were found.
    #[error("insufficient version tokens: unable to parse 2 versions from '{text}'")]
    InsufficientVersions { text: String },

    /// A version-like substring was rejected by the semver grammar.
    #[error("invalid version literal '{literal}': {source}")]
    InvalidLiteral {
        literal: String,
        #[source]
        source: semver::Error,
    },
}
