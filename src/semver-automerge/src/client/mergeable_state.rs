//! Remote mergeability status.

use serde::Deserialize;
use std::fmt;

/// Mergeability of a pull request as computed by the remote repository.
///
/// The remote computes this lazily, so a freshly fetched pull request may
/// report [`MergeableState::Unknown`] until the computation finishes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum MergeableState {
    /// Not computed yet.
    #[default]
    Unknown,
    /// Mergeable with passing checks.
    Clean,
    /// Merge conflicts with the base branch (GitHub reports `dirty`).
    Conflicting,
    /// Blocked by branch protection.
    Blocked,
    /// Head branch is out of date with the base branch.
    Behind,
    /// Mergeable with failing or pending non-required checks.
    Unstable,
    /// Mergeable with passing commit status and pre-receive hooks.
    HasHooks,
    /// Draft pull request.
    Draft,
    /// Any state this crate does not know about.
    Other(String),
}

impl MergeableState {
    /// Returns the state as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Clean => "clean",
            Self::Conflicting => "conflicting",
            Self::Blocked => "blocked",
            Self::Behind => "behind",
            Self::Unstable => "unstable",
            Self::HasHooks => "has_hooks",
            Self::Draft => "draft",
            Self::Other(state) => state,
        }
    }

    /// Returns true if the remote has not determined mergeability yet.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns true if the pull request conflicts with its base.
    #[must_use]
    pub fn is_conflicting(&self) -> bool {
        matches!(self, Self::Conflicting)
    }
}

impl From<&str> for MergeableState {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "unknown" => Self::Unknown,
            "clean" => Self::Clean,
            "dirty" | "conflicting" => Self::Conflicting,
            "blocked" => Self::Blocked,
            "behind" => Self::Behind,
            "unstable" => Self::Unstable,
            "has_hooks" => Self::HasHooks,
            "draft" => Self::Draft,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Option<String>> for MergeableState {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from).unwrap_or_default()
    }
}

impl fmt::Display for MergeableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
