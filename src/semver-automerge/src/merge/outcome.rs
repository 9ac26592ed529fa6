//! Merge attempt outcome.

use serde::Serialize;

/// Successful end of a merge attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// The pull request was merged.
    Merged {
        /// Confirmation message from the remote.
        message: String,
        /// SHA of the resulting commit.
        sha: Option<String>,
    },

    /// The policy did not permit the merge; the remote was not contacted.
    Skipped,
}

impl MergeOutcome {
    /// Returns true if the pull request was merged.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}
