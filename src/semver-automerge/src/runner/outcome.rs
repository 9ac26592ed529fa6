//! Run outcome types.

use crate::merge::MergeOutcome;
use crate::policy::Decision;

/// Successful end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The triggering event is not one this action acts upon.
    Ignored {
        /// Raw event name.
        event: String,
    },

    /// The upgrade exceeds the allowance; nothing was merged.
    Denied {
        /// Policy decision.
        decision: Decision,
    },

    /// The pull request was merged.
    Merged {
        /// Policy decision.
        decision: Decision,
        /// Merge result.
        outcome: MergeOutcome,
    },
}

impl RunOutcome {
    /// Returns true if the pull request was merged.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}
