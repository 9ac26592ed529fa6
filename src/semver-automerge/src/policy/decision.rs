//! Policy gate outcome.

use crate::version::{UpgradeMagnitude, VersionUpgrade};

/// Result of evaluating a pull request title against an allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The allowance is `any`; the title was not inspected.
    Unrestricted,

    /// The upgrade is within the allowance.
    Permitted {
        /// Detected upgrade.
        upgrade: VersionUpgrade,
        /// Magnitude of the upgrade.
        magnitude: UpgradeMagnitude,
    },

    /// The upgrade exceeds the allowance.
    Denied {
        /// Detected upgrade.
        upgrade: VersionUpgrade,
        /// Magnitude of the upgrade.
        magnitude: UpgradeMagnitude,
        /// Configured ceiling.
        allowance: UpgradeMagnitude,
    },
}

impl Decision {
    /// Returns true if the pull request may be merged.
    #[must_use]
    pub fn is_permitted(&self) -> bool {
        !matches!(self, Self::Denied { .. })
    }
}
