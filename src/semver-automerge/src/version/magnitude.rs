//! Upgrade magnitude ordinal.

use std::fmt;

/// Coarse size of a version bump, ordered `None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UpgradeMagnitude {
    /// No change in major, minor or patch.
    None = 0,
    /// Patch component increased.
    Patch = 1,
    /// Minor component increased.
    Minor = 2,
    /// Major component increased.
    Major = 3,
}

impl UpgradeMagnitude {
    /// Returns the magnitude as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for UpgradeMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
