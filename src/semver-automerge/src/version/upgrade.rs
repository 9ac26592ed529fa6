//! Ordered version pair.

use super::{SemanticVersion, UpgradeMagnitude};
use std::fmt;

/// A pair of versions where `from <= to` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUpgrade {
    from: SemanticVersion,
    to: SemanticVersion,
}

impl VersionUpgrade {
    /// Builds an upgrade from two versions in any order.
    ///
    /// The smaller version becomes `from` and the larger becomes `to`.
    #[must_use]
    pub fn new(a: SemanticVersion, b: SemanticVersion) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// The older version.
    #[must_use]
    pub fn from(&self) -> &SemanticVersion {
        &self.from
    }

    /// The newer version.
    #[must_use]
    pub fn to(&self) -> &SemanticVersion {
        &self.to
    }

    /// Classifies the upgrade by the highest-order component that increased.
    ///
    /// Differences only in prerelease or build metadata yield
    /// [`UpgradeMagnitude::None`].
    #[must_use]
    pub fn magnitude(&self) -> UpgradeMagnitude {
        if self.to.major > self.from.major {
            UpgradeMagnitude::Major
        } else if self.to.minor > self.from.minor {
            UpgradeMagnitude::Minor
        } else if self.to.patch > self.from.patch {
            UpgradeMagnitude::Patch
        } else {
            UpgradeMagnitude::None
        }
    }
}

impl fmt::Display for VersionUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upgrade(from: &str, to: &str) -> VersionUpgrade {
        VersionUpgrade::new(
            SemanticVersion::parse(from).unwrap(),
            SemanticVersion::parse(to).unwrap(),
        )
    }

    #[test]
    fn reorders_descending_input() {
        let u = upgrade("9.4.3", "3.2.1");
        assert_eq!(u.from().to_string(), "3.2.1");
        assert_eq!(u.to().to_string(), "9.4.3");
    }

    #[test]
    fn detects_magnitudes() {
        assert_eq!(upgrade("0.0.1", "0.0.2").magnitude(), UpgradeMagnitude::Patch);
        assert_eq!(upgrade("0.0.1", "0.1.2").magnitude(), UpgradeMagnitude::Minor);
        assert_eq!(upgrade("0.0.1", "1.1.2").magnitude(), UpgradeMagnitude::Major);
        assert_eq!(upgrade("1.2.3", "1.2.3").magnitude(), UpgradeMagnitude::None);
    }

    #[test]
    fn higher_component_wins_when_lower_ones_decrease() {
        assert_eq!(upgrade("1.9.9", "2.0.0").magnitude(), UpgradeMagnitude::Major);
        assert_eq!(upgrade("1.1.9", "1.2.0").magnitude(), UpgradeMagnitude::Minor);
    }

    #[test]
    fn prerelease_only_difference_is_none() {
        assert_eq!(
            upgrade("1.2.3-alpha", "1.2.3").magnitude(),
            UpgradeMagnitude::None
        );
        assert_eq!(
            upgrade("1.2.3-rc.1", "1.2.3-rc.2").magnitude(),
            UpgradeMagnitude::None
        );
    }

    #[test]
    fn displays_as_arrow() {
        assert_eq!(upgrade("1.4.8", "1.4.6").to_string(), "1.4.6 -> 1.4.8");
    }
}
