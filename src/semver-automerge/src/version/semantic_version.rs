//! Semantic version value type.

use super::ParseError;
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version.
///
/// Ordering follows semver precedence over major, minor, patch and the
/// prerelease identifiers. Build metadata is carried for display only and
/// never takes part in ordering or equality.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    /// Major component.
    pub major: u64,

    /// Minor component.
    pub minor: u64,

    /// Patch component.
    pub patch: u64,

    /// Prerelease identifiers (empty for a release).
    pub pre: Prerelease,

    /// Build metadata (empty when absent).
    pub build: BuildMetadata,
}

impl SemanticVersion {
    /// Creates a release version with no prerelease or build metadata.
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        }
    }

    /// Parses a single version literal.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLiteral`] if the literal is not a valid
    /// semantic version (e.g. leading zeros or a component overflowing `u64`).
    pub fn parse(literal: &str) -> Result<Self, ParseError> {
        Version::parse(literal)
            .map(Self::from)
            .map_err(|source| ParseError::InvalidLiteral {
                literal: literal.to_string(),
                source,
            })
    }

    /// Returns true if this version carries prerelease identifiers.
    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }
}

impl From<Version> for SemanticVersion {
    fn from(version: Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre: version.pre,
            build: version.build,
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn orders_by_numeric_components() {
        assert!(v("1.4.6") < v("1.4.8"));
        assert!(v("1.10.0") > v("1.9.9"));
        assert!(v("2.0.0") > v("1.99.99"));
    }

    #[test]
    fn prerelease_sorts_before_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0-alpha") < v("1.0.0-beta"));
        assert!(v("1.0.0-alpha.2") < v("1.0.0-alpha.10"));
        assert!(v("1.0.0-rc.1").is_prerelease());
    }

    #[test]
    fn build_metadata_is_ignored_for_equality() {
        assert_eq!(v("1.2.3+build.1"), v("1.2.3+build.2"));
        assert_eq!(v("1.2.3+abc"), v("1.2.3"));
        assert_eq!(
            v("1.2.3+abc").cmp(&v("1.2.3+xyz")),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn displays_canonical_form() {
        assert_eq!(v("1.2.3").to_string(), "1.2.3");
        assert_eq!(v("1.2.3-rc.1+sha.5114f85").to_string(), "1.2.3-rc.1+sha.5114f85");
        assert_eq!(SemanticVersion::new(0, 0, 1).to_string(), "0.0.1");
    }

    #[test]
    fn rejects_invalid_literals() {
        assert!(matches!(
            SemanticVersion::parse("01.2.3"),
            Err(ParseError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            "99999999999999999999.0.0".parse::<SemanticVersion>(),
            Err(ParseError::InvalidLiteral { .. })
        ));
    }
}
