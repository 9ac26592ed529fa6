//! Version extraction and upgrade classification.
//!
//! Pull request titles produced by dependency bots mention the old and new
//! version of a dependency in no fixed order, e.g. `bump sbt from 1.4.6 to 1.4.8`
//! or `9.4.3 (from 3.2.1)`. This module finds both versions and orders them.

mod error;
mod magnitude;
mod semantic_version;
mod upgrade;

pub use error::ParseError;
pub use magnitude::UpgradeMagnitude;
pub use semantic_version::SemanticVersion;
pub use upgrade::VersionUpgrade;

use regex::Regex;
use std::sync::OnceLock;

/// Matches `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` anywhere in the text.
fn version_regex() -> &'static Regex {
    static VERSION_REGEX: OnceLock<Regex> = OnceLock::new();
    VERSION_REGEX.get_or_init(|| {
        Regex::new(
            r"[0-9]+\.[0-9]+\.[0-9]+(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
        )
        .expect("version regex is valid")
    })
}

/// Extracts two versions from `text` and returns them ordered.
///
/// The first two non-overlapping version-like substrings are used; their
/// textual order does not matter.
///
/// # Errors
///
/// Returns [`ParseError::InsufficientVersions`] if fewer than two versions are
/// found, or [`ParseError::InvalidLiteral`] if a match is not a valid version.
pub fn extract(text: &str) -> Result<VersionUpgrade, ParseError> {
    let mut matches = version_regex().find_iter(text).map(|m| m.as_str());

    let (Some(first), Some(second)) = (matches.next(), matches.next()) else {
        return Err(ParseError::InsufficientVersions {
            text: text.to_string(),
        });
    };

    let a = SemanticVersion::parse(first)?;
    let b = SemanticVersion::parse(second)?;
    Ok(VersionUpgrade::new(a, b))
}

/// Classifies an upgrade. See [`VersionUpgrade::magnitude`].
#[must_use]
pub fn classify(upgrade: &VersionUpgrade) -> UpgradeMagnitude {
    upgrade.magnitude()
}
