//! Configured upgrade allowance.

use crate::config::ConfigError;
use crate::version::UpgradeMagnitude;
use std::fmt;
use std::str::FromStr;

/// The configured ceiling for automatic merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allowance {
    /// Every upgrade is merged; the title is never inspected.
    Any,
    /// Upgrades up to and including the given magnitude are merged.
    UpTo(UpgradeMagnitude),
}

/// Parses an allowance token into its ceiling magnitude.
///
/// Accepts `major`, `minor` and `patch`, ignoring case and surrounding
/// whitespace. The unrestricted `any` token is handled by [`Allowance`], not here.
///
/// # Errors
///
/// Returns [`ConfigError::UnrecognizedAllowance`] for any other value.
pub fn parse_allowance(s: &str) -> Result<UpgradeMagnitude, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "major" => Ok(UpgradeMagnitude::Major),
        "minor" => Ok(UpgradeMagnitude::Minor),
        "patch" => Ok(UpgradeMagnitude::Patch),
        _ => Err(ConfigError::UnrecognizedAllowance {
            value: s.to_string(),
        }),
    }
}

impl FromStr for Allowance {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        parse_allowance(s).map(Self::UpTo)
    }
}

impl fmt::Display for Allowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::UpTo(magnitude) => fmt::Display::fmt(magnitude, f),
        }
    }
}
