//! Upgrade policy gate.
//!
//! Decides whether a detected upgrade is within the configured allowance.
//! The allowance is a ceiling: `minor` permits patch and minor upgrades
//! as well as upgrades that change nothing.

mod allowance;
mod decision;

pub use allowance::{parse_allowance, Allowance};
pub use decision::Decision;

use crate::version::{extract, ParseError, UpgradeMagnitude};
use tracing::info;

/// Returns true if `proposed` does not exceed `allowance`.
#[must_use]
pub fn is_allowed(allowance: UpgradeMagnitude, proposed: UpgradeMagnitude) -> bool {
    proposed <= allowance
}

/// Evaluates a pull request title against an allowance.
///
/// [`Allowance::Any`] short-circuits without parsing the title.
///
/// # Errors
///
/// Returns [`ParseError`] if the title does not contain two valid versions.
pub fn evaluate(allowance: &Allowance, title: &str) -> Result<Decision, ParseError> {
    let ceiling = match allowance {
        Allowance::Any => {
            info!("Any upgrade type allowed");
            return Ok(Decision::Unrestricted);
        }
        Allowance::UpTo(ceiling) => *ceiling,
    };

    let upgrade = extract(title)?;
    let magnitude = upgrade.magnitude();
    info!(upgrade = %upgrade, %magnitude, "Detected upgrade");

    if is_allowed(ceiling, magnitude) {
        Ok(Decision::Permitted { upgrade, magnitude })
    } else {
        Ok(Decision::Denied {
            upgrade,
            magnitude,
            allowance: ceiling,
        })
    }
}
