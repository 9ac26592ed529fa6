//! Runner configuration.

use crate::config::{validate_max_attempts, ConfigError};
use crate::event::TriggerContext;
use crate::merge::{MergeMethod, MergeSettings};
use crate::policy::Allowance;
use std::fmt;

/// Validated configuration for a single run.
#[derive(Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Maximum upgrade magnitude merged automatically.
    allowance: Allowance,
    /// Merge protocol settings.
    merge: MergeSettings,
    /// Triggering event.
    trigger: TriggerContext,
}

impl RunnerConfig {
    /// Creates a configuration from already validated values.
    pub fn new(
        token: String,
        allowance: Allowance,
        merge: MergeSettings,
        trigger: TriggerContext,
    ) -> Self {
        Self {
            token,
            allowance,
            merge,
            trigger,
        }
    }

    /// Creates a configuration from raw action inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the allowance or merge method is not
    /// recognized, or if `max_attempts` is zero.
    pub fn from_inputs(
        token: String,
        allowed_update: &str,
        merge_method: &str,
        max_attempts: u32,
        await_mergeable: bool,
        trigger: TriggerContext,
    ) -> Result<Self, ConfigError> {
        let allowance: Allowance = allowed_update.parse()?;
        let method: MergeMethod = merge_method.parse()?;
        let max_attempts = validate_max_attempts(max_attempts)?;

        Ok(Self::new(
            token,
            allowance,
            MergeSettings {
                method,
                max_attempts,
                await_mergeable,
            },
            trigger,
        ))
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the configured allowance.
    pub fn allowance(&self) -> &Allowance {
        &self.allowance
    }

    /// Returns the merge protocol settings.
    pub fn merge(&self) -> &MergeSettings {
        &self.merge
    }

    /// Returns the triggering event context.
    pub fn trigger(&self) -> &TriggerContext {
        &self.trigger
    }
}

impl fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("token", &"<redacted>")
            .field("allowance", &self.allowance)
            .field("merge", &self.merge)
            .field("trigger", &self.trigger)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::UpgradeMagnitude;

    fn trigger() -> TriggerContext {
        TriggerContext::new("pull_request", "/tmp/event.json")
    }

    #[test]
    fn parses_inputs() {
        let config = RunnerConfig::from_inputs(
            "token".to_string(),
            " Minor ",
            "squash",
            3,
            false,
            trigger(),
        )
        .unwrap();

        assert_eq!(config.allowance(), &Allowance::UpTo(UpgradeMagnitude::Minor));
        assert_eq!(config.merge().method, MergeMethod::Squash);
        assert_eq!(config.merge().max_attempts, 3);
        assert!(!config.merge().await_mergeable);
        assert_eq!(config.token(), "token");
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(matches!(
            RunnerConfig::from_inputs("t".into(), "huge", "merge", 3, true, trigger()),
            Err(ConfigError::UnrecognizedAllowance { .. })
        ));
        assert!(matches!(
            RunnerConfig::from_inputs("t".into(), "any", "octopus", 3, true, trigger()),
            Err(ConfigError::UnrecognizedMergeMethod { .. })
        ));
        assert!(matches!(
            RunnerConfig::from_inputs("t".into(), "any", "merge", 0, true, trigger()),
            Err(ConfigError::InvalidMaxAttempts { .. })
        ));
    }

    #[test]
    fn debug_output_redacts_token() {
        let config =
            RunnerConfig::from_inputs("secret".into(), "any", "merge", 1, true, trigger()).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
