//! Action input validation.
//!
//! Raw action inputs are plain strings. They are parsed into closed types
//! ([`Allowance`](crate::policy::Allowance), [`MergeMethod`](crate::merge::MergeMethod))
//! once at startup; every parse failure is a [`ConfigError`].

mod error;

pub use error::ConfigError;

/// Default number of mergeability checks before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Validates the mergeability retry bound.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidMaxAttempts`] if `max_attempts` is zero.
pub fn validate_max_attempts(max_attempts: u32) -> Result<u32, ConfigError> {
    if max_attempts == 0 {
        return Err(ConfigError::InvalidMaxAttempts {
            value: max_attempts,
        });
    }
    Ok(max_attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_max_attempts() {
        assert!(matches!(
            validate_max_attempts(0),
            Err(ConfigError::InvalidMaxAttempts { value: 0 })
        ));
        assert_eq!(validate_max_attempts(DEFAULT_MAX_ATTEMPTS).unwrap(), 5);
    }
}
