//! Length-bounded string validation shared by the value objects.
//!
//! Lengths are counted in characters, not bytes, so multi-byte input is
//! bounded the way a user perceives it.

use crate::shared::errors::{AppError, AppResult};

/// Validates a required string: non-blank after trimming, at most `max_len`
/// characters. `name` is the construct reported in the validation error.
pub fn validate_required(name: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::domain_validation(name, "value is empty"));
    }
    if value.chars().count() > max_len {
        return Err(AppError::domain_validation(
            name,
            format!("value length is over limit({max_len})"),
        ));
    }
    Ok(())
}

/// Validates an optional-content string: empty allowed, at most `max_len`
/// characters.
pub fn validate_allow_empty(name: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.chars().count() > max_len {
        return Err(AppError::domain_validation(
            name,
            format!("value length is over limit({max_len})"),
        ));
    }
    Ok(())
}
