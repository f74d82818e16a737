//! Credential and profile value objects. Constructors are the sole
//! validation gates; a held value is always well-formed.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
            .expect("email pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if !email_pattern().is_match(&value) {
            return Err(AppError::domain_validation("Email", "email is invalid."));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Plain-text password, held only transiently on the way to the crypto
/// collaborator. 8-100 alphanumeric characters with at least one upper,
/// one lower, and one digit.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let count = value.chars().count();
        let well_formed = (8..=100).contains(&count)
            && value.chars().all(|c| c.is_ascii_alphanumeric())
            && value.chars().any(|c| c.is_ascii_lowercase())
            && value.chars().any(|c| c.is_ascii_uppercase())
            && value.chars().any(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(AppError::domain_validation(
                "Password",
                "password should be 8-100 length and have upper and lower and numeric",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

// keep raw passwords out of logs and debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() || value.chars().count() > 20 {
            return Err(AppError::domain_validation(
                "UserName",
                "user name should be 1-20 length",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::domain_validation(
                "HashedPassword",
                "hashed password should not be empty",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_common_shapes() {
        for value in ["user@example.com", "a.b+c@mail-host.co.jp"] {
            assert!(Email::new(value).is_ok(), "{value}");
        }
    }

    #[test]
    fn email_rejects_malformed_input() {
        for value in ["", "plain", "no-at.example.com", "user@", "@host.com"] {
            let err = Email::new(value).unwrap_err();
            assert_eq!(err, AppError::domain_validation("Email", "email is invalid."));
        }
    }

    #[test]
    fn password_requires_mixed_case_and_digit() {
        assert!(Password::new("Abcdef12").is_ok());

        for value in [
            "Abcde12",      // too short
            "abcdefg1",     // no upper
            "ABCDEFG1",     // no lower
            "Abcdefgh",     // no digit
            "Abcdef12!",    // non-alphanumeric
        ] {
            assert!(Password::new(value).is_err(), "{value}");
        }

        let long = format!("Aa1{}", "b".repeat(97));
        assert!(Password::new(&long).is_ok());
        let too_long = format!("Aa1{}", "b".repeat(98));
        assert!(Password::new(&too_long).is_err());
    }

    #[test]
    fn password_debug_never_prints_the_value() {
        let password = Password::new("Abcdef12").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    #[test]
    fn user_name_is_bounded_1_to_20() {
        assert!(UserName::new("reader").is_ok());
        assert!(UserName::new("a".repeat(20)).is_ok());
        assert!(UserName::new(" ").is_err());
        assert!(UserName::new("a".repeat(21)).is_err());
    }

    #[test]
    fn hashed_password_must_not_be_blank() {
        assert!(HashedPassword::new("$argon2id$...").is_ok());
        assert!(HashedPassword::new("  ").is_err());
    }
}
