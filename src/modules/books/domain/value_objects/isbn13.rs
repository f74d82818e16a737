//! ISBN-13 identifier with structural and checksum validation.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

const VO_NAME: &str = "ISBN13";

/// 13-digit book edition identifier. Construction is the only validation
/// gate; a value in hand is always well-formed. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn13 {
    value: String,
}

impl Isbn13 {
    /// Checks, in order: non-empty, length 13, 978/979 prefix, all digits,
    /// check digit. Each failure carries its own message.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(AppError::domain_validation(VO_NAME, "value is empty"));
        }
        if value.chars().count() != 13 {
            return Err(AppError::domain_validation(
                VO_NAME,
                "value length should be 13",
            ));
        }
        if !value.starts_with("978") && !value.starts_with("979") {
            return Err(AppError::domain_validation(
                VO_NAME,
                "value should be start with 978 or 979",
            ));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::domain_validation(
                VO_NAME,
                "value should be only numeric",
            ));
        }
        Self::verify_check_digit(&value)?;

        Ok(Self { value })
    }

    /// EAN-13 weighted checksum: digits at positions 13 (leftmost) down to
    /// 2 accumulate by position parity, the even bucket weighs 3, and the
    /// result must reproduce the rightmost digit.
    fn verify_check_digit(value: &str) -> AppResult<()> {
        let digits: Vec<u32> = value
            .bytes()
            .map(|b| u32::from(b - b'0'))
            .collect();

        let mut even_total = 0;
        let mut odd_total = 0;
        let mut position = 13u32;
        for &digit in &digits {
            if position == 1 {
                // the check digit itself is excluded from the sum
                break;
            }
            if position % 2 == 0 {
                even_total += digit;
            } else {
                odd_total += digit;
            }
            position -= 1;
        }

        let total = even_total * 3 + odd_total;
        let expected = (10 - (total % 10)) % 10;
        let actual = digits[12];
        if actual != expected {
            return Err(AppError::domain_validation(
                VO_NAME,
                format!("invalid check digits. actual:{actual}, expected:{expected}"),
            ));
        }
        Ok(())
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_good_isbns_construct_and_round_trip() {
        for value in ["9784814400690", "9784296001866", "9791156640103"] {
            let isbn = Isbn13::new(value).unwrap();
            assert_eq!(isbn.value(), value);
        }
    }

    #[test]
    fn checksum_mismatch_reports_actual_and_expected() {
        let err = Isbn13::new("9784296001861").unwrap_err();
        assert_eq!(
            err,
            AppError::domain_validation("ISBN13", "invalid check digits. actual:1, expected:6")
        );
    }

    #[test]
    fn empty_value_is_reported_before_length() {
        let err = Isbn13::new("").unwrap_err();
        assert_eq!(err, AppError::domain_validation("ISBN13", "value is empty"));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = Isbn13::new("123").unwrap_err();
        assert_eq!(
            err,
            AppError::domain_validation("ISBN13", "value length should be 13")
        );
    }

    #[test]
    fn prefix_must_be_978_or_979() {
        let err = Isbn13::new("9774814400690").unwrap_err();
        assert_eq!(
            err,
            AppError::domain_validation("ISBN13", "value should be start with 978 or 979")
        );
    }

    #[test]
    fn non_digit_characters_are_rejected() {
        let err = Isbn13::new("978481440069X").unwrap_err();
        assert_eq!(
            err,
            AppError::domain_validation("ISBN13", "value should be only numeric")
        );
    }

    #[test]
    fn equality_is_by_value() {
        let a = Isbn13::new("9784814400690").unwrap();
        let b = Isbn13::new("9784814400690").unwrap();
        assert_eq!(a, b);
    }
}
