//! Bounded-string attributes of a book plus their small collections.

use serde::{Deserialize, Serialize};

use crate::modules::tags::domain::entities::Tag;
use crate::shared::domain::bounded_string;
use crate::shared::errors::{AppError, AppResult};

const MAX_ATTRIBUTE_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        bounded_string::validate_required("BookTitle", &value, MAX_ATTRIBUTE_LEN)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Publisher(String);

impl Publisher {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        bounded_string::validate_required("Publisher", &value, MAX_ATTRIBUTE_LEN)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        bounded_string::validate_required("Author", &value, MAX_ATTRIBUTE_LEN)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Ordered author list; a book needs at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authors(Vec<Author>);

impl Authors {
    pub fn new(values: Vec<Author>) -> AppResult<Self> {
        if values.is_empty() {
            return Err(AppError::domain_validation("Authors", "empty values"));
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[Author] {
        &self.0
    }
}

/// Tag set attached to a book; empty is allowed and means "untagged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn new(values: Vec<Tag>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[Tag] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_attributes_share_the_100_char_rule() {
        assert_eq!(BookTitle::new("A").unwrap().value(), "A");
        assert_eq!(Publisher::new("AB C").unwrap().value(), "AB C");
        assert_eq!(Author::new("ABCDあ").unwrap().value(), "ABCDあ");

        let max = "1".repeat(100);
        assert!(BookTitle::new(&max).is_ok());
        assert!(Publisher::new(&max).is_ok());
        assert!(Author::new(&max).is_ok());

        let over = "1".repeat(101);
        for err in [
            BookTitle::new(&over).unwrap_err(),
            Publisher::new(&over).unwrap_err(),
            Author::new(&over).unwrap_err(),
        ] {
            assert!(err.to_string().contains("value length is over limit(100)"));
        }

        for err in [
            BookTitle::new(" ").unwrap_err(),
            Publisher::new("").unwrap_err(),
            Author::new(" ").unwrap_err(),
        ] {
            assert!(err.to_string().contains("value is empty"));
        }
    }

    #[test]
    fn authors_require_at_least_one_and_keep_order() {
        let err = Authors::new(vec![]).unwrap_err();
        assert_eq!(err, AppError::domain_validation("Authors", "empty values"));

        let authors = Authors::new(vec![
            Author::new("first").unwrap(),
            Author::new("second").unwrap(),
        ])
        .unwrap();
        let names: Vec<&str> = authors.values().iter().map(Author::value).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn tags_may_be_empty() {
        assert!(Tags::empty().values().is_empty());
    }
}
