use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

const MAX_NAME_LEN: usize = 15;

/// Label attached to books. Identity is the id; the name is only mutable
/// through [`Tag::update_name`], which re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    tag_id: Uuid,
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Rehydrates a persisted tag under its original id.
    pub fn with_id(tag_id: Uuid, name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self { tag_id, name })
    }

    fn validate(name: &str) -> AppResult<()> {
        if name.is_empty() {
            return Err(AppError::domain_validation("Tag", "name is empty"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::domain_validation(
                "Tag",
                "name length should be less than 16",
            ));
        }
        Ok(())
    }

    pub fn tag_id(&self) -> Uuid {
        self.tag_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        let name = name.into();
        Self::validate(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn is_same_name(&self, other: &Tag) -> bool {
        self.name == other.name
    }

    pub fn is_same(&self, other: &Tag) -> bool {
        self.tag_id == other.tag_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        let err = Tag::new("").unwrap_err();
        assert_eq!(err, AppError::domain_validation("Tag", "name is empty"));
    }

    #[test]
    fn rejects_name_over_15_chars() {
        assert!(Tag::new("a".repeat(15)).is_ok());
        let err = Tag::new("a".repeat(16)).unwrap_err();
        assert_eq!(
            err,
            AppError::domain_validation("Tag", "name length should be less than 16")
        );
    }

    #[test]
    fn rename_revalidates() {
        let mut tag = Tag::new("rust").unwrap();
        assert!(tag.update_name("systems").is_ok());
        assert_eq!(tag.name(), "systems");

        assert!(tag.update_name("").is_err());
        // failed rename leaves the previous name in place
        assert_eq!(tag.name(), "systems");
    }

    #[test]
    fn same_name_and_same_id_are_distinct_notions() {
        let a = Tag::new("rust").unwrap();
        let b = Tag::new("rust").unwrap();

        assert!(a.is_same_name(&b));
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a.clone()));
    }
}
