use std::sync::Arc;

use crate::modules::tags::domain::entities::Tag;
use crate::modules::tags::domain::repositories::TagRepository;
use crate::shared::errors::AppResult;

/// Cross-aggregate name uniqueness check for tags.
pub struct TagDomainService {
    repo: Arc<dyn TagRepository>,
}

impl TagDomainService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// True when another tag already carries the candidate's name.
    /// Renaming a tag to its own current name is not a conflict.
    pub async fn same_name_exists(&self, candidate: &Tag) -> AppResult<bool> {
        match self.repo.find_by_name(candidate.name()).await? {
            None => Ok(false),
            Some(existing) => Ok(!candidate.is_same(&existing)),
        }
    }
}
