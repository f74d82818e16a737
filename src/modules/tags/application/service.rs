use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::tags::domain::entities::Tag;
use crate::modules::tags::domain::repositories::TagRepository;
use crate::modules::tags::domain::services::TagDomainService;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagAppModel {
    pub tag_id: Uuid,
    pub name: String,
}

impl TagAppModel {
    pub fn from_domain(tag: &Tag) -> Self {
        Self {
            tag_id: tag.tag_id(),
            name: tag.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagCreateAppModel {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagUpdateAppModel {
    pub name: String,
}

pub struct TagService {
    repo: Arc<dyn TagRepository>,
    domain_service: TagDomainService,
}

const ENTITY_NAME: &str = "Tag";

impl TagService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        let domain_service = TagDomainService::new(Arc::clone(&repo));
        Self {
            repo,
            domain_service,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<TagAppModel>> {
        let tags = self.repo.fetch_all().await?;
        Ok(tags.iter().map(TagAppModel::from_domain).collect())
    }

    pub async fn create(&self, input: TagCreateAppModel) -> AppResult<TagAppModel> {
        let tag = Tag::new(input.name)?;
        if self.domain_service.same_name_exists(&tag).await? {
            return Err(AppError::duplicate(ENTITY_NAME, "Name", tag.name()));
        }

        let created = self.repo.create(&tag).await?;
        log_info!("Created tag {} ({})", created.name(), created.tag_id());
        Ok(TagAppModel::from_domain(&created))
    }

    pub async fn update(&self, id: &Uuid, input: TagUpdateAppModel) -> AppResult<TagAppModel> {
        let mut current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY_NAME, id.to_string(), "update"))?;

        current.update_name(input.name)?;

        if self.domain_service.same_name_exists(&current).await? {
            return Err(AppError::duplicate(ENTITY_NAME, "Name", current.name()));
        }

        let updated = self.repo.update(&current).await?;
        Ok(TagAppModel::from_domain(&updated))
    }

    pub async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY_NAME, id.to_string(), "delete"))?;

        log_debug!("Deleting tag {} ({})", current.name(), current.tag_id());
        self.repo.delete(id).await
    }
}
