use dashmap::DashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tags::domain::entities::Tag;
use crate::modules::tags::domain::repositories::TagRepository;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
struct TagRecord {
    tag: Tag,
    deleted: bool,
}

/// In-memory tag store. Explicitly constructed per test/process; no global
/// state. Deletion is soft: records keep existing but drop out of reads.
#[derive(Default)]
pub struct InMemoryTagRepository {
    tags: DashMap<Uuid, TagRecord>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn fetch_all(&self) -> AppResult<Vec<Tag>> {
        Ok(self
            .tags
            .iter()
            .filter(|entry| !entry.deleted)
            .map(|entry| entry.tag.clone())
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>> {
        Ok(self
            .tags
            .iter()
            .find(|entry| !entry.deleted && entry.tag.name() == name)
            .map(|entry| entry.tag.clone()))
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Tag>> {
        Ok(self
            .tags
            .get(id)
            .filter(|record| !record.deleted)
            .map(|record| record.tag.clone()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Tag>> {
        let mut found = Vec::new();
        for id in ids {
            if let Some(record) = self.tags.get(id) {
                if !record.deleted {
                    found.push(record.tag.clone());
                }
            }
        }
        Ok(found)
    }

    async fn create(&self, tag: &Tag) -> AppResult<Tag> {
        self.tags.insert(
            tag.tag_id(),
            TagRecord {
                tag: tag.clone(),
                deleted: false,
            },
        );
        Ok(tag.clone())
    }

    async fn update(&self, tag: &Tag) -> AppResult<Tag> {
        let mut record = self
            .tags
            .get_mut(&tag.tag_id())
            .filter(|record| !record.deleted)
            .ok_or_else(|| AppError::not_found("Tag", tag.tag_id().to_string(), "update"))?;
        record.tag = tag.clone();
        Ok(tag.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut record = self
            .tags
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Tag", id.to_string(), "delete"))?;
        record.deleted = true;
        Ok(())
    }
}
