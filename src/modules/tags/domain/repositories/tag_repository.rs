use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tags::domain::entities::Tag;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn fetch_all(&self) -> AppResult<Vec<Tag>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Tag>>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Tag>>;

    async fn create(&self, tag: &Tag) -> AppResult<Tag>;

    async fn update(&self, tag: &Tag) -> AppResult<Tag>;

    /// Soft delete; the tag stays in the store but disappears from reads.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
