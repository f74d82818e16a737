use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::books::domain::entities::{Book, BookWithReviews};
use crate::modules::books::domain::value_objects::Isbn13;
use crate::modules::tags::domain::entities::Tag;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All live books sharing the ISBN (multiple editions may coexist).
    async fn find_by_isbn13(&self, isbn13: &Isbn13) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Book>>;

    async fn create(&self, book: &Book) -> AppResult<Book>;

    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Replaces the full tag association; an empty slice clears all tags.
    async fn update_tags(&self, book_id: &Uuid, tags: &[Tag]) -> AppResult<()>;

    /// Soft delete; the book stays in the store but disappears from reads.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    async fn find_with_reviews_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> AppResult<Vec<BookWithReviews>>;

    /// Books ordered by their most recently modified review, capped at
    /// `max_count` reviews in total.
    async fn find_with_latest_reviews(&self, max_count: usize)
        -> AppResult<Vec<BookWithReviews>>;
}
