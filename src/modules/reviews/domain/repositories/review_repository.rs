use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::reviews::domain::aggregates::SpecificBookUserReviews;
use crate::modules::reviews::domain::entities::BookReview;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait BookReviewRepository: Send + Sync {
    async fn find_by_review_id(&self, id: &Uuid) -> AppResult<Option<BookReview>>;

    async fn find_by_user_id(&self, user_id: &Uuid) -> AppResult<Vec<BookReview>>;

    /// Loads the aggregate guarding one user's reviews for one book.
    async fn find_by_user_id_and_book_id(
        &self,
        user_id: &Uuid,
        book_id: &Uuid,
    ) -> AppResult<SpecificBookUserReviews>;

    /// Most recently modified reviews first, at most `max_count`.
    async fn find_latest_modified(&self, max_count: usize) -> AppResult<Vec<BookReview>>;

    async fn create(&self, review: &BookReview) -> AppResult<BookReview>;

    async fn update(&self, review: &BookReview) -> AppResult<BookReview>;

    /// Soft delete; the review stays in the store but disappears from reads.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
