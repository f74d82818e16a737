use dashmap::DashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::reviews::domain::aggregates::SpecificBookUserReviews;
use crate::modules::reviews::domain::entities::BookReview;
use crate::modules::reviews::domain::repositories::BookReviewRepository;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
struct ReviewRecord {
    review: BookReview,
    deleted: bool,
}

/// In-memory review store keyed by review id. Soft delete keeps records
/// around with a flag that filters them out of every read path.
#[derive(Default)]
pub struct InMemoryBookReviewRepository {
    reviews: DashMap<Uuid, ReviewRecord>,
}

impl InMemoryBookReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn live_reviews(&self) -> Vec<BookReview> {
        self.reviews
            .iter()
            .filter(|entry| !entry.deleted)
            .map(|entry| entry.review.clone())
            .collect()
    }
}

#[async_trait]
impl BookReviewRepository for InMemoryBookReviewRepository {
    async fn find_by_review_id(&self, id: &Uuid) -> AppResult<Option<BookReview>> {
        Ok(self
            .reviews
            .get(id)
            .filter(|record| !record.deleted)
            .map(|record| record.review.clone()))
    }

    async fn find_by_user_id(&self, user_id: &Uuid) -> AppResult<Vec<BookReview>> {
        Ok(self
            .live_reviews()
            .into_iter()
            .filter(|review| review.is_same_user(user_id))
            .collect())
    }

    async fn find_by_user_id_and_book_id(
        &self,
        user_id: &Uuid,
        book_id: &Uuid,
    ) -> AppResult<SpecificBookUserReviews> {
        let reviews = self
            .live_reviews()
            .into_iter()
            .filter(|review| review.is_same_user(user_id) && review.book_id() == *book_id)
            .collect();
        SpecificBookUserReviews::from_reviews(*user_id, *book_id, reviews)
    }

    async fn find_latest_modified(&self, max_count: usize) -> AppResult<Vec<BookReview>> {
        let mut reviews = self.live_reviews();
        reviews.sort_by_key(|review| {
            std::cmp::Reverse(review.detail().state().last_modified_at())
        });
        reviews.truncate(max_count);
        Ok(reviews)
    }

    async fn create(&self, review: &BookReview) -> AppResult<BookReview> {
        self.reviews.insert(
            review.review_id(),
            ReviewRecord {
                review: review.clone(),
                deleted: false,
            },
        );
        Ok(review.clone())
    }

    async fn update(&self, review: &BookReview) -> AppResult<BookReview> {
        let mut record = self
            .reviews
            .get_mut(&review.review_id())
            .filter(|record| !record.deleted)
            .ok_or_else(|| {
                AppError::not_found("BookReview", review.review_id().to_string(), "update")
            })?;
        record.review = review.clone();
        Ok(review.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut record = self
            .reviews
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("BookReview", id.to_string(), "delete"))?;
        record.deleted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::reviews::domain::entities::ReviewDetail;
    use crate::modules::reviews::domain::value_objects::{ReviewContent, ReviewState};

    fn review_for(user_id: Uuid, book_id: Uuid) -> BookReview {
        let detail = ReviewDetail::new(
            ReviewState::new(),
            ReviewContent::new("", true).unwrap(),
        );
        BookReview::new(user_id, book_id, detail)
    }

    #[tokio::test]
    async fn aggregate_loads_only_matching_live_reviews() {
        let repo = InMemoryBookReviewRepository::new();
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();

        let mine = review_for(user_id, book_id);
        repo.create(&mine).await.unwrap();
        repo.create(&review_for(user_id, Uuid::new_v4())).await.unwrap();
        repo.create(&review_for(Uuid::new_v4(), book_id)).await.unwrap();

        let aggregate = repo
            .find_by_user_id_and_book_id(&user_id, &book_id)
            .await
            .unwrap();
        assert_eq!(aggregate.reviews().len(), 1);
        assert_eq!(aggregate.reviews()[0].review_id(), mine.review_id());

        repo.delete(&mine.review_id()).await.unwrap();
        let aggregate = repo
            .find_by_user_id_and_book_id(&user_id, &book_id)
            .await
            .unwrap();
        assert!(aggregate.reviews().is_empty());
    }

    #[tokio::test]
    async fn latest_modified_is_ordered_and_capped() {
        let repo = InMemoryBookReviewRepository::new();
        let user_id = Uuid::new_v4();

        let first = review_for(user_id, Uuid::new_v4());
        let second = review_for(user_id, Uuid::new_v4());
        let third = review_for(user_id, Uuid::new_v4());
        for review in [&first, &second, &third] {
            repo.create(review).await.unwrap();
        }

        let latest = repo.find_latest_modified(2).await.unwrap();
        assert_eq!(latest.len(), 2);
        assert!(
            latest[0].detail().state().last_modified_at()
                >= latest[1].detail().state().last_modified_at()
        );
    }
}
