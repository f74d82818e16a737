//! Consistency boundary for one user's reviews of one specific book.
//!
//! A user may keep any number of `Completed` reviews for a book (re-read
//! history) but at most one review in a non-completed state at a time.
//! Both `add` and `update` run the check in memory before the caller
//! persists anything.

use uuid::Uuid;

use crate::modules::reviews::domain::entities::BookReview;
use crate::modules::reviews::domain::value_objects::ReviewStateKind;
use crate::shared::errors::{AppError, AppResult};

const AGGREGATE_NAME: &str = "SpecificBookUserReviews";

pub struct SpecificBookUserReviews {
    user_id: Uuid,
    book_id: Uuid,
    reviews: Vec<BookReview>,
    last_modified: Option<BookReview>,
}

impl SpecificBookUserReviews {
    pub fn new(user_id: Uuid, book_id: Uuid) -> Self {
        Self {
            user_id,
            book_id,
            reviews: Vec::new(),
            last_modified: None,
        }
    }

    /// Rehydrates the aggregate from persisted reviews. Every review must
    /// already belong to this user/book pair.
    pub fn from_reviews(
        user_id: Uuid,
        book_id: Uuid,
        reviews: Vec<BookReview>,
    ) -> AppResult<Self> {
        let aggregate = Self {
            user_id,
            book_id,
            reviews,
            last_modified: None,
        };
        for review in &aggregate.reviews {
            aggregate.ensure_same_identity(review)?;
        }
        Ok(aggregate)
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn book_id(&self) -> Uuid {
        self.book_id
    }

    pub fn reviews(&self) -> &[BookReview] {
        &self.reviews
    }

    /// The review most recently added or updated through this aggregate,
    /// i.e. the one the caller still has to persist.
    pub fn last_modified(&self) -> Option<&BookReview> {
        self.last_modified.as_ref()
    }

    /// Admits a brand-new review into the set.
    pub fn add(&mut self, review: BookReview) -> AppResult<BookReview> {
        self.ensure_same_identity(&review)?;
        if self
            .reviews
            .iter()
            .any(|existing| existing.review_id() == review.review_id())
        {
            return Err(AppError::domain_validation(
                AGGREGATE_NAME,
                format!("review is already exist. review_id:{}", review.review_id()),
            ));
        }
        StateValidation::check(&review, self.reviews.iter())?;

        self.reviews.push(review.clone());
        self.last_modified = Some(review.clone());
        Ok(review)
    }

    /// Replaces an existing review's detail. The old version is excluded
    /// from the invariant check so a review can stay active across edits.
    pub fn update(&mut self, review: BookReview) -> AppResult<BookReview> {
        self.ensure_same_identity(&review)?;
        let position = self
            .reviews
            .iter()
            .position(|existing| existing.review_id() == review.review_id())
            .ok_or_else(|| {
                AppError::domain_validation(AGGREGATE_NAME, "update review is not exist")
            })?;

        let others = self
            .reviews
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != position)
            .map(|(_, existing)| existing);
        StateValidation::check(&review, others)?;

        self.reviews[position] = review.clone();
        self.last_modified = Some(review.clone());
        Ok(review)
    }

    fn ensure_same_identity(&self, review: &BookReview) -> AppResult<()> {
        if review.user_id() != self.user_id || review.book_id() != self.book_id {
            return Err(AppError::domain_validation(
                AGGREGATE_NAME,
                format!(
                    "review belongs to another user or book. user_id:{}, book_id:{}",
                    review.user_id(),
                    review.book_id()
                ),
            ));
        }
        Ok(())
    }
}

/// The one-active-review rule: unlimited `Completed` reviews may coexist,
/// but at most one review in the set may be non-completed.
pub struct StateValidation;

impl StateValidation {
    pub fn check<'a>(
        target: &BookReview,
        others: impl Iterator<Item = &'a BookReview>,
    ) -> AppResult<()> {
        if target.detail().state().state() == ReviewStateKind::Completed {
            return Ok(());
        }

        let active_count = others
            .filter(|review| review.detail().state().state() != ReviewStateKind::Completed)
            .count();
        if active_count > 0 {
            return Err(AppError::domain_validation(
                "StateValidation",
                "not completed state is only allowed to exist 1 at a time",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone};

    use crate::modules::reviews::domain::entities::{ReviewDetail, ReviewUpdateParameter};
    use crate::modules::reviews::domain::value_objects::{ReviewContent, ReviewState};
    use crate::shared::utils::time;

    fn completed_at() -> DateTime<FixedOffset> {
        time::jst().with_ymd_and_hms(2024, 1, 15, 22, 0, 0).unwrap()
    }

    fn review_in(
        user_id: Uuid,
        book_id: Uuid,
        state: ReviewStateKind,
    ) -> BookReview {
        let state = match state {
            ReviewStateKind::NotYet => ReviewState::new(),
            other => ReviewState::new()
                .update(other, Some(completed_at()))
                .unwrap(),
        };
        let detail = ReviewDetail::new(state, ReviewContent::new("", true).unwrap());
        BookReview::new(user_id, book_id, detail)
    }

    #[test]
    fn second_active_review_is_rejected() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let mut aggregate = SpecificBookUserReviews::new(user_id, book_id);

        aggregate
            .add(review_in(user_id, book_id, ReviewStateKind::NotYet))
            .unwrap();

        for state in [ReviewStateKind::NotYet, ReviewStateKind::InProgress] {
            let err = aggregate.add(review_in(user_id, book_id, state)).unwrap_err();
            assert_eq!(
                err,
                AppError::domain_validation(
                    "StateValidation",
                    "not completed state is only allowed to exist 1 at a time"
                )
            );
        }
        assert_eq!(aggregate.reviews().len(), 1);
    }

    #[test]
    fn completed_reviews_accumulate_freely() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let mut aggregate = SpecificBookUserReviews::new(user_id, book_id);

        aggregate
            .add(review_in(user_id, book_id, ReviewStateKind::InProgress))
            .unwrap();
        aggregate
            .add(review_in(user_id, book_id, ReviewStateKind::Completed))
            .unwrap();
        aggregate
            .add(review_in(user_id, book_id, ReviewStateKind::Completed))
            .unwrap();

        assert_eq!(aggregate.reviews().len(), 3);
    }

    #[test]
    fn completing_the_active_review_frees_the_slot() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let mut aggregate = SpecificBookUserReviews::new(user_id, book_id);

        let active = aggregate
            .add(review_in(user_id, book_id, ReviewStateKind::NotYet))
            .unwrap();

        let parameter = ReviewUpdateParameter {
            state: ReviewStateKind::Completed,
            completed_at: Some(completed_at()),
            content: "done".to_string(),
            is_draft: false,
        };
        let finished = active.update(&parameter).unwrap();
        aggregate.update(finished).unwrap();

        // exactly one active review again after a fresh add
        let fresh = aggregate
            .add(review_in(user_id, book_id, ReviewStateKind::NotYet))
            .unwrap();
        assert_eq!(aggregate.last_modified().unwrap().review_id(), fresh.review_id());
        assert_eq!(aggregate.reviews().len(), 2);
    }

    #[test]
    fn duplicate_review_id_is_rejected_on_add() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let mut aggregate = SpecificBookUserReviews::new(user_id, book_id);

        let review = review_in(user_id, book_id, ReviewStateKind::Completed);
        aggregate.add(review.clone()).unwrap();

        let err = aggregate.add(review).unwrap_err();
        assert!(matches!(err, AppError::DomainValidation { .. }));
    }

    #[test]
    fn update_of_unknown_review_fails() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let mut aggregate = SpecificBookUserReviews::new(user_id, book_id);

        let err = aggregate
            .update(review_in(user_id, book_id, ReviewStateKind::NotYet))
            .unwrap_err();
        assert_eq!(
            err,
            AppError::domain_validation("SpecificBookUserReviews", "update review is not exist")
        );
    }

    #[test]
    fn update_excludes_the_old_version_from_the_check() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let mut aggregate = SpecificBookUserReviews::new(user_id, book_id);

        let active = aggregate
            .add(review_in(user_id, book_id, ReviewStateKind::NotYet))
            .unwrap();

        // still active after the edit; only the old self is excluded
        let parameter = ReviewUpdateParameter {
            state: ReviewStateKind::InProgress,
            completed_at: None,
            content: "halfway".to_string(),
            is_draft: true,
        };
        let edited = active.update(&parameter).unwrap();
        assert!(aggregate.update(edited).is_ok());
    }

    #[test]
    fn foreign_review_is_rejected() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let mut aggregate = SpecificBookUserReviews::new(user_id, book_id);

        let foreign_user = review_in(Uuid::new_v4(), book_id, ReviewStateKind::NotYet);
        assert!(aggregate.add(foreign_user).is_err());

        let foreign_book = review_in(user_id, Uuid::new_v4(), ReviewStateKind::NotYet);
        assert!(aggregate.add(foreign_book).is_err());
    }
}
