use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::modules::reviews::domain::value_objects::{
    ReviewContent, ReviewState, ReviewStateKind,
};
use crate::shared::errors::AppResult;

/// Input for one review update: the state transition target plus the
/// replacement content.
#[derive(Debug, Clone)]
pub struct ReviewUpdateParameter {
    pub state: ReviewStateKind,
    pub completed_at: Option<DateTime<FixedOffset>>,
    pub content: String,
    pub is_draft: bool,
}

/// One review's full mutable state as of now. "Update" produces a
/// replacement under the same review id; the caller persists it and drops
/// the old value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDetail {
    review_id: Uuid,
    state: ReviewState,
    content: ReviewContent,
}

impl ReviewDetail {
    pub fn new(state: ReviewState, content: ReviewContent) -> Self {
        Self {
            review_id: Uuid::new_v4(),
            state,
            content,
        }
    }

    pub fn with_id(review_id: Uuid, state: ReviewState, content: ReviewContent) -> Self {
        Self {
            review_id,
            state,
            content,
        }
    }

    pub fn update(&self, parameter: &ReviewUpdateParameter) -> AppResult<ReviewDetail> {
        let state = self.state.update(parameter.state, parameter.completed_at)?;
        let content = self.content.update(&parameter.content, parameter.is_draft)?;
        Ok(Self {
            review_id: self.review_id,
            state,
            content,
        })
    }

    pub fn review_id(&self) -> Uuid {
        self.review_id
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn content(&self) -> &ReviewContent {
        &self.content
    }
}

/// A review belongs to exactly one user and one book, referenced by id
/// only; neither lifecycle cascades into the other.
#[derive(Debug, Clone, PartialEq)]
pub struct BookReview {
    user_id: Uuid,
    book_id: Uuid,
    detail: ReviewDetail,
}

impl BookReview {
    pub fn new(user_id: Uuid, book_id: Uuid, detail: ReviewDetail) -> Self {
        Self {
            user_id,
            book_id,
            detail,
        }
    }

    pub fn update(&self, parameter: &ReviewUpdateParameter) -> AppResult<BookReview> {
        Ok(Self {
            user_id: self.user_id,
            book_id: self.book_id,
            detail: self.detail.update(parameter)?,
        })
    }

    pub fn is_same_user(&self, user_id: &Uuid) -> bool {
        self.user_id == *user_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn book_id(&self) -> Uuid {
        self.book_id
    }

    pub fn review_id(&self) -> Uuid {
        self.detail.review_id()
    }

    pub fn detail(&self) -> &ReviewDetail {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::shared::utils::time;

    fn some_completed_at() -> DateTime<FixedOffset> {
        time::jst().with_ymd_and_hms(2024, 6, 1, 21, 30, 0).unwrap()
    }

    fn draft_review(user_id: Uuid, book_id: Uuid) -> BookReview {
        let detail = ReviewDetail::new(
            ReviewState::new(),
            ReviewContent::new("", true).unwrap(),
        );
        BookReview::new(user_id, book_id, detail)
    }

    #[test]
    fn update_preserves_identity_and_replaces_detail() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let review = draft_review(user_id, book_id);

        let parameter = ReviewUpdateParameter {
            state: ReviewStateKind::Completed,
            completed_at: Some(some_completed_at()),
            content: "finished it in one sitting".to_string(),
            is_draft: false,
        };
        let updated = review.update(&parameter).unwrap();

        assert_eq!(updated.review_id(), review.review_id());
        assert_eq!(updated.user_id(), user_id);
        assert_eq!(updated.book_id(), book_id);
        assert!(updated.detail().state().is_completed());
        assert_eq!(updated.detail().content().value(), "finished it in one sitting");
        assert!(!updated.detail().content().is_draft());

        // the original is untouched
        assert_eq!(review.detail().state().state(), ReviewStateKind::NotYet);
        assert_eq!(review.detail().content().value(), "");
    }

    #[test]
    fn failed_transition_propagates_and_changes_nothing() {
        let review = draft_review(Uuid::new_v4(), Uuid::new_v4());
        let parameter = ReviewUpdateParameter {
            state: ReviewStateKind::Completed,
            completed_at: None,
            content: "oops".to_string(),
            is_draft: false,
        };

        assert!(review.update(&parameter).is_err());
        assert_eq!(review.detail().content().value(), "");
    }

    #[test]
    fn is_same_user_compares_owner() {
        let user_id = Uuid::new_v4();
        let review = draft_review(user_id, Uuid::new_v4());

        assert!(review.is_same_user(&user_id));
        assert!(!review.is_same_user(&Uuid::new_v4()));
    }
}
