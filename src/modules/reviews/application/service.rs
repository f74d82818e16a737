use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::books::domain::repositories::BookRepository;
use crate::modules::reviews::domain::entities::{
    BookReview, ReviewDetail, ReviewUpdateParameter,
};
use crate::modules::reviews::domain::repositories::BookReviewRepository;
use crate::modules::reviews::domain::value_objects::{
    ReviewContent, ReviewState, ReviewStateKind,
};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

const MAX_LATEST_COUNT: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewStateAppModel {
    pub state: ReviewStateKind,
    pub completed_at: Option<DateTime<FixedOffset>>,
    pub last_modified_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewContentAppModel {
    pub is_draft: bool,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDetailAppModel {
    pub review_id: Uuid,
    pub state: ReviewStateAppModel,
    pub content: ReviewContentAppModel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookReviewAppModel {
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub detail: ReviewDetailAppModel,
}

impl BookReviewAppModel {
    pub fn from_domain(review: &BookReview) -> Self {
        let detail = review.detail();
        Self {
            user_id: review.user_id(),
            book_id: review.book_id(),
            detail: ReviewDetailAppModel {
                review_id: detail.review_id(),
                state: ReviewStateAppModel {
                    state: detail.state().state(),
                    completed_at: detail.state().completed_at(),
                    last_modified_at: detail.state().last_modified_at(),
                },
                content: ReviewContentAppModel {
                    is_draft: detail.content().is_draft(),
                    value: detail.content().value().to_string(),
                },
            },
        }
    }
}

/// Target state for a create/update request.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewStateUpdateAppModel {
    pub state: ReviewStateKind,
    pub completed_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDetailCreateAppModel {
    pub state: ReviewStateUpdateAppModel,
    pub content: ReviewContentAppModel,
}

impl ReviewDetailCreateAppModel {
    fn to_domain(&self) -> AppResult<ReviewDetail> {
        let state = ReviewState::new().update(self.state.state, self.state.completed_at)?;
        let content = ReviewContent::new(&self.content.value, self.content.is_draft)?;
        Ok(ReviewDetail::new(state, content))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCreateAppModel {
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub detail: ReviewDetailCreateAppModel,
}

impl ReviewCreateAppModel {
    fn to_domain(&self) -> AppResult<BookReview> {
        Ok(BookReview::new(
            self.user_id,
            self.book_id,
            self.detail.to_domain()?,
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDetailUpdateAppModel {
    pub review_id: Uuid,
    pub state: ReviewStateUpdateAppModel,
    pub content: ReviewContentAppModel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewUpdateAppModel {
    pub user_id: Uuid,
    pub detail: ReviewDetailUpdateAppModel,
}

impl ReviewUpdateAppModel {
    fn to_parameter(&self) -> ReviewUpdateParameter {
        ReviewUpdateParameter {
            state: self.detail.state.state,
            completed_at: self.detail.state.completed_at,
            content: self.detail.content.value.clone(),
            is_draft: self.detail.content.is_draft,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDeleteAppModel {
    pub review_id: Uuid,
    pub user_id: Uuid,
    pub is_admin: bool,
}

pub struct BookReviewService {
    review_repo: Arc<dyn BookReviewRepository>,
    book_repo: Arc<dyn BookRepository>,
}

const ENTITY_NAME: &str = "BookReview";

impl BookReviewService {
    pub fn new(
        review_repo: Arc<dyn BookReviewRepository>,
        book_repo: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            review_repo,
            book_repo,
        }
    }

    pub async fn find_by_review_id(&self, id: &Uuid) -> AppResult<BookReviewAppModel> {
        let review = self
            .review_repo
            .find_by_review_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY_NAME, id.to_string(), "find_by_review_id"))?;

        Ok(BookReviewAppModel::from_domain(&review))
    }

    pub async fn find_by_user_id(&self, user_id: &Uuid) -> AppResult<Vec<BookReviewAppModel>> {
        let reviews = self.review_repo.find_by_user_id(user_id).await?;
        Ok(reviews.iter().map(BookReviewAppModel::from_domain).collect())
    }

    pub async fn find_latest_modified(
        &self,
        max_count: usize,
    ) -> AppResult<Vec<BookReviewAppModel>> {
        validate_latest_count(max_count)?;

        let reviews = self.review_repo.find_latest_modified(max_count).await?;
        Ok(reviews.iter().map(BookReviewAppModel::from_domain).collect())
    }

    pub async fn create(&self, create_data: ReviewCreateAppModel) -> AppResult<BookReviewAppModel> {
        if self
            .book_repo
            .find_by_id(&create_data.book_id)
            .await?
            .is_none()
        {
            return Err(AppError::app_validation(
                "book review create",
                format!("book is not exists. book_id:{}", create_data.book_id),
            ));
        }

        let review = create_data.to_domain()?;
        let mut user_reviews = self
            .review_repo
            .find_by_user_id_and_book_id(&create_data.user_id, &create_data.book_id)
            .await?;
        let admitted = user_reviews.add(review)?;

        let created = self.review_repo.create(&admitted).await?;
        log_info!(
            "Created review {} for book {} by user {}",
            created.review_id(),
            created.book_id(),
            created.user_id()
        );
        Ok(BookReviewAppModel::from_domain(&created))
    }

    pub async fn update(&self, update_data: ReviewUpdateAppModel) -> AppResult<BookReviewAppModel> {
        let parameter = update_data.to_parameter();
        let review = self
            .review_repo
            .find_by_review_id(&update_data.detail.review_id)
            .await?
            .ok_or_else(|| {
                AppError::app_validation(
                    "book review update",
                    format!(
                        "review is not exists. review_id:{}",
                        update_data.detail.review_id
                    ),
                )
            })?;

        let updated_review = review.update(&parameter)?;
        let mut user_reviews = self
            .review_repo
            .find_by_user_id_and_book_id(&updated_review.user_id(), &updated_review.book_id())
            .await?;
        let admitted = user_reviews.update(updated_review)?;

        let updated = self.review_repo.update(&admitted).await?;
        Ok(BookReviewAppModel::from_domain(&updated))
    }

    pub async fn delete(&self, delete_info: ReviewDeleteAppModel) -> AppResult<()> {
        let review = self
            .review_repo
            .find_by_review_id(&delete_info.review_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(ENTITY_NAME, delete_info.review_id.to_string(), "delete")
            })?;

        // only the owner or an admin may remove a review
        if !delete_info.is_admin && !review.is_same_user(&delete_info.user_id) {
            return Err(AppError::invalid_auth("try to remove another user data."));
        }

        log_debug!("Deleting review {}", delete_info.review_id);
        self.review_repo.delete(&delete_info.review_id).await
    }
}

fn validate_latest_count(max_count: usize) -> AppResult<()> {
    if max_count > MAX_LATEST_COUNT {
        return Err(AppError::app_validation(
            "book review latest modified",
            format!("not allowed over 1000 count:{max_count}"),
        ));
    }
    if max_count < 1 {
        return Err(AppError::app_validation(
            "book review latest modified",
            format!("not allowed under 1 count:{max_count}"),
        ));
    }
    Ok(())
}
