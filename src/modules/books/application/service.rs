use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::books::domain::entities::{Book, BookWithReviews};
use crate::modules::books::domain::repositories::BookRepository;
use crate::modules::books::domain::services::BookFactory;
use crate::modules::books::domain::value_objects::Isbn13;
use crate::modules::reviews::application::service::BookReviewAppModel;
use crate::modules::tags::application::service::TagAppModel;
use crate::modules::tags::domain::repositories::TagRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::log_info;

const MAX_LATEST_COUNT: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppModel {
    pub book_id: Uuid,
    pub isbn13: String,
    pub title: String,
    pub publisher: String,
    pub authors: Vec<String>,
    pub published_at: NaiveDate,
    pub tags: Vec<TagAppModel>,
}

impl BookAppModel {
    pub fn from_domain(book: &Book) -> Self {
        Self {
            book_id: book.book_id,
            isbn13: book.isbn13.value().to_string(),
            title: book.title.value().to_string(),
            publisher: book.publisher.value().to_string(),
            authors: book
                .authors
                .values()
                .iter()
                .map(|author| author.value().to_string())
                .collect(),
            published_at: book.published_at,
            tags: book.tags.values().iter().map(TagAppModel::from_domain).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookWithReviewsAppModel {
    pub book: BookAppModel,
    pub reviews: Vec<BookReviewAppModel>,
}

impl BookWithReviewsAppModel {
    fn from_domain(entry: &BookWithReviews) -> Self {
        Self {
            book: BookAppModel::from_domain(&entry.book),
            reviews: entry
                .reviews
                .iter()
                .map(BookReviewAppModel::from_domain)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookCreateAppModel {
    pub isbn13: String,
    pub title: String,
    pub publisher: String,
    pub authors: Vec<String>,
    pub published_at: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookTagsUpdateAppModel {
    pub book_id: Uuid,
    pub tag_ids: Vec<Uuid>,
}

pub struct BookService {
    book_repo: Arc<dyn BookRepository>,
    tag_repo: Arc<dyn TagRepository>,
    factory: BookFactory,
}

const ENTITY_NAME: &str = "Book";

impl BookService {
    pub fn new(book_repo: Arc<dyn BookRepository>, tag_repo: Arc<dyn TagRepository>) -> Self {
        let factory = BookFactory::new(Arc::clone(&book_repo));
        Self {
            book_repo,
            tag_repo,
            factory,
        }
    }

    /// Every live edition catalogued under the ISBN; not-found when none.
    pub async fn list_by_isbn13(&self, isbn13: &str) -> AppResult<Vec<BookAppModel>> {
        let isbn13 = Isbn13::new(isbn13)?;
        let books = self.book_repo.find_by_isbn13(&isbn13).await?;
        if books.is_empty() {
            return Err(AppError::not_found(
                ENTITY_NAME,
                isbn13.value(),
                "list_by_isbn13",
            ));
        }

        Ok(books.iter().map(BookAppModel::from_domain).collect())
    }

    pub async fn find_by_book_id(&self, book_id: &Uuid) -> AppResult<BookAppModel> {
        let book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY_NAME, book_id.to_string(), "find_by_book_id"))?;

        Ok(BookAppModel::from_domain(&book))
    }

    /// Empty result is fine here; a user without reviews is not an error.
    pub async fn list_with_reviews_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> AppResult<Vec<BookWithReviewsAppModel>> {
        let entries = self.book_repo.find_with_reviews_by_user_id(user_id).await?;
        Ok(entries
            .iter()
            .map(BookWithReviewsAppModel::from_domain)
            .collect())
    }

    pub async fn list_with_latest_reviews(
        &self,
        max_count: usize,
    ) -> AppResult<Vec<BookWithReviewsAppModel>> {
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

        let entries = self.book_repo.find_with_latest_reviews(max_count).await?;
        Ok(entries
            .iter()
            .map(BookWithReviewsAppModel::from_domain)
            .collect())
    }

    pub async fn create(&self, model: BookCreateAppModel) -> AppResult<BookAppModel> {
        let book = self
            .factory
            .create_new_book(
                &model.isbn13,
                &model.title,
                &model.publisher,
                &model.authors,
                model.published_at,
            )
            .await?;

        let created = self.book_repo.create(&book).await?;
        log_info!("Catalogued book {} ({})", created.title.value(), created.book_id);
        Ok(BookAppModel::from_domain(&created))
    }

    /// Full-replacement tag update: the given set becomes the book's tag
    /// association, and an empty list clears all tags.
    pub async fn update_tags(&self, model: BookTagsUpdateAppModel) -> AppResult<()> {
        let current = self
            .book_repo
            .find_by_id(&model.book_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(ENTITY_NAME, model.book_id.to_string(), "update_tags")
            })?;

        let mut tags = Vec::new();
        if !model.tag_ids.is_empty() {
            tags = self.tag_repo.find_by_ids(&model.tag_ids).await?;
            if tags.len() != model.tag_ids.len() {
                return Err(AppError::not_found(
                    ENTITY_NAME,
                    model.book_id.to_string(),
                    "update_tags",
                ));
            }
        }

        self.book_repo.update_tags(&current.book_id, &tags).await
    }
}
