use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::books::domain::entities::{Book, BookWithReviews};
use crate::modules::books::domain::repositories::BookRepository;
use crate::modules::books::domain::value_objects::{Isbn13, Tags};
use crate::modules::reviews::domain::repositories::BookReviewRepository;
use crate::modules::reviews::infrastructure::InMemoryBookReviewRepository;
use crate::modules::tags::domain::entities::Tag;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
struct BookRecord {
    book: Book,
    deleted: bool,
}

/// In-memory book store. The review store is shared in so the
/// book-with-reviews queries can join against it the way the SQL
/// implementation would.
pub struct InMemoryBookRepository {
    books: DashMap<Uuid, BookRecord>,
    review_repo: Arc<InMemoryBookReviewRepository>,
}

impl InMemoryBookRepository {
    pub fn new(review_repo: Arc<InMemoryBookReviewRepository>) -> Self {
        Self {
            books: DashMap::new(),
            review_repo,
        }
    }

    fn live_book(&self, id: &Uuid) -> Option<Book> {
        self.books
            .get(id)
            .filter(|record| !record.deleted)
            .map(|record| record.book.clone())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_isbn13(&self, isbn13: &Isbn13) -> AppResult<Vec<Book>> {
        Ok(self
            .books
            .iter()
            .filter(|entry| !entry.deleted && entry.book.isbn13 == *isbn13)
            .map(|entry| entry.book.clone())
            .collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Book>> {
        Ok(self.live_book(id))
    }

    async fn create(&self, book: &Book) -> AppResult<Book> {
        self.books.insert(
            book.book_id,
            BookRecord {
                book: book.clone(),
                deleted: false,
            },
        );
        Ok(book.clone())
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        let mut record = self
            .books
            .get_mut(&book.book_id)
            .filter(|record| !record.deleted)
            .ok_or_else(|| AppError::not_found("Book", book.book_id.to_string(), "update"))?;
        record.book = book.clone();
        Ok(book.clone())
    }

    async fn update_tags(&self, book_id: &Uuid, tags: &[Tag]) -> AppResult<()> {
        let mut record = self
            .books
            .get_mut(book_id)
            .filter(|record| !record.deleted)
            .ok_or_else(|| AppError::not_found("Book", book_id.to_string(), "update_tags"))?;
        record.book.tags = Tags::new(tags.to_vec());
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut record = self
            .books
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Book", id.to_string(), "delete"))?;
        record.deleted = true;
        Ok(())
    }

    async fn find_with_reviews_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> AppResult<Vec<BookWithReviews>> {
        let reviews = self.review_repo.find_by_user_id(user_id).await?;

        let mut grouped: HashMap<Uuid, BookWithReviews> = HashMap::new();
        for review in reviews {
            let book_id = review.book_id();
            if let Some(entry) = grouped.get_mut(&book_id) {
                entry.reviews.push(review);
            } else if let Some(book) = self.live_book(&book_id) {
                grouped.insert(
                    book_id,
                    BookWithReviews {
                        book,
                        reviews: vec![review],
                    },
                );
            }
        }

        Ok(grouped.into_values().collect())
    }

    async fn find_with_latest_reviews(
        &self,
        max_count: usize,
    ) -> AppResult<Vec<BookWithReviews>> {
        let latest = self.review_repo.find_latest_modified(max_count).await?;

        // group by book while preserving recency order of first appearance
        let mut ordered_books: Vec<Uuid> = Vec::new();
        let mut grouped: HashMap<Uuid, Vec<_>> = HashMap::new();
        for review in latest {
            let book_id = review.book_id();
            if !grouped.contains_key(&book_id) {
                ordered_books.push(book_id);
            }
            grouped.entry(book_id).or_default().push(review);
        }

        let mut results = Vec::new();
        for book_id in ordered_books {
            if let Some(book) = self.live_book(&book_id) {
                if let Some(reviews) = grouped.remove(&book_id) {
                    results.push(BookWithReviews { book, reviews });
                }
            }
        }
        Ok(results)
    }
}
