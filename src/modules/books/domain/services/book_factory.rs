use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::books::domain::entities::Book;
use crate::modules::books::domain::repositories::BookRepository;
use crate::modules::books::domain::value_objects::{
    Author, Authors, BookTitle, Isbn13, Publisher, Tags,
};
use crate::shared::errors::{AppError, AppResult};

/// Builds new books and guards against cataloguing the same edition twice.
pub struct BookFactory {
    book_repo: Arc<dyn BookRepository>,
}

impl BookFactory {
    pub fn new(book_repo: Arc<dyn BookRepository>) -> Self {
        Self { book_repo }
    }

    /// Validates all attributes, assembles a tagless book, and rejects it
    /// when a same-ISBN book from the same year already exists. The result
    /// is not yet persisted.
    pub async fn create_new_book(
        &self,
        isbn13: &str,
        title: &str,
        publisher: &str,
        authors: &[String],
        published_at: NaiveDate,
    ) -> AppResult<Book> {
        let isbn13 = Isbn13::new(isbn13)?;
        let title = BookTitle::new(title)?;
        let publisher = Publisher::new(publisher)?;
        let authors = Authors::new(
            authors
                .iter()
                .map(Author::new)
                .collect::<AppResult<Vec<_>>>()?,
        )?;

        let book = Book::new(isbn13, title, publisher, authors, published_at, Tags::empty());

        if self.same_book_exists(&book).await? {
            return Err(AppError::domain_validation(
                "book",
                format!(
                    "same book is already existed. isbn13:{}, published_at:{}",
                    book.isbn13.value(),
                    book.published_at
                ),
            ));
        }

        Ok(book)
    }

    async fn same_book_exists(&self, candidate: &Book) -> AppResult<bool> {
        let same_isbn_books = self.book_repo.find_by_isbn13(&candidate.isbn13).await?;
        Ok(same_isbn_books
            .iter()
            .any(|book| book.is_same_edition(candidate)))
    }
}
