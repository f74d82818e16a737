use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::modules::books::domain::value_objects::{
    Authors, BookTitle, Isbn13, Publisher, Tags,
};
use crate::modules::reviews::domain::entities::BookReview;

/// Catalogued book edition. Identity is the generated id; the domain's
/// duplicate rule is separate and year-granular (see
/// [`Book::is_same_edition`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub book_id: Uuid,
    pub isbn13: Isbn13,
    pub title: BookTitle,
    pub publisher: Publisher,
    pub authors: Authors,
    pub published_at: NaiveDate,
    pub tags: Tags,
}

impl Book {
    pub fn new(
        isbn13: Isbn13,
        title: BookTitle,
        publisher: Publisher,
        authors: Authors,
        published_at: NaiveDate,
        tags: Tags,
    ) -> Self {
        Self {
            book_id: Uuid::new_v4(),
            isbn13,
            title,
            publisher,
            authors,
            published_at,
            tags,
        }
    }

    /// Rehydrates a persisted book under its original id.
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        book_id: Uuid,
        isbn13: Isbn13,
        title: BookTitle,
        publisher: Publisher,
        authors: Authors,
        published_at: NaiveDate,
        tags: Tags,
    ) -> Self {
        Self {
            book_id,
            isbn13,
            title,
            publisher,
            authors,
            published_at,
            tags,
        }
    }

    /// Same ISBN published in the same year counts as the same book:
    /// re-editions in different years are distinct, same-year reprints are
    /// duplicates.
    pub fn is_same_edition(&self, other: &Book) -> bool {
        self.isbn13 == other.isbn13 && self.published_at.year() == other.published_at.year()
    }
}

/// Read model pairing a book with the reviews attached to it.
#[derive(Debug, Clone)]
pub struct BookWithReviews {
    pub book: Book,
    pub reviews: Vec<BookReview>,
}
