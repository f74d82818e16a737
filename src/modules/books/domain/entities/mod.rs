pub mod book;

pub use book::{Book, BookWithReviews};
