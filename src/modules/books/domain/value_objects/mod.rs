pub mod attributes;
pub mod isbn13;

pub use attributes::{Author, Authors, BookTitle, Publisher, Tags};
pub use isbn13::Isbn13;
