pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::BookService;
pub use domain::entities::{Book, BookWithReviews};
pub use domain::repositories::BookRepository;
pub use domain::services::BookFactory;
pub use domain::value_objects::{Author, Authors, BookTitle, Isbn13, Publisher, Tags};
