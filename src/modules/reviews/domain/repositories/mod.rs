pub mod review_repository;

pub use review_repository::BookReviewRepository;
