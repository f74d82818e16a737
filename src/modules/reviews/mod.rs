pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::BookReviewService;
pub use domain::aggregates::{SpecificBookUserReviews, StateValidation};
pub use domain::entities::{BookReview, ReviewDetail, ReviewUpdateParameter};
pub use domain::repositories::BookReviewRepository;
pub use domain::value_objects::{ReviewContent, ReviewState, ReviewStateKind};
