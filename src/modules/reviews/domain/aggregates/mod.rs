pub mod specific_book_user_reviews;

pub use specific_book_user_reviews::{SpecificBookUserReviews, StateValidation};
