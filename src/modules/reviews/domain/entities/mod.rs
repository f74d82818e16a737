pub mod book_review;

pub use book_review::{BookReview, ReviewDetail, ReviewUpdateParameter};
