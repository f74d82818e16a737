pub mod service;

pub use service::{
    BookReviewAppModel, BookReviewService, ReviewContentAppModel, ReviewCreateAppModel,
    ReviewDeleteAppModel, ReviewDetailAppModel, ReviewDetailCreateAppModel,
    ReviewDetailUpdateAppModel, ReviewStateAppModel, ReviewStateUpdateAppModel,
    ReviewUpdateAppModel,
};
