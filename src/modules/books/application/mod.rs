pub mod service;

pub use service::{
    BookAppModel, BookCreateAppModel, BookService, BookTagsUpdateAppModel,
    BookWithReviewsAppModel,
};
