pub mod auth;
pub mod books;
pub mod reviews;
pub mod tags;
