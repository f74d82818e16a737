pub mod book_factory;

pub use book_factory::BookFactory;
