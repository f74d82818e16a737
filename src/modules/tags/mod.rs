pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::TagService;
pub use domain::entities::Tag;
pub use domain::repositories::TagRepository;
pub use domain::services::TagDomainService;
