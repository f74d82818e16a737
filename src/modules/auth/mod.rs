pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::AuthService;
pub use domain::entities::{User, UserHashed, UserRole};
pub use domain::repositories::UserRepository;
pub use domain::services::{CryptService, DecodedToken, Token};
pub use domain::value_objects::{Email, HashedPassword, Password, UserName};
