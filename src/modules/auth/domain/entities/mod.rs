pub mod user;

pub use user::{User, UserHashed, UserRole};
