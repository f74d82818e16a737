use crate::modules::auth::domain::entities::User;
use crate::modules::auth::domain::value_objects::{HashedPassword, Password};
use crate::shared::errors::AppResult;

/// Bearer token issued at login.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
        }
    }
}

/// Identity claim recovered from a presented token.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub email: String,
}

/// External crypto collaborator: password hashing and token issue/decode.
/// The core only defines the seam; real implementations live outside.
#[cfg_attr(test, mockall::automock)]
pub trait CryptService: Send + Sync {
    fn create_hash(&self, password: &Password) -> AppResult<String>;

    fn verify(&self, plain: &Password, hashed: &HashedPassword) -> bool;

    fn create_token(&self, user: &User) -> AppResult<Token>;

    fn decode_token(&self, token: &str) -> AppResult<DecodedToken>;
}
