pub mod crypt_service;

pub use crypt_service::{CryptService, DecodedToken, Token};

#[cfg(test)]
pub use crypt_service::MockCryptService;
