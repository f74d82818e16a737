use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::domain::value_objects::{Email, HashedPassword, UserName};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
}

impl UserRole {
    pub fn value_of(value: &str) -> AppResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            other => Err(AppError::domain_validation(
                "UserRole",
                format!("{other} not matched type."),
            )),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Registered account. Regular users carry no roles; admins carry
/// [`UserRole::Admin`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: Uuid,
    pub name: UserName,
    pub email: Email,
    pub roles: Vec<UserRole>,
}

impl User {
    pub fn new(name: &str, email: &str, roles: Vec<UserRole>) -> AppResult<Self> {
        Ok(Self {
            user_id: Uuid::new_v4(),
            name: UserName::new(name)?,
            email: Email::new(email)?,
            roles,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&UserRole::Admin)
    }
}

/// Account plus its stored password hash, as the user repository holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserHashed {
    pub user: User,
    pub hashed_password: HashedPassword,
}

impl UserHashed {
    pub fn new(
        name: &str,
        email: &str,
        roles: Vec<UserRole>,
        hashed_password: &str,
    ) -> AppResult<Self> {
        Ok(Self {
            user: User::new(name, email, roles)?,
            hashed_password: HashedPassword::new(hashed_password)?,
        })
    }
}
