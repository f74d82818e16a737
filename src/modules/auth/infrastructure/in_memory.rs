use dashmap::DashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::domain::entities::UserHashed;
use crate::modules::auth::domain::repositories::UserRepository;
use crate::modules::auth::domain::value_objects::Email;
use crate::shared::errors::{AppError, AppResult};

/// In-memory user store; email acts as the natural key.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, UserHashed>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<UserHashed>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.user.email == *email)
            .map(|entry| entry.clone()))
    }

    async fn create(&self, user: &UserHashed) -> AppResult<UserHashed> {
        if self.find_by_email(&user.user.email).await?.is_some() {
            return Err(AppError::duplicate(
                "User",
                "Email",
                user.user.email.value(),
            ));
        }
        self.users.insert(user.user.user_id, user.clone());
        Ok(user.clone())
    }
}
