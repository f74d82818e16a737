use async_trait::async_trait;

use crate::modules::auth::domain::entities::UserHashed;
use crate::modules::auth::domain::value_objects::Email;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<UserHashed>>;

    async fn create(&self, user: &UserHashed) -> AppResult<UserHashed>;
}
