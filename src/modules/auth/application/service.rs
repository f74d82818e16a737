use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::auth::domain::entities::{UserHashed, UserRole};
use crate::modules::auth::domain::repositories::UserRepository;
use crate::modules::auth::domain::services::CryptService;
use crate::modules::auth::domain::value_objects::{Email, Password};
use crate::shared::errors::{AppError, AppResult};
use crate::log_info;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequestAppModel {
    pub email: String,
    pub password: String,
}

/// The authenticated identity handed to the other services for ownership
/// and role checks.
#[derive(Debug, Clone, Serialize)]
pub struct TokenUserAppModel {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub roles: Vec<UserRole>,
}

impl TokenUserAppModel {
    fn from_domain(user: &UserHashed) -> Self {
        Self {
            user_id: user.user.user_id,
            name: user.user.name.value().to_string(),
            email: user.user.email.value().to_string(),
            roles: user.user.roles.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&UserRole::Admin)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenAppModel {
    pub access_token: String,
    pub token_type: String,
    pub user: TokenUserAppModel,
}

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    crypt: Arc<dyn CryptService>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, crypt: Arc<dyn CryptService>) -> Self {
        Self { user_repo, crypt }
    }

    /// Exchanges credentials for a bearer token. Unknown email and wrong
    /// password are indistinguishable to the caller.
    pub async fn login(&self, req: LoginRequestAppModel) -> AppResult<TokenAppModel> {
        let email = Email::new(&req.email)?;
        let password = Password::new(&req.password)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::auth_failed(format!("user not exists. email:{}", req.email)))?;

        if !self.crypt.verify(&password, &user.hashed_password) {
            return Err(AppError::auth_failed(format!(
                "password invalid. email:{}",
                req.email
            )));
        }

        let token = self.crypt.create_token(&user.user)?;
        log_info!("User {} logged in", user.user.user_id);
        Ok(TokenAppModel {
            access_token: token.access_token,
            token_type: token.token_type,
            user: TokenUserAppModel::from_domain(&user),
        })
    }

    /// Resolves a presented token back to its account.
    pub async fn current_user(&self, token: &str) -> AppResult<TokenUserAppModel> {
        let decoded = self.crypt.decode_token(token)?;
        let email = Email::new(&decoded.email)?;
        let user = self.user_repo.find_by_email(&email).await?.ok_or_else(|| {
            AppError::auth_credentials(format!("user not exists from db. email:{}", decoded.email))
        })?;

        Ok(TokenUserAppModel::from_domain(&user))
    }

    /// Like [`AuthService::current_user`] but requires the admin role.
    pub async fn admin_user(&self, token: &str) -> AppResult<TokenUserAppModel> {
        let user = self.current_user(token).await?;
        if !user.is_admin() {
            return Err(AppError::role_permission(UserRole::Admin.to_string()));
        }
        Ok(user)
    }
}
