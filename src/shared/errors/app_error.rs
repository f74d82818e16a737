use serde::Serialize;
use thiserror::Error;

/// Error taxonomy for the whole backend core.
///
/// Domain and application validation failures are raised on the first
/// violated rule and cross the service boundary unchanged; translation to
/// a wire-level status code happens outside this crate.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Input validation error. Name:{name}, Details:{detail}")]
    DomainValidation { name: String, detail: String },

    #[error("Input validation error. Name:{name}, Details:{detail}")]
    AppValidation { name: String, detail: String },

    #[error("Data not found. Entity:{entity}, ID:{id}, Details:{detail}")]
    NotFound {
        entity: String,
        id: String,
        detail: String,
    },

    #[error("Duplicate item exists. entity:{entity}, name:{param_name}, value:{param_value}")]
    Duplicate {
        entity: String,
        param_name: String,
        param_value: String,
    },

    #[error("Failed to auth. may wrong email or password")]
    AuthFailed {
        // internal diagnostics, never serialized to clients
        #[serde(skip)]
        detail: String,
    },

    #[error("Incorrect credentials or expired")]
    AuthCredentials {
        #[serde(skip)]
        detail: String,
    },

    #[error("Invalid authorization information.")]
    InvalidAuth {
        #[serde(skip)]
        detail: String,
    },

    #[error("Role permission is denied. {required_role} role is needed.")]
    RolePermission { required_role: String },
}

impl AppError {
    pub fn domain_validation(name: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::DomainValidation {
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn app_validation(name: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::AppValidation {
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(
        entity: impl Into<String>,
        id: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        AppError::NotFound {
            entity: entity.into(),
            id: id.into(),
            detail: detail.into(),
        }
    }

    pub fn duplicate(
        entity: impl Into<String>,
        param_name: impl Into<String>,
        param_value: impl Into<String>,
    ) -> Self {
        AppError::Duplicate {
            entity: entity.into(),
            param_name: param_name.into(),
            param_value: param_value.into(),
        }
    }

    pub fn auth_failed(detail: impl Into<String>) -> Self {
        AppError::AuthFailed {
            detail: detail.into(),
        }
    }

    pub fn auth_credentials(detail: impl Into<String>) -> Self {
        AppError::AuthCredentials {
            detail: detail.into(),
        }
    }

    pub fn invalid_auth(detail: impl Into<String>) -> Self {
        AppError::InvalidAuth {
            detail: detail.into(),
        }
    }

    pub fn role_permission(required_role: impl Into<String>) -> Self {
        AppError::RolePermission {
            required_role: required_role.into(),
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
