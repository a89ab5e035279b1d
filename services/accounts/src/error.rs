//! Custom error types for the accounts service

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::hashing::HashingError;

/// Custom error type for account operations
#[derive(Error, Debug)]
pub enum AccountError {
    /// A required field is missing or invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// The username is already registered
    #[error("Username already exists")]
    DuplicateUser,

    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    AuthenticationFailed,

    /// The user store could not be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] DatabaseError),

    /// Password hashing failed
    #[error("Hashing error: {0}")]
    Hashing(#[from] HashingError),
}

impl From<JsonRejection> for AccountError {
    fn from(rejection: JsonRejection) -> Self {
        AccountError::Validation(rejection.body_text())
    }
}

impl AccountError {
    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::DuplicateUser => StatusCode::CONFLICT,
            AccountError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            AccountError::StoreUnavailable(_) | AccountError::Hashing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AccountError::Validation(msg) => msg.clone(),
            AccountError::DuplicateUser | AccountError::AuthenticationFailed => self.to_string(),
            AccountError::StoreUnavailable(e) => {
                error!("User store error: {}", e);
                "Internal server error".to_string()
            }
            AccountError::Hashing(e) => {
                error!("Password hashing error: {}", e);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for account results
pub type AccountResult<T> = Result<T, AccountError>;
