//! User model and request/response payloads

use serde::{Deserialize, Serialize};

use crate::error::{AccountError, AccountResult};

/// Longest username the `user` table accepts
pub const MAX_USERNAME_LENGTH: usize = 80;

/// User entity
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// Public projection of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Body of `POST /user` and `POST /login`
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
}

/// A username and plaintext password, both present and non-empty
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> AccountResult<Self> {
        let username = username.into();
        let password = password.into();

        if username.is_empty() || password.is_empty() {
            return Err(AccountError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        // PostgreSQL text columns cannot hold NUL.
        if username.contains('\0') {
            return Err(AccountError::Validation(
                "Username must not contain NUL characters".to_string(),
            ));
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.username, self.password)
    }
}

// Never print the password.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl TryFrom<CredentialsRequest> for Credentials {
    type Error = AccountError;

    fn try_from(request: CredentialsRequest) -> AccountResult<Self> {
        match (request.username, request.password) {
            (Some(username), Some(password)) => Credentials::new(username, password),
            _ => Err(AccountError::Validation(
                "Username and password are required".to_string(),
            )),
        }
    }
}
