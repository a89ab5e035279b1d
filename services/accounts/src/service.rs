//! Account registration and credential verification

use std::sync::Arc;

use common::error::DatabaseError;
use tracing::{info, warn};

use crate::{
    error::{AccountError, AccountResult},
    hashing::{HashingError, PasswordHasher},
    models::{Credentials, MAX_USERNAME_LENGTH, UserResponse},
    repositories::UserStore,
};

/// Registers users and verifies their credentials
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Create a user with a hashed password.
    ///
    /// Returns the public projection of the new user, or
    /// [`AccountError::DuplicateUser`] if the username is taken.
    pub async fn register(&self, credentials: Credentials) -> AccountResult<UserResponse> {
        let (username, password) = credentials.into_parts();

        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(AccountError::Validation(format!(
                "Username must be at most {} characters long",
                MAX_USERNAME_LENGTH
            )));
        }

        let password_hash = self.hash_password(password).await?;

        let user = self
            .store
            .insert(&username, &password_hash)
            .await
            .map_err(|e| match e {
                DatabaseError::UniqueViolation(_) => {
                    info!("Registration rejected, username taken: {}", username);
                    AccountError::DuplicateUser
                }
                other => AccountError::StoreUnavailable(other),
            })?;

        info!("Registered user {} with id {}", user.username, user.id);
        Ok(UserResponse::from(user))
    }

    /// Check a username/password pair.
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn authenticate(&self, credentials: Credentials) -> AccountResult<()> {
        let (username, password) = credentials.into_parts();

        let user = self.store.find_by_username(&username).await?;

        let verified = match user {
            Some(user) => self.verify_password(password, user.password_hash).await?,
            None => {
                // Spend the same hashing time as a real check.
                self.hash_password(password).await?;
                false
            }
        };

        if !verified {
            warn!("Failed login attempt for user: {}", username);
            return Err(AccountError::AuthenticationFailed);
        }

        info!("User logged in: {}", username);
        Ok(())
    }

    async fn hash_password(&self, password: String) -> AccountResult<String> {
        let hasher = self.hasher.clone();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| HashingError::Task(e.to_string()))??;

        Ok(hash)
    }

    async fn verify_password(&self, password: String, hash: String) -> AccountResult<bool> {
        let hasher = self.hasher.clone();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| HashingError::Task(e.to_string()))?;

        Ok(verified)
    }

    /// Check that the user store is reachable
    pub async fn health_check(&self) -> AccountResult<bool> {
        Ok(self.store.health_check().await?)
    }
}
