//! In-process user store

use std::collections::HashMap;

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::Mutex;

use super::UserStore;
use crate::models::User;

/// User store kept in memory.
///
/// Lookup-and-insert happens under one lock, so concurrent registrations of
/// the same username behave like the database's unique constraint.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    users: HashMap<String, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.lock().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>> {
        Ok(self.inner.lock().await.users.get(username).cloned())
    }

    async fn insert(&self, username: &str, password_hash: &str) -> DatabaseResult<User> {
        let mut inner = self.inner.lock().await;

        if inner.users.contains_key(username) {
            return Err(DatabaseError::UniqueViolation("user_username_key".to_string()));
        }

        inner.last_id += 1;
        let user = User {
            id: inner.last_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.users.insert(user.username.clone(), user.clone());

        Ok(user)
    }

    async fn health_check(&self) -> DatabaseResult<bool> {
        Ok(true)
    }
}
