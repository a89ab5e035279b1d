//! User store boundary
//!
//! The account service only sees the [`UserStore`] trait; PostgreSQL backs it
//! in production and [`MemoryUserStore`] in tests.

use async_trait::async_trait;
use common::error::DatabaseResult;

use crate::models::User;

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Persistence operations over the `user` table
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by username. A missing user is `Ok(None)`.
    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>>;

    /// Insert a new user.
    ///
    /// Fails with [`DatabaseError::UniqueViolation`](common::error::DatabaseError::UniqueViolation)
    /// when the username is taken.
    async fn insert(&self, username: &str, password_hash: &str) -> DatabaseResult<User>;

    /// Check that the store is reachable
    async fn health_check(&self) -> DatabaseResult<bool>;
}
