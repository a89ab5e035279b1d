//! User account service
//!
//! Registers users with Argon2-hashed passwords and verifies their
//! credentials over two JSON endpoints, `POST /user` and `POST /login`.

pub mod config;
pub mod error;
pub mod hashing;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{AccountError, AccountResult};
pub use hashing::{HashingConfig, PasswordHasher};
pub use repositories::{MemoryUserStore, PgUserStore, UserStore};
pub use routes::create_router;
pub use service::AccountService;
pub use state::AppState;
