//! Service configuration loaded from the environment

use ::config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::hashing::HashingConfig;

/// Address the HTTP server binds to when `BIND_ADDRESS` is not set
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Accounts service configuration
///
/// # Environment Variables
/// - `BIND_ADDRESS`: listen address (default: `0.0.0.0:3000`)
/// - `HASH_MEMORY_COST`: Argon2 memory cost in KiB (default: 19456)
/// - `HASH_TIME_COST`: Argon2 iterations (default: 2)
/// - `HASH_PARALLELISM`: Argon2 lanes (default: 1)
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub hash_memory_cost: u32,
    pub hash_time_cost: u32,
    pub hash_parallelism: u32,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = HashingConfig::default();

        Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("hash_memory_cost", i64::from(defaults.memory_cost))?
            .set_default("hash_time_cost", i64::from(defaults.time_cost))?
            .set_default("hash_parallelism", i64::from(defaults.parallelism))?
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Work factor for the password hasher
    pub fn hashing(&self) -> HashingConfig {
        HashingConfig {
            memory_cost: self.hash_memory_cost,
            time_cost: self.hash_time_cost,
            parallelism: self.hash_parallelism,
        }
    }
}
