use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Longest accepted session token lifetime (one year)
const MAX_TOKEN_EXPIRATION: u64 = 365 * 24 * 60 * 60;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token expiration time in seconds
    #[serde(default = "default_token_expiration")]
    pub token_expiration: u64,
    /// Argon2 configuration
    #[serde(default = "Argon2Config::default")]
    pub argon2: Argon2Config,
}

/// Argon2 password hashing configuration
///
/// These values are the hash cost factor. They are read once at start-up and
/// handed to the hasher, never looked up from the process environment later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KB (64MB = 65536 KB)
    #[serde(default = "default_argon2_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations)
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    /// Parallelism (number of lanes)
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    /// Hash length in bytes
    #[serde(default = "default_argon2_hash_length")]
    pub hash_length: u32,
}

fn default_token_expiration() -> u64 {
    3600 // 1 hour
}

fn default_argon2_memory_cost() -> u32 {
    65536 // 64 MB
}

fn default_argon2_time_cost() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_argon2_hash_length() -> u32 {
    32
}

impl AuthConfig {
    /// Lifetime of a freshly issued session token
    pub fn token_lifetime(&self) -> TimeDelta {
        TimeDelta::seconds(self.token_expiration.min(MAX_TOKEN_EXPIRATION) as i64)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_expiration: default_token_expiration(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: default_argon2_memory_cost(),
            time_cost: default_argon2_time_cost(),
            parallelism: default_argon2_parallelism(),
            hash_length: default_argon2_hash_length(),
        }
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.token_expiration == 0 {
            return Err(ConfigError::ValidationError(
                "auth.token_expiration must be > 0".to_string(),
            ));
        }
        if self.token_expiration > MAX_TOKEN_EXPIRATION {
            return Err(ConfigError::ValidationError(format!(
                "auth.token_expiration must be <= {}",
                MAX_TOKEN_EXPIRATION
            )));
        }
        self.argon2.validate()?;
        Ok(())
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_cost == 0 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.memory_cost must be > 0".to_string(),
            ));
        }
        if self.time_cost == 0 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.time_cost must be > 0".to_string(),
            ));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.parallelism must be > 0".to_string(),
            ));
        }
        if self.hash_length < 4 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.hash_length must be >= 4".to_string(),
            ));
        }
        // Argon2 requires at least 8 KiB of memory per lane.
        if self.memory_cost < 8 * self.parallelism {
            return Err(ConfigError::ValidationError(
                "auth.argon2.memory_cost must be >= 8 * parallelism".to_string(),
            ));
        }
        Ok(())
    }
}
