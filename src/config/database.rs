use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Database configuration (connection pool, migrations, demo data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `sqlite://gatehouse.db?mode=rwc` or `postgres://...`
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Apply pending migrations at start-up
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    /// Insert the demo roles and users at start-up
    #[serde(default)]
    pub seed: bool,
    /// Plain password given to every demo user
    #[serde(default = "default_seed_password")]
    pub seed_password: String,
}

fn default_url() -> String {
    "sqlite://gatehouse.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    8
}

fn default_run_migrations() -> bool {
    true
}

fn default_seed_password() -> String {
    "123".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            run_migrations: default_run_migrations(),
            seed: false,
            seed_password: default_seed_password(),
        }
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError("database.url cannot be empty".to_string()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be > 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError(
                "database.min_connections must be <= database.max_connections".to_string(),
            ));
        }
        if self.connect_timeout == 0 {
            return Err(ConfigError::ValidationError(
                "database.connect_timeout must be > 0".to_string(),
            ));
        }
        if self.seed && self.seed_password.is_empty() {
            return Err(ConfigError::ValidationError(
                "database.seed_password cannot be empty when seeding".to_string(),
            ));
        }
        Ok(())
    }
}
