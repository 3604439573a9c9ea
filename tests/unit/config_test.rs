//! Unit tests for configuration loading
//!
//! Every test touching the process environment runs under `#[serial]`.

use gatehouse::config::*;
use serial_test::serial;
use std::env;

mod utils {
    /// Remove every variable carrying the GATEHOUSE prefix
    pub fn clean_env_vars() {
        let keys: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(gatehouse::config::app::ENV_PREFIX))
            .map(|(k, _)| k)
            .collect();

        for key in keys {
            unsafe { std::env::remove_var(&key) };
        }

        unsafe { std::env::remove_var("APP_ENV") };
    }
}

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
#[serial]
fn test_load_default_config_success() {
    utils::clean_env_vars();

    let config = load();
    assert!(config.is_ok(), "Failed to load default configuration: {:?}", config.err());

    let config = config.unwrap();

    assert_eq!(config.app.name, "gatehouse");
    assert_eq!(config.app.environment, "development");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.workers, 0);

    assert!(config.database.run_migrations);
    assert!(!config.database.seed);
    assert_eq!(config.database.seed_password, "123");

    assert_eq!(config.auth.token_expiration, 3600);
    assert_eq!(config.auth.argon2.memory_cost, 65536);
    assert_eq!(config.auth.argon2.time_cost, 3);
    assert_eq!(config.auth.argon2.parallelism, 4);
    assert_eq!(config.auth.argon2.hash_length, 32);

    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.log_format, LogFormat::Pretty);
    assert!(config.api.swagger_enabled);
}

#[test]
fn test_struct_defaults_are_valid() {
    assert!(AppConfig::default().validate().is_ok());
}

// =============================================================================
// ENVIRONMENT OVERRIDES
// =============================================================================

#[test]
#[serial]
fn test_env_var_overrides_server_port() {
    utils::clean_env_vars();
    unsafe { env::set_var("GATEHOUSE__SERVER__PORT", "9090") };

    let config = load();
    utils::clean_env_vars();

    assert_eq!(config.unwrap().server.port, 9090);
}

#[test]
#[serial]
fn test_env_var_overrides_nested_argon2_params() {
    utils::clean_env_vars();
    unsafe {
        env::set_var("GATEHOUSE__AUTH__ARGON2__TIME_COST", "1");
        env::set_var("GATEHOUSE__AUTH__ARGON2__PARALLELISM", "1");
        env::set_var("GATEHOUSE__AUTH__TOKEN_EXPIRATION", "60");
    };

    let config = load();
    utils::clean_env_vars();

    let config = config.unwrap();
    assert_eq!(config.auth.argon2.time_cost, 1);
    assert_eq!(config.auth.argon2.parallelism, 1);
    assert_eq!(config.auth.argon2.memory_cost, 65536);
    assert_eq!(config.auth.token_lifetime().num_seconds(), 60);
}

#[test]
#[serial]
fn test_env_var_enables_seeding_and_json_logs() {
    utils::clean_env_vars();
    unsafe {
        env::set_var("GATEHOUSE__DATABASE__SEED", "true");
        env::set_var("GATEHOUSE__OBSERVABILITY__LOG_FORMAT", "json");
    };

    let config = load();
    utils::clean_env_vars();

    let config = config.unwrap();
    assert!(config.database.seed);
    assert_eq!(config.observability.log_format, LogFormat::Json);
}

#[test]
#[serial]
fn test_missing_environment_file_is_ignored() {
    utils::clean_env_vars();
    unsafe { env::set_var("APP_ENV", "nonexistent") };

    let config = load();
    utils::clean_env_vars();

    assert_eq!(config.unwrap().server.port, 8080);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
#[serial]
fn test_zero_token_expiration_is_rejected() {
    utils::clean_env_vars();
    unsafe { env::set_var("GATEHOUSE__AUTH__TOKEN_EXPIRATION", "0") };

    let config = load();
    utils::clean_env_vars();

    match config {
        Err(ConfigError::ValidationError(message)) => {
            assert!(message.contains("token_expiration"), "unexpected message: {}", message)
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_invalid_port_type_is_a_load_error() {
    utils::clean_env_vars();
    unsafe { env::set_var("GATEHOUSE__SERVER__PORT", "not-a-port") };

    let config = load();
    utils::clean_env_vars();

    assert!(matches!(config, Err(ConfigError::Load(_))));
}

#[test]
fn test_argon2_memory_must_cover_every_lane() {
    let mut config = AuthConfig::default();
    config.argon2.parallelism = 4;
    config.argon2.memory_cost = 16;

    assert!(config.validate().is_err());

    config.argon2.memory_cost = 32;
    assert!(config.validate().is_ok());
}

#[test]
fn test_min_connections_cannot_exceed_max() {
    let config = DatabaseConfig {
        min_connections: 5,
        max_connections: 2,
        ..Default::default()
    };

    assert!(config.validate().is_err());
}
