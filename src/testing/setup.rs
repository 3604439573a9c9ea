use gatehouse_migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::config::auth::{Argon2Config, AuthConfig};
use crate::database;
use crate::entities::users;
use crate::errors::Error;
use crate::security::PasswordHasher;

/// Returns an in-memory SQLite database with all migrations applied
///
/// # Panics
/// Panics if the connection or a migration fails; tests should stop at a
/// broken setup.
pub async fn database() -> DatabaseConnection {
    let db = database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Argon2 parameters cheap enough for tests
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        token_expiration: 3600,
        argon2: Argon2Config {
            memory_cost: 19456, // 19 MB (reduced from 64 MB)
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        },
    }
}

pub fn password_hasher() -> Result<PasswordHasher, argon2::password_hash::Error> {
    PasswordHasher::from_config(&auth_config())
}

/// Insert a user whose password is hashed with `hasher`
pub async fn create_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
) -> Result<users::Model, Error> {
    let user = users::ActiveModel {
        name: Set("Test User".to_string()),
        email: Set(email.to_string()),
        password: Set(hasher.hash(password)?),
        mobile: Set(Some("8758566854".to_string())),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
