//! Database connection setup

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Open the connection pool described by `config`
#[tracing::instrument(skip(config), fields(
    max_connections = config.max_connections,
    min_connections = config.min_connections
))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let options = ConnectOptions::new(config.url.clone())
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(false)
        .to_owned();

    let db = Database::connect(options).await?;

    ::tracing::info!(backend = ?db.get_database_backend(), "Database connected");

    Ok(db)
}

/// Private in-memory SQLite database
///
/// The pool is pinned to one connection; every SQLite `:memory:` connection
/// is a separate database.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let options = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();

    Database::connect(options).await
}
