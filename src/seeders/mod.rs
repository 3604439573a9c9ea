//! Demo data: six user accounts sharing one password and two roles.

pub mod roles;
pub mod users;

use sea_orm::DatabaseConnection;

use crate::errors::Error;
use crate::security::PasswordHasher;

/// Replace the demo roles and users with a fresh copy
///
/// Role assignments go first and come back last because `users_roles` has
/// no cascading deletes.
#[tracing::instrument(skip_all)]
pub async fn up(db: &DatabaseConnection, hasher: &PasswordHasher, password: &str) -> Result<(), Error> {
    roles::down(db).await?;
    users::up(db, hasher, password).await?;
    roles::up(db).await?;

    ::tracing::info!(users = users::DEMO_USERS.len(), roles = roles::DEMO_ROLES.len(), "Demo data seeded");

    Ok(())
}

#[tracing::instrument(skip_all)]
pub async fn down(db: &DatabaseConnection) -> Result<(), Error> {
    roles::down(db).await?;
    users::down(db).await?;

    Ok(())
}
