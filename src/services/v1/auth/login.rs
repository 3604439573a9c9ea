use std::sync::Arc;

use actix_web::web;
use chrono::TimeDelta;
use sea_orm::DatabaseConnection;

use crate::entities::users::Model;
use crate::errors::Error;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::{Authenticated, LoginSuccess};
use crate::security::PasswordHasher;

/// Check the credentials and open a session
///
/// The request has already passed the shape check. An unknown email and a
/// wrong password both end in [`Error::WrongCredentials`] after the same
/// amount of hashing work.
#[tracing::instrument(skip_all)]
pub async fn login(
    db: &DatabaseConnection,
    hasher: Arc<PasswordHasher>,
    lifetime: TimeDelta,
    request: LoginRequest,
) -> Result<LoginSuccess, Error> {
    let credentials = request.credentials()?;

    let Some(user) = Model::find_by_email(db, &credentials.email).await? else {
        web::block(move || hasher.verify_dummy(&credentials.password)).await?;
        ::tracing::warn!("Login rejected: wrong credentials");

        return Err(Error::WrongCredentials);
    };

    if !verify(hasher.clone(), credentials.password.clone(), user.password.clone()).await? {
        ::tracing::warn!(user_id = user.id, "Login rejected: wrong credentials");

        return Err(Error::WrongCredentials);
    }

    let user = upgrade_hash(db, hasher, user, credentials.password).await;

    let roles = user.roles(db).await?;
    let token = user.issue_token(db, lifetime).await?;

    ::tracing::info!(user_id = user.id, "Login successful");

    Ok(Authenticated::new(token, user, roles).into())
}

/// Run Argon2 off the async workers
///
/// An unreadable stored hash is a mismatch. It still pays for one dummy
/// verification so it answers no faster than a wrong password.
async fn verify(hasher: Arc<PasswordHasher>, password: String, hash: String) -> Result<bool, Error> {
    let verified = web::block(move || match hasher.verify(&password, &hash) {
        Ok(verified) => verified,
        Err(e) => {
            ::tracing::warn!(error = %e, "Stored password hash is malformed");
            hasher.verify_dummy(&password)
        }
    })
    .await?;

    Ok(verified)
}

/// Re-hash with the current cost parameters when the stored hash is outdated
///
/// Best effort: the login already succeeded, so failures are only logged.
async fn upgrade_hash(
    db: &DatabaseConnection,
    hasher: Arc<PasswordHasher>,
    user: Model,
    password: String,
) -> Model {
    let stored = user.password.clone();
    let rehashed = web::block(move || match hasher.needs_rehash(&stored) {
        Ok(true) => hasher.hash(&password).map(Some),
        Ok(false) => Ok(None),
        Err(e) => Err(e),
    })
    .await;

    let hash = match rehashed {
        Ok(Ok(Some(hash))) => hash,
        Ok(Ok(None)) => return user,
        Ok(Err(e)) => {
            ::tracing::warn!(user_id = user.id, error = %e, "Failed to re-hash password");
            return user;
        }
        Err(e) => {
            ::tracing::warn!(user_id = user.id, error = %e, "Failed to re-hash password");
            return user;
        }
    };

    match user.clone().update_password(db, hash).await {
        Ok(updated) => {
            ::tracing::info!(user_id = updated.id, "Password hash upgraded to current parameters");
            updated
        }
        Err(e) => {
            ::tracing::warn!(user_id = user.id, error = %e, "Failed to store upgraded password hash");
            user
        }
    }
}
