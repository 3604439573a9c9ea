use actix_web::Responder;
use actix_web::web::{Data, Json};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::config::AuthConfig;
use crate::errors::Error;
use crate::metrics::{AppMetrics, LoginOutcome};
use crate::requests::v1::auth::LoginRequest;
use crate::responses::Failure;
use crate::responses::v1::auth::LoginSuccess;
use crate::security::PasswordHasher;
use crate::services;

/// Create a new session
///
/// Fail if:
/// - the body has any key besides `email` and `password` (`Validation Failed`)
/// - email or password is missing or empty
/// - the email is unknown or the password is incorrect (same response)
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        LoginSuccess,
        (status = 400, description = "Validation Failed, missing fields or wrong credentials", body = Failure),
        (status = 500, description = "Internal Server Error", body = Failure),
    )
)]
#[post("/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    config: Data<AuthConfig>,
    metrics: Data<AppMetrics>,
    Json(body): Json<Value>,
) -> Result<impl Responder, Error> {
    let response = match LoginRequest::try_from(body) {
        Ok(request) => {
            services::v1::auth::login::login(
                &db,
                hasher.into_inner(),
                config.token_lifetime(),
                request,
            )
            .await
        }
        Err(e) => Err(e),
    };

    metrics.record_login_attempt(LoginOutcome::from(&response));

    response
}
