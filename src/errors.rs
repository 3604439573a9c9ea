use actix_web::error::{BlockingError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

use crate::messages;
use crate::metrics::{AppMetrics, LoginOutcome};
use crate::responses::Failure;

/// Every way a request can fail
///
/// The first three variants are client errors and carry a fixed message.
/// The rest are infrastructure failures; their details are logged and the
/// caller only ever sees `Internal Server Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// Body is not a JSON object made only of the accepted keys
    #[error("{}", messages::VALIDATION_FAILED)]
    Validation,

    /// A required field is absent or empty
    #[error("{}", messages::ENTER_NECESSARY_FIELDS)]
    NecessaryFields,

    /// Unknown email or wrong password; the two cases are never distinguished
    #[error("{}", messages::WRONG_CREDENTIALS)]
    WrongCredentials,

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("password hashing error: {0}")]
    Hashing(String),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl Error {
    /// Message placed in the response body
    pub fn message(&self) -> &'static str {
        match self {
            Error::Validation => messages::VALIDATION_FAILED,
            Error::NecessaryFields => messages::ENTER_NECESSARY_FIELDS,
            Error::WrongCredentials => messages::WRONG_CREDENTIALS,
            Error::Database(_) | Error::Hashing(_) | Error::Blocking(_) => {
                messages::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::Database(_) | Error::Hashing(_) | Error::Blocking(_)
        )
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(error: argon2::password_hash::Error) -> Self {
        Error::Hashing(error.to_string())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation | Error::NecessaryFields | Error::WrongCredentials => {
                StatusCode::BAD_REQUEST
            }
            Error::Database(_) | Error::Hashing(_) | Error::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_internal() {
            ::tracing::error!(error = %self, "Request failed");
        }

        let status = self.status_code();
        HttpResponse::build(status).json(Failure::from_error(self, status))
    }
}

/// Error handler installed on the JSON extractor
///
/// Malformed JSON, a wrong content type or an oversized body all fail the
/// shape check, so they share the `Validation Failed` response.
pub fn json_error_handler(error: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    ::tracing::debug!(error = %error, path = %req.path(), "Rejected JSON payload");

    if let Some(metrics) = req.app_data::<actix_web::web::Data<AppMetrics>>() {
        metrics.record_login_attempt(LoginOutcome::ValidationFailed);
    }

    Error::Validation.into()
}
