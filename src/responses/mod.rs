pub mod v1;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::Error;

/// Machine-readable outcome code, always equal to the HTTP status
#[derive(Clone, Copy, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Meta {
    #[schema(example = 400)]
    pub code: u16,
}

/// Present only when the request body failed the shape check
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[schema(example = 400)]
    pub status_code: u16,
    #[schema(example = "Bad Request")]
    pub error: String,
}

/// Body of every unsuccessful response
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Failure {
    pub success: bool,
    #[schema(example = "Wrong credentials")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl Failure {
    pub fn from_error(error: &Error, status: StatusCode) -> Self {
        let code = status.as_u16();

        match error {
            Error::Validation => Self {
                success: false,
                message: error.message().to_string(),
                meta: None,
                error: Some(ErrorDetail {
                    status_code: code,
                    error: status.canonical_reason().unwrap_or_default().to_string(),
                }),
            },
            _ => Self {
                success: false,
                message: error.message().to_string(),
                meta: Some(Meta { code }),
                error: None,
            },
        }
    }
}
