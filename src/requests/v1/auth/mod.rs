use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::Error;

/// Body of `POST /api/v1/login`
///
/// Only `email` and `password` are accepted; any other key fails the whole
/// request. Both are optional at this stage so that a well-shaped body with a
/// missing field can be told apart from a malformed one.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[schema(example = "admin@gmail.com")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schema(example = "123")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Email and password that passed every request-level check
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Both fields present and non-empty, or `NecessaryFields`
    ///
    /// The email is trimmed; the password is taken as sent.
    pub fn credentials(self) -> Result<Credentials, Error> {
        let email = self
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());
        let password = self.password.filter(|password| !password.is_empty());

        match (email, password) {
            (Some(email), Some(password)) => Ok(Credentials { email, password }),
            _ => Err(Error::NecessaryFields),
        }
    }
}

impl TryFrom<Value> for LoginRequest {
    type Error = Error;

    /// Shape check: a JSON object with no keys besides `email` and `password`,
    /// whose values are strings or null
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(Error::Validation);
        }

        serde_json::from_value(value).map_err(|e| {
            ::tracing::debug!(error = %e, "Login payload failed shape validation");
            Error::Validation
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
