use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::entities::{roles, tokens, users};
use crate::messages;
use crate::responses::Meta;

/// Public view of the signed-in user; the password hash never leaves the store
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct AuthenticatedUser {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "SuperAdmin")]
    pub name: String,
    #[schema(example = "admin@gmail.com")]
    pub email: String,
    #[schema(example = "7980657255")]
    pub mobile: Option<String>,
    #[schema(example = json!(["superadmin"]))]
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Authenticated {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthenticatedUser,
}

/// Body of a successful login
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "Login Successful")]
pub struct LoginSuccess {
    pub success: bool,
    #[schema(example = "Login Successful")]
    pub message: String,
    pub meta: Meta,
    pub data: Authenticated,
}

impl Authenticated {
    pub fn new(token: tokens::Model, user: users::Model, roles: Vec<roles::Model>) -> Self {
        Self {
            token: token.id.to_string(),
            expires_at: token.expired_at.map(|at| at.and_utc()),
            user: AuthenticatedUser {
                id: user.id,
                name: user.name,
                email: user.email,
                mobile: user.mobile,
                roles: roles.into_iter().map(|role| role.name).collect(),
            },
        }
    }
}

impl From<Authenticated> for LoginSuccess {
    fn from(data: Authenticated) -> Self {
        Self {
            success: true,
            message: messages::LOGIN_SUCCESSFUL.to_string(),
            meta: Meta { code: 200 },
            data,
        }
    }
}

impl Responder for LoginSuccess {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
