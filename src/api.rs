use utoipa::OpenApi;

use crate::{controllers, requests, responses};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "Health"),
    ),
    paths(
        controllers::v1::auth::login,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::v1::auth::LoginRequest,

        responses::Meta,
        responses::ErrorDetail,
        responses::Failure,
        responses::v1::auth::AuthenticatedUser,
        responses::v1::auth::Authenticated,
        responses::v1::auth::LoginSuccess,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
