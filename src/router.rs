use actix_web::web::{self, JsonConfig, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;
use crate::errors::json_error_handler;

/// Register every endpoint
///
/// Shared state (`DatabaseConnection`, `PasswordHasher`, `AuthConfig`,
/// `AppMetrics`) is attached by the caller.
pub fn route(app: &mut ServiceConfig) {
    app.app_data(JsonConfig::default().error_handler(json_error_handler));

    app.service(web::scope("/api/v1").service(controllers::v1::auth::login));

    app.service(controllers::health::health);
    app.service(controllers::health::health_db);
    app.service(controllers::metrics::metrics);
}

/// Swagger UI, mounted only when `api.swagger_enabled` is set
pub fn docs(app: &mut ServiceConfig) {
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Gatehouse", "/api.json"),
        Definition::openapi(),
    )]));
}
