//! Helpers shared by unit and integration tests.

pub mod setup;

/// Build the full application on a fresh in-memory database
///
/// Expands to `(service, db)`; the service answers every route registered by
/// [`crate::router::route`].
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let hasher = $crate::testing::setup::password_hasher()
            .expect("Failed to build test password hasher");
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(hasher))
            .app_data(::actix_web::web::Data::new(
                $crate::config::AuthConfig::default(),
            ))
            .app_data(::actix_web::web::Data::new(
                $crate::metrics::AppMetrics::new(),
            ))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
