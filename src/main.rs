use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, anyhow};
use gatehouse::config::{self, AppConfig};
use gatehouse::{AppMetrics, MetricsMiddleware, PasswordHasher, database, router, seeders, telemetry};
use gatehouse_migration::{Migrator, MigratorTrait};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("failed to load configuration")?;

    telemetry::init(&config.observability);

    let db = database::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to run migrations")?;
    }

    let hasher = PasswordHasher::from_config(&config.auth)
        .map_err(|e| anyhow!("invalid argon2 parameters: {}", e))?;

    if config.database.seed {
        seeders::up(&db, &hasher, &config.database.seed_password)
            .await
            .context("failed to seed demo data")?;
    }

    serve(config, db, hasher).await
}

async fn serve(
    config: AppConfig,
    db: sea_orm::DatabaseConnection,
    hasher: PasswordHasher,
) -> anyhow::Result<()> {
    let metrics = AppMetrics::with_config(Some(&config));
    let db = Data::new(db);
    let hasher = Data::new(hasher);
    let auth = Data::new(config.auth.clone());
    let app_metrics = Data::new(metrics.clone());
    let swagger_enabled = config.api.swagger_enabled;

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(MetricsMiddleware::new(metrics.clone()))
            .app_data(db.clone())
            .app_data(hasher.clone())
            .app_data(auth.clone())
            .app_data(app_metrics.clone())
            .configure(router::route);

        if swagger_enabled {
            app.configure(router::docs)
        } else {
            app
        }
    });

    let server = if config.server.workers > 0 {
        server.workers(config.server.workers)
    } else {
        server
    };

    let address = config.server.address();
    ::tracing::info!(host = %address.0, port = address.1, "Starting HTTP server");

    server
        .bind(address)
        .context("failed to bind HTTP listener")?
        .run()
        .await
        .context("HTTP server stopped with an error")
}
