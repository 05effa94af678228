//! Events API - REST server for event scheduling

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::server::ServerConfig;
use core_config::tracing::init_tracing;
use core_config::{Environment, FromEnv};
use database::postgres::{
    PostgresConfig, check_health, connect_from_config_with_retry, run_migrations,
};
use domain_events::{EventService, PgEventRepository, handlers};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let environment = Environment::from_env();
    init_tracing(&environment);

    let db_config = PostgresConfig::from_env()?;

    info!(
        "Connecting to PostgreSQL at {}:{}/{}",
        db_config.host, db_config.port, db_config.database
    );

    let db = connect_from_config_with_retry(db_config, None).await?;
    check_health(&db).await?;

    run_migrations::<Migrator>(&db, "events-api").await?;

    // Wire the domain: Postgres repository behind the event service
    let repository = PgEventRepository::new(db.clone());
    let service = EventService::new(repository);

    let api_routes = handlers::router(service);
    let app = create_router(api_routes.merge(health_router())).await?;

    let server_config = ServerConfig::from_env()?;
    info!("Starting Events API on port {}", server_config.port);

    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL connections");
        if let Err(e) = db.close().await {
            tracing::warn!("Error while closing database connection: {}", e);
        } else {
            info!("PostgreSQL connection closed");
        }
    })
    .await?;

    info!("Events API shutdown complete");
    Ok(())
}
