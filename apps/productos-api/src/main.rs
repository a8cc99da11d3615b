//! Productos API - REST server over PostgreSQL

use axum_helpers::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_productos::{PgUnitOfWork, ProductoService};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;
    run_migrations::<Migrator>(&db, "productos-api").await?;

    let service = ProductoService::new(PgUnitOfWork::new(db.clone()));
    let routes = api::routes(service, db);
    let app = create_router::<openapi::ApiDoc>(routes);

    info!("Starting Productos API on port {}", config.server.port);
    create_app(app, &config.server).await?;

    info!("Productos API shutdown complete");
    Ok(())
}
