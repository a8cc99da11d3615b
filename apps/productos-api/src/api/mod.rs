//! API routes module

pub mod health;

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_productos::{ProductoService, UnitOfWork};

/// Create all API routes
pub fn routes<U: UnitOfWork + 'static>(
    service: ProductoService<U>,
    db: DatabaseConnection,
) -> Router {
    Router::new()
        .nest("/producto", domain_productos::router(service))
        .merge(health::router(db))
}
