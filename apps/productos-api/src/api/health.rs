//! Health check endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use database::postgres::DatabaseConnection;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

impl HealthResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            service: "productos-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::with_status("healthy"))
}

async fn ready(State(db): State<DatabaseConnection>) -> (StatusCode, Json<HealthResponse>) {
    match db.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::with_status("ready"))),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::with_status("unavailable")),
            )
        }
    }
}

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(db)
}
