//! Error translation into the response envelope.
//!
//! Every failure that escapes a handler ends up here and is serialized with
//! the same `{success, message, data, errors}` shape as successful responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::envelope::ApiResponse;

/// Fixed message for 401 responses.
pub const UNAUTHORIZED_MESSAGE: &str = "No autorizado";
/// Sanitized message for unclassified 500 responses.
pub const INTERNAL_ERROR_MESSAGE: &str = "Ha ocurrido un error interno en el servidor";
/// Message for payloads that fail declarative validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "Datos inválidos";
/// Message for unknown routes.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Recurso no encontrado";

/// Application error type that renders as an envelope response.
///
/// | Variant | Status | Body policy |
/// |---|---|---|
/// | `NotFound` | 404 | error's message, empty `errors` |
/// | `BadRequest` | 400 | error's message, empty `errors` |
/// | `Unauthorized` | 401 | fixed generic message |
/// | `InternalServerError` | 500 | generic message, original text in `errors` |
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("{UNAUTHORIZED_MESSAGE}")]
    Unauthorized,

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ApiResponse::<()>::error(msg))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ApiResponse::error(msg))
            }
            AppError::Unauthorized => {
                tracing::info!("Unauthorized request");
                (
                    StatusCode::UNAUTHORIZED,
                    ApiResponse::error(UNAUTHORIZED_MESSAGE),
                )
            }
            AppError::InternalServerError(msg) => {
                // The original error is for operators, not for the caller.
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error_with(INTERNAL_ERROR_MESSAGE, vec![msg]),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(ROUTE_NOT_FOUND_MESSAGE)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_message() {
        let response = AppError::NotFound("Producto con ID 7 no encontrado".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Producto con ID 7 no encontrado");
        assert_eq!(body["errors"].as_array().unwrap().len(), 0);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("Rango de precios inválido".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Rango de precios inválido");
    }

    #[tokio::test]
    async fn test_unauthorized_uses_fixed_message() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["message"], UNAUTHORIZED_MESSAGE);
    }

    #[tokio::test]
    async fn test_internal_error_sanitizes_message() {
        let response =
            AppError::InternalServerError("connection refused (db:5432)".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        // The caller sees the generic message, the original goes to `errors`.
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(body["errors"][0], "connection refused (db:5432)");
    }
}
