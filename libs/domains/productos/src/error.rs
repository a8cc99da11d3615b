use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Errores del dominio de productos.
///
/// Every variant maps onto an HTTP status through [`AppError`], so handlers
/// can bubble these up with `?` and still answer with the response envelope.
#[derive(Debug, Error)]
pub enum ProductoError {
    #[error("Producto con ID {0} no encontrado")]
    NotFound(i32),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("No autorizado")]
    Unauthorized,

    #[error("Error de base de datos: {0}")]
    Database(#[from] DbErr),

    #[error("Error interno: {0}")]
    Internal(String),
}

pub type ProductoResult<T> = Result<T, ProductoError>;

impl From<ProductoError> for AppError {
    fn from(err: ProductoError) -> Self {
        match err {
            ProductoError::NotFound(id) => {
                AppError::NotFound(format!("Producto con ID {} no encontrado", id))
            }
            ProductoError::InvalidArgument(message) => AppError::BadRequest(message),
            ProductoError::Unauthorized => AppError::Unauthorized,
            ProductoError::Database(e) => AppError::InternalServerError(e.to_string()),
            ProductoError::Internal(message) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ProductoError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
