//! Integer id path parameter extractor with envelope-shaped rejections.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// Extractor for integer id path parameters.
///
/// Parses the `{id}` segment as `i32`, rejecting with a 400 envelope instead
/// of axum's plain-text default when the segment is not a number.
///
/// # Example
/// ```ignore
/// async fn get_producto(IdPath(id): IdPath) -> String {
///     format!("Producto: {}", id)
/// }
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i32>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(AppError::BadRequest(format!("ID inválido: {}", raw)).into_response()),
        }
    }
}
