//! Query string extractor with envelope-shaped rejections.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Query string extractor that answers malformed or missing parameters with
/// a 400 envelope instead of axum's plain-text default.
///
/// # Example
/// ```ignore
/// async fn search(ApiQuery(params): ApiQuery<BusquedaParams>) { /* ... */ }
/// ```
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        Ok(ApiQuery(params))
    }
}
