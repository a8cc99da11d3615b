//! JSON extractor with automatic validation using the validator crate.

use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::envelope::ApiResponse;
use crate::errors::VALIDATION_FAILED_MESSAGE;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body, then runs the payload's `Validate` rules.
/// Any violation short-circuits the handler with a 400 envelope whose
/// `errors` list enumerates every violated field's message. Malformed JSON
/// bodies get the same envelope shape.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProducto>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let body = ApiResponse::<()>::error_with(
                VALIDATION_FAILED_MESSAGE,
                vec![e.body_text()],
            );
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        data.validate().map_err(|e| {
            let mut errors: Vec<String> = e
                .field_errors()
                .iter()
                .flat_map(|(field, violations)| {
                    violations.iter().map(move |err| match &err.message {
                        Some(message) => message.to_string(),
                        None => format!("{}: {}", field, err.code),
                    })
                })
                .collect();
            // field_errors() iterates a HashMap; keep the list deterministic
            errors.sort();

            let body = ApiResponse::<()>::error_with(VALIDATION_FAILED_MESSAGE, errors);
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
