//! Uniform response envelope shared by every API route.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response wrapper returned by all routes, success and failure alike.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "message": "Producto encontrado",
///   "data": { "id": 1, "nombre": "Laptop" },
///   "errors": []
/// }
/// ```
///
/// `data` is `null` on failure; `errors` is always present, empty when there
/// is nothing to report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable outcome message
    pub message: String,
    /// Payload, absent on failure
    pub data: Option<T>,
    /// Detail messages, e.g. one entry per violated validation rule
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response with a payload.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Failed response with only a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Vec::new(),
        }
    }

    /// Failed response carrying detail messages.
    pub fn error_with(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors,
        }
    }
}
