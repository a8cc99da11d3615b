//! # Axum Helpers
//!
//! Shared utilities for building Axum web APIs:
//!
//! - **[`envelope`]**: the uniform `{success, message, data, errors}` response
//!   wrapper used by every route
//! - **[`errors`]**: error translation into the response envelope
//! - **[`extractors`]**: custom extractors (validated JSON, integer id paths,
//!   query strings)
//! - **[`server`]**: router assembly, serving, graceful shutdown

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod server;

pub use envelope::ApiResponse;
pub use errors::AppError;
pub use extractors::{ApiQuery, IdPath, ValidatedJson};
pub use server::{create_app, create_router, shutdown_signal};
