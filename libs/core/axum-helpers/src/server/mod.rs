//! Server infrastructure module.
//!
//! Router assembly with OpenAPI documentation, serving, and graceful
//! shutdown.

pub mod app;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use shutdown::shutdown_signal;
