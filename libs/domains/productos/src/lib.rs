//! # Productos Domain
//!
//! CRUD, search and price-range filtering for the producto catalog.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ handlers    HTTP routes, envelope responses    │
//! ├────────────────────────────────────────────────┤
//! │ service     business rules, existence checks   │
//! ├────────────────────────────────────────────────┤
//! │ unit_of_work  repository + transaction scope   │
//! ├────────────────────────────────────────────────┤
//! │ repository / postgres   persistence            │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP layer is generic over [`unit_of_work::UnitOfWork`], so the same
//! routes serve the SeaORM implementation in production and the in-memory
//! one in tests.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod unit_of_work;

pub use error::{ProductoError, ProductoResult};
pub use handlers::{router, ApiDoc};
pub use models::{CreateProducto, Producto, ProductoDto, UpdateProducto};
pub use postgres::{PgProductoRepository, PgUnitOfWork};
pub use repository::{InMemoryProductoRepository, ProductoRepository};
pub use service::ProductoService;
pub use unit_of_work::{InMemoryUnitOfWork, UnitOfWork};
