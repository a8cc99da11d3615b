//! Business logic for productos.
//!
//! Sits between the HTTP handlers and the unit of work. Input shape
//! validation happens at the API boundary; this layer owns existence checks
//! and the read/write orchestration.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use crate::error::{ProductoError, ProductoResult};
use crate::models::{CreateProducto, ProductoDto, UpdateProducto};
use crate::unit_of_work::UnitOfWork;

pub struct ProductoService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Clone for ProductoService<U> {
    fn clone(&self) -> Self {
        Self {
            uow: Arc::clone(&self.uow),
        }
    }
}

impl<U: UnitOfWork> ProductoService<U> {
    pub fn new(uow: U) -> Self {
        Self { uow: Arc::new(uow) }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductoResult<Vec<ProductoDto>> {
        let productos = self.uow.productos().get_all().await?;
        Ok(productos.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ProductoResult<Option<ProductoDto>> {
        Ok(self.uow.productos().get_by_id(id).await?.map(Into::into))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProducto) -> ProductoResult<ProductoDto> {
        let producto = self.uow.productos().add(input).await?;
        tracing::info!(id = producto.id, "producto created");
        Ok(producto.into())
    }

    /// Replaces an existing producto. Fails with `NotFound` when the id is
    /// unknown; the stored id never changes.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateProducto) -> ProductoResult<ProductoDto> {
        let existing = self
            .uow
            .productos()
            .get_by_id(id)
            .await?
            .ok_or(ProductoError::NotFound(id))?;

        let updated = self.uow.productos().update(existing.apply_update(input)).await?;
        tracing::info!(id, "producto updated");
        Ok(updated.into())
    }

    /// Returns `false` when no producto with the id exists. The repository
    /// delete contract expects the existence check to happen here.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ProductoResult<bool> {
        if !self.uow.productos().exists(id).await? {
            return Ok(false);
        }

        let rows = self.uow.productos().delete(id).await?;
        if rows > 0 {
            tracing::info!(id, "producto deleted");
        }
        Ok(rows > 0)
    }

    #[instrument(skip(self))]
    pub async fn search_by_nombre(&self, nombre: &str) -> ProductoResult<Vec<ProductoDto>> {
        let productos = self.uow.productos().search_by_nombre(nombre).await?;
        Ok(productos.into_iter().map(Into::into).collect())
    }

    /// Range filtering only; bound validation belongs to the HTTP layer.
    #[instrument(skip(self))]
    pub async fn get_by_precio_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> ProductoResult<Vec<ProductoDto>> {
        let productos = self.uow.productos().get_by_precio_range(min, max).await?;
        Ok(productos.into_iter().map(Into::into).collect())
    }
}
