//! Unit-of-work boundary around the producto repository.
//!
//! Groups repository access with transaction demarcation. Repository writes
//! take effect immediately; `save_changes` reports how many writes happened
//! since the last flush rather than deferring them.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{ProductoError, ProductoResult};
use crate::models::Producto;
use crate::repository::{InMemoryProductoRepository, ProductoRepository};

pub const TRANSACTION_ALREADY_OPEN: &str = "Ya existe una transacción activa";

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// The producto repository bound to this unit of work.
    fn productos(&self) -> &dyn ProductoRepository;

    /// Opens a transaction. Fails if one is already open.
    async fn begin_transaction(&self) -> ProductoResult<()>;

    /// Commits the open transaction; a no-op when none is open.
    async fn commit_transaction(&self) -> ProductoResult<()>;

    /// Rolls back the open transaction; a no-op when none is open.
    async fn rollback_transaction(&self) -> ProductoResult<()>;

    /// Number of repository writes since the last call.
    async fn save_changes(&self) -> ProductoResult<u64>;
}

/// Unit of work over the in-memory repository.
///
/// Transactions are implemented as snapshots: `begin_transaction` copies the
/// store, `rollback_transaction` restores the copy, `commit_transaction`
/// discards it.
pub struct InMemoryUnitOfWork {
    productos: InMemoryProductoRepository,
    snapshot: Mutex<Option<BTreeMap<i32, Producto>>>,
}

impl InMemoryUnitOfWork {
    pub fn new() -> Self {
        Self::with_repository(InMemoryProductoRepository::new())
    }

    pub fn with_repository(productos: InMemoryProductoRepository) -> Self {
        Self {
            productos,
            snapshot: Mutex::new(None),
        }
    }
}

impl Default for InMemoryUnitOfWork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn productos(&self) -> &dyn ProductoRepository {
        &self.productos
    }

    async fn begin_transaction(&self) -> ProductoResult<()> {
        let mut guard = self.snapshot.lock().await;
        if guard.is_some() {
            return Err(ProductoError::InvalidArgument(
                TRANSACTION_ALREADY_OPEN.to_string(),
            ));
        }
        *guard = Some(self.productos.snapshot().await);
        Ok(())
    }

    async fn commit_transaction(&self) -> ProductoResult<()> {
        self.snapshot.lock().await.take();
        Ok(())
    }

    async fn rollback_transaction(&self) -> ProductoResult<()> {
        if let Some(snapshot) = self.snapshot.lock().await.take() {
            self.productos.restore(snapshot).await;
        }
        Ok(())
    }

    async fn save_changes(&self) -> ProductoResult<u64> {
        Ok(self.productos.take_pending_writes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProducto;
    use rust_decimal_macros::dec;

    fn create(nombre: &str) -> CreateProducto {
        CreateProducto {
            nombre: nombre.to_string(),
            descripcion: format!("Descripción de {}", nombre),
            precio: dec!(10.00),
        }
    }

    #[tokio::test]
    async fn begin_twice_is_rejected() {
        let uow = InMemoryUnitOfWork::new();
        uow.begin_transaction().await.unwrap();
        let result = uow.begin_transaction().await;
        assert!(matches!(result, Err(ProductoError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn rollback_restores_the_store() {
        let uow = InMemoryUnitOfWork::new();
        uow.productos().add(create("Laptop")).await.unwrap();

        uow.begin_transaction().await.unwrap();
        uow.productos().add(create("Mouse")).await.unwrap();
        uow.rollback_transaction().await.unwrap();

        let all = uow.productos().get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].nombre, "Laptop");
    }

    #[tokio::test]
    async fn commit_keeps_writes() {
        let uow = InMemoryUnitOfWork::new();
        uow.begin_transaction().await.unwrap();
        uow.productos().add(create("Laptop")).await.unwrap();
        uow.commit_transaction().await.unwrap();

        assert_eq!(uow.productos().get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn commit_without_transaction_is_noop() {
        let uow = InMemoryUnitOfWork::new();
        assert!(uow.commit_transaction().await.is_ok());
        assert!(uow.rollback_transaction().await.is_ok());
    }

    #[tokio::test]
    async fn save_changes_reports_write_count() {
        let uow = InMemoryUnitOfWork::new();
        let a = uow.productos().add(create("Laptop")).await.unwrap();
        uow.productos().add(create("Mouse")).await.unwrap();
        uow.productos().delete(a.id).await.unwrap();

        assert_eq!(uow.save_changes().await.unwrap(), 3);
        assert_eq!(uow.save_changes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn transaction_can_reopen_after_commit() {
        let uow = InMemoryUnitOfWork::new();
        uow.begin_transaction().await.unwrap();
        uow.commit_transaction().await.unwrap();
        assert!(uow.begin_transaction().await.is_ok());
    }
}
