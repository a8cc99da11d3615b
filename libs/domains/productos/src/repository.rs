//! Repository abstraction over producto persistence.
//!
//! The trait is object-safe so the unit of work can hand out `&dyn`
//! references; implementations live in [`crate::postgres`] (SeaORM) and
//! here (in-memory, for tests and local runs without a database).

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::error::{ProductoError, ProductoResult};
use crate::models::{CreateProducto, Producto};

/// Persistence operations for productos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    /// All productos in store order (ascending id for the implementations here).
    async fn get_all(&self) -> ProductoResult<Vec<Producto>>;

    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>>;

    async fn exists(&self, id: i32) -> ProductoResult<bool>;

    /// Persists a new producto and returns it with its assigned id.
    async fn add(&self, input: CreateProducto) -> ProductoResult<Producto>;

    /// Replaces the stored producto with the same id.
    async fn update(&self, producto: Producto) -> ProductoResult<Producto>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: i32) -> ProductoResult<u64>;

    /// Case-insensitive substring match on `nombre`.
    async fn search_by_nombre(&self, nombre: &str) -> ProductoResult<Vec<Producto>>;

    /// Productos with `min <= precio <= max`, ordered by precio ascending.
    async fn get_by_precio_range(&self, min: Decimal, max: Decimal)
        -> ProductoResult<Vec<Producto>>;

    /// Completed writes since the last call; consumed by the unit of work.
    fn take_pending_writes(&self) -> u64;
}

/// In-memory repository backed by a `BTreeMap`.
///
/// Ids are handed out by an atomic counter and never reused, matching the
/// serial-column behavior of the Postgres implementation.
#[derive(Debug, Clone)]
pub struct InMemoryProductoRepository {
    productos: Arc<RwLock<BTreeMap<i32, Producto>>>,
    next_id: Arc<AtomicI32>,
    writes: Arc<AtomicU64>,
}

impl InMemoryProductoRepository {
    pub fn new() -> Self {
        Self {
            productos: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            writes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Seeds the store, advancing the id counter past the seeded rows.
    pub async fn with_seed(productos: Vec<Producto>) -> Self {
        let repo = Self::new();
        {
            let mut guard = repo.productos.write().await;
            let mut max_id = 0;
            for producto in productos {
                max_id = max_id.max(producto.id);
                guard.insert(producto.id, producto);
            }
            repo.next_id.store(max_id + 1, Ordering::SeqCst);
        }
        repo
    }

    pub(crate) async fn snapshot(&self) -> BTreeMap<i32, Producto> {
        self.productos.read().await.clone()
    }

    pub(crate) async fn restore(&self, snapshot: BTreeMap<i32, Producto>) {
        *self.productos.write().await = snapshot;
    }
}

impl Default for InMemoryProductoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductoRepository for InMemoryProductoRepository {
    async fn get_all(&self) -> ProductoResult<Vec<Producto>> {
        Ok(self.productos.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>> {
        Ok(self.productos.read().await.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> ProductoResult<bool> {
        Ok(self.productos.read().await.contains_key(&id))
    }

    async fn add(&self, input: CreateProducto) -> ProductoResult<Producto> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let producto = Producto {
            id,
            nombre: input.nombre,
            descripcion: input.descripcion,
            precio: input.precio.round_dp(2),
        };
        self.productos.write().await.insert(id, producto.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(producto)
    }

    async fn update(&self, producto: Producto) -> ProductoResult<Producto> {
        let mut guard = self.productos.write().await;
        if !guard.contains_key(&producto.id) {
            return Err(ProductoError::NotFound(producto.id));
        }
        let stored = Producto {
            precio: producto.precio.round_dp(2),
            ..producto
        };
        guard.insert(stored.id, stored.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(stored)
    }

    async fn delete(&self, id: i32) -> ProductoResult<u64> {
        let removed = self.productos.write().await.remove(&id);
        match removed {
            Some(_) => {
                self.writes.fetch_add(1, Ordering::SeqCst);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn search_by_nombre(&self, nombre: &str) -> ProductoResult<Vec<Producto>> {
        let needle = nombre.to_lowercase();
        Ok(self
            .productos
            .read()
            .await
            .values()
            .filter(|p| p.nombre.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_by_precio_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> ProductoResult<Vec<Producto>> {
        let mut matches: Vec<Producto> = self
            .productos
            .read()
            .await
            .values()
            .filter(|p| p.precio >= min && p.precio <= max)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.precio.cmp(&b.precio).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    fn take_pending_writes(&self) -> u64 {
        self.writes.swap(0, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create(nombre: &str, precio: Decimal) -> CreateProducto {
        CreateProducto {
            nombre: nombre.to_string(),
            descripcion: format!("Descripción de {}", nombre),
            precio,
        }
    }

    #[tokio::test]
    async fn add_assigns_sequential_ids() {
        let repo = InMemoryProductoRepository::new();
        let a = repo.add(create("Laptop", dec!(1200.00))).await.unwrap();
        let b = repo.add(create("Mouse", dec!(25.99))).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryProductoRepository::new();
        let a = repo.add(create("Laptop", dec!(1200.00))).await.unwrap();
        assert_eq!(repo.delete(a.id).await.unwrap(), 1);
        let b = repo.add(create("Mouse", dec!(25.99))).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn exists_tracks_inserts_and_deletes() {
        let repo = InMemoryProductoRepository::new();
        assert!(!repo.exists(1).await.unwrap());

        let p = repo.add(create("Laptop", dec!(1200.00))).await.unwrap();
        assert!(repo.exists(p.id).await.unwrap());
        assert!(!repo.exists(p.id + 1).await.unwrap());

        repo.delete(p.id).await.unwrap();
        assert!(!repo.exists(p.id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_returns_zero_rows() {
        let repo = InMemoryProductoRepository::new();
        assert_eq!(repo.delete(99).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let repo = InMemoryProductoRepository::new();
        let result = repo
            .update(Producto {
                id: 42,
                nombre: "Fantasma".to_string(),
                descripcion: "No existe".to_string(),
                precio: dec!(1.00),
            })
            .await;
        assert!(matches!(result, Err(ProductoError::NotFound(42))));
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let repo = InMemoryProductoRepository::new();
        repo.add(create("Teclado Mecánico", dec!(89.99))).await.unwrap();
        repo.add(create("Mouse", dec!(25.99))).await.unwrap();

        let found = repo.search_by_nombre("teclado").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].nombre, "Teclado Mecánico");
    }

    #[tokio::test]
    async fn search_with_no_match_is_empty() {
        let repo = InMemoryProductoRepository::new();
        repo.add(create("Laptop", dec!(1200.00))).await.unwrap();
        assert!(repo.search_by_nombre("impresora").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn precio_range_is_inclusive_and_sorted() {
        let repo = InMemoryProductoRepository::new();
        repo.add(create("Laptop", dec!(1200.00))).await.unwrap();
        repo.add(create("Mouse", dec!(25.99))).await.unwrap();
        repo.add(create("Teclado", dec!(89.99))).await.unwrap();

        let found = repo
            .get_by_precio_range(dec!(25.99), dec!(89.99))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].nombre, "Mouse");
        assert_eq!(found[1].nombre, "Teclado");
    }

    #[tokio::test]
    async fn pending_writes_counts_mutations() {
        let repo = InMemoryProductoRepository::new();
        let a = repo.add(create("Laptop", dec!(1200.00))).await.unwrap();
        repo.delete(a.id).await.unwrap();
        repo.delete(a.id).await.unwrap(); // miss, not counted

        assert_eq!(repo.take_pending_writes(), 2);
        assert_eq!(repo.take_pending_writes(), 0);
    }

    #[tokio::test]
    async fn precio_is_rounded_to_two_decimals() {
        let repo = InMemoryProductoRepository::new();
        let p = repo.add(create("Cable", dec!(9.999))).await.unwrap();
        assert_eq!(p.precio, dec!(10.00));
    }
}
