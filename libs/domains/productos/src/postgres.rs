//! SeaORM-backed repository and unit of work.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tokio::sync::Mutex;

use crate::entity;
use crate::error::{ProductoError, ProductoResult};
use crate::models::{CreateProducto, Producto};
use crate::repository::ProductoRepository;
use crate::unit_of_work::{UnitOfWork, TRANSACTION_ALREADY_OPEN};

/// Connection shared between the repository and its unit of work.
///
/// While a transaction is open, repository calls run on it; otherwise they
/// run on the pooled connection.
struct SharedConnection {
    db: DatabaseConnection,
    txn: Mutex<Option<DatabaseTransaction>>,
}

/// Producto repository on PostgreSQL.
#[derive(Clone)]
pub struct PgProductoRepository {
    conn: Arc<SharedConnection>,
    writes: Arc<AtomicU64>,
}

impl PgProductoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            conn: Arc::new(SharedConnection {
                db,
                txn: Mutex::new(None),
            }),
            writes: Arc::new(AtomicU64::new(0)),
        }
    }

    fn count_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductoRepository for PgProductoRepository {
    async fn get_all(&self) -> ProductoResult<Vec<Producto>> {
        let guard = self.conn.txn.lock().await;
        match guard.as_ref() {
            Some(txn) => queries::get_all(txn).await,
            None => queries::get_all(&self.conn.db).await,
        }
    }

    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>> {
        let guard = self.conn.txn.lock().await;
        match guard.as_ref() {
            Some(txn) => queries::get_by_id(txn, id).await,
            None => queries::get_by_id(&self.conn.db, id).await,
        }
    }

    async fn exists(&self, id: i32) -> ProductoResult<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    async fn add(&self, input: CreateProducto) -> ProductoResult<Producto> {
        let guard = self.conn.txn.lock().await;
        let created = match guard.as_ref() {
            Some(txn) => queries::add(txn, input).await?,
            None => queries::add(&self.conn.db, input).await?,
        };
        self.count_write();
        Ok(created)
    }

    async fn update(&self, producto: Producto) -> ProductoResult<Producto> {
        let guard = self.conn.txn.lock().await;
        let updated = match guard.as_ref() {
            Some(txn) => queries::update(txn, producto).await?,
            None => queries::update(&self.conn.db, producto).await?,
        };
        self.count_write();
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductoResult<u64> {
        let guard = self.conn.txn.lock().await;
        let rows = match guard.as_ref() {
            Some(txn) => queries::delete(txn, id).await?,
            None => queries::delete(&self.conn.db, id).await?,
        };
        if rows > 0 {
            self.count_write();
        }
        Ok(rows)
    }

    async fn search_by_nombre(&self, nombre: &str) -> ProductoResult<Vec<Producto>> {
        let guard = self.conn.txn.lock().await;
        match guard.as_ref() {
            Some(txn) => queries::search_by_nombre(txn, nombre).await,
            None => queries::search_by_nombre(&self.conn.db, nombre).await,
        }
    }

    async fn get_by_precio_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> ProductoResult<Vec<Producto>> {
        let guard = self.conn.txn.lock().await;
        match guard.as_ref() {
            Some(txn) => queries::get_by_precio_range(txn, min, max).await,
            None => queries::get_by_precio_range(&self.conn.db, min, max).await,
        }
    }

    fn take_pending_writes(&self) -> u64 {
        self.writes.swap(0, Ordering::SeqCst)
    }
}

/// Unit of work on PostgreSQL.
///
/// Owns the same shared connection as its repository, so an open transaction
/// is transparently used by repository calls until committed or rolled back.
/// Dropping an uncommitted transaction rolls it back.
pub struct PgUnitOfWork {
    productos: PgProductoRepository,
}

impl PgUnitOfWork {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            productos: PgProductoRepository::new(db),
        }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn productos(&self) -> &dyn ProductoRepository {
        &self.productos
    }

    async fn begin_transaction(&self) -> ProductoResult<()> {
        let mut guard = self.productos.conn.txn.lock().await;
        if guard.is_some() {
            return Err(ProductoError::InvalidArgument(
                TRANSACTION_ALREADY_OPEN.to_string(),
            ));
        }
        *guard = Some(self.productos.conn.db.begin().await?);
        Ok(())
    }

    async fn commit_transaction(&self) -> ProductoResult<()> {
        if let Some(txn) = self.productos.conn.txn.lock().await.take() {
            txn.commit().await?;
        }
        Ok(())
    }

    async fn rollback_transaction(&self) -> ProductoResult<()> {
        if let Some(txn) = self.productos.conn.txn.lock().await.take() {
            txn.rollback().await?;
        }
        Ok(())
    }

    async fn save_changes(&self) -> ProductoResult<u64> {
        Ok(self.productos.take_pending_writes())
    }
}

mod queries {
    use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
    use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

    use super::*;

    pub(super) async fn get_all<C: ConnectionTrait>(conn: &C) -> ProductoResult<Vec<Producto>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub(super) async fn get_by_id<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> ProductoResult<Option<Producto>> {
        let model = entity::Entity::find_by_id(id).one(conn).await?;
        Ok(model.map(Into::into))
    }

    pub(super) async fn add<C: ConnectionTrait>(
        conn: &C,
        input: CreateProducto,
    ) -> ProductoResult<Producto> {
        let model = entity::ActiveModel::from(input).insert(conn).await?;
        Ok(model.into())
    }

    pub(super) async fn update<C: ConnectionTrait>(
        conn: &C,
        producto: Producto,
    ) -> ProductoResult<Producto> {
        if entity::Entity::find_by_id(producto.id).one(conn).await?.is_none() {
            return Err(ProductoError::NotFound(producto.id));
        }
        let model = entity::ActiveModel::from(producto).update(conn).await?;
        Ok(model.into())
    }

    pub(super) async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> ProductoResult<u64> {
        let result = entity::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected)
    }

    pub(super) async fn search_by_nombre<C: ConnectionTrait>(
        conn: &C,
        nombre: &str,
    ) -> ProductoResult<Vec<Producto>> {
        let models = entity::Entity::find()
            .filter(Expr::col(entity::Column::Nombre).ilike(like_pattern(nombre)))
            .order_by_asc(entity::Column::Id)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub(super) async fn get_by_precio_range<C: ConnectionTrait>(
        conn: &C,
        min: Decimal,
        max: Decimal,
    ) -> ProductoResult<Vec<Producto>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Precio.gte(min))
            .filter(entity::Column::Precio.lte(max))
            .order_by_asc(entity::Column::Precio)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Builds a `%term%` pattern, escaping LIKE metacharacters in the term.
    fn like_pattern(term: &str) -> String {
        let escaped = term
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{}%", escaped)
    }
}
