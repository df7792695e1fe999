//! Product record storage boundary.
//!
//! `CatalogStore` is the single owner of persisted product records. Each
//! operation is atomic on its own; there is no multi-record transaction scope
//! because the catalog has no multi-record invariants.

pub mod in_memory;
pub mod postgres;
pub mod row;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use catalog_core::{DomainError, ProductId};
use catalog_products::{NewProduct, Product};

use crate::config::{CatalogConfig, StoreBackend};

pub use in_memory::InMemoryCatalogStore;
pub use postgres::PostgresCatalogStore;
pub use row::ProductRow;
pub use sqlite::SqliteCatalogStore;

/// Catalog store operation error.
///
/// - **Domain**: the payload violated a product invariant; nothing was written.
/// - **Storage**: the backend failed for infrastructure reasons. Opaque to
///   callers and never retried here.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl CatalogStoreError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Durable product storage with atomic single-record operations.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Validate and persist a new product under a freshly assigned id.
    ///
    /// Validation failures are reported before any write happens.
    async fn create(&self, payload: NewProduct) -> Result<Product, CatalogStoreError>;

    /// All live records. Each call re-reads the store.
    async fn read_all(&self) -> Result<Vec<Product>, CatalogStoreError>;

    /// Remove a record. Returns whether a record with that id existed.
    async fn delete_by_id(&self, id: ProductId) -> Result<bool, CatalogStoreError>;
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn create(&self, payload: NewProduct) -> Result<Product, CatalogStoreError> {
        (**self).create(payload).await
    }

    async fn read_all(&self) -> Result<Vec<Product>, CatalogStoreError> {
        (**self).read_all().await
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<bool, CatalogStoreError> {
        (**self).delete_by_id(id).await
    }
}

/// Type-erased store handle, used when the backend is chosen at runtime.
pub type DynCatalogStore = Arc<dyn CatalogStore>;

/// Open the backend selected by `config`, creating the schema if needed.
pub async fn open(config: &CatalogConfig) -> Result<DynCatalogStore, CatalogStoreError> {
    let url = || {
        config
            .database_url
            .as_deref()
            .ok_or_else(|| CatalogStoreError::storage("connect: DATABASE_URL is not configured"))
    };

    let store: DynCatalogStore = match config.store {
        StoreBackend::Memory => InMemoryCatalogStore::arc(),
        StoreBackend::Sqlite => {
            Arc::new(SqliteCatalogStore::connect(url()?, config.max_connections).await?)
        }
        StoreBackend::Postgres => {
            Arc::new(PostgresCatalogStore::connect(url()?, config.max_connections).await?)
        }
    };

    info!(backend = ?config.store, "catalog store opened");
    Ok(store)
}

/// Map a SQLx error to a storage error naming the failed operation.
pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> CatalogStoreError {
    match err {
        sqlx::Error::PoolTimedOut => {
            CatalogStoreError::storage(format!("{operation}: timed out acquiring a connection"))
        }
        sqlx::Error::PoolClosed => {
            CatalogStoreError::storage(format!("{operation}: connection pool is closed"))
        }
        sqlx::Error::Database(db) => CatalogStoreError::storage(format!(
            "{operation}: database error{}: {}",
            db.code().map(|c| format!(" ({c})")).unwrap_or_default(),
            db.message()
        )),
        other => CatalogStoreError::storage(format!("{operation}: {other}")),
    }
}
