//! Catalog operations consumed by the boundary layer.
//!
//! `CatalogService` forwards to a `CatalogStore` and translates store
//! outcomes into service-level results. It keeps no state besides the store
//! handle, so one instance can be shared by every request without locking.
//!
//! ```text
//! list_all        -> CatalogStore::read_all
//! add_product     -> CatalogStore::create        (validation passed through)
//! remove_product  -> CatalogStore::delete_by_id  (false -> NotFound)
//! ```
//!
//! Nothing here retries. Every failure is scoped to the call that produced it.

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use catalog_core::{DomainError, ProductId};
use catalog_products::{NewProduct, Product};

use crate::catalog_store::{CatalogStore, CatalogStoreError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Input violated a product invariant (deterministic; do not retry).
    #[error("validation failed: {0}")]
    Validation(String),
    /// No live record carries the requested id.
    #[error("product not found: {0}")]
    NotFound(String),
    /// The backing store failed for infrastructure reasons.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CatalogStoreError> for CatalogError {
    fn from(value: CatalogStoreError) -> Self {
        match value {
            CatalogStoreError::Domain(DomainError::Validation(msg))
            | CatalogStoreError::Domain(DomainError::InvalidId(msg)) => CatalogError::Validation(msg),
            CatalogStoreError::Storage(msg) => CatalogError::Storage(msg),
        }
    }
}

/// Stateless orchestration over a catalog store.
#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    store: S,
}

impl<S> CatalogService<S>
where
    S: CatalogStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every live product, re-read from the store on each call.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.store.read_all().await.map_err(|e| {
            warn!(error = %e, "reading catalog failed");
            CatalogError::from(e)
        })?;

        debug!(count = products.len(), "catalog listed");
        Ok(products)
    }

    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn add_product(&self, payload: NewProduct) -> Result<Product, CatalogError> {
        match self.store.create(payload).await {
            Ok(product) => {
                info!(product_id = %product.id_typed(), "product added");
                Ok(product)
            }
            Err(CatalogStoreError::Storage(msg)) => {
                warn!(error = %msg, "persisting product failed");
                Err(CatalogError::Storage(msg))
            }
            Err(e) => {
                debug!(error = %e, "product rejected");
                Err(e.into())
            }
        }
    }

    /// Delete a product by its textual id.
    ///
    /// An id that does not parse cannot name a live record, so it is reported
    /// as `NotFound` rather than as a validation failure.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: &str) -> Result<ProductId, CatalogError> {
        let product_id: ProductId = match id.parse() {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "unparseable product id");
                return Err(CatalogError::NotFound(id.to_string()));
            }
        };

        let removed = self.store.delete_by_id(product_id).await.map_err(|e| {
            warn!(error = %e, "deleting product failed");
            CatalogError::from(e)
        })?;

        if removed {
            info!(product_id = %product_id, "product removed");
            Ok(product_id)
        } else {
            debug!(product_id = %product_id, "no product to remove");
            Err(CatalogError::NotFound(id.to_string()))
        }
    }
}
