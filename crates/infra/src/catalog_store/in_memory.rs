use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use catalog_core::{Entity, ProductId};
use catalog_products::{NewProduct, Product};

use super::{CatalogStore, CatalogStoreError};

/// In-memory catalog store for tests/dev.
///
/// Records are keyed by their time-ordered id, so `read_all` yields them in
/// creation order. Each operation takes the lock once, which makes it atomic
/// with respect to concurrent callers.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

fn poisoned() -> CatalogStoreError {
    CatalogStoreError::storage("in-memory catalog lock poisoned")
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn create(&self, payload: NewProduct) -> Result<Product, CatalogStoreError> {
        let product = Product::create(ProductId::new(), payload)?;

        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(*product.id(), product.clone());
        Ok(product)
    }

    async fn read_all(&self) -> Result<Vec<Product>, CatalogStoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<bool, CatalogStoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.remove(&id).is_some())
    }
}
