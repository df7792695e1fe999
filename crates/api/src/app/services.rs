use std::sync::Arc;

use catalog_infra::{
    catalog_store, CatalogConfig, CatalogService, CatalogStoreError, DynCatalogStore,
    InMemoryCatalogStore,
};

/// Shared state handed to every handler through an `Extension`.
#[derive(Clone)]
pub struct AppServices {
    catalog: CatalogService<DynCatalogStore>,
}

impl AppServices {
    pub fn new(store: DynCatalogStore) -> Self {
        Self {
            catalog: CatalogService::new(store),
        }
    }

    /// Services over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCatalogStore::new()))
    }

    /// Open the store selected by `config`.
    pub async fn from_config(config: &CatalogConfig) -> Result<Self, CatalogStoreError> {
        let store = catalog_store::open(config).await?;
        Ok(Self::new(store))
    }

    pub fn catalog(&self) -> &CatalogService<DynCatalogStore> {
        &self.catalog
    }
}
