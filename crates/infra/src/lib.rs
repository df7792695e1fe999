//! Infrastructure layer: product storage backends, the catalog service and
//! process configuration.

pub mod catalog_service;
pub mod catalog_store;
pub mod config;

pub use catalog_service::{CatalogError, CatalogService};
pub use catalog_store::{
    CatalogStore, CatalogStoreError, DynCatalogStore, InMemoryCatalogStore, PostgresCatalogStore,
    SqliteCatalogStore,
};
pub use config::{CatalogConfig, ConfigError, StoreBackend};
