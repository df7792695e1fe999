//! Explicit mapping between `Product` and the `products` table row.
//!
//! The same row shape is decoded from Postgres (`UUID`, `BIGINT`,
//! `DOUBLE PRECISION`) and SQLite (`BLOB`, `INTEGER`, `REAL`).

use sqlx::FromRow;
use uuid::Uuid;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product};

use super::CatalogStoreError;

/// One row of the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub quantity: i64,
    pub price: f64,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: *product.id_typed().as_uuid(),
            title: product.title().to_string(),
            description: product.description().to_string(),
            thumbnail_url: product.thumbnail_url().to_string(),
            quantity: product.quantity(),
            price: product.price(),
        }
    }

    /// Rebuild the domain value, re-checking invariants.
    ///
    /// A row that fails validation means the table was written outside this
    /// store; it is reported as a storage failure, not a caller error.
    pub fn into_product(self) -> Result<Product, CatalogStoreError> {
        let id = ProductId::from_uuid(self.id);
        let payload = NewProduct {
            title: self.title,
            description: self.description,
            thumbnail_url: self.thumbnail_url,
            quantity: self.quantity,
            price: self.price,
        };

        Product::create(id, payload)
            .map_err(|e| CatalogStoreError::storage(format!("corrupt products row {id}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_round_trips_a_product() {
        let product =
            Product::create(ProductId::new(), NewProduct::new("Widget", "d", "u", 3, 1.5)).unwrap();

        let row = ProductRow::from_product(&product);
        assert_eq!(row.id, *product.id_typed().as_uuid());
        assert_eq!(row.thumbnail_url, "u");

        assert_eq!(row.into_product().unwrap(), product);
    }

    #[test]
    fn corrupt_row_is_a_storage_error() {
        let row = ProductRow {
            id: Uuid::now_v7(),
            title: "Widget".to_string(),
            description: String::new(),
            thumbnail_url: String::new(),
            quantity: -1,
            price: 1.0,
        };

        match row.into_product() {
            Err(CatalogStoreError::Storage(msg)) => assert!(msg.contains("corrupt")),
            other => panic!("Expected Storage error, got {other:?}"),
        }
    }
}
