//! Postgres-backed catalog store.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `CatalogStoreError::Storage` with the failing
//! operation name as prefix. Constraint violations (`23514` check,
//! `23505` unique) can only be reached by writes that bypass this store, since
//! payloads are validated and ids are freshly generated before every insert.
//!
//! ## Thread Safety
//!
//! `PostgresCatalogStore` is `Send + Sync` and cheap to clone; the SQLx pool
//! handles connection management. Every operation is a single statement, so
//! it commits atomically under Postgres' default read-committed isolation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, instrument};

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product};

use super::row::ProductRow;
use super::{map_sqlx_error, CatalogStore, CatalogStoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id            UUID             PRIMARY KEY,
    title         TEXT             NOT NULL
                  CHECK (length(btrim(title, ' ' || chr(9) || chr(10) || chr(11) || chr(12) || chr(13))) > 0),
    description   TEXT             NOT NULL DEFAULT '',
    thumbnail_url TEXT             NOT NULL DEFAULT '',
    quantity      BIGINT           NOT NULL CHECK (quantity >= 0),
    price         DOUBLE PRECISION NOT NULL CHECK (price >= 0)
)
"#;

/// Postgres-backed catalog store.
#[derive(Debug, Clone)]
pub struct PostgresCatalogStore {
    pool: Arc<PgPool>,
}

impl PostgresCatalogStore {
    /// Create a new PostgresCatalogStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect to `url` and ensure the `products` table exists.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, CatalogStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub async fn init_schema(&self) -> Result<(), CatalogStoreError> {
        sqlx::query(SCHEMA)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("init_schema", e))?;
        debug!("postgres products schema ready");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    #[instrument(skip(self, payload))]
    async fn create(&self, payload: NewProduct) -> Result<Product, CatalogStoreError> {
        let product = Product::create(ProductId::new(), payload)?;
        let row = ProductRow::from_product(&product);

        sqlx::query(
            r#"
            INSERT INTO products (id, title, description, thumbnail_url, quantity, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(&row.thumbnail_url)
        .bind(row.quantity)
        .bind(row.price)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create", e))?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Product>, CatalogStoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, title, description, thumbnail_url, quantity, price
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("read_all", e))?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn delete_by_id(&self, id: ProductId) -> Result<bool, CatalogStoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;

        Ok(result.rows_affected() > 0)
    }
}
