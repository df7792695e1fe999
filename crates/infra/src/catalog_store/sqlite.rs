//! SQLite-backed catalog store.
//!
//! Each operation is a single SQL statement executed on a pooled connection,
//! which SQLite runs as its own implicit transaction.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, instrument};

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product};

use super::row::ProductRow;
use super::{map_sqlx_error, CatalogStore, CatalogStoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id            BLOB    PRIMARY KEY NOT NULL,
    title         TEXT    NOT NULL CHECK (length(trim(title, ' ' || char(9, 10, 11, 12, 13))) > 0),
    description   TEXT    NOT NULL DEFAULT '',
    thumbnail_url TEXT    NOT NULL DEFAULT '',
    quantity      INTEGER NOT NULL CHECK (quantity >= 0),
    price         REAL    NOT NULL CHECK (price >= 0)
)
"#;

/// SQLite-backed catalog store.
#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    /// Wrap an existing pool. The schema is not touched; call
    /// [`SqliteCatalogStore::init_schema`] if the table may be missing.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `url` and ensure the schema exists.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, CatalogStoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| map_sqlx_error("connect", e))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// A private in-memory database, for tests and throwaway runs.
    ///
    /// Pinned to one connection that is never recycled: every SQLite
    /// `:memory:` connection is a separate database.
    pub async fn in_memory() -> Result<Self, CatalogStoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| map_sqlx_error("connect", e))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub async fn init_schema(&self) -> Result<(), CatalogStoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("init_schema", e))?;
        debug!("sqlite products schema ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    #[instrument(skip(self, payload))]
    async fn create(&self, payload: NewProduct) -> Result<Product, CatalogStoreError> {
        let product = Product::create(ProductId::new(), payload)?;
        let row = ProductRow::from_product(&product);

        sqlx::query(
            r#"
            INSERT INTO products (id, title, description, thumbnail_url, quantity, price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(&row.thumbnail_url)
        .bind(row.quantity)
        .bind(row.price)
        .execute(&self.pool)
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
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("read_all", e))?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn delete_by_id(&self, id: ProductId) -> Result<bool, CatalogStoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;

        Ok(result.rows_affected() > 0)
    }
}
