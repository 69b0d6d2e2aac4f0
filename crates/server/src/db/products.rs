//! Product store: contract and Postgres implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use cakery_core::ProductId;

use super::{StoreError, escape_like};
use crate::models::{Product, Rating};

/// Persistence contract for products.
///
/// `save` is an upsert: it assigns a fresh id when the product has none and
/// otherwise overwrites the stored record wholesale. `delete_by_id` is
/// no-op-safe; callers check existence first when they need a truthful
/// "deleted" answer.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Persist the product, assigning an id if it has none. Returns the
    /// stored entity.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError>;

    /// Remove the product if present; removing an absent id is a no-op.
    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError>;

    /// Exact-match category filter, case-sensitive.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError>;

    /// Case-insensitive substring match on the product name.
    async fn find_by_name_containing(&self, query: &str) -> Result<Vec<Product>, StoreError>;

    /// Products priced within `[min, max]`, bounds inclusive.
    async fn find_by_price_range(&self, min: Decimal, max: Decimal)
    -> Result<Vec<Product>, StoreError>;
}

/// Postgres-backed product store.
///
/// A product is one row; its ratings live in a JSONB column so the entity
/// reads and writes as a single document.
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    price: Decimal,
    category: String,
    image_url: String,
    stock_quantity: i32,
    ratings: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, StoreError> {
        let ratings: Vec<Rating> = serde_json::from_value(self.ratings).map_err(|e| {
            StoreError::DataCorruption(format!("invalid ratings for product {}: {e}", self.id))
        })?;

        Ok(Product {
            id: Some(ProductId::new(self.id)),
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
            stock_quantity: self.stock_quantity,
            ratings,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn rows_into_products(rows: Vec<ProductRow>) -> Result<Vec<Product>, StoreError> {
    rows.into_iter().map(ProductRow::into_product).collect()
}

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, category, image_url, stock_quantity, ratings, \
     created_at, updated_at";

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products"))
                .fetch_all(&self.pool)
                .await?;
        rows_into_products(rows)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row: Option<ProductRow> =
            sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(ProductRow::into_product).transpose()
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let id = product.id.unwrap_or_else(ProductId::generate);
        let ratings = serde_json::to_value(&product.ratings).map_err(|e| {
            StoreError::DataCorruption(format!("unencodable ratings for product {id}: {e}"))
        })?;

        let row: ProductRow = sqlx::query_as(&format!(
            "INSERT INTO products \
                 (id, name, description, price, category, image_url, stock_quantity, \
                  ratings, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 description = EXCLUDED.description, \
                 price = EXCLUDED.price, \
                 category = EXCLUDED.category, \
                 image_url = EXCLUDED.image_url, \
                 stock_quantity = EXCLUDED.stock_quantity, \
                 ratings = EXCLUDED.ratings, \
                 created_at = EXCLUDED.created_at, \
                 updated_at = EXCLUDED.updated_at \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(product.name.as_str())
        .bind(product.description.as_str())
        .bind(product.price)
        .bind(product.category.as_str())
        .bind(product.image_url.as_str())
        .bind(product.stock_quantity)
        .bind(ratings)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await?;

        row.into_product()
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE category = $1"))
                .bind(category)
                .fetch_all(&self.pool)
                .await?;
        rows_into_products(rows)
    }

    async fn find_by_name_containing(&self, query: &str) -> Result<Vec<Product>, StoreError> {
        let pattern = format!("%{}%", escape_like(query));
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE name ILIKE $1"))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?;
        rows_into_products(rows)
    }

    async fn find_by_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE price >= $1 AND price <= $2"
        ))
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?;
        rows_into_products(rows)
    }
}
