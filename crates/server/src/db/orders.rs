//! Order store: contract and Postgres implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use cakery_core::{OrderId, OrderStatus};

use super::StoreError;
use crate::models::{Order, OrderItem};

/// Persistence contract for orders.
///
/// Same shape as the product contract: `save` upserts and assigns missing
/// ids, `delete_by_id` is no-op-safe, and the filtered finds are exact
/// matches.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Order>, StoreError>;

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    async fn save(&self, order: Order) -> Result<Order, StoreError>;

    async fn exists_by_id(&self, id: OrderId) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError>;

    /// Orders placed under the given user id, exact match.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Order>, StoreError>;

    /// Orders whose status equals the given value, exact match.
    async fn find_by_status(&self, status: &str) -> Result<Vec<Order>, StoreError>;
}

/// Postgres-backed order store. Order items live in a JSONB column.
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: String,
    status: String,
    customer_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    delivery_address: Option<String>,
    items: serde_json::Value,
    total_amount: Option<Decimal>,
    special_instructions: Option<String>,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, StoreError> {
        let items: Vec<OrderItem> = serde_json::from_value(self.items).map_err(|e| {
            StoreError::DataCorruption(format!("invalid items for order {}: {e}", self.id))
        })?;

        Ok(Order {
            id: Some(OrderId::new(self.id)),
            user_id: self.user_id,
            status: OrderStatus::new(self.status),
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            delivery_address: self.delivery_address,
            items,
            total_amount: self.total_amount,
            special_instructions: self.special_instructions,
            created_at: self.created_at,
        })
    }
}

fn rows_into_orders(rows: Vec<OrderRow>) -> Result<Vec<Order>, StoreError> {
    rows.into_iter().map(OrderRow::into_order).collect()
}

const ORDER_COLUMNS: &str =
    "id, user_id, status, customer_name, email, phone, delivery_address, items, \
     total_amount, special_instructions, created_at";

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows: Vec<OrderRow> = sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders"))
            .fetch_all(&self.pool)
            .await?;
        rows_into_orders(rows)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let row: Option<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(OrderRow::into_order).transpose()
    }

    async fn save(&self, order: Order) -> Result<Order, StoreError> {
        let id = order.id.unwrap_or_else(OrderId::generate);
        let items = serde_json::to_value(&order.items).map_err(|e| {
            StoreError::DataCorruption(format!("unencodable items for order {id}: {e}"))
        })?;

        let row: OrderRow = sqlx::query_as(&format!(
            "INSERT INTO orders \
                 (id, user_id, status, customer_name, email, phone, delivery_address, \
                  items, total_amount, special_instructions, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (id) DO UPDATE SET \
                 user_id = EXCLUDED.user_id, \
                 status = EXCLUDED.status, \
                 customer_name = EXCLUDED.customer_name, \
                 email = EXCLUDED.email, \
                 phone = EXCLUDED.phone, \
                 delivery_address = EXCLUDED.delivery_address, \
                 items = EXCLUDED.items, \
                 total_amount = EXCLUDED.total_amount, \
                 special_instructions = EXCLUDED.special_instructions, \
                 created_at = EXCLUDED.created_at \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(order.user_id.as_str())
        .bind(order.status.as_str())
        .bind(order.customer_name.as_deref())
        .bind(order.email.as_deref())
        .bind(order.phone.as_deref())
        .bind(order.delivery_address.as_deref())
        .bind(items)
        .bind(order.total_amount)
        .bind(order.special_instructions.as_deref())
        .bind(order.created_at)
        .fetch_one(&self.pool)
        .await?;

        row.into_order()
    }

    async fn exists_by_id(&self, id: OrderId) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        let rows: Vec<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1"))
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        rows_into_orders(rows)
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Order>, StoreError> {
        let rows: Vec<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE status = $1"))
                .bind(status)
                .fetch_all(&self.pool)
                .await?;
        rows_into_orders(rows)
    }
}
