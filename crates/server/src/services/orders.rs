//! Order service: reads and the status-overwrite rule.
//!
//! `update_status` is a free-form overwrite, not a state machine: any
//! string is a valid status and every value is reachable from every other.
//! This is the designed behavior — status lifecycle policy belongs to the
//! clients. Like every mutation here it is read-modify-write over a
//! transient copy, so concurrent writers to the same order can lose
//! updates.

use std::sync::Arc;

use chrono::Utc;

use cakery_core::{OrderId, OrderStatus};

use crate::db::{OrderStore, StoreError};
use crate::models::{Order, OrderInput};

/// Catalog operations for orders.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    #[must_use]
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// List every order, in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn list(&self) -> Result<Vec<Order>, StoreError> {
        self.store.find_all().await
    }

    /// Look up an order; `None` for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        self.store.find_by_id(id).await
    }

    /// Orders placed under a user id, exact match. The user id is not
    /// checked against the users collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        self.store.find_by_user_id(user_id).await
    }

    /// Orders with the given status, exact match.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, StoreError> {
        self.store.find_by_status(status).await
    }

    /// Create an order, persisted as given: no default status, no
    /// validation of the referenced user. `created_at` is stamped now.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn create(&self, input: OrderInput) -> Result<Order, StoreError> {
        self.store
            .save(Order {
                id: None,
                user_id: input.user_id,
                status: input.status,
                customer_name: input.customer_name,
                email: input.email,
                phone: input.phone,
                delivery_address: input.delivery_address,
                items: input.items,
                total_amount: input.total_amount,
                special_instructions: input.special_instructions,
                created_at: Utc::now(),
            })
            .await
    }

    /// Overwrite the order's status with `status` — any value, including
    /// ones never seen before. Returns `None` for an unknown id, with
    /// nothing written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let Some(mut order) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        order.status = status;
        self.store.save(order).await.map(Some)
    }

    /// Delete an order. `true` only when the order existed; repeated
    /// deletes report `false`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn delete(&self, id: OrderId) -> Result<bool, StoreError> {
        if !self.store.exists_by_id(id).await? {
            return Ok(false);
        }
        self.store.delete_by_id(id).await?;
        Ok(true)
    }
}
