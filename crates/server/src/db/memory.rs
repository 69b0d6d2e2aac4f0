//! In-memory store implementations.
//!
//! Test doubles for the Postgres stores: same contract, a `HashMap` behind
//! an async `RwLock` instead of a pool. Iteration order is arbitrary, which
//! matches the stores' "order unspecified" listing semantics.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use cakery_core::{OrderId, ProductId, UserId};

use super::{OrderStore, ProductStore, StoreError, UserStore};
use crate::models::{Order, Product, User};

/// In-memory [`ProductStore`].
#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl MemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product, StoreError> {
        let id = product.id.unwrap_or_else(ProductId::generate);
        product.id = Some(id);
        self.products.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.products.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        self.products.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_name_containing(&self, query: &str) -> Result<Vec<Product>, StoreError> {
        let needle = query.to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|p| p.price >= min && p.price <= max)
            .cloned()
            .collect())
    }
}

/// In-memory [`OrderStore`].
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl MemoryOrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn save(&self, mut order: Order) -> Result<Order, StoreError> {
        let id = order.id.unwrap_or_else(OrderId::generate);
        order.id = Some(id);
        self.orders.write().await.insert(id, order.clone());
        Ok(order)
    }

    async fn exists_by_id(&self, id: OrderId) -> Result<bool, StoreError> {
        Ok(self.orders.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError> {
        self.orders.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.status.as_str() == status)
            .cloned()
            .collect())
    }
}

/// In-memory [`UserStore`].
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        let id = user.id.unwrap_or_else(UserId::generate);
        user.id = Some(id);
        self.users.write().await.insert(id, user.clone());
        Ok(user)
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, StoreError> {
        Ok(self.users.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), StoreError> {
        self.users.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}
