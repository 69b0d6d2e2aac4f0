//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::{OrderStore, ProductStore, UserStore};
use crate::services::{OrderService, ProductService, UserService};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the three entity services; the
/// services themselves keep no per-request state, so the whole state is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    products: ProductService,
    orders: OrderService,
    users: UserService,
}

impl AppState {
    /// Create the application state over the given store handles.
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductStore>,
        orders: Arc<dyn OrderStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                products: ProductService::new(products),
                orders: OrderService::new(orders),
                users: UserService::new(users),
            }),
        }
    }

    /// Get the product service.
    #[must_use]
    pub fn products(&self) -> &ProductService {
        &self.inner.products
    }

    /// Get the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    /// Get the user service.
    #[must_use]
    pub fn users(&self) -> &UserService {
        &self.inner.users
    }
}
