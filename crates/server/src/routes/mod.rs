//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                             - Health check
//!
//! # Products
//! GET    /api/products                       - List all products
//! POST   /api/products                       - Create a product
//! GET    /api/products/{id}                  - Product by id
//! PUT    /api/products/{id}                  - Overwrite a product's fields
//! DELETE /api/products/{id}                  - Delete a product
//! GET    /api/products/category/{category}   - Products in a category (exact match)
//! GET    /api/products/search?query=         - Name substring search (case-insensitive)
//! GET    /api/products/price-range?min=&max= - Products priced within [min, max]
//! POST   /api/products/{id}/ratings          - Append a rating
//!
//! # Orders
//! GET    /api/orders                         - List all orders
//! POST   /api/orders                         - Create an order
//! GET    /api/orders/{id}                    - Order by id
//! PUT    /api/orders/{id}/status?status=     - Overwrite the order status
//! DELETE /api/orders/{id}                    - Delete an order
//! GET    /api/orders/user/{user_id}          - Orders for a user
//! GET    /api/orders/status/{status}         - Orders with a status
//!
//! # Users
//! GET    /api/users                          - List all users
//! POST   /api/users                          - Create a user
//! GET    /api/users/{id}                     - User by id
//! PUT    /api/users/{id}                     - Overwrite a user's fields
//! DELETE /api/users/{id}                     - Delete a user
//! GET    /api/users/email/{email}            - User by email (exact match)
//! ```
//!
//! Lookup misses surface uniformly as 404 with a JSON error body. A path
//! id that is not a well-formed UUID cannot name a stored entity, so it
//! reports 404 as well, not 400.

pub mod orders;
pub mod products;
pub mod users;

use std::str::FromStr;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the full application router.
///
/// CORS is wide open: the API serves browser storefronts on other origins.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/products", products::routes())
        .nest("/api/orders", orders::routes())
        .nest("/api/users", users::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// Parse a path segment into a typed entity id.
///
/// A malformed id cannot refer to any stored entity, so it maps to the
/// same not-found outcome as an absent one.
fn parse_id<T: FromStr>(entity: &str, raw: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("{entity} {raw}")))
}
