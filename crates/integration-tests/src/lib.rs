//! Shared helpers for API-level tests.
//!
//! The tests drive the full application router over fresh in-memory
//! stores, one router per test, so every test starts from an empty
//! catalog.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::ServiceExt;

use cakery_server::db::memory::{MemoryOrderStore, MemoryProductStore, MemoryUserStore};
use cakery_server::routes;
use cakery_server::state::AppState;

/// Build the full application router over fresh in-memory stores.
#[must_use]
pub fn test_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryProductStore::new()),
        Arc::new(MemoryOrderStore::new()),
        Arc::new(MemoryUserStore::new()),
    );
    routes::router(state)
}

/// Send one request to the router and collect the response.
///
/// The body comes back as JSON when it parses, otherwise as a string
/// value (e.g. the `/health` body); an empty body is `Value::Null`.
///
/// # Panics
///
/// Panics when the request cannot be built or sent — test-fatal either way.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = app.oneshot(request).await.expect("request is handled");
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}
