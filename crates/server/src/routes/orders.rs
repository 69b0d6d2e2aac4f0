//! Order routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Deserialize;

use cakery_core::{OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::models::{Order, OrderInput};
use crate::state::AppState;

use super::parse_id;

/// Create the order routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/user/{user_id}", get(orders_by_user))
        .route("/status/{status}", get(orders_by_status))
        .route("/{id}", get(get_order).delete(delete_order))
        .route("/{id}/status", put(update_order_status))
}

async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list().await?))
}

async fn get_order(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    let id: OrderId = parse_id("order", &id)?;
    let order = state
        .orders()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
    Ok(Json(order))
}

async fn orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_by_user(&user_id).await?))
}

async fn orders_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_by_status(&status).await?))
}

async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<OrderInput>,
) -> Result<Json<Order>> {
    Ok(Json(state.orders().create(input).await?))
}

#[derive(Debug, Deserialize)]
struct StatusParams {
    status: String,
}

async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StatusParams>,
) -> Result<Json<Order>> {
    let id: OrderId = parse_id("order", &id)?;
    let order = state
        .orders()
        .update_status(id, OrderStatus::new(params.status))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
    Ok(Json(order))
}

async fn delete_order(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id: OrderId = parse_id("order", &id)?;
    if state.orders().delete(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound(format!("order {id}")))
    }
}
