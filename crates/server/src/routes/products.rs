//! Product routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use cakery_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{Product, ProductInput, Rating};
use crate::state::AppState;

use super::parse_id;

/// Create the product routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/price-range", get(products_in_price_range))
        .route("/category/{category}", get(products_by_category))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/ratings", post(add_rating))
}

async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products().list().await?))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id: ProductId = parse_id("product", &id)?;
    let product = state
        .products()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}

async fn products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products().list_by_category(&category).await?))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
}

async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products().search(&params.query).await?))
}

#[derive(Debug, Deserialize)]
struct PriceRangeParams {
    min: Decimal,
    max: Decimal,
}

async fn products_in_price_range(
    State(state): State<AppState>,
    Query(params): Query<PriceRangeParams>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(
        state
            .products()
            .list_by_price_range(params.min, params.max)
            .await?,
    ))
}

async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    Ok(Json(state.products().create(input).await?))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let id: ProductId = parse_id("product", &id)?;
    let product = state
        .products()
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id: ProductId = parse_id("product", &id)?;
    if state.products().delete(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound(format!("product {id}")))
    }
}

async fn add_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(rating): Json<Rating>,
) -> Result<Json<Product>> {
    let id: ProductId = parse_id("product", &id)?;
    let product = state
        .products()
        .add_rating(id, rating)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}
