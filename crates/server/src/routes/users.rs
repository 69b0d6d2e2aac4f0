//! User routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use cakery_core::UserId;

use crate::error::{AppError, Result};
use crate::models::{User, UserInput};
use crate::state::AppState;

use super::parse_id;

/// Create the user routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/email/{email}", get(user_by_email))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.users().list().await?))
}

async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<User>> {
    let id: UserId = parse_id("user", &id)?;
    let user = state
        .users()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
    Ok(Json(user))
}

async fn user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<User>> {
    let user = state
        .users()
        .get_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {email}")))?;
    Ok(Json(user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<Json<User>> {
    Ok(Json(state.users().create(input).await?))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UserInput>,
) -> Result<Json<User>> {
    let id: UserId = parse_id("user", &id)?;
    let user = state
        .users()
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
    Ok(Json(user))
}

async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id: UserId = parse_id("user", &id)?;
    if state.users().delete(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound(format!("user {id}")))
    }
}
