//! Cakery catalog API server.
//!
//! CRUD backend for a bakery e-commerce catalog: products (with ratings),
//! orders, and users, stored in Postgres as document-shaped rows.
//!
//! # Startup
//!
//! Configuration comes from the environment (see `cakery_server::config`).
//! The database pool is created once here and injected into the services;
//! embedded migrations run before the listener binds.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cakery_server::config::ServerConfig;
use cakery_server::db::{self, PgOrderStore, PgProductStore, PgUserStore};
use cakery_server::routes;
use cakery_server::state::AppState;

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cakery_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState::new(
        Arc::new(PgProductStore::new(pool.clone())),
        Arc::new(PgOrderStore::new(pool.clone())),
        Arc::new(PgUserStore::new(pool)),
    );

    let app = routes::router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app).await.expect("Server error");
}
