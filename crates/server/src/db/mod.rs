//! Store adapters for the catalog.
//!
//! The services consume a narrow per-entity contract ([`ProductStore`],
//! [`OrderStore`], [`UserStore`]): find, save (an upsert that assigns the
//! id when missing), existence check, delete, and a handful of filtered
//! finds. Two implementations exist:
//!
//! - Postgres-backed stores ([`PgProductStore`], [`PgOrderStore`],
//!   [`PgUserStore`]) — each entity persists as one document-shaped row,
//!   nested sequences in JSONB.
//! - In-memory stores in [`memory`], the test doubles for the service and
//!   API tests.
//!
//! The pool is created once at startup and injected into the stores; no
//! module reaches for ambient connection state.
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and are embedded via
//! `sqlx::migrate!`, run by the binary at startup.

pub mod memory;
pub mod orders;
pub mod products;
pub mod users;

pub use orders::{OrderStore, PgOrderStore};
pub use products::{PgProductStore, ProductStore};
pub use users::{PgUserStore, UserStore};

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors surfaced by a store adapter.
///
/// Expected lookup misses are not errors — they come back as `Option` or
/// `bool` from the store methods.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a Postgres connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Escape LIKE/ILIKE metacharacters so a search term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
