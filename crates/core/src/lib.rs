//! Cakery Core - Shared types library.
//!
//! This crate provides common types used across all Cakery components:
//! - `server` - The catalog API binary
//! - `integration-tests` - API-level tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the order status

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
