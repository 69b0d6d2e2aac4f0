//! Cakery catalog server library.
//!
//! This crate provides the catalog backend as a library, allowing the full
//! HTTP surface to be exercised in tests without a running server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
