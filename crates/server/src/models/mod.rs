//! Domain types for the catalog.
//!
//! Entities serialize in camelCase to match the JSON the storefront
//! clients exchange. Each entity's `id` is `None` until the store assigns
//! one; relationships between entities are by identifier, never by
//! reference.

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderInput, OrderItem};
pub use product::{Product, ProductInput, Rating};
pub use user::{User, UserInput};
