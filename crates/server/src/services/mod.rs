//! Business logic services for the catalog.
//!
//! One service per entity type. Each service is stateless per call and owns
//! only an injected store handle; all the decision logic in the backend —
//! update merge rules, existence-gated deletes, rating appends, status
//! overwrites — lives here.
//!
//! # Services
//!
//! - [`products`] - product lifecycle, field overwrites, rating appends
//! - [`orders`] - order reads, free-form status overwrites
//! - [`users`] - user lifecycle and field overwrites

pub mod orders;
pub mod products;
pub mod users;

pub use orders::OrderService;
pub use products::ProductService;
pub use users::UserService;
