//! Order status as an open string value.
//!
//! The catalog deliberately does not enforce a status state machine. Any
//! string is a valid status, every value is reachable from every other, and
//! callers may introduce values the system has never seen. This is the
//! designed behavior, not an omission: status lifecycle policy lives with
//! the clients, not in the backend.

use serde::{Deserialize, Serialize};

/// An order status value.
///
/// Well-known values are provided as constants for convenience; nothing
/// restricts a status to that set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Order received, not yet confirmed.
    pub const PENDING: &'static str = "PENDING";
    /// Order confirmed by the shop.
    pub const CONFIRMED: &'static str = "CONFIRMED";
    /// Order handed to delivery.
    pub const SHIPPED: &'static str = "SHIPPED";
    /// Order delivered to the customer.
    pub const DELIVERED: &'static str = "DELIVERED";
    /// Order cancelled.
    pub const CANCELLED: &'static str = "CANCELLED";

    /// Wrap any string as a status value.
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// Get the status as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderStatus {
    fn from(status: String) -> Self {
        Self(status)
    }
}

impl From<&str> for OrderStatus {
    fn from(status: &str) -> Self {
        Self(status.to_owned())
    }
}
