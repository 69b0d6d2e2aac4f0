//! User domain types.

use serde::{Deserialize, Serialize};

use cakery_core::UserId;

/// A registered user.
///
/// The email is a natural key in intent only: nothing enforces uniqueness,
/// and the email lookup is an exact, case-sensitive match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier; `None` until the first save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Client-supplied user fields, shared by create and update requests.
///
/// As with products, an update replaces every field here unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}
