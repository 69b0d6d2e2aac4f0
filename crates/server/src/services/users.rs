//! User service: lifecycle and merge rules for users.
//!
//! Updates follow the same whole-field overwrite as products: username,
//! email, phone and address are all replaced on every update. Emails are a
//! natural key in intent only — creation performs no uniqueness check, and
//! the email lookup is an exact, case-sensitive match.

use std::sync::Arc;

use cakery_core::UserId;

use crate::db::{StoreError, UserStore};
use crate::models::{User, UserInput};

/// Catalog operations for users.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// List every user, in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.store.find_all().await
    }

    /// Look up a user; `None` for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.store.find_by_id(id).await
    }

    /// Exact-match email lookup, no case folding. With duplicate emails in
    /// the store this returns an arbitrary one of them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.store.find_by_email(email).await
    }

    /// Create a user, persisted as given — no email uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn create(&self, input: UserInput) -> Result<User, StoreError> {
        self.store
            .save(User {
                id: None,
                username: input.username,
                email: input.email,
                phone: input.phone,
                address: input.address,
            })
            .await
    }

    /// Overwrite every client-owned field of an existing user. Returns
    /// `None` for an unknown id, with nothing written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn update(&self, id: UserId, input: UserInput) -> Result<Option<User>, StoreError> {
        let Some(mut user) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        user.username = input.username;
        user.email = input.email;
        user.phone = input.phone;
        user.address = input.address;

        self.store.save(user).await.map(Some)
    }

    /// Delete a user. `true` only when the user existed; repeated deletes
    /// report `false`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn delete(&self, id: UserId) -> Result<bool, StoreError> {
        if !self.store.exists_by_id(id).await? {
            return Ok(false);
        }
        self.store.delete_by_id(id).await?;
        Ok(true)
    }
}
