//! User store: contract and Postgres implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use cakery_core::UserId;

use super::StoreError;
use crate::models::User;

/// Persistence contract for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    async fn save(&self, user: User) -> Result<User, StoreError>;

    async fn exists_by_id(&self, id: UserId) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: UserId) -> Result<(), StoreError>;

    /// Exact-match email lookup, no case folding. Emails are not unique;
    /// when duplicates exist this returns an arbitrary one of them.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// Postgres-backed user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    phone: String,
    address: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: Some(UserId::new(row.id)),
            username: row.username,
            email: row.email,
            phone: row.phone,
            address: row.address,
        }
    }
}

const USER_COLUMNS: &str = "id, username, email, phone, address";

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(User::from))
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        let id = user.id.unwrap_or_else(UserId::generate);

        let row: UserRow = sqlx::query_as(&format!(
            "INSERT INTO users (id, username, email, phone, address) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
                 username = EXCLUDED.username, \
                 email = EXCLUDED.email, \
                 phone = EXCLUDED.phone, \
                 address = EXCLUDED.address \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.phone.as_str())
        .bind(user.address.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }
}
