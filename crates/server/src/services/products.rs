//! Product service: lifecycle and merge rules for products.
//!
//! # Update semantics
//!
//! An update is a whole-record overwrite of the client-supplied fields:
//! name, description, price, category, image URL and stock quantity are all
//! replaced on every update, whether or not the caller meant to change
//! them. A caller that resends a stale or empty field loses the stored
//! value. Ratings and `created_at` are never taken from the request;
//! `updated_at` is reset on every mutation.
//!
//! # Concurrency
//!
//! Every mutation is read-modify-write over the caller's transient copy of
//! the entity; the store only sees whole-record saves. Two concurrent
//! writers to the same product can lose one another's write — e.g. two
//! concurrent `add_rating` calls can drop one append. Single-writer per
//! product is assumed.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use cakery_core::ProductId;

use crate::db::{ProductStore, StoreError};
use crate::models::{Product, ProductInput, Rating};

/// Catalog operations for products.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// List every product, in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.store.find_all().await
    }

    /// Look up a product; `None` for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.store.find_by_id(id).await
    }

    /// Products in a category, exact case-sensitive match.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        self.store.find_by_category(category).await
    }

    /// Products whose name contains `query`, case-insensitive. Plain
    /// substring match — no tokenization or ranking.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, StoreError> {
        self.store.find_by_name_containing(query).await
    }

    /// Products priced within `[min, max]`, bounds inclusive.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn list_by_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, StoreError> {
        self.store.find_by_price_range(min, max).await
    }

    /// Create a product. Both timestamps are set to now and the rating list
    /// starts empty; the stored entity comes back with its assigned id.
    ///
    /// Field values are persisted as given — a negative price or empty name
    /// is accepted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn create(&self, input: ProductInput) -> Result<Product, StoreError> {
        let now = Utc::now();
        self.store
            .save(Product {
                id: None,
                name: input.name,
                description: input.description,
                price: input.price,
                category: input.category,
                image_url: input.image_url,
                stock_quantity: input.stock_quantity,
                ratings: Vec::new(),
                created_at: now,
                updated_at: now,
            })
            .await
    }

    /// Overwrite the client-owned fields of an existing product.
    ///
    /// Returns `None` when the id is unknown; nothing is written in that
    /// case. Ratings and `created_at` are preserved from the stored entity;
    /// `updated_at` is reset. See the module docs for the overwrite
    /// semantics.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn update(
        &self,
        id: ProductId,
        input: ProductInput,
    ) -> Result<Option<Product>, StoreError> {
        let Some(mut product) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        product.category = input.category;
        product.image_url = input.image_url;
        product.stock_quantity = input.stock_quantity;
        product.updated_at = Utc::now();

        self.store.save(product).await.map(Some)
    }

    /// Delete a product. Returns `true` only when the product existed: the
    /// first delete of an id reports `true`, every later one `false`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        if !self.store.exists_by_id(id).await? {
            return Ok(false);
        }
        self.store.delete_by_id(id).await?;
        Ok(true)
    }

    /// Append a rating to a product, in arrival order.
    ///
    /// No dedup and no aggregate score; the whole product is persisted
    /// again with `updated_at` reset. Returns `None` for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub async fn add_rating(
        &self,
        id: ProductId,
        rating: Rating,
    ) -> Result<Option<Product>, StoreError> {
        let Some(mut product) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        product.ratings.push(rating);
        product.updated_at = Utc::now();

        self.store.save(product).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::db::memory::MemoryProductStore;

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryProductStore::new()))
    }

    fn dec(s: &str) -> Decimal {
        s.parse().expect("decimal literal")
    }

    fn cake(name: &str, price: &str) -> ProductInput {
        ProductInput {
            name: name.to_owned(),
            description: "a cake".to_owned(),
            price: dec(price),
            category: "Cakes".to_owned(),
            image_url: "images/cake.jpg".to_owned(),
            stock_quantity: 5,
        }
    }

    fn rating(score: i32) -> Rating {
        Rating {
            score,
            comment: Some("lovely".to_owned()),
            author: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let products = service();

        let created = products.create(cake("Cake A", "10.00")).await.expect("create");

        assert!(created.id.is_some());
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.ratings.is_empty());
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_record() {
        let products = service();

        let created = products.create(cake("Chocolate Cake", "29.99")).await.expect("create");
        let id = created.id.expect("assigned id");
        let fetched = products.get(id).await.expect("get").expect("present");

        assert_eq!(fetched.name, "Chocolate Cake");
        assert_eq!(fetched.price, dec("29.99"));
        assert_eq!(fetched.category, "Cakes");
        assert_eq!(fetched.created_at, created.created_at);
        assert_eq!(fetched.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let products = service();
        assert!(products.get(ProductId::generate()).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn update_unknown_id_is_none_and_writes_nothing() {
        let products = service();

        let result = products
            .update(ProductId::generate(), cake("Ghost", "1.00"))
            .await
            .expect("update");

        assert!(result.is_none());
        assert!(products.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_every_client_field() {
        let products = service();
        let created = products.create(cake("Cake A", "10.00")).await.expect("create");
        let id = created.id.expect("assigned id");

        // Empty strings are taken at face value: the overwrite has no
        // "only if present" semantics.
        let patch = ProductInput {
            name: "Cake A2".to_owned(),
            description: String::new(),
            price: dec("12.50"),
            category: String::new(),
            image_url: String::new(),
            stock_quantity: 5,
        };
        let updated = products.update(id, patch).await.expect("update").expect("present");

        assert_eq!(updated.name, "Cake A2");
        assert_eq!(updated.price, dec("12.50"));
        assert_eq!(updated.description, "");
        assert_eq!(updated.category, "");
        assert_eq!(updated.image_url, "");
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_ratings_resets_updated_at() {
        let products = service();
        let created = products.create(cake("Cake A", "10.00")).await.expect("create");
        let id = created.id.expect("assigned id");
        products.add_rating(id, rating(5)).await.expect("rate").expect("present");

        tokio::time::sleep(Duration::from_millis(5)).await;
        let updated = products
            .update(id, cake("Cake A2", "12.50"))
            .await
            .expect("update")
            .expect("present");

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.ratings.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_true_then_false() {
        let products = service();
        let created = products.create(cake("Cake A", "10.00")).await.expect("create");
        let id = created.id.expect("assigned id");

        assert!(products.delete(id).await.expect("first delete"));
        assert!(!products.delete(id).await.expect("second delete"));
    }

    #[tokio::test]
    async fn delete_of_never_created_id_is_false() {
        let products = service();
        assert!(!products.delete(ProductId::generate()).await.expect("delete"));
    }

    #[tokio::test]
    async fn add_rating_to_unknown_id_is_none() {
        let products = service();
        let result = products
            .add_rating(ProductId::generate(), rating(4))
            .await
            .expect("add_rating");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn add_rating_appends_in_arrival_order() {
        let products = service();
        let created = products.create(cake("Cake A", "10.00")).await.expect("create");
        let id = created.id.expect("assigned id");

        let once = products.add_rating(id, rating(5)).await.expect("rate").expect("present");
        assert_eq!(once.ratings.len(), 1);

        let twice = products.add_rating(id, rating(2)).await.expect("rate").expect("present");
        assert_eq!(twice.ratings.len(), 2);
        assert_eq!(twice.ratings.last().expect("last").score, 2);
    }

    #[tokio::test]
    async fn search_matches_substring_case_insensitively() {
        let products = service();
        products.create(cake("Chocolate Cake", "29.99")).await.expect("create");
        products.create(cake("Lemon Tart", "14.00")).await.expect("create");

        assert_eq!(products.search("choc").await.expect("search").len(), 1);
        assert_eq!(products.search("CAKE").await.expect("search").len(), 1);
        assert!(products.search("pie").await.expect("search").is_empty());
    }

    #[tokio::test]
    async fn category_filter_is_case_sensitive() {
        let products = service();
        products.create(cake("Chocolate Cake", "29.99")).await.expect("create");

        assert_eq!(products.list_by_category("Cakes").await.expect("list").len(), 1);
        assert!(products.list_by_category("cakes").await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn price_range_bounds_are_inclusive() {
        let products = service();
        products.create(cake("Cheap", "5.00")).await.expect("create");
        products.create(cake("Mid", "10.00")).await.expect("create");
        products.create(cake("Dear", "25.50")).await.expect("create");

        let within = products
            .list_by_price_range(dec("5.00"), dec("10.00"))
            .await
            .expect("range");
        assert_eq!(within.len(), 2);
    }
}
