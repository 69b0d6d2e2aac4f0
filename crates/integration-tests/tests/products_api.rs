//! Product API tests: creation, the whole-field update contract, rating
//! appends, filtered reads, and delete semantics.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use cakery_integration_tests::{send, test_app};

fn cake_payload(name: &str, price: &str) -> Value {
    json!({
        "name": name,
        "description": "a cake",
        "price": price,
        "category": "Cakes",
        "imageUrl": "images/cake.jpg",
        "stockQuantity": 5
    })
}

fn timestamp(body: &Value, field: &str) -> DateTime<Utc> {
    body[field]
        .as_str()
        .expect("timestamp string")
        .parse()
        .expect("rfc3339 timestamp")
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = test_app();
    let (status, body) = send(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_owned()));
}

#[tokio::test]
async fn empty_catalog_lists_no_products() {
    let app = test_app();
    let (status, body) = send(app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_assigns_id_and_equal_timestamps() {
    let app = test_app();

    let (status, created) = send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Cake A", "10.00")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = created["id"].as_str().expect("assigned id");
    assert!(!id.is_empty());
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert_eq!(created["ratings"], json!([]));

    let (status, fetched) = send(app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Cake A");
    assert_eq!(fetched["price"], "10.00");
}

#[tokio::test]
async fn update_scenario_overwrites_fields_and_advances_updated_at() {
    let app = test_app();

    let (_, created) = send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Cake A", "10.00")),
    )
    .await;
    let id = created["id"].as_str().expect("assigned id").to_owned();
    let created_at = timestamp(&created, "createdAt");

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let patch = json!({
        "name": "Cake A2",
        "price": "12.50",
        "stockQuantity": 5,
        "description": "",
        "category": "",
        "imageUrl": ""
    });
    let (status, _) = send(app.clone(), "PUT", &format!("/api/products/{id}"), Some(patch)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(fetched["name"], "Cake A2");
    assert_eq!(fetched["price"], "12.50");
    assert_eq!(fetched["description"], "");
    assert_eq!(timestamp(&fetched, "createdAt"), created_at);
    assert!(timestamp(&fetched, "updatedAt") > created_at);
}

#[tokio::test]
async fn update_of_absent_product_is_not_found() {
    let app = test_app();
    let (status, _) = send(
        app,
        "PUT",
        "/api/products/00000000-0000-0000-0000-000000000000",
        Some(cake_payload("Ghost", "1.00")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_reads_as_not_found() {
    let app = test_app();
    let (status, body) = send(app, "GET", "/api/products/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_reports_ok_then_not_found() {
    let app = test_app();

    let (_, created) = send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Cake A", "10.00")),
    )
    .await;
    let id = created["id"].as_str().expect("assigned id").to_owned();

    let (first, _) = send(app.clone(), "DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(first, StatusCode::OK);

    let (second, _) = send(app.clone(), "DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);

    let (never_created, _) = send(
        app,
        "DELETE",
        "/api/products/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(never_created, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ratings_append_in_request_order() {
    let app = test_app();

    let (_, created) = send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Cake A", "10.00")),
    )
    .await;
    let id = created["id"].as_str().expect("assigned id").to_owned();
    let uri = format!("/api/products/{id}/ratings");

    let (status, rated) = send(
        app.clone(),
        "POST",
        &uri,
        Some(json!({"score": 5, "comment": "lovely"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rated["ratings"].as_array().expect("ratings").len(), 1);

    let (_, rated_again) = send(app.clone(), "POST", &uri, Some(json!({"score": 2}))).await;
    let ratings = rated_again["ratings"].as_array().expect("ratings");
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings.last().expect("last")["score"], 2);
}

#[tokio::test]
async fn rating_an_absent_product_is_not_found() {
    let app = test_app();
    let (status, _) = send(
        app,
        "POST",
        "/api/products/00000000-0000-0000-0000-000000000000/ratings",
        Some(json!({"score": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_filter_is_exact_and_case_sensitive() {
    let app = test_app();
    send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Chocolate Cake", "29.99")),
    )
    .await;

    let (_, hits) = send(app.clone(), "GET", "/api/products/category/Cakes", None).await;
    assert_eq!(hits.as_array().expect("list").len(), 1);

    let (_, misses) = send(app, "GET", "/api/products/category/cakes", None).await;
    assert_eq!(misses, json!([]));
}

#[tokio::test]
async fn search_is_case_insensitive_substring_match() {
    let app = test_app();
    send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Chocolate Cake", "29.99")),
    )
    .await;

    let (_, hits) = send(app.clone(), "GET", "/api/products/search?query=CHOC", None).await;
    assert_eq!(hits.as_array().expect("list").len(), 1);

    let (_, misses) = send(app, "GET", "/api/products/search?query=pie", None).await;
    assert_eq!(misses, json!([]));
}

#[tokio::test]
async fn price_range_is_inclusive() {
    let app = test_app();
    send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Cheap", "5.00")),
    )
    .await;
    send(
        app.clone(),
        "POST",
        "/api/products",
        Some(cake_payload("Dear", "25.50")),
    )
    .await;

    let (status, hits) = send(
        app,
        "GET",
        "/api/products/price-range?min=5.00&max=10.00",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().expect("list").len(), 1);
}
