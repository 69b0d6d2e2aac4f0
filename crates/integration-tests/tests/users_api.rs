//! User API tests: lifecycle, the whole-field update contract, and the
//! exact-match email lookup.

use axum::http::StatusCode;
use serde_json::{Value, json};

use cakery_integration_tests::{send, test_app};

fn user_payload(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "phone": "1234567890",
        "address": "1 Bakery Lane"
    })
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = test_app();

    let (status, created) = send(
        app.clone(),
        "POST",
        "/api/users",
        Some(user_payload("alice", "alice@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().expect("assigned id").to_owned();

    let (status, fetched) = send(app, "GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["username"], "alice");
    assert_eq!(fetched["email"], "alice@example.com");
}

#[tokio::test]
async fn email_lookup_is_exact_match() {
    let app = test_app();
    send(
        app.clone(),
        "POST",
        "/api/users",
        Some(user_payload("alice", "alice@example.com")),
    )
    .await;

    let (hit, body) = send(app.clone(), "GET", "/api/users/email/alice@example.com", None).await;
    assert_eq!(hit, StatusCode::OK);
    assert_eq!(body["username"], "alice");

    let (miss, _) = send(app, "GET", "/api/users/email/Alice@example.com", None).await;
    assert_eq!(miss, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_emails_are_both_created() {
    let app = test_app();
    send(
        app.clone(),
        "POST",
        "/api/users",
        Some(user_payload("alice", "shared@example.com")),
    )
    .await;
    send(
        app.clone(),
        "POST",
        "/api/users",
        Some(user_payload("bob", "shared@example.com")),
    )
    .await;

    let (_, all) = send(app, "GET", "/api/users", None).await;
    assert_eq!(all.as_array().expect("list").len(), 2);
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let app = test_app();

    let (_, created) = send(
        app.clone(),
        "POST",
        "/api/users",
        Some(user_payload("alice", "alice@example.com")),
    )
    .await;
    let id = created["id"].as_str().expect("assigned id").to_owned();

    let patch = json!({
        "username": "alice2",
        "email": "alice2@example.com",
        "phone": "",
        "address": ""
    });
    let (status, updated) = send(app.clone(), "PUT", &format!("/api/users/{id}"), Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["username"], "alice2");
    assert_eq!(updated["phone"], "");

    let (_, fetched) = send(app, "GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(fetched["email"], "alice2@example.com");
    assert_eq!(fetched["address"], "");
}

#[tokio::test]
async fn update_of_absent_user_is_not_found() {
    let app = test_app();
    let (status, _) = send(
        app,
        "PUT",
        "/api/users/00000000-0000-0000-0000-000000000000",
        Some(user_payload("ghost", "ghost@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_reports_ok_then_not_found() {
    let app = test_app();

    let (_, created) = send(
        app.clone(),
        "POST",
        "/api/users",
        Some(user_payload("alice", "alice@example.com")),
    )
    .await;
    let id = created["id"].as_str().expect("assigned id").to_owned();

    let (first, _) = send(app.clone(), "DELETE", &format!("/api/users/{id}"), None).await;
    assert_eq!(first, StatusCode::OK);

    let (second, _) = send(app, "DELETE", &format!("/api/users/{id}"), None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);
}
