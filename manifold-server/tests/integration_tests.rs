//! Integration tests for the Manifold demo server

use axum::{
    routing::{get, post},
    Router,
};
use manifold_server::{handlers, AppState, UserStore};
use serde_json::{json, Value};
use std::sync::Arc;
use std::sync::Once;

static INIT: Once = Once::new();

/// Test server setup helper
async fn setup_test_server() -> (String, tokio::task::JoinHandle<()>) {
    // Initialize Prometheus metrics (only once for all tests)
    INIT.call_once(|| {
        manifold_server::metrics::init_prometheus().expect("Failed to init Prometheus");
        manifold_server::metrics::init_metrics();
    });

    let store = Arc::new(UserStore::new());
    let state = AppState::new(store);

    let app = Router::new()
        .route("/v1/users", post(handlers::create_user))
        .route(
            "/v1/users/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .route("/v1/users/batch", post(handlers::batch_create_users))
        .route("/health/live", get(handlers::health_live))
        .route("/metrics", get(handlers::metrics_endpoint))
        .with_state(state);

    // Find an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to port");
    let addr = listener.local_addr().expect("Failed to get local address");
    let base_url = format!("http://{}", addr);

    // Spawn the server
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    (base_url, handle)
}

async fn create_user(client: &reqwest::Client, base_url: &str, name: &str) -> reqwest::Response {
    client
        .post(format!("{}/v1/users", base_url))
        .json(&json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
        }))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
async fn test_health_live() {
    let (base_url, _handle) = setup_test_server().await;

    let response = reqwest::get(format!("{}/health/live", base_url))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["data"]["users"], 0);
}

#[tokio::test]
async fn test_create_and_fetch_user() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let response = create_user(&client, &base_url, "Alice").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "OK");
    let id = body["data"]["id"].as_u64().expect("id should be numeric");

    let response = client
        .get(format!("{}/v1/users/{}", base_url, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({
            "status": "OK",
            "data": {"id": id, "name": "Alice", "email": "alice@example.com"}
        })
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_bad_request() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/users", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"status": "Error", "error": "invalid request payload"})
    );
}

#[tokio::test]
async fn test_short_name_fails_validation() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    // Decodes fine, then breaches the min-length-2 name rule
    let response = client
        .post(format!("{}/v1/users", base_url))
        .json(&json!({"name": "A", "email": "a@example.com"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"status": "Error", "error": "invalid input data"})
    );
}

#[tokio::test]
async fn test_delete_user_roundtrip() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let response = create_user(&client, &base_url, "Alice").await;
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["data"]["id"].as_u64().expect("id should be numeric");

    let response = client
        .delete(format!("{}/v1/users/{}", base_url, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"status": "OK"}));

    let response = client
        .get(format!("{}/v1/users/{}", base_url, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/v1/users/999", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"status": "Error", "error": "user not found"}));
}

#[tokio::test]
async fn test_duplicate_user_is_a_conflict() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let response = create_user(&client, &base_url, "Alice").await;
    assert_eq!(response.status().as_u16(), 200);

    let response = create_user(&client, &base_url, "Alice").await;
    assert_eq!(response.status().as_u16(), 409);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"status": "Error", "error": "user already exists"})
    );
}

#[tokio::test]
async fn test_batch_partial_failure_reports_the_outcome() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let response = create_user(&client, &base_url, "Alice").await;
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .post(format!("{}/v1/users/batch", base_url))
        .json(&json!({
            "users": [
                {"name": "Alice", "email": "alice@example.com"},
                {"name": "Bob", "email": "bob@example.com"},
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 409);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Error");
    assert_eq!(body["error"], "some users were not created");
    assert_eq!(body["data"]["created"][0]["name"], "Bob");
    assert_eq!(body["data"]["failed"][0]["name"], "Alice");
    assert_eq!(body["data"]["failed"][0]["reason"], "user already exists");
}

#[tokio::test]
async fn test_batch_of_all_new_users_succeeds() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/users/batch", base_url))
        .json(&json!({
            "users": [
                {"name": "Alice", "email": "alice@example.com"},
                {"name": "Bob", "email": "bob@example.com"},
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["data"]["created"].as_array().unwrap().len(), 2);
    assert!(body["data"]["failed"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_metrics_endpoint_reports_requests() {
    let (base_url, _handle) = setup_test_server().await;
    let client = reqwest::Client::new();

    // Drive at least one handled request through the pipeline first
    let response = create_user(&client, &base_url, "Metrics").await;
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .get(format!("{}/metrics", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let text = response.text().await.expect("Failed to read body");
    assert!(text.contains("manifold_requests_total"));
}
