//! Root directory and fallback tests

mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_root_lists_every_route() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);

    let expected = json!({
        "/": ["GET"],
        "/people": ["GET", "POST"],
        "/people/:id": ["GET", "PUT", "DELETE"],
        "/planets": ["GET", "POST"],
        "/planets/:id": ["GET", "PUT", "DELETE"],
        "/users": ["GET"],
        "/users/favorites": ["GET"],
        "/favorite/planet/:id": ["POST", "DELETE"],
        "/favorite/people/:id": ["POST", "DELETE"]
    });
    assert_eq!(body["routes"], expected);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/vehicles").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn test_non_integer_id_is_404() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/people/luke").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));

    let (status, _) = app.post_empty("/favorite/planet/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let app = TestApp::new().await;
    let planet = app.seed_planet("Kashyyyk").await;

    let (status, listed) = app.get("/planets/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) = app.get(&format!("/planets/{}/", planet)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Kashyyyk");

    let (status, _) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::PATCH, "/people", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));

    let (status, body) = app.send(Method::PUT, "/users", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}
