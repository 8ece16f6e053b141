//! # Router Tests
//!
//! Full HTTP round trips through the axum router.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use common::TestContext;
use serde_json::{json, Value};
use server::create_app_router;
use tower::ServiceExt;

async fn app() -> Router { create_app_router(TestContext::new().await.state) }

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> { Request::builder().uri(uri).body(Body::empty()).unwrap() }

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    }
    else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_and_retrieve_indicator() {
    let app = app().await;

    let (status, created) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/indicators",
            json!({ "name": "Literacy Rate", "direction": "increasing", "actuals": "7.25" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["actuals"], "7.2500");
    assert_eq!(created["objective_ids"], json!([]));
    assert!(created.get("display").is_none());

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(
        &app,
        get(&format!("/api/v1/indicators/{}?with_associations=true", id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["indicator_uuid"], created["indicator_uuid"]);
    assert_eq!(fetched["display"]["just_created"], true);
    assert_eq!(fetched["display"]["objectives_list"], "");
    assert_eq!(fetched["display"]["levels"], Value::Null);
}

#[tokio::test]
async fn test_client_uuid_is_ignored() {
    let app = app().await;
    let (status, created) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/indicators",
            json!({ "name": "Literacy Rate", "indicator_uuid": "chosen-by-client" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["indicator_uuid"], "chosen-by-client");
}

#[tokio::test]
async fn test_missing_indicator_returns_404() {
    let app = app().await;
    let (status, body) = send(&app, get("/api/v1/indicators/41")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Indicator 41 not found");
}

#[tokio::test]
async fn test_missing_required_field_returns_422() {
    let app = app().await;
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/v1/indicators", json!({ "direction": "increasing" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().starts_with("name: This field is required"));
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/levels")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let app = app().await;
    let (status, body) = send(&app, get("/api/v1/levels/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_level_lifecycle() {
    let app = app().await;

    let (status, level) = send(
        &app,
        json_request(Method::POST, "/api/v1/levels", json!({ "name": "Goal", "sort": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/api/v1/levels/{}", level["id"]);

    let (status, updated) = send(
        &app,
        json_request(Method::PUT, &uri, json!({ "name": "Impact", "color": "#ff7f0e" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Impact");
    assert_eq!(updated["sort"], 0);

    let (status, listed) = send(&app, get("/api/v1/levels?per_page=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["pagination"]["per_page"], 5);
    assert_eq!(listed["levels"].as_array().unwrap().len(), 1);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let (status, deleted) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_periodic_target_requires_indicator() {
    let app = app().await;
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/v1/periodic-targets", json!({ "period": "Q1" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "indicator_id: This field is required.");
}

#[tokio::test]
async fn test_request_id_header() {
    let app = app().await;

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/api/v1/objectives")
        .header("x-request-id", "trace-abc-12345")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "trace-abc-12345");
}
