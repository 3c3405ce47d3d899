//! Shared helpers for the HTTP integration tests.
//!
//! Requests go straight into the router through `tower::ServiceExt::oneshot`;
//! no TCP listener is involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use mentorhub_api::config::ServerConfig;
use mentorhub_api::router::build_app_router;
use mentorhub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a mentor through the API and return its id.
pub async fn create_mentor(pool: &PgPool, name: &str, email: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/faculty",
        serde_json::json!({
            "name": name,
            "email": email,
            "password": "secret",
            "department": "Computer Engineering",
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a student through the API and return its id.
pub async fn create_student(pool: &PgPool, name: &str, email: &str, mentor_id: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/student",
        serde_json::json!({
            "name": name,
            "prn": format!("PRN-{name}"),
            "email": email,
            "password": "secret",
            "mentor_id": mentor_id,
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Submit a project as a student and return `(id, project_code)`.
pub async fn submit_project(
    pool: &PgPool,
    title: &str,
    student_id: i64,
    mentor_id: i64,
) -> (i64, String) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/student/projects",
        serde_json::json!({
            "title": title,
            "description": "integration test project",
            "student_id": student_id,
            "mentor_id": mentor_id,
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    let json = body_json(response).await;
    (
        json["id"].as_i64().unwrap(),
        json["project_code"].as_str().unwrap().to_string(),
    )
}
