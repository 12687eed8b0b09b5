#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use whocodes::{app, apply_migrations, connect, AppState, DatabaseConfig};

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    test_app_with_limit(1024 * 1024).await
}

/// Same as `test_app`, with request bodies capped at `body_limit_bytes`.
pub async fn test_app_with_limit(body_limit_bytes: usize) -> Router {
    let pool = connect(&DatabaseConfig::in_memory())
        .await
        .expect("connect in-memory sqlite");
    apply_migrations(&pool).await.expect("apply migrations");
    app(AppState::new(pool), body_limit_bytes)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(request).await.expect("request failed");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse { status, headers, body }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

pub async fn create_company(app: &Router, name: &str) -> i64 {
    let resp = post(app, "/api/companies", json!({ "name": name })).await;
    assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
    resp.body["id"].as_i64().expect("company id")
}

pub async fn create_skill(app: &Router, name: &str) -> i64 {
    let resp = post(app, "/api/skills", json!({ "name": name })).await;
    assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
    resp.body["id"].as_i64().expect("skill id")
}

pub async fn create_contact(app: &Router, first: &str, last: &str, company_id: Option<i64>) -> i64 {
    let resp = post(
        app,
        "/api/contacts",
        json!({
            "firstName": first,
            "lastName": last,
            "email": format!("{}@example.com", first.to_lowercase()),
            "companyId": company_id,
        }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
    resp.body["id"].as_i64().expect("contact id")
}

pub async fn add_skill(app: &Router, contact_id: i64, skill_id: i64) {
    let resp = send(
        app,
        Method::POST,
        &format!("/api/contacts/{}/skills/{}", contact_id, skill_id),
        None,
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
}

/// Ids of `results` in response order.
pub fn result_ids(body: &Value) -> Vec<i64> {
    body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|r| r["id"].as_i64().expect("id"))
        .collect()
}
