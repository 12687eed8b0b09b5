mod common;

use axum::http::StatusCode;
use common::*;

#[tokio::test]
async fn health_and_ready() {
    let app = test_app().await;
    let health = get(&app, "/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");

    let ready = get(&app, "/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["database"], "ok");

    let version = get(&app, "/version").await;
    assert_eq!(version.body["name"], "whocodes");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app().await;
    let resp = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body["paths"]["/api/contacts/{contactId}/skills/{skillId}"].is_object());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = test_app().await;
    assert_eq!(get(&app, "/api/widgets").await.status, StatusCode::NOT_FOUND);
}
