mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let app = test_app().await;
    create_skill(&app, "Rust").await;

    let resp = post(&app, "/api/skills", json!({ "name": "Rust" })).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.body["Name"],
        json!(["A skill with the same name already exists."])
    );

    let list = get(&app, "/api/skills").await;
    assert_eq!(list.body["count"], 1);
}

#[tokio::test]
async fn name_match_is_exact() {
    let app = test_app().await;
    create_skill(&app, "Rust").await;
    let resp = post(&app, "/api/skills", json!({ "name": "rust" })).await;
    assert_eq!(resp.status, StatusCode::CREATED);
}

#[tokio::test]
async fn name_is_required_and_bounded() {
    let app = test_app().await;
    let missing = post(&app, "/api/skills", json!({})).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert!(missing.body["Name"].is_array());

    let long = post(&app, "/api/skills", json!({ "name": "x".repeat(65) })).await;
    assert_eq!(long.status, StatusCode::BAD_REQUEST);
    assert!(long.body["Name"].is_array());

    let exact = post(&app, "/api/skills", json!({ "name": "x".repeat(64) })).await;
    assert_eq!(exact.status, StatusCode::CREATED);
}

#[tokio::test]
async fn rename_to_own_name_is_allowed() {
    let app = test_app().await;
    let id = create_skill(&app, "Rust").await;
    create_skill(&app, "Go").await;

    let same = put(&app, &format!("/api/skills/{}", id), json!({ "name": "Rust" })).await;
    assert_eq!(same.status, StatusCode::ACCEPTED);
    assert_eq!(same.location(), Some(format!("/api/skills/{}", id).as_str()));

    let taken = put(&app, &format!("/api/skills/{}", id), json!({ "name": "Go" })).await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);
    assert!(taken.body["Name"].is_array());

    let renamed = put(&app, &format!("/api/skills/{}", id), json!({ "name": "Rust 2024" })).await;
    assert_eq!(renamed.status, StatusCode::ACCEPTED);
    assert_eq!(renamed.body, json!({ "id": id, "name": "Rust 2024" }));
}

#[tokio::test]
async fn details_list_holders() {
    let app = test_app().await;
    let company = create_company(&app, "Acme").await;
    let skill = create_skill(&app, "Rust").await;
    let b = create_contact(&app, "Bob", "Zed", Some(company)).await;
    let a = create_contact(&app, "Ann", "Able", None).await;
    add_skill(&app, b, skill).await;
    add_skill(&app, a, skill).await;

    let resp = get(&app, &format!("/api/skills/{}/details", skill)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["name"], "Rust");
    let ids: Vec<i64> = resp.body["contacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b]);
    assert_eq!(resp.body["contacts"][1]["company"]["name"], "Acme");
}

#[tokio::test]
async fn missing_skill_is_404() {
    let app = test_app().await;
    assert_eq!(get(&app, "/api/skills/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, "/api/skills/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(put(&app, "/api/skills/1", json!({ "name": "X" })).await.status, StatusCode::NOT_FOUND);
}
