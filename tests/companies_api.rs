mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = test_app().await;
    let resp = post(&app, "/api/companies", json!({ "name": "Acme", "website": "https://acme.test" })).await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let id = resp.body["id"].as_i64().unwrap();
    assert_eq!(resp.location(), Some(format!("/api/companies/{}", id).as_str()));

    let got = get(&app, &format!("/api/companies/{}", id)).await;
    assert_eq!(got.status, StatusCode::OK);
    assert_eq!(got.body, json!({ "id": id, "name": "Acme", "website": "https://acme.test" }));
}

#[tokio::test]
async fn missing_company_is_404() {
    let app = test_app().await;
    let resp = get(&app, "/api/companies/42").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.body.is_null());

    assert_eq!(delete(&app, "/api/companies/42").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/companies/42/details").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/companies/42/skills").await.status, StatusCode::NOT_FOUND);
    let put_resp = put(&app, "/api/companies/42", json!({ "name": "X" })).await;
    assert_eq!(put_resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = test_app().await;
    let resp = get(&app, "/api/companies/abc").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validation_reports_every_field() {
    let app = test_app().await;
    let resp = post(&app, "/api/companies", json!({ "name": "  ", "website": "w".repeat(129) })).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["Name"].as_array().is_some_and(|m| !m.is_empty()));
    assert!(resp.body["Website"].as_array().is_some_and(|m| !m.is_empty()));

    let list = get(&app, "/api/companies").await;
    assert_eq!(list.body["count"], 0);
}

#[tokio::test]
async fn update_overwrites_and_returns_accepted() {
    let app = test_app().await;
    let id = create_company(&app, "Initech").await;
    let resp = put(&app, &format!("/api/companies/{}", id), json!({ "name": "Initrode" })).await;
    assert_eq!(resp.status, StatusCode::ACCEPTED);
    assert_eq!(resp.location(), Some(format!("/api/companies/{}", id).as_str()));
    assert_eq!(resp.body["name"], "Initrode");
    assert!(resp.body["website"].is_null());

    let got = get(&app, &format!("/api/companies/{}", id)).await;
    assert_eq!(got.body["name"], "Initrode");
}

#[tokio::test]
async fn delete_keeps_contacts_without_company() {
    let app = test_app().await;
    let company = create_company(&app, "Globex").await;
    let contact = create_contact(&app, "Hank", "Scorpio", Some(company)).await;

    assert_eq!(delete(&app, &format!("/api/companies/{}", company)).await.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &format!("/api/companies/{}", company)).await.status, StatusCode::NOT_FOUND);

    let got = get(&app, &format!("/api/contacts/{}", contact)).await;
    assert_eq!(got.status, StatusCode::OK);
    assert!(got.body["companyId"].is_null());
    assert!(got.body["company"].is_null());
}

#[tokio::test]
async fn skills_are_distinct_across_contacts() {
    let app = test_app().await;
    let company = create_company(&app, "Acme").await;
    let other = create_company(&app, "Other").await;
    let rust = create_skill(&app, "Rust").await;
    let go = create_skill(&app, "Go").await;
    let cobol = create_skill(&app, "COBOL").await;

    let a = create_contact(&app, "Ann", "A", Some(company)).await;
    let b = create_contact(&app, "Bob", "B", Some(company)).await;
    let c = create_contact(&app, "Cid", "C", Some(other)).await;
    add_skill(&app, a, rust).await;
    add_skill(&app, b, rust).await;
    add_skill(&app, b, go).await;
    add_skill(&app, c, cobol).await;

    let resp = get(&app, &format!("/api/companies/{}/skills", company)).await;
    assert_eq!(resp.status, StatusCode::OK);
    let names: Vec<&str> = resp.body.as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Go", "Rust"]);

    let details = get(&app, &format!("/api/companies/{}/details", company)).await;
    assert_eq!(details.status, StatusCode::OK);
    assert_eq!(details.body["name"], "Acme");
    assert_eq!(details.body["skills"].as_array().unwrap().len(), 2);

    let filtered = get(&app, &format!("/api/companies?skillId={}", rust)).await;
    assert_eq!(result_ids(&filtered.body), vec![company]);
}

#[tokio::test]
async fn company_without_contacts_has_no_skills() {
    let app = test_app().await;
    let id = create_company(&app, "Empty").await;
    let resp = get(&app, &format!("/api/companies/{}/skills", id)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!([]));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = test_app().await;
    let resp = send(&app, axum::http::Method::POST, "/api/companies", Some(json!("not an object"))).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
