mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn create_returns_contact_with_company() {
    let app = test_app().await;
    let company = create_company(&app, "Acme").await;
    let resp = post(
        &app,
        "/api/contacts",
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "555-0100",
            "email": "ada@example.com",
            "companyId": company,
        }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let id = resp.body["id"].as_i64().unwrap();
    assert_eq!(resp.location(), Some(format!("/api/contacts/{}", id).as_str()));
    assert_eq!(resp.body["firstName"], "Ada");
    assert_eq!(resp.body["company"]["name"], "Acme");

    let got = get(&app, &format!("/api/contacts/{}", id)).await;
    assert_eq!(got.status, StatusCode::OK);
    assert_eq!(got.body, resp.body);
}

#[tokio::test]
async fn unknown_company_is_a_field_error() {
    let app = test_app().await;
    let resp = post(
        &app,
        "/api/contacts",
        json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "companyId": 99 }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["CompanyId"].is_array());
}

#[tokio::test]
async fn validation_accumulates_with_company_check() {
    let app = test_app().await;
    let resp = post(
        &app,
        "/api/contacts",
        json!({ "lastName": "", "phone": "1".repeat(21), "companyId": 99 }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    for field in ["FirstName", "LastName", "Phone", "Email", "CompanyId"] {
        assert!(resp.body[field].is_array(), "missing error for {}", field);
    }
}

#[tokio::test]
async fn update_moves_contact_between_companies() {
    let app = test_app().await;
    let first = create_company(&app, "First").await;
    let second = create_company(&app, "Second").await;
    let id = create_contact(&app, "Ada", "Lovelace", Some(first)).await;

    let resp = put(
        &app,
        &format!("/api/contacts/{}", id),
        json!({ "firstName": "Ada", "lastName": "King", "email": "ada@example.com", "companyId": second }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::ACCEPTED);
    assert_eq!(resp.location(), Some(format!("/api/contacts/{}", id).as_str()));
    assert_eq!(resp.body["lastName"], "King");
    assert_eq!(resp.body["company"]["name"], "Second");

    let bad = put(
        &app,
        &format!("/api/contacts/{}", id),
        json!({ "firstName": "Ada", "lastName": "King", "email": "ada@example.com", "companyId": 777 }),
    )
    .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert!(bad.body["CompanyId"].is_array());
}

#[tokio::test]
async fn update_missing_contact_is_404() {
    let app = test_app().await;
    let resp = put(
        &app,
        "/api/contacts/5",
        json!({ "firstName": "A", "lastName": "B", "email": "a@b.c" }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_contact() {
    let app = test_app().await;
    let id = create_contact(&app, "Ada", "Lovelace", None).await;
    assert_eq!(delete(&app, &format!("/api/contacts/{}", id)).await.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &format!("/api/contacts/{}", id)).await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, &format!("/api/contacts/{}", id)).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn adding_a_skill_twice_keeps_one_association() {
    let app = test_app().await;
    let contact = create_contact(&app, "Ada", "Lovelace", None).await;
    let skill = create_skill(&app, "Rust").await;

    let uri = format!("/api/contacts/{}/skills/{}", contact, skill);
    let first = send(&app, Method::POST, &uri, None).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.location(), Some(format!("/api/contacts/{}/skills", contact).as_str()));
    let second = send(&app, Method::POST, &uri, None).await;
    assert_eq!(second.status, StatusCode::CREATED);

    let skills = get(&app, &format!("/api/contacts/{}/skills", contact)).await;
    assert_eq!(skills.status, StatusCode::OK);
    assert_eq!(skills.body, json!([{ "id": skill, "name": "Rust" }]));
}

#[tokio::test]
async fn association_requires_both_ends() {
    let app = test_app().await;
    let skill = create_skill(&app, "Rust").await;
    let contact = create_contact(&app, "Ada", "Lovelace", None).await;

    let no_contact = send(&app, Method::POST, &format!("/api/contacts/5/skills/{}", skill), None).await;
    assert_eq!(no_contact.status, StatusCode::NOT_FOUND);
    let no_skill = send(&app, Method::POST, &format!("/api/contacts/{}/skills/3", contact), None).await;
    assert_eq!(no_skill.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/contacts/5/skills").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn remove_skill_deletes_only_the_association() {
    let app = test_app().await;
    let contact = create_contact(&app, "Ada", "Lovelace", None).await;
    let rust = create_skill(&app, "Rust").await;
    let go = create_skill(&app, "Go").await;
    add_skill(&app, contact, rust).await;
    add_skill(&app, contact, go).await;

    let uri = format!("/api/contacts/{}/skills/{}", contact, rust);
    assert_eq!(send(&app, Method::DELETE, &uri, None).await.status, StatusCode::NO_CONTENT);
    assert_eq!(send(&app, Method::DELETE, &uri, None).await.status, StatusCode::NOT_FOUND);

    let details = get(&app, &format!("/api/contacts/{}/details", contact)).await;
    assert_eq!(details.status, StatusCode::OK);
    assert_eq!(details.body["skills"], json!([{ "id": go, "name": "Go" }]));
    assert_eq!(get(&app, &format!("/api/skills/{}", rust)).await.status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_a_skill_drops_its_associations() {
    let app = test_app().await;
    let contact = create_contact(&app, "Ada", "Lovelace", None).await;
    let skill = create_skill(&app, "Rust").await;
    add_skill(&app, contact, skill).await;

    assert_eq!(delete(&app, &format!("/api/skills/{}", skill)).await.status, StatusCode::NO_CONTENT);
    let skills = get(&app, &format!("/api/contacts/{}/skills", contact)).await;
    assert_eq!(skills.body, json!([]));
}

#[tokio::test]
async fn bad_association_ids_are_bad_request() {
    let app = test_app().await;
    let resp = send(&app, Method::POST, "/api/contacts/x/skills/1", None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
