//! OpenAPI document for the resource routes.

use crate::handlers::{companies, contacts, skills};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "WhoCodes API", description = "Companies, contacts and their skills"),
    paths(
        companies::list,
        companies::read,
        companies::details,
        companies::create,
        companies::update,
        companies::delete,
        companies::skills,
        contacts::list,
        contacts::read,
        contacts::details,
        contacts::create,
        contacts::update,
        contacts::delete,
        contacts::skills,
        contacts::add_skill,
        contacts::remove_skill,
        skills::list,
        skills::read,
        skills::details,
        skills::create,
        skills::update,
        skills::delete,
    ),
    tags(
        (name = "companies", description = "Companies and the skills of their contacts"),
        (name = "contacts", description = "Contacts and their skill associations"),
        (name = "skills", description = "Skills"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json.
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
