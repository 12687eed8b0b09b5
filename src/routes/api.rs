//! Resource routes under `/api`.

use crate::handlers::{companies, contacts, skills};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/api/companies", get(companies::list).post(companies::create))
        .route(
            "/api/companies/:id",
            get(companies::read)
                .put(companies::update)
                .delete(companies::delete),
        )
        .route("/api/companies/:id/details", get(companies::details))
        .route("/api/companies/:id/skills", get(companies::skills))
}

pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/api/contacts", get(contacts::list).post(contacts::create))
        .route(
            "/api/contacts/:id",
            get(contacts::read)
                .put(contacts::update)
                .delete(contacts::delete),
        )
        .route("/api/contacts/:id/details", get(contacts::details))
        .route("/api/contacts/:id/skills", get(contacts::skills))
        .route(
            "/api/contacts/:id/skills/:skill_id",
            post(contacts::add_skill).delete(contacts::remove_skill),
        )
}

pub fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/api/skills", get(skills::list).post(skills::create))
        .route(
            "/api/skills/:id",
            get(skills::read).put(skills::update).delete(skills::delete),
        )
        .route("/api/skills/:id/details", get(skills::details))
}

/// All resource routes with the request body cap applied.
pub fn api_routes(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(company_routes())
        .merge(contact_routes())
        .merge(skill_routes())
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(body_limit_bytes)))
        .with_state(state)
}
