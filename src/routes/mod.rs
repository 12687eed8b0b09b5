//! Router assembly: common routes, resource routes and the OpenAPI document.

mod api;
mod common;
mod docs;

pub use api::{api_routes, company_routes, contact_routes, skill_routes};
pub use common::{common_routes, common_routes_with_ready};
pub use docs::{docs_routes, ApiDoc};

use crate::state::AppState;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::time::Instant;

/// Full application router with one access-log line per request.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .merge(api_routes(state, body_limit_bytes))
        .layer(middleware::from_fn(access_log))
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let resp = next.run(req).await;

    let status = resp.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    if resp.status().is_server_error() {
        tracing::error!(%method, %uri, status, latency_ms, "request");
    } else if resp.status().is_client_error() {
        tracing::warn!(%method, %uri, status, latency_ms, "request");
    } else {
        tracing::info!(%method, %uri, status, latency_ms, "request");
    }
    resp
}
