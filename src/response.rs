//! Response shapes and helpers shared by the resource handlers.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a list query plus the total number of matches before paging.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueryResult<T> {
    pub results: Vec<T>,
    pub count: i64,
}

/// 201 with `Location` pointing at the new resource.
pub fn created<T: Serialize>(location: String, data: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(data)).into_response()
}

/// 202 with `Location`; used for successful updates.
pub fn accepted<T: Serialize>(location: String, data: T) -> Response {
    (StatusCode::ACCEPTED, [(header::LOCATION, location)], Json(data)).into_response()
}

/// 201 with `Location` and no body.
pub fn created_empty(location: String) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}
