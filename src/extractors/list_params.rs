//! Extract list-query parameters (`$offset`, `$limit`, `$sort`, `search`, filters) from the query string.

use crate::error::AppError;
use crate::sql::Page;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

pub const OFFSET_PARAM: &str = "$offset";
pub const LIMIT_PARAM: &str = "$limit";
pub const SORT_PARAM: &str = "$sort";
pub const SEARCH_PARAM: &str = "search";

/// Paging inputs plus any other query keys, kept for entity-specific filters.
/// Numbers that do not parse (including negatives) are treated as absent.
#[derive(Clone, Debug, Default)]
pub struct ListParams {
    pub page: Page,
    extra: HashMap<String, String>,
}

impl ListParams {
    pub fn from_map(mut params: HashMap<String, String>) -> Self {
        let page = Page {
            offset: params.remove(OFFSET_PARAM).and_then(|v| v.trim().parse().ok()),
            limit: params.remove(LIMIT_PARAM).and_then(|v| v.trim().parse().ok()),
            sort: params.remove(SORT_PARAM),
            search: params.remove(SEARCH_PARAM),
        };
        ListParams { page, extra: params }
    }

    /// Integer filter such as `companyId`; None when absent or not a number.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.extra.get(key).and_then(|v| v.trim().parse().ok())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(ListParams::from_map(params))
    }
}
