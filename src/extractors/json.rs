//! JSON body extractor whose rejection renders through `AppError`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Like `Json<T>`, but rejections render through `AppError`.
/// Malformed or mistyped bodies are `BadRequest`; anything else keeps its own status
/// (413 for an oversized body, 415 for a missing JSON content type).
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(rejection_error)?;
        Ok(JsonBody(value))
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    if matches!(
        rejection,
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)
    ) {
        AppError::BadRequest(rejection.body_text())
    } else {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
