//! HTTP handlers, one module per resource.

pub mod companies;
pub mod contacts;
pub mod skills;

use crate::error::AppError;

/// Parse an integer path id; anything else is a bad request.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}
