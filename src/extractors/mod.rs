//! Request extractors shared by the resource handlers.

mod json;
mod list_params;

pub use json::JsonBody;
pub use list_params::ListParams;
