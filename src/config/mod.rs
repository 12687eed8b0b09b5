//! Service configuration: typed settings and their environment loader.

pub mod loader;
pub mod types;

pub use types::*;
