//! WhoCodes: REST backend for companies, contacts and their skills.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod view_models;

pub use config::{Config, DatabaseConfig};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use response::QueryResult;
pub use routes::{api_routes, app, common_routes, common_routes_with_ready, docs_routes, ApiDoc};
pub use state::AppState;
pub use store::connect;
