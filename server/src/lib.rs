// server/src/lib.rs

//! Storefront HTTP server: an actix-web JSON surface over the PostgreSQL
//! product catalog, with per-request identity forwarded to the store.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod identity;
pub mod state;
pub mod web;

pub use crate::catalog::PgCatalog;
pub use crate::config::AppConfig;
pub use crate::errors::AppError;
pub use crate::state::AppState;
