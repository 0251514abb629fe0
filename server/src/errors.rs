// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use storefront_core::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("configuration: {0}")]
  Config(String),

  #[error(transparent)]
  Catalog(#[from] CatalogError),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // The body only ever carries a generic user-facing message; the full
    // error goes to the log.
    tracing::error!(error = %self, "request failed");
    match self {
      AppError::NotFound(message) => HttpResponse::NotFound().json(json!({ "error": message })),
      AppError::Config(_) | AppError::Catalog(CatalogError::Configuration { .. }) => {
        HttpResponse::InternalServerError()
          .json(json!({ "error": "The storefront is not configured" }))
      }
      AppError::Catalog(CatalogError::DataAccess { .. }) => HttpResponse::InternalServerError()
        .json(json!({ "error": "The product catalog is temporarily unavailable" })),
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
