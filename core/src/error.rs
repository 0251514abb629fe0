// storefront_core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure taxonomy of the catalog query layer.
///
/// Not-found is deliberately absent: a single-item lookup that matches no
/// active row returns `Ok(None)`, never an error, so presentation can
/// render its 404-equivalent state without inspecting error variants.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// Required backend connection parameters are absent or unusable.
  #[error("Catalog configuration error: {message}")]
  Configuration { message: String },

  /// The data store rejected or failed to serve a query. Covers missing
  /// relations, permission and schema errors, and network failure.
  #[error("Data store rejected or failed to serve the query. Source: {source}")]
  DataAccess {
    #[source]
    source: AnyhowError,
  },
}

impl CatalogError {
  pub fn configuration(message: impl Into<String>) -> Self {
    CatalogError::Configuration {
      message: message.into(),
    }
  }

  pub fn data_access(source: impl Into<AnyhowError>) -> Self {
    CatalogError::DataAccess {
      source: source.into(),
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
