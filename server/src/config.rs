// server/src/config.rs

use std::env;

use dotenvy::dotenv;

use storefront_core::{DEFAULT_FEATURED_LIMIT, DEFAULT_PAGE_SIZE};

use crate::errors::{AppError, Result};

/// Backend connection and surface parameters, read once at startup and
/// handed to the services explicitly. No query path consults the process
/// environment on its own.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  /// Public base URL used when rendering absolute links (sitemap).
  pub app_base_url: String,
  /// Listing page increment served when the client does not ask for one.
  pub page_size: i64,
  /// Bound for the landing-page featured shelf.
  pub featured_limit: i64,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let server_host = optional("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parsed("SERVER_PORT", 8080u16)?;
    // The one parameter without a default: the primary query paths cannot
    // run without a store address.
    let database_url = optional("DATABASE_URL")
      .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;
    let app_base_url =
      optional("APP_BASE_URL").unwrap_or_else(|| format!("http://{server_host}:{server_port}"));
    let page_size = parsed("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
    let featured_limit = parsed("FEATURED_LIMIT", DEFAULT_FEATURED_LIMIT)?;

    tracing::info!(%server_host, server_port, "configuration loaded");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_base_url,
      page_size,
      featured_limit,
    })
  }
}

/// Reads a variable, treating "set but empty" the same as unset.
fn optional(name: &str) -> Option<String> {
  env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match optional(name) {
    None => Ok(default),
    Some(raw) => raw
      .parse()
      .map_err(|error| AppError::Config(format!("invalid {name}: {error}"))),
  }
}
