// server/src/main.rs

use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use storefront_server::web::configure_app_routes;
use storefront_server::{AppConfig, AppState, PgCatalog};

#[actix_web::main]
async fn main() -> io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("starting storefront server");

  // The listing and detail paths have no degraded mode, so an unusable
  // configuration or unreachable store refuses to start at all.
  let config = AppConfig::from_env().map_err(|error| {
    tracing::error!(%error, "configuration is unusable");
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
  })?;
  let config = Arc::new(config);

  let pool = PgPool::connect(&config.database_url).await.map_err(|error| {
    tracing::error!(%error, "could not reach the database");
    io::Error::new(io::ErrorKind::ConnectionRefused, error.to_string())
  })?;
  tracing::info!("database connection established");

  let state = AppState {
    catalog: PgCatalog::new(pool),
    config: Arc::clone(&config),
  };

  let address = format!("{}:{}", config.server_host, config.server_port);
  tracing::info!(%address, "binding HTTP server");

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&address)?
  .run()
  .await
}
