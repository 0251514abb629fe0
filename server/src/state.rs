// server/src/state.rs
use crate::catalog::PgCatalog;
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: PgCatalog,
  pub config: Arc<AppConfig>, // Share loaded config
}
