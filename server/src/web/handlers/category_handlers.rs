// server/src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use storefront_core::{Catalog, Category};

use crate::errors::AppError;
use crate::identity::RequestIdentity;
use crate::state::AppState;

/// The category set is static reference data; listing it involves neither
/// identity nor the data store.
#[instrument(name = "handler::list_categories")]
pub async fn list_categories_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "categories": Category::all() }))
}

#[instrument(name = "handler::category_products", skip(app_state, identity, path), fields(category = %path.as_ref()))]
pub async fn category_products_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let slug = path.into_inner();
  // Unknown slugs are a presentation-level 404; the data layer itself
  // would only ever see them as an empty result.
  let Some(category) = Category::find_by_path(&slug) else {
    warn!("Unknown category path.");
    return Err(AppError::NotFound(format!("Category '{}' not found.", slug)));
  };

  let products = app_state
    .catalog
    .fetch_by_category(identity.token(), category.db_value)
    .await?;

  info!(returned = products.len(), "Category listing fetched successfully.");
  Ok(HttpResponse::Ok().json(json!({
      "category": category,
      "products": products
  })))
}
