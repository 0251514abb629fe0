// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use storefront_core::{Catalog, PageRequest, SortOption};

use crate::errors::AppError;
use crate::identity::RequestIdentity;
use crate::state::AppState;

/// Query string of `GET /api/products`. The numeric fields arrive as raw
/// strings so non-numeric input degrades to the defaults instead of
/// rejecting the whole request.
#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub category: Option<String>,
  pub sort: Option<String>,
  pub limit: Option<String>,
  pub offset: Option<String>,
}

impl ListProductsQuery {
  fn page_request(&self, default_limit: i64) -> PageRequest {
    PageRequest::new(
      self.category.clone(),
      self.sort.as_deref().map(SortOption::parse).unwrap_or_default(),
      parse_base10(self.limit.as_deref()).unwrap_or(default_limit),
      parse_base10(self.offset.as_deref()).unwrap_or(0),
    )
  }
}

/// Lenient base-10 parse; anything else means "use the default".
fn parse_base10(raw: Option<&str>) -> Option<i64> {
  raw.and_then(|value| value.trim().parse::<i64>().ok())
}

#[instrument(name = "handler::list_products", skip(app_state, identity, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let request = query_params.page_request(app_state.config.page_size);
  info!(
    category = ?request.category,
    sort = ?request.sort,
    limit = request.limit,
    offset = request.offset,
    "Listing products."
  );

  let page = app_state.catalog.fetch_page(identity.token(), &request).await?;

  info!(returned = page.products.len(), total = page.total, "Product page fetched successfully.");
  Ok(HttpResponse::Ok().json(page))
}

/// The featured shelf is cosmetic: the catalog operation it sits on never
/// fails, so neither does this handler.
#[instrument(name = "handler::featured_products", skip(app_state, identity))]
pub async fn featured_products_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
) -> HttpResponse {
  let products = app_state
    .catalog
    .fetch_featured(identity.token(), app_state.config.featured_limit)
    .await;
  HttpResponse::Ok().json(json!({ "products": products }))
}

#[instrument(name = "handler::get_product", skip(app_state, identity, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();
  // A malformed identifier never reaches the data store, so it can never
  // be mistaken for a backend failure; to the shopper it is just missing.
  let Ok(product_id) = Uuid::parse_str(&raw_id) else {
    warn!("Rejected malformed product identifier.");
    return Err(AppError::NotFound(format!("Product '{}' not found.", raw_id)));
  };

  match app_state.catalog.fetch_by_id(identity.token(), product_id).await? {
    Some(product) => {
      info!("Product {} fetched successfully.", product_id);
      Ok(HttpResponse::Ok().json(product))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!(
        "Product with ID {} not found.",
        product_id
      )))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn query(
    category: Option<&str>,
    sort: Option<&str>,
    limit: Option<&str>,
    offset: Option<&str>,
  ) -> ListProductsQuery {
    ListProductsQuery {
      category: category.map(str::to_owned),
      sort: sort.map(str::to_owned),
      limit: limit.map(str::to_owned),
      offset: offset.map(str::to_owned),
    }
  }

  #[test]
  fn numeric_params_parse_base10() {
    assert_eq!(parse_base10(Some("24")), Some(24));
    assert_eq!(parse_base10(Some(" 7 ")), Some(7));
    assert_eq!(parse_base10(Some("12abc")), None);
    assert_eq!(parse_base10(Some("")), None);
    assert_eq!(parse_base10(None), None);
  }

  #[test]
  fn defaults_apply_when_params_are_absent_or_garbage() {
    let request = query(None, None, Some("abc"), Some("1.5")).page_request(12);
    assert_eq!(request.limit, 12);
    assert_eq!(request.offset, 0);
    assert_eq!(request.sort, SortOption::Newest);
    assert_eq!(request.category, None);
  }

  #[test]
  fn explicit_params_are_honored() {
    let request = query(Some("books"), Some("price_asc"), Some("24"), Some("48")).page_request(12);
    assert_eq!(request.category.as_deref(), Some("books"));
    assert_eq!(request.sort, SortOption::PriceAsc);
    assert_eq!(request.limit, 24);
    assert_eq!(request.offset, 48);
  }

  #[test]
  fn unknown_sort_behaves_like_newest() {
    let request = query(None, Some("trending"), None, None).page_request(12);
    assert_eq!(request.sort, SortOption::Newest);
  }

  #[test]
  fn negative_numeric_values_are_clamped_to_the_invariants() {
    let request = query(None, None, Some("-5"), Some("-3")).page_request(12);
    assert_eq!(request.limit, 1);
    assert_eq!(request.offset, 0);
  }
}
