// server/src/web/handlers/sitemap_handler.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use storefront_core::{Catalog, Product};

use crate::errors::AppError;
use crate::identity::RequestIdentity;
use crate::state::AppState;

#[instrument(name = "handler::sitemap", skip(app_state, identity))]
pub async fn sitemap_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.fetch_all(identity.token()).await?;
  let body = render_sitemap(&app_state.config.app_base_url, &products);
  Ok(HttpResponse::Ok().content_type("application/xml").body(body))
}

fn render_sitemap(base_url: &str, products: &[Product]) -> String {
  let base = base_url.trim_end_matches('/');
  let mut xml = String::from(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
  );
  for product in products {
    xml.push_str(&format!(
      "  <url><loc>{}/products/{}</loc><lastmod>{}</lastmod></url>\n",
      base,
      product.id,
      product.updated_at.to_rfc3339(),
    ));
  }
  xml.push_str("</urlset>\n");
  xml
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Utc};
  use rust_decimal::Decimal;
  use uuid::Uuid;

  fn product(n: u128) -> Product {
    let at = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
    Product {
      id: Uuid::from_u128(n),
      name: format!("Product {n}"),
      description: None,
      price: Decimal::new(1999, 2),
      category: Some("books".to_string()),
      stock_quantity: 5,
      is_active: true,
      created_at: at,
      updated_at: at,
    }
  }

  #[test]
  fn lists_one_url_per_product() {
    let xml = render_sitemap("https://shop.example.com", &[product(1), product(2)]);
    assert_eq!(xml.matches("<url>").count(), 2);
    assert!(xml.contains(&format!(
      "https://shop.example.com/products/{}",
      Uuid::from_u128(1)
    )));
  }

  #[test]
  fn trailing_slash_in_the_base_url_does_not_double_up() {
    let xml = render_sitemap("https://shop.example.com/", &[product(1)]);
    assert!(xml.contains("https://shop.example.com/products/"));
    assert!(!xml.contains(".com//products"));
  }

  #[test]
  fn an_empty_catalog_is_a_valid_sitemap() {
    let xml = render_sitemap("https://shop.example.com", &[]);
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<urlset"));
    assert!(!xml.contains("<url>"));
  }
}
