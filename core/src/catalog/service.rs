// core/src/catalog/service.rs

//! The catalog query-service seam.

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::catalog::page::{PageRequest, ProductPage};
use crate::error::CatalogResult;
use crate::models::Product;

/// Read-only query service over the product catalog.
///
/// Every operation takes the caller's identity token (`None` for an
/// anonymous shopper), obtained fresh for each call by the transport
/// layer. Implementations attach the token to the data-store request so
/// row-level visibility is evaluated externally; the token is never
/// interpreted here and never cached beyond the call.
///
/// The service is stateless per call and side-effect-free beyond the read
/// itself, so concurrent calls are fully independent.
#[async_trait]
pub trait Catalog: Send + Sync {
  /// All active products, newest first.
  async fn fetch_all(&self, access: Option<&str>) -> CatalogResult<Vec<Product>>;

  /// Active products in one category, newest first. An unknown category
  /// is not an error; it simply matches nothing.
  async fn fetch_by_category(
    &self,
    access: Option<&str>,
    category: &str,
  ) -> CatalogResult<Vec<Product>>;

  /// One bounded slice of the filtered, sorted catalog, plus the total
  /// count of matching rows. The count ignores the range but respects the
  /// filter.
  async fn fetch_page(
    &self,
    access: Option<&str>,
    request: &PageRequest,
  ) -> CatalogResult<ProductPage>;

  /// Single active product, or `None` when no active row matches. `None`
  /// is the designated not-found signal; backend failures stay `Err` and
  /// are never folded into it.
  async fn fetch_by_id(&self, access: Option<&str>, id: Uuid) -> CatalogResult<Option<Product>>;

  /// Newest-first shelf for the landing page, bounded to `limit`.
  ///
  /// This operation never fails. The shelf is cosmetic and an empty
  /// catalog is a valid, renderable state, so whatever goes wrong
  /// underneath (missing configuration, unreachable store, missing
  /// relation) is logged and an empty list returned. The listing and
  /// detail operations keep the opposite policy: their result is the
  /// page, so their failures must surface.
  async fn fetch_featured(&self, access: Option<&str>, limit: i64) -> Vec<Product> {
    let request = PageRequest::featured(limit);
    match self.fetch_page(access, &request).await {
      Ok(page) => page.products,
      Err(error) => {
        warn!(%error, limit, "featured products query failed, rendering an empty shelf");
        Vec::new()
      }
    }
  }
}
