// core/src/catalog/page.rs

use serde::{Deserialize, Serialize};

use crate::catalog::sort::SortOption;
use crate::models::Product;

/// Default page increment for listings.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Default bound for the landing-page featured shelf.
pub const DEFAULT_FEATURED_LIMIT: i64 = 6;

/// One bounded slice of the filtered, sorted catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
  /// Filter value matched against `products.category`. An unknown value is
  /// not validated here; it simply matches zero rows downstream.
  pub category: Option<String>,
  pub sort: SortOption,
  pub limit: i64,
  pub offset: i64,
}

impl PageRequest {
  /// Builds a request, clamping `limit`/`offset` to their invariants
  /// (`limit > 0`, `offset >= 0`). An empty category string means no
  /// category filter at all.
  pub fn new(category: Option<String>, sort: SortOption, limit: i64, offset: i64) -> Self {
    Self {
      category: category.filter(|value| !value.is_empty()),
      sort,
      limit: limit.max(1),
      offset: offset.max(0),
    }
  }

  /// First page of a browsing context, with the default increment.
  pub fn first(category: Option<String>, sort: SortOption) -> Self {
    Self::new(category, sort, DEFAULT_PAGE_SIZE, 0)
  }

  /// Newest-first bounded request backing the featured shelf.
  pub fn featured(limit: i64) -> Self {
    Self::new(None, SortOption::Newest, limit, 0)
  }
}

/// A page of products plus the total count of rows matching the filter.
/// The total ignores `limit`/`offset` but respects the category filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
  pub products: Vec<Product>,
  pub total: i64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn limits_and_offsets_are_clamped_to_their_invariants() {
    let request = PageRequest::new(None, SortOption::Newest, 0, -4);
    assert_eq!(request.limit, 1);
    assert_eq!(request.offset, 0);

    let request = PageRequest::new(None, SortOption::Newest, -12, 24);
    assert_eq!(request.limit, 1);
    assert_eq!(request.offset, 24);
  }

  #[test]
  fn empty_category_means_no_filter() {
    let request = PageRequest::new(Some(String::new()), SortOption::Newest, 12, 0);
    assert_eq!(request.category, None);

    let request = PageRequest::new(Some("books".to_string()), SortOption::Newest, 12, 0);
    assert_eq!(request.category.as_deref(), Some("books"));
  }

  #[test]
  fn first_page_uses_the_default_increment() {
    let request = PageRequest::first(Some("books".to_string()), SortOption::PriceAsc);
    assert_eq!(request.limit, DEFAULT_PAGE_SIZE);
    assert_eq!(request.offset, 0);
    assert_eq!(request.sort, SortOption::PriceAsc);
  }

  #[test]
  fn featured_requests_are_newest_first_from_the_top() {
    let request = PageRequest::featured(6);
    assert_eq!(request.category, None);
    assert_eq!(request.sort, SortOption::Newest);
    assert_eq!(request.limit, 6);
    assert_eq!(request.offset, 0);
  }
}
