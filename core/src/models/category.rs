// core/src/models/category.rs

use serde::Serialize;

/// Static reference entry for one storefront category.
///
/// `path` is the URL-facing slug; `db_value` is the value stored on
/// `products.category`. They are equal today, but the two stay distinct so
/// slugs can diverge from stored values without touching call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
  pub path: &'static str,
  pub db_value: &'static str,
  pub label: &'static str,
}

/// The fixed category set. Small enough that a linear scan beats any map.
pub const CATEGORIES: &[Category] = &[
  Category { path: "electronics", db_value: "electronics", label: "Electronics" },
  Category { path: "clothing", db_value: "clothing", label: "Clothing" },
  Category { path: "books", db_value: "books", label: "Books" },
  Category { path: "home", db_value: "home", label: "Home & Living" },
  Category { path: "sports", db_value: "sports", label: "Sports & Outdoors" },
  Category { path: "beauty", db_value: "beauty", label: "Beauty" },
];

impl Category {
  pub fn all() -> &'static [Category] {
    CATEGORIES
  }

  pub fn find_by_path(path: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.path == path)
  }

  pub fn find_by_db_value(value: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.db_value == value)
  }
}
