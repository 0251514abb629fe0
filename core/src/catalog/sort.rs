// core/src/catalog/sort.rs

use serde::{Deserialize, Serialize};

/// Closed set of listing sort orders.
///
/// Unrecognized wire input deliberately falls back to [`SortOption::Newest`]
/// instead of erroring: a stale or mistyped `?sort=` value must not break
/// the listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
  PriceAsc,
  PriceDesc,
  #[default]
  Newest,
  Oldest,
  NameAsc,
}

/// Direction half of an `ORDER BY` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Ascending,
  Descending,
}

impl SortDirection {
  pub fn sql(self) -> &'static str {
    match self {
      SortDirection::Ascending => "ASC",
      SortDirection::Descending => "DESC",
    }
  }
}

impl SortOption {
  /// Parses a wire value. Anything unknown behaves exactly like `newest`,
  /// in a single fallback arm rather than scattered string comparisons.
  pub fn parse(raw: &str) -> Self {
    match raw {
      "price_asc" => SortOption::PriceAsc,
      "price_desc" => SortOption::PriceDesc,
      "newest" => SortOption::Newest,
      "oldest" => SortOption::Oldest,
      "name_asc" => SortOption::NameAsc,
      _ => SortOption::Newest,
    }
  }

  /// The single `(column, direction)` pair this option maps to.
  pub fn order_by(self) -> (&'static str, SortDirection) {
    match self {
      SortOption::PriceAsc => ("price", SortDirection::Ascending),
      SortOption::PriceDesc => ("price", SortDirection::Descending),
      SortOption::Newest => ("created_at", SortDirection::Descending),
      SortOption::Oldest => ("created_at", SortDirection::Ascending),
      SortOption::NameAsc => ("name", SortDirection::Ascending),
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      SortOption::PriceAsc => "price_asc",
      SortOption::PriceDesc => "price_desc",
      SortOption::Newest => "newest",
      SortOption::Oldest => "oldest",
      SortOption::NameAsc => "name_asc",
    }
  }
}
