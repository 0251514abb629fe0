// core/src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One sellable item. Rows are owned and mutated exclusively by the
/// external data store; this workspace only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  /// Non-negative monetary amount; the currency is implicit and fixed.
  pub price: Decimal,
  /// One of the fixed category set, or `None` for "uncategorized".
  pub category: Option<String>,
  pub stock_quantity: i32,
  /// Only `true` rows are eligible for any customer-facing query.
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Product {
  /// Zero stock means the item is shown but cannot be purchased.
  pub fn in_stock(&self) -> bool {
    self.stock_quantity > 0
  }
}
