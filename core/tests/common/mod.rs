// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tracing::Level;
use uuid::Uuid;

use storefront_core::{
  Catalog, CatalogResult, PageRequest, PageSource, Product, ProductPage,
};

// --- Fixtures ---

/// Deterministic product fixture. `n` drives the id, name, price and the
/// creation timestamp (later `n` means newer).
pub fn product(n: u32) -> Product {
  let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(n as i64);
  Product {
    id: Uuid::from_u128(n as u128 + 1),
    name: format!("Product {n:03}"),
    description: Some(format!("Description for product {n}")),
    price: Decimal::new(500 + n as i64 * 25, 2),
    category: None,
    stock_quantity: if n % 7 == 0 { 0 } else { 3 },
    is_active: true,
    created_at: created,
    updated_at: created,
  }
}

pub fn products(range: std::ops::Range<u32>) -> Vec<Product> {
  range.map(product).collect()
}

pub fn page(products: Vec<Product>, total: i64) -> ProductPage {
  ProductPage { products, total }
}

// --- Scripted catalog double ---

/// Catalog/page-source double fed a script of page results. Each call pops
/// the next scripted result and logs the request it was asked for.
pub struct ScriptedPages {
  script: Mutex<VecDeque<CatalogResult<ProductPage>>>,
  requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedPages {
  pub fn new(script: Vec<CatalogResult<ProductPage>>) -> Self {
    Self {
      script: Mutex::new(script.into()),
      requests: Mutex::new(Vec::new()),
    }
  }

  /// Every page request this double has served, in order.
  pub fn request_log(&self) -> Vec<PageRequest> {
    self.requests.lock().unwrap().clone()
  }

  fn pop(&self, request: &PageRequest) -> CatalogResult<ProductPage> {
    self.requests.lock().unwrap().push(request.clone());
    self
      .script
      .lock()
      .unwrap()
      .pop_front()
      .unwrap_or_else(|| Ok(ProductPage { products: Vec::new(), total: 0 }))
  }
}

#[async_trait]
impl PageSource for ScriptedPages {
  async fn next_page(&self, request: &PageRequest) -> CatalogResult<ProductPage> {
    self.pop(request)
  }
}

#[async_trait]
impl Catalog for ScriptedPages {
  async fn fetch_all(&self, _access: Option<&str>) -> CatalogResult<Vec<Product>> {
    self.pop(&PageRequest::first(None, Default::default())).map(|page| page.products)
  }

  async fn fetch_by_category(
    &self,
    _access: Option<&str>,
    category: &str,
  ) -> CatalogResult<Vec<Product>> {
    let request = PageRequest::first(Some(category.to_string()), Default::default());
    self.pop(&request).map(|page| page.products)
  }

  async fn fetch_page(
    &self,
    _access: Option<&str>,
    request: &PageRequest,
  ) -> CatalogResult<ProductPage> {
    self.pop(request)
  }

  async fn fetch_by_id(
    &self,
    _access: Option<&str>,
    _id: Uuid,
  ) -> CatalogResult<Option<Product>> {
    Ok(None)
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
