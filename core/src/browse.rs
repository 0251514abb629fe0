// core/src/browse.rs

//! Client-side accumulation of listing pages ("load more").

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::page::{PageRequest, ProductPage, DEFAULT_PAGE_SIZE};
use crate::catalog::sort::SortOption;
use crate::error::CatalogResult;
use crate::models::Product;

/// Narrow request/response boundary the controller loads pages through.
///
/// The transport behind it (an HTTP API client, a direct service handle,
/// a test double) is invisible to the controller; identity and timeouts
/// are that transport's concern.
#[async_trait]
pub trait PageSource {
  async fn next_page(&self, request: &PageRequest) -> CatalogResult<ProductPage>;
}

/// The `(category, sort)` combination a controller accumulates pages for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseContext {
  pub category: Option<String>,
  pub sort: SortOption,
}

impl BrowseContext {
  pub fn new(category: Option<String>, sort: SortOption) -> Self {
    Self { category, sort }
  }
}

/// Outcome of a [`ListingController::load_more`] call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
  /// A page was fetched and appended; carries how many products arrived.
  Loaded(usize),
  /// Nothing was requested: a load was already pending, or the context is
  /// exhausted.
  Skipped,
}

/// Accumulates pages for a single browsing context and drives "load more".
///
/// The controller is single-consumer cooperative state: `pending` gates
/// re-entry, so at most one page request is outstanding per instance and
/// backend ranges stay disjoint under rapid repeated invocation. When the
/// browsing context changes, the host discards the instance and seeds a
/// new one from a fresh first page; stale in-flight responses die with the
/// old instance.
#[derive(Debug, Clone)]
pub struct ListingController {
  context: BrowseContext,
  increment: i64,
  items: Arc<Vec<Product>>,
  total: i64,
  requested: i64,
  pending: bool,
}

impl ListingController {
  /// Seeds a controller from the first page of its browsing context,
  /// fetched by the page-rendering pipeline before the controller exists.
  pub fn new(context: BrowseContext, first_page: ProductPage) -> Self {
    Self::with_increment(context, first_page, DEFAULT_PAGE_SIZE)
  }

  /// As [`ListingController::new`], with an explicit page increment.
  pub fn with_increment(context: BrowseContext, first_page: ProductPage, increment: i64) -> Self {
    let requested = first_page.products.len() as i64;
    Self {
      context,
      increment: increment.max(1),
      items: Arc::new(first_page.products),
      total: first_page.total,
      requested,
      pending: false,
    }
  }

  /// The current immutable items snapshot. A new snapshot is published on
  /// every successful load; renderers keep whichever `Arc` they were
  /// handed and are never mutated underneath.
  pub fn items(&self) -> Arc<Vec<Product>> {
    Arc::clone(&self.items)
  }

  pub fn context(&self) -> &BrowseContext {
    &self.context
  }

  /// Last known total for the active filter.
  pub fn total(&self) -> i64 {
    self.total
  }

  /// Cumulative number of products requested so far for this context.
  pub fn requested(&self) -> i64 {
    self.requested
  }

  pub fn is_pending(&self) -> bool {
    self.pending
  }

  /// Whether the backend holds rows this controller has not shown yet.
  pub fn has_more(&self) -> bool {
    (self.items.len() as i64) < self.total
  }

  /// Starts a load if one is allowed, returning the request to issue.
  ///
  /// Returns `None` while a load is pending or when the context is
  /// exhausted, which makes double-invocation a no-op.
  pub fn begin_load(&mut self) -> Option<PageRequest> {
    if self.pending || !self.has_more() {
      debug!(
        pending = self.pending,
        has_more = self.has_more(),
        "load-more request skipped"
      );
      return None;
    }
    self.pending = true;
    Some(PageRequest::new(
      self.context.category.clone(),
      self.context.sort,
      self.increment,
      self.items.len() as i64,
    ))
  }

  /// Applies a successful page response: appends the products in order
  /// (disjoint offsets are the backend's contract, so no dedup), refreshes
  /// the total, and publishes a new snapshot.
  pub fn complete_load(&mut self, page: ProductPage) {
    let mut next = Vec::with_capacity(self.items.len() + page.products.len());
    next.extend(self.items.iter().cloned());
    next.extend(page.products);
    self.items = Arc::new(next);
    self.total = page.total;
    self.requested += self.increment;
    self.pending = false;
  }

  /// Abandons the in-flight load. Accumulated items and total are left
  /// untouched so the host can retry.
  pub fn abort_load(&mut self) {
    self.pending = false;
  }

  /// Drives one full load-more cycle through `source`.
  ///
  /// Failures are handed back to the host for visible notification after
  /// the controller has been restored to a retryable state.
  pub async fn load_more<S>(&mut self, source: &S) -> CatalogResult<LoadMore>
  where
    S: PageSource + ?Sized,
  {
    let Some(request) = self.begin_load() else {
      return Ok(LoadMore::Skipped);
    };
    match source.next_page(&request).await {
      Ok(page) => {
        let arrived = page.products.len();
        self.complete_load(page);
        Ok(LoadMore::Loaded(arrived))
      }
      Err(error) => {
        self.abort_load();
        Err(error)
      }
    }
  }
}
