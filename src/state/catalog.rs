//! Catalog state manager.
//!
//! Owns the full product collection plus the active filter and page counter.
//! The filtered ("effective") collection is never stored: every query derives
//! it from `all_items` and the current [`SearchQuery`], so an edit or delete
//! applied to `all_items` is immediately visible through every view.
//!
//! # Invariants
//!
//! - `current_page >= 1`.
//! - After `search`, `update` and `delete`, either the effective collection is
//!   empty and `current_page == 1`, or `(current_page - 1) * page_size` is
//!   strictly less than the effective count.
//! - `current_page` only grows through [`CatalogState::load_more`].
//! - Failed mutations leave `all_items` untouched.

use crate::model::{CatalogError, PageSize, Product, ProductId, ValidationError};
use crate::state::SearchQuery;
use tracing::{debug, info, warn};

// ===== CatalogState =====

/// In-memory product catalog with search and "load more" pagination.
///
/// Single owner, synchronous. Hosts that share it across threads must
/// serialise access themselves (e.g. wrap it in a `Mutex`).
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    all_items: Vec<Product>,
    filter: Option<SearchQuery>,
    page_size: PageSize,
    current_page: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl CatalogState {
    /// Empty catalog with the given page size.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            all_items: Vec::new(),
            filter: None,
            page_size,
            current_page: 1,
        }
    }

    // ===== Mutators =====

    /// Replace the whole collection, clear the filter and rewind to page 1.
    pub fn load(&mut self, items: Vec<Product>) {
        info!(count = items.len(), "Catalog loaded");
        self.all_items = items;
        self.filter = None;
        self.current_page = 1;
    }

    /// Set the active filter and rewind to page 1.
    ///
    /// Empty or whitespace-only input clears the filter.
    pub fn search(&mut self, query: &str) {
        self.filter = SearchQuery::new(query);
        self.current_page = 1;
        debug!(
            query = self.filter_query(),
            matches = self.effective_count(),
            "Search applied"
        );
    }

    /// Extend the page window by one page if anything lies beyond it.
    ///
    /// Returns whether the window grew.
    pub fn load_more(&mut self) -> bool {
        if self.window_len_unclamped() < self.effective_count() {
            self.current_page += 1;
            debug!(page = self.current_page, "Loaded next page");
            true
        } else {
            false
        }
    }

    /// Rename a product.
    ///
    /// The title is trimmed before storing. Validation runs before the
    /// lookup, so an empty title is reported even for an unknown id.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Validation`] if the trimmed title is empty.
    /// - [`CatalogError::NotFound`] if no product has this id.
    pub fn update(&mut self, id: ProductId, new_title: &str) -> Result<(), CatalogError> {
        let title = new_title.trim();
        if title.is_empty() {
            warn!(%id, "Rejected update with empty title");
            return Err(ValidationError::EmptyTitle.into());
        }

        let product = self
            .all_items
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| {
                warn!(%id, "Rejected update of unknown product");
                CatalogError::NotFound { id }
            })?;
        product.set_title(title.to_string());
        info!(%id, title, "Product updated");

        // A renamed product may have left the active filter.
        self.clamp_page();
        Ok(())
    }

    /// Remove a product and re-clamp the page counter.
    ///
    /// Returns the removed product.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] if no product has this id.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let Some(index) = self.position_of(id) else {
            warn!(%id, "Rejected delete of unknown product");
            return Err(CatalogError::NotFound { id });
        };
        let removed = self.all_items.remove(index);
        self.clamp_page();
        info!(
            %id,
            remaining = self.all_items.len(),
            page = self.current_page,
            "Product deleted"
        );
        Ok(removed)
    }

    // ===== Queries =====

    /// The page window: the first `current_page * page_size` products of the
    /// effective collection, in source order.
    pub fn visible_items(&self) -> Vec<&Product> {
        self.effective()
            .take(self.window_len_unclamped())
            .collect()
    }

    /// Products of the effective collection beyond the page window.
    pub fn remaining_count(&self) -> usize {
        self.effective_count()
            .saturating_sub(self.window_len_unclamped())
    }

    /// Whether a "load more" would show anything new.
    pub fn has_more(&self) -> bool {
        self.remaining_count() > 0
    }

    /// Look up a product in the full collection, ignoring the filter.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.all_items.iter().find(|p| p.id() == id)
    }

    /// Size of the effective collection.
    pub fn effective_count(&self) -> usize {
        self.effective().count()
    }

    /// Size of the full collection.
    pub fn total_count(&self) -> usize {
        self.all_items.len()
    }

    /// Full collection in source order.
    pub fn all_items(&self) -> &[Product] {
        &self.all_items
    }

    /// Active filter text, empty when no filter is active.
    pub fn filter_query(&self) -> &str {
        self.filter.as_ref().map_or("", SearchQuery::as_str)
    }

    /// 1-based page counter.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Products added per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    // ===== Internals =====

    fn effective(&self) -> impl Iterator<Item = &Product> + '_ {
        let filter = self.filter.as_ref();
        self.all_items
            .iter()
            .filter(move |p| filter.map_or(true, |q| q.matches(p)))
    }

    fn position_of(&self, id: ProductId) -> Option<usize> {
        self.all_items.iter().position(|p| p.id() == id)
    }

    fn window_len_unclamped(&self) -> usize {
        self.current_page.saturating_mul(self.page_size.get())
    }

    fn clamp_page(&mut self) {
        let effective = self.effective_count();
        let last_page = effective.div_ceil(self.page_size.get()).max(1);
        if self.current_page > last_page {
            debug!(from = self.current_page, to = last_page, "Page clamped");
            self.current_page = last_page;
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
