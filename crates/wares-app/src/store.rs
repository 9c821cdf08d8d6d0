//! Owned storage for the fetched product list
//!
//! The store is owned exclusively by [`crate::state::AppState`] and handed
//! out by reference to consumers (filter, render). There is no shared or
//! ambient copy anywhere else in the process.

use wares_core::{Product, MAX_PRODUCTS};

/// Insertion-ordered collection of fetched products, capped at
/// [`MAX_PRODUCTS`]. Replaced atomically on every successful fetch --
/// there is no incremental merge.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    items: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh batch.
    ///
    /// The cap is enforced here as well as at the decode layer, so the
    /// store's invariant holds regardless of the caller.
    pub fn replace(&mut self, mut items: Vec<Product>) {
        items.truncate(MAX_PRODUCTS);
        self.items = items;
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
