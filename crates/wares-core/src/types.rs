//! Domain types shared across all wares crates

use serde::Deserialize;

/// Maximum number of products kept from a fetch. The catalog API may return
/// more; everything past this cap is discarded, preserving server order.
pub const MAX_PRODUCTS: usize = 20;

/// Fixed user-facing message for any fetch failure. Transport, status, and
/// decoding failures all surface as this single string; detail goes to the
/// log only.
pub const FETCH_FAILED_MSG: &str = "Failed to fetch products. Please try again.";

/// One catalog entry as decoded from the remote API.
///
/// Immutable after decode; the whole collection is replaced on every
/// successful fetch. Unknown fields in the wire payload are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique identifier assigned by the catalog service
    pub id: u64,
    /// Display title; the search filter matches against this field
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Thumbnail URL, passed through for display surfaces that can use it
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stock: Option<u32>,
}

/// The screen's fetch lifecycle phase.
///
/// Transitions:
/// - `Idle -> Loading` on fetch start
/// - `Loading -> Loaded` on success
/// - `Loading -> Failed(message)` on any fetch error
/// - `Loaded/Failed -> Loading` on manual reload
///
/// There is no terminal state; the screen can cycle indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Startup state, before the first fetch is dispatched
    #[default]
    Idle,

    /// A fetch is in flight; the list is suppressed in favor of the
    /// loading indicator
    Loading,

    /// The last fetch succeeded and the store holds its result
    Loaded,

    /// The last fetch failed; carries the user-facing message.
    /// Previously loaded products are retained, not cleared.
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// The error message when in the Failed state
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Short human-readable label used in the status bar
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "Idle",
            LoadState::Loading => "Loading",
            LoadState::Loaded => "Loaded",
            LoadState::Failed(_) => "Failed",
        }
    }
}
