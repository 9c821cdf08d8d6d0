//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use wares_core::Product;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Fetch Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Start a fetch: initial load or manual reload. Allowed from any
    /// load state; a reload during an in-flight fetch starts a new
    /// generation that supersedes the old one.
    Reload,

    /// A fetch resolved successfully. `generation` tags which fetch
    /// request this result belongs to; stale generations are discarded.
    ProductsFetched {
        generation: u64,
        products: Vec<Product>,
    },

    /// A fetch resolved with an error. Carries the user-facing message.
    ProductsFetchFailed { generation: u64, message: String },

    // ─────────────────────────────────────────────────────────
    // Search Query Edits
    // ─────────────────────────────────────────────────────────
    /// Append a character to the search query
    QueryPush(char),
    /// Delete the last character of the search query
    QueryPop,
    /// Clear the search query entirely
    QueryClear,

    // ─────────────────────────────────────────────────────────
    // List Selection
    // ─────────────────────────────────────────────────────────
    /// Move the selection up one row
    SelectUp,
    /// Move the selection down one row
    SelectDown,
    /// Jump the selection up one page
    SelectPageUp,
    /// Jump the selection down one page
    SelectPageDown,
    /// Jump to the first row
    SelectFirst,
    /// Jump to the last row
    SelectLast,
}
