//! Application state (Model in TEA pattern)

use wares_core::{LoadState, Product};

use crate::config::Settings;
use crate::filter::filter_products;
use crate::store::ProductStore;

/// Rows jumped by PageUp/PageDown selection moves
pub const PAGE_JUMP: usize = 10;

/// Live search query state.
///
/// The search input is always focused; there is exactly one text input on
/// the screen. The query only ever derives filtered views and is never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

/// Complete application state, owned by the run loop.
///
/// Background fetch tasks never touch this struct; every mutation happens
/// inside [`crate::handler::update`] in response to a completed event.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current fetch lifecycle phase
    pub load_state: LoadState,

    /// Fetched products; replaced atomically on successful reload
    pub products: ProductStore,

    /// Live search query
    pub search: SearchState,

    /// Index of the highlighted row within the *filtered* view
    pub selected: usize,

    /// Generation tag of the most recently started fetch. Resolutions
    /// carrying an older generation are discarded, which makes racing
    /// reloads deterministic without cancelling in-flight requests.
    pub fetch_generation: u64,

    /// Animation frame for the loading spinner, advanced on Tick
    pub spinner_frame: usize,

    /// Loaded configuration
    pub settings: Settings,

    quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────
    // Fetch lifecycle
    // ─────────────────────────────────────────────────────────

    /// Begin a fetch: bump the generation and enter Loading.
    ///
    /// Entering Loading clears any Failed state (the error banner
    /// disappears while the new attempt is in flight). Returns the
    /// generation the spawned task must tag its resolution with.
    pub fn start_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.load_state = LoadState::Loading;
        self.fetch_generation
    }

    pub fn is_current_generation(&self, generation: u64) -> bool {
        generation == self.fetch_generation
    }

    /// Apply a successful fetch: replace the store wholesale and enter
    /// Loaded. The selection is clamped into the new filtered view.
    pub fn apply_fetch_success(&mut self, products: Vec<Product>) {
        self.products.replace(products);
        self.load_state = LoadState::Loaded;
        self.clamp_selection();
    }

    /// Apply a failed fetch: enter Failed with the user-facing message.
    /// Previously loaded products are retained, not cleared -- the stale
    /// list stays visible under the error banner.
    pub fn apply_fetch_failure(&mut self, message: String) {
        self.load_state = LoadState::Failed(message);
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    /// The filtered view the list renders: current store through the
    /// current query. Recomputed on demand; never cached.
    pub fn visible(&self) -> Vec<&Product> {
        filter_products(self.products.items(), &self.search.query)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.clamp_selection();
    }

    pub fn select_page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_JUMP);
    }

    pub fn select_page_down(&mut self) {
        self.selected = self.selected.saturating_add(PAGE_JUMP);
        self.clamp_selection();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_len().saturating_sub(1);
    }

    /// Keep the selection inside the filtered view, which can shrink on
    /// every keystroke or reload.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
