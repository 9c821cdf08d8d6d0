//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.load_state.is_loading() {
                state.tick_spinner();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Reload => {
            let generation = state.start_fetch();
            debug!("starting fetch (generation {generation})");
            UpdateResult::action(UpdateAction::FetchProducts { generation })
        }

        Message::ProductsFetched {
            generation,
            products,
        } => {
            if !state.is_current_generation(generation) {
                debug!(
                    "discarding stale fetch success (generation {generation}, current {})",
                    state.fetch_generation
                );
                return UpdateResult::none();
            }
            info!(
                "fetch (generation {generation}) resolved with {} products",
                products.len()
            );
            state.apply_fetch_success(products);
            UpdateResult::none()
        }

        Message::ProductsFetchFailed {
            generation,
            message,
        } => {
            if !state.is_current_generation(generation) {
                debug!(
                    "discarding stale fetch failure (generation {generation}, current {})",
                    state.fetch_generation
                );
                return UpdateResult::none();
            }
            state.apply_fetch_failure(message);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Query Edits
        // ─────────────────────────────────────────────────────────
        Message::QueryPush(c) => {
            state.search.push(c);
            state.clamp_selection();
            UpdateResult::none()
        }

        Message::QueryPop => {
            state.search.pop();
            state.clamp_selection();
            UpdateResult::none()
        }

        Message::QueryClear => {
            state.search.clear();
            state.clamp_selection();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectUp => {
            state.select_up();
            UpdateResult::none()
        }

        Message::SelectDown => {
            state.select_down();
            UpdateResult::none()
        }

        Message::SelectPageUp => {
            state.select_page_up();
            UpdateResult::none()
        }

        Message::SelectPageDown => {
            state.select_page_down();
            UpdateResult::none()
        }

        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }

        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }
    }
}
