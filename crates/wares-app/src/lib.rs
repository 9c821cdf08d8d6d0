//! wares-app - Application state and orchestration for wares
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, the [`handler::update`] function that owns
//! every state mutation, and an [`UpdateAction`] dispatcher that spawns
//! background fetch tasks reporting back over an mpsc channel.

pub mod actions;
pub mod config;
pub mod filter;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;
pub mod store;

// Re-export primary types
pub use config::{Settings, ThemeMode};
pub use filter::filter_products;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
pub use store::ProductStore;
