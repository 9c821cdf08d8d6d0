//! wares-catalog - Remote catalog access
//!
//! The fetch side of wares: one HTTPS GET against a product catalog
//! endpoint, response decoding, and the display cap. The client holds no
//! application state -- the app layer applies results to its own store.

pub mod client;
pub mod response;

pub use client::{CatalogClient, DEFAULT_ENDPOINT};
pub use response::decode_products;
