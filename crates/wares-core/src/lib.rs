//! # wares-core - Core Domain Types
//!
//! Foundation crate for wares. Provides domain types, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Product`] - One catalog entry as decoded from the remote API
//! - [`LoadState`] - The screen's fetch lifecycle phase (Idle, Loading, Loaded, Failed)
//! - [`MAX_PRODUCTS`] - Display cap applied to every fetched batch
//! - [`FETCH_FAILED_MSG`] - The fixed user-facing message for any fetch failure
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use wares_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all wares crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{LoadState, Product, FETCH_FAILED_MSG, MAX_PRODUCTS};
