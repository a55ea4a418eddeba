//! # storefront-cart: Cart State for the Storefront
//!
//! The in-memory owner of a shopper's cart. Every number it reports comes
//! from [`storefront_core::ledger`]; this crate only keeps the rows, enforces
//! cart limits and turns failures into payloads the browser can display.
//!
//! ## Modules
//! - [`cart`] - Cart rows, totals and the shared `CartState` handle
//! - [`config`] - Limits and currency display, loaded from the environment
//! - [`error`] - `CartError` and the serialized `ApiError`

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod cart;
pub mod config;
pub mod error;

pub use cart::{Cart, CartEntry, CartResponse, CartState, CartTotals};
pub use config::CartConfig;
pub use error::{ApiError, CartError, CartResult, ErrorCode};

/// Installs the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Trace for storefront crates only
/// - Default: `info,storefront=debug`
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "Tracing subscriber already installed, keeping it");
            false
        }
    }
}
