//! # storefront-core: Pure Cart Ledger for the Storefront
//!
//! This crate holds the only real computation behind the storefront cart:
//! line subtotals, cart totals and the stock check run before checkout.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Browser storefront / seller dashboard                │   │
//! │  │        Cart page ──► Line prices ──► Cart total ──► Checkout    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                storefront-cart (cart state owner)               │   │
//! │  │         add_item, update_quantity, remove_item, clear           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  ledger   │  │   error   │  │ validation│  │   │
//! │  │   │ LineItem  │  │ subtotal  │  │StockError │  │   rules   │  │   │
//! │  │   │ Product   │  │ total     │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Product)
//! - [`ledger`] - Subtotal, total and stock check
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::ledger::{compute_total, validate_stock};
//! use storefront_core::LineItem;
//!
//! let cart = [LineItem::new(25.0, 2), LineItem::new(30.0, 1)];
//! assert_eq!(compute_total(&cart), 80.0);
//!
//! let err = validate_stock(100, 5).unwrap_err();
//! assert_eq!(err.to_string(), "Stock insuffisant");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, StockError, ValidationError};
pub use ledger::{compute_subtotal, compute_total, validate_stock};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Keeps carts at a size the storefront can render and check out in one go.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line.
///
/// ## Business Reason
/// Catches typing mistakes (1000 instead of 10) before they reach checkout.
pub const MAX_ITEM_QUANTITY: i64 = 999;
