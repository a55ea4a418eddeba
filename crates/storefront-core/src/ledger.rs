//! # Cart Ledger
//!
//! Line subtotals, cart totals and the stock check.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart                                                                   │
//! │  ├── LineItem { price: 9.99,  quantity: 2 } ──► subtotal 19.98         │
//! │  └── LineItem { price: 15.50, quantity: 1 } ──► subtotal 15.50         │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                   total = 0 + 19.98 + 15.50 = 35.48    │
//! │                                                                         │
//! │  Checkout ──► validate_stock(requested, available) ──► Ok / StockError │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three functions are pure: they read their arguments and nothing else,
//! so they can be called from any thread without coordination.

use crate::error::StockError;
use crate::types::LineItem;

/// Price times quantity for one line.
///
/// Plain `f64` multiplication, no rounding. Zero and negative quantities
/// pass straight through. Quantities are whole units (`i64`), so fractional
/// quantities cannot be represented.
///
/// ## Example
/// ```rust
/// use storefront_core::{compute_subtotal, LineItem};
///
/// assert_eq!(compute_subtotal(&LineItem::new(25.0, 2)), 50.0);
/// assert_eq!(compute_subtotal(&LineItem::new(20.0, 0)), 0.0);
/// ```
#[inline]
pub fn compute_subtotal(item: &LineItem) -> f64 {
    item.price * item.quantity as f64
}

/// Sum of line subtotals, accumulated left to right from `0.0`.
///
/// An empty cart totals exactly `0.0`.
///
/// ## Example
/// ```rust
/// use storefront_core::{compute_total, LineItem};
///
/// assert_eq!(compute_total(&[]), 0.0);
///
/// let cart = [LineItem::new(9.99, 2), LineItem::new(15.50, 1)];
/// assert!((compute_total(&cart) - 35.48).abs() < 0.01);
/// ```
pub fn compute_total(cart: &[LineItem]) -> f64 {
    cart.iter().fold(0.0, |acc, item| acc + compute_subtotal(item))
}

/// Checks a requested quantity against available stock.
///
/// Fails only when `requested_quantity > available_stock`. There is no lower
/// bound: zero and negative requests succeed. Callers that need a positive
/// quantity run [`crate::validation::validate_quantity`] first.
///
/// ## Example
/// ```rust
/// use storefront_core::validate_stock;
///
/// assert!(validate_stock(10, 10).is_ok());
/// assert!(validate_stock(-1, 10).is_ok());
/// assert_eq!(validate_stock(100, 5).unwrap_err().to_string(), "Stock insuffisant");
/// ```
pub fn validate_stock(requested_quantity: i64, available_stock: i64) -> Result<(), StockError> {
    if requested_quantity > available_stock {
        return Err(StockError {
            requested: requested_quantity,
            available: available_stock,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
