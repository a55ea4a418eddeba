//! # Domain Types
//!
//! The shapes the ledger reads and the cart store builds from.
//!
//! ```text
//! ┌─────────────────┐   add to cart    ┌─────────────────┐
//! │    Product      │ ───────────────► │    LineItem     │
//! │  ─────────────  │  price frozen,   │  ─────────────  │
//! │  id             │  quantity chosen │  price (f64)    │
//! │  name           │                  │  quantity (i64) │
//! │  price (f64)    │                  └─────────────────┘
//! │  stock (i64)    │
//! └─────────────────┘
//! ```
//!
//! Prices are plain `f64` because the storefront client works in JS numbers
//! and the totals it displays must match what it computes locally.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// One product line in a cart.
///
/// `price` is expected to be non-negative. `quantity` is taken as supplied:
/// zero and negative values are not rejected at this level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unit price.
    pub price: f64,

    /// Units in the line.
    #[ts(type = "number")]
    pub quantity: i64,
}

impl LineItem {
    #[inline]
    pub const fn new(price: f64, quantity: i64) -> Self {
        LineItem { price, quantity }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product as the cart store sees it when adding to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Current unit price.
    pub price: f64,
    /// Units available for sale.
    #[ts(type = "number")]
    pub stock: i64,
}

impl Product {
    /// Builds a line for `quantity` units at the current price.
    #[inline]
    pub fn line_item(&self, quantity: i64) -> LineItem {
        LineItem::new(self.price, quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
