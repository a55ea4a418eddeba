//! # Cart State
//!
//! Owns the shopper's cart rows. Totals and stock checks are delegated to
//! [`storefront_core::ledger`]; this module only stores rows and enforces
//! cart limits.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront Action        Cart Method             Ledger Call           │
//! │  ─────────────────        ───────────             ───────────           │
//! │                                                                         │
//! │  Add to cart ───────────► add_item() ───────────► validate_stock       │
//! │                                                                         │
//! │  Change quantity ───────► update_quantity() ────► validate_stock       │
//! │                                                                         │
//! │  Remove ────────────────► remove_item()                                │
//! │                                                                         │
//! │  Render cart ───────────► total(), subtotal() ──► compute_total,       │
//! │                                                   compute_subtotal     │
//! │                                                                         │
//! │  Checkout ──────────────► check_checkout() ─────► validate_stock ×N    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::validation::{
    validate_cart_size, validate_price, validate_product_id, validate_quantity,
};
use storefront_core::{compute_subtotal, compute_total, validate_stock, LineItem, Product};
use storefront_core::ValidationError;
use tracing::{debug, warn};

use crate::config::CartConfig;
use crate::error::{CartError, CartResult};

/// A row in the cart.
///
/// The price is frozen when the row is created so the cart keeps showing
/// what the shopper saw, even if the catalog price changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn line_item(&self) -> LineItem {
        LineItem::new(self.price, self.quantity)
    }

    /// Price × quantity for this row.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        compute_subtotal(&self.line_item())
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Rows are unique by `product_id` (adding the same product merges)
/// - Every stored quantity is > 0 (setting 0 removes the row)
/// - Row count and per-row quantity respect [`CartConfig`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub entries: Vec<CartEntry>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,

    #[serde(skip)]
    config: CartConfig,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Creates an empty cart with default limits.
    pub fn new() -> Self {
        Cart::with_config(CartConfig::default())
    }

    pub fn with_config(config: CartConfig) -> Self {
        Cart {
            entries: Vec::new(),
            created_at: Utc::now(),
            config,
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Adds a product, or increases the quantity if it is already in the cart.
    ///
    /// The resulting quantity must fit in `product.stock`.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CartResult<()> {
        validate_product_id(&product.id)?;
        validate_price(product.price)?;

        let max_qty = self.config.max_item_quantity;
        validate_quantity(quantity, max_qty)?;

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.product_id == product.id)
        {
            let new_qty = entry
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::QuantityTooLarge {
                    requested: i64::MAX,
                    max: max_qty,
                })?;
            if new_qty > max_qty {
                return Err(CartError::QuantityTooLarge {
                    requested: new_qty,
                    max: max_qty,
                });
            }
            checked_stock(&product.id, new_qty, product.stock)?;

            entry.quantity = new_qty;
            debug!(product_id = %product.id, quantity = new_qty, "Cart line quantity increased");
            return Ok(());
        }

        let max_items = self.config.max_cart_items;
        validate_cart_size(self.entries.len(), max_items)
            .map_err(|_| CartError::CartFull { max: max_items })?;
        checked_stock(&product.id, quantity, product.stock)?;

        self.entries.push(CartEntry::from_product(product, quantity));
        debug!(product_id = %product.id, quantity, "Cart line added");
        Ok(())
    }

    /// Replaces the quantity of a row.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the row
    /// - Negative quantity: rejected
    /// - Quantity above `available_stock`: `StockError`
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
        available_stock: i64,
    ) -> CartResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if quantity < 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let max_qty = self.config.max_item_quantity;
        if quantity > max_qty {
            return Err(CartError::QuantityTooLarge {
                requested: quantity,
                max: max_qty,
            });
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.product_id == product_id)
            .ok_or_else(|| CartError::NotInCart(product_id.to_string()))?;

        checked_stock(product_id, quantity, available_stock)?;

        entry.quantity = quantity;
        debug!(product_id = %product_id, quantity, "Cart line quantity updated");
        Ok(())
    }

    /// Removes a row by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CartResult<()> {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);

        if self.entries.len() == initial_len {
            return Err(CartError::NotInCart(product_id.to_string()));
        }

        debug!(product_id = %product_id, "Cart line removed");
        Ok(())
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.created_at = Utc::now();
        debug!("Cart cleared");
    }

    /// Re-checks every row against current stock before checkout.
    ///
    /// Products the lookup does not know are treated as out of stock.
    /// The first failing row blocks checkout.
    pub fn check_checkout<F>(&self, stock_of: F) -> CartResult<()>
    where
        F: Fn(&str) -> Option<i64>,
    {
        for entry in &self.entries {
            let available = stock_of(&entry.product_id).unwrap_or(0);
            checked_stock(&entry.product_id, entry.quantity, available)?;
        }
        Ok(())
    }

    pub fn line_items(&self) -> Vec<LineItem> {
        self.entries.iter().map(CartEntry::line_item).collect()
    }

    /// Subtotal of one row, if the product is in the cart.
    pub fn subtotal(&self, product_id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map(CartEntry::subtotal)
    }

    pub fn total(&self) -> f64 {
        compute_total(&self.line_items())
    }

    /// Number of distinct rows.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of row quantities, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, e| acc.saturating_add(e.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn checked_stock(product_id: &str, requested: i64, available: i64) -> CartResult<()> {
    validate_stock(requested, available).map_err(|err| {
        warn!(product_id = %product_id, requested, available, "Stock check failed");
        CartError::from(err)
    })
}

/// Cart totals for the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: f64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

/// Cart rows plus totals, as the storefront renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntry>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            entries: cart.entries.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Shared cart handle.
///
/// `Arc<Mutex<Cart>>`: mutations are serialized, reads see a consistent
/// cart. A poisoned lock is recovered since every mutation leaves the cart
/// valid before it can panic.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new(config: CartConfig) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::with_config(config))),
        }
    }

    /// Runs `f` with read access to the cart.
    ///
    /// ```rust
    /// use storefront_cart::{CartState, CartTotals};
    ///
    /// let state = CartState::default();
    /// let totals = state.with_cart(|c| CartTotals::from(c));
    /// assert_eq!(totals.total, 0.0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Runs `f` with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
