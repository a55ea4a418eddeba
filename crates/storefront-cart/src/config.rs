//! # Cart Configuration
//!
//! Limits and display settings for the cart store.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup, so no locking.

use serde::{Deserialize, Serialize};
use storefront_core::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};
use tracing::warn;

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartConfig {
    /// Maximum distinct lines per cart.
    pub max_cart_items: usize,

    /// Maximum quantity per line.
    pub max_item_quantity: i64,

    /// Currency symbol for display.
    pub currency_symbol: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            max_cart_items: MAX_CART_ITEMS,
            max_item_quantity: MAX_ITEM_QUANTITY,
            currency_symbol: "€".to_string(),
        }
    }
}

impl CartConfig {
    /// Builds a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_MAX_CART_ITEMS`: Override max lines per cart
    /// - `STOREFRONT_MAX_ITEM_QUANTITY`: Override max quantity per line
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    ///
    /// Unparseable values are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CartConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CartConfig::default();

        if let Some(raw) = lookup("STOREFRONT_MAX_CART_ITEMS") {
            match raw.trim().parse::<usize>() {
                Ok(max) if max > 0 => config.max_cart_items = max,
                _ => warn!(value = %raw, "Ignoring invalid STOREFRONT_MAX_CART_ITEMS"),
            }
        }

        if let Some(raw) = lookup("STOREFRONT_MAX_ITEM_QUANTITY") {
            match raw.trim().parse::<i64>() {
                Ok(max) if max > 0 => config.max_item_quantity = max,
                _ => warn!(value = %raw, "Ignoring invalid STOREFRONT_MAX_ITEM_QUANTITY"),
            }
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            if !symbol.trim().is_empty() {
                config.currency_symbol = symbol.trim().to_string();
            }
        }

        config
    }

    /// Formats an amount for display, e.g. `€35.48`.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CartConfig::from_lookup(|_| None);
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.max_cart_items, 100);
        assert_eq!(config.max_item_quantity, 999);
    }

    #[test]
    fn test_overrides() {
        let config = CartConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_MAX_CART_ITEMS", "20"),
            ("STOREFRONT_MAX_ITEM_QUANTITY", " 50 "),
            ("STOREFRONT_CURRENCY_SYMBOL", "$"),
        ]));
        assert_eq!(config.max_cart_items, 20);
        assert_eq!(config.max_item_quantity, 50);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = CartConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_MAX_CART_ITEMS", "lots"),
            ("STOREFRONT_MAX_ITEM_QUANTITY", "-3"),
            ("STOREFRONT_CURRENCY_SYMBOL", "  "),
        ]));
        assert_eq!(config, CartConfig::default());
    }

    #[test]
    fn test_format_amount() {
        let config = CartConfig::default();
        assert_eq!(config.format_amount(35.48), "€35.48");
        assert_eq!(config.format_amount(0.0), "€0.00");
    }
}
