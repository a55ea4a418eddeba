//! # Validation Module
//!
//! Opt-in input checks for callers that need more than the ledger's narrow
//! contract. The ledger never calls these itself.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Storefront client                                            │
//! │  └── Form checks, immediate feedback                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart store (storefront-cart)                                 │
//! │  └── THIS MODULE: quantity, price, id, cart size                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger                                                       │
//! │  └── validate_stock: requested > available only                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_PRODUCT_ID_LEN: usize = 64;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Letters, digits, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_id;
///
/// assert!(validate_product_id("64f1c0a2e9").is_ok());
/// assert!(validate_product_id("").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested quantity against a per-line maximum.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `max` (usually [`crate::MAX_ITEM_QUANTITY`] or the
///   cart's configured limit)
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_quantity;
/// use storefront_core::MAX_ITEM_QUANTITY;
///
/// assert!(validate_quantity(5, MAX_ITEM_QUANTITY).is_ok());
/// assert!(validate_quantity(1500, 5000).is_ok());
/// assert!(validate_quantity(1500, MAX_ITEM_QUANTITY).is_err());
/// ```
pub fn validate_quantity(qty: i64, max: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// Zero is allowed (free items). NaN, infinities and negatives are not.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more line fits in the cart.
pub fn validate_cart_size(current_items: usize, max_items: usize) -> ValidationResult<()> {
    if current_items >= max_items {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: i64::try_from(max_items).unwrap_or(i64::MAX),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("64f1c0a2e9b3").is_ok());
        assert!(validate_product_id("tote_bag-2").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("has space").is_err());
        assert!(validate_product_id("../etc").is_err());
        assert!(validate_product_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1, MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_quantity(999, MAX_ITEM_QUANTITY).is_ok());

        assert!(matches!(
            validate_quantity(0, MAX_ITEM_QUANTITY),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_quantity(-1, MAX_ITEM_QUANTITY).is_err());
        assert!(matches!(
            validate_quantity(1000, MAX_ITEM_QUANTITY),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_quantity_uses_given_max() {
        assert!(validate_quantity(1500, 5000).is_ok());
        assert_eq!(
            validate_quantity(5001, 5000),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: 5000,
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(15.5).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0, MAX_CART_ITEMS).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1, MAX_CART_ITEMS).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS, MAX_CART_ITEMS).is_err());
    }

    #[test]
    fn test_validate_cart_size_huge_limit_does_not_wrap() {
        assert_eq!(
            validate_cart_size(usize::MAX, usize::MAX),
            Err(ValidationError::OutOfRange {
                field: "cart items".to_string(),
                min: 0,
                max: i64::MAX,
            })
        );
    }
}
