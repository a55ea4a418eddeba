//! # Cart Errors
//!
//! `CartError` is what cart operations return. `ApiError` is what the
//! browser receives: a machine-readable `code` plus the display `message`.
//!
//! ```json
//! { "code": "INSUFFICIENT_STOCK", "message": "Stock insuffisant" }
//! ```

use serde::Serialize;
use storefront_core::{CoreError, StockError, ValidationError};
use thiserror::Error;

/// Cart operation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Requested quantity exceeds stock; message is the ledger's.
    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Product {0} not in cart")]
    NotInCart(String),

    #[error("Cart cannot have more than {max} items")]
    CartFull { max: usize },

    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },
}

impl From<CoreError> for CartError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Stock(e) => CartError::Stock(e),
            CoreError::Validation(e) => CartError::Validation(e),
        }
    }
}

/// Convenience type alias for cart results.
pub type CartResult<T> = Result<T, CartError>;

/// Error payload sent to the storefront client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in the Storefront
/// ```typescript
/// switch (e.code) {
///   case 'INSUFFICIENT_STOCK':
///     disableCheckout(e.message);
///     break;
///   case 'VALIDATION_ERROR':
///     showFieldError(e.message);
///     break;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item is not in the cart (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Cart limit reached (422)
    CartError,

    /// Insufficient stock (409)
    InsufficientStock,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        let code = match &err {
            CartError::Stock(_) => ErrorCode::InsufficientStock,
            CartError::Validation(_) => ErrorCode::ValidationError,
            CartError::NotInCart(_) => ErrorCode::NotFound,
            CartError::CartFull { .. } | CartError::QuantityTooLarge { .. } => {
                ErrorCode::CartError
            }
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_error_serializes_for_ui() {
        let err: ApiError = CartError::from(StockError {
            requested: 100,
            available: 5,
        })
        .into();

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "INSUFFICIENT_STOCK", "message": "Stock insuffisant" })
        );
    }

    #[test]
    fn test_not_in_cart_maps_to_not_found() {
        let err: ApiError = CartError::NotInCart("p-9".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product p-9 not in cart");
    }

    #[test]
    fn test_core_error_unwraps_into_cart_error() {
        let core = CoreError::Stock(StockError {
            requested: 2,
            available: 1,
        });
        assert!(matches!(CartError::from(core), CartError::Stock(_)));
    }
}
