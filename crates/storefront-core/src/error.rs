//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── StockError       - Requested quantity exceeds available stock     │
//! │  ├── ValidationError  - Opt-in input validation failures               │
//! │  └── CoreError        - Either of the above                            │
//! │                                                                         │
//! │  storefront-cart errors (separate crate)                               │
//! │  ├── CartError        - Cart state operation failures                  │
//! │  └── ApiError         - What the browser sees (serialized)             │
//! │                                                                         │
//! │  Flow: StockError → CartError → ApiError → Storefront UI               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Stock Error
// =============================================================================

/// Requested quantity exceeds available stock.
///
/// The only error the ledger itself raises. The display text is the exact
/// message the storefront shows to shoppers.
///
/// ## User Workflow
/// ```text
/// Checkout (qty: 100)
///      │
///      ▼
/// validate_stock(100, 5)
///      │
///      ▼
/// StockError { requested: 100, available: 5 }
///      │
///      ▼
/// UI blocks checkout: "Stock insuffisant"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Stock insuffisant")]
pub struct StockError {
    pub requested: i64,
    pub available: i64,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the opt-in checks in [`crate::validation`], never by the ledger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (or NaN).
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
