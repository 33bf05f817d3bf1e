//! # Error Types
//!
//! Domain-specific error types for mortar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  mortar-core errors (this file)                                     │
//! │  ├── QueueError       - Sales queue rule violations                 │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  mortar-api errors (separate crate)                                 │
//! │  └── ApiError         - HTTP and server-side failures               │
//! │                                                                     │
//! │  Terminal alerts (in app)                                           │
//! │  └── Alert            - What the cashier sees                       │
//! │                                                                     │
//! │  Flow: ValidationError → QueueError → Alert → cashier               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, available stock)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Queue Error
// =============================================================================

/// Sales queue rule violations.
///
/// These are caught before any network I/O and abort the whole operation;
/// a failed add never leaves a partial increment behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// Adding the requested units would trip the stock guard.
    ///
    /// ```text
    /// Add to queue (queued 4, requested 1, available 5)
    ///      │
    ///      ▼
    /// guard: 4 + 1 >= 5
    ///      │
    ///      ▼
    /// StockExceeded { product_id: 1, available: 5 }
    /// ```
    #[error("Insufficient quantity in stock for product {product_id}. Available quantity: {available}")]
    StockExceeded { product_id: i64, available: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when cashier input does not meet requirements, before any
/// business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
