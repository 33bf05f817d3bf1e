//! # Validation Module
//!
//! Input validation rules for cashier-entered values.
//!
//! Everything here runs before any network I/O: a value that fails
//! validation aborts its operation with no partial effect.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted search query.
pub const MAX_SEARCH_QUERY: usize = 100;

/// Validates and normalizes a catalog search query.
///
/// ## Rules
/// - Leading and trailing whitespace is stripped
/// - Empty is allowed (the server treats it as "list everything")
/// - Maximum 100 characters
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_QUERY {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY,
        });
    }

    Ok(query.to_string())
}

/// Parses a quantity cell edit leniently.
///
/// A cleared or non-numeric cell reads as 0, which keeps the line in the
/// queue but blocks submission until the cashier fixes it.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

/// Validates a quantity for submission.
///
/// ## Rules
/// - Must be positive (> 0); zero lines block the whole submission
pub fn validate_submit_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
