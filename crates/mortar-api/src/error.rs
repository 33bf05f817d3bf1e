//! # API Error Types
//!
//! One variant per failure class the terminal reacts to differently:
//!
//! - [`ApiError::NotFound`] is recoverable and only ever logged
//! - [`ApiError::Rejected`] carries the server's own message to the alert
//! - [`ApiError::Transport`] / [`ApiError::Decode`] map to the generic
//!   error alert
//!
//! Nothing here is retried automatically; recovery is always the cashier
//! re-triggering the action.

use thiserror::Error;

/// Errors from the server API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The lookup matched nothing (non-2xx from a search/barcode GET).
    #[error("Product not found")]
    NotFound,

    /// The server rejected a transaction, optionally saying why.
    #[error("Transaction rejected: {}", message.as_deref().unwrap_or("no detail provided"))]
    Rejected { message: Option<String> },

    /// Unexpected HTTP status outside the cases above.
    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The request never completed (connect, timeout, TLS).
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response whose body did not parse as expected.
    #[error("Failed to decode server response: {0}")]
    Decode(String),

    /// The client was built from unusable configuration.
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// True for failures the cashier never sees (logged only).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_rendering() {
        let err = ApiError::Rejected {
            message: Some("Insufficient stock".to_string()),
        };
        assert_eq!(err.to_string(), "Transaction rejected: Insufficient stock");

        let err = ApiError::Rejected { message: None };
        assert_eq!(err.to_string(), "Transaction rejected: no detail provided");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(ApiError::NotFound.is_recoverable());
        assert!(!ApiError::Rejected { message: None }.is_recoverable());
    }
}
