//! # API Configuration
//!
//! Endpoint configuration for the server API. The transaction endpoint's
//! path and method are deliberately configuration rather than constants:
//! in the original deployment the server injects them into the page, so
//! the client must treat them as externally supplied.

use serde::{Deserialize, Serialize};

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for the server API.
///
/// ## TOML shape (embedded in the terminal's config file)
/// ```toml
/// [server]
/// base_url = "http://localhost:8080"
/// timeout_seconds = 30
///
/// [server.transaction]
/// path = "/transactions"
/// method = "POST"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server origin, without a trailing slash.
    pub base_url: String,

    /// Transaction creation endpoint.
    pub transaction: TransactionEndpoint,

    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:8080".to_string(),
            transaction: TransactionEndpoint::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ApiConfig {
    /// Joins a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Where and how to send the finalized sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionEndpoint {
    /// Path below the server base URL.
    pub path: String,

    /// HTTP method name, parsed when the client is built.
    pub method: String,
}

impl Default for TransactionEndpoint {
    fn default() -> Self {
        TransactionEndpoint {
            path: "/transactions".to_string(),
            method: "POST".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let config = ApiConfig {
            base_url: "http://pos.local:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.url("/products/search"),
            "http://pos.local:8080/products/search"
        );
        assert_eq!(
            config.url("products/search"),
            "http://pos.local:8080/products/search"
        );
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.transaction.path, "/transactions");
        assert_eq!(config.transaction.method, "POST");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{ "base_url": "http://10.0.0.5" }"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5");
        assert_eq!(config.transaction.method, "POST");
    }
}
