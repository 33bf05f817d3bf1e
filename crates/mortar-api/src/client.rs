//! # API Client
//!
//! The [`PosApi`] trait is the seam the terminal is written against; the
//! reqwest-backed [`HttpClient`] is its production implementation. Tests
//! drive the terminal with an in-memory fake instead of a server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, warn};

use mortar_core::types::{Product, QueueLine};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::wire::{ErrorBody, ProductDto, TransactionRequest};

// =============================================================================
// Seam Trait
// =============================================================================

/// Everything the terminal asks of the server.
#[async_trait]
pub trait PosApi: Send + Sync {
    /// Catalog search by (partial) name. An empty query lists everything.
    async fn search_products(&self, name: &str) -> Result<Vec<Product>, ApiError>;

    /// Single-product lookup by scanned barcode.
    ///
    /// A miss is [`ApiError::NotFound`], which callers log and swallow.
    async fn lookup_barcode(&self, code: &str) -> Result<Product, ApiError>;

    /// Submits the finalized queue as a transaction.
    async fn create_transaction(&self, lines: &[QueueLine]) -> Result<(), ApiError>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// reqwest-backed [`PosApi`] implementation.
pub struct HttpClient {
    http: reqwest::Client,
    config: ApiConfig,
    transaction_method: Method,
}

impl HttpClient {
    /// Builds the client from configuration.
    ///
    /// Fails fast on configuration that can never produce a valid
    /// request (unparseable transaction method).
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let transaction_method = Method::from_bytes(config.transaction.method.as_bytes())
            .map_err(|_| {
                ApiError::InvalidConfig(format!(
                    "unknown HTTP method '{}'",
                    config.transaction.method
                ))
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(HttpClient {
            http,
            config,
            transaction_method,
        })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl PosApi for HttpClient {
    async fn search_products(&self, name: &str) -> Result<Vec<Product>, ApiError> {
        let url = self.config.url("/products/search");
        debug!(%url, query = %name, "searching products");

        let response = self
            .http
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: url,
            });
        }

        let products: Vec<ProductDto> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(count = products.len(), "search results received");
        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn lookup_barcode(&self, code: &str) -> Result<Product, ApiError> {
        let url = self.config.url(&format!("/products/search/barcode/{}", code));
        debug!(%url, "barcode lookup");

        let response = self.http.get(&url).send().await.map_err(ApiError::Transport)?;

        if !response.status().is_success() {
            // The server answers non-2xx for an unknown barcode.
            return Err(ApiError::NotFound);
        }

        let product: ProductDto = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(product.into())
    }

    async fn create_transaction(&self, lines: &[QueueLine]) -> Result<(), ApiError> {
        let url = self.config.url(&self.config.transaction.path);
        let body = TransactionRequest::from_lines(lines);
        debug!(%url, method = %self.transaction_method, lines = lines.len(), "submitting transaction");

        let response = self
            .http
            .request(self.transaction_method.clone(), &url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Rejected: the body may carry the server's reason.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "unparseable rejection body");
                None
            }
        };

        Err(ApiError::Rejected { message })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransactionEndpoint;

    #[test]
    fn test_client_rejects_bad_method() {
        let config = ApiConfig {
            transaction: TransactionEndpoint {
                method: "P OST".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            HttpClient::new(config),
            Err(ApiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_client_accepts_configured_method() {
        let config = ApiConfig {
            transaction: TransactionEndpoint {
                method: "PUT".to_string(),
                path: "/sales".to_string(),
            },
            ..Default::default()
        };

        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.transaction_method, Method::PUT);
        assert_eq!(client.config().transaction.path, "/sales");
    }
}
