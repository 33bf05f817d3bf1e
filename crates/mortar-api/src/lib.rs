//! # mortar-api: HTTP Client for the Pharmacy Server
//!
//! Everything the terminal asks the server is funneled through this crate:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Server Interface                             │
//! │                                                                     │
//! │  GET  {base}/products/search?name={text}   → Vec<Product>           │
//! │  GET  {base}/products/search/barcode/{c}   → Product (404 = none)   │
//! │  {m}  {base}{transaction_path}             → 2xx, or {"error": ..}  │
//! │                                                                     │
//! │  The transaction endpoint's path and method are configuration, not  │
//! │  constants; the server injects them into the page in the original   │
//! │  deployment and the terminal reads them from its config file here.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - The [`PosApi`] trait and its reqwest implementation
//! - [`wire`] - DTOs matching the server's JSON exactly
//! - [`config`] - Endpoint configuration
//! - [`error`] - API error taxonomy

pub mod client;
pub mod config;
pub mod error;
pub mod wire;

pub use client::{HttpClient, PosApi};
pub use config::{ApiConfig, TransactionEndpoint};
pub use error::ApiError;
pub use wire::{ProductDto, TransactionLine, TransactionRequest};
