//! # mortar-core: Pure Business Logic for Mortar POS
//!
//! This crate is the heart of the sales counter. It holds the state the
//! cashier works against as plain values, not as rendered markup: the
//! catalog of searchable products and the in-progress sales queue.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Mortar POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  apps/terminal (cashier UI)                   │  │
//! │  │     catalog table ──► sales queue ──► grand total ──► submit  │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ mortar-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────────────┐     │  │
//! │  │  │  money   │ │ catalog  │ │  queue   │ │  validation   │     │  │
//! │  │  │  Money   │ │ Catalog  │ │SalesQueue│ │   rules       │     │  │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └───────────────┘     │  │
//! │  │                                                               │  │
//! │  │        NO I/O • NO NETWORK • PURE FUNCTIONS                   │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               mortar-api (HTTP client layer)                  │  │
//! │  │        search, barcode lookup, transaction creation           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, QueueLine)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The displayed product list and the stock guard
//! - [`queue`] - The sales queue (line items for the current sale)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Core Invariants
//!
//! 1. At most one queue line per product id
//! 2. The grand total is always re-derived from the queue, never accumulated
//! 3. A queued quantity never exceeds the catalog's displayed stock
//! 4. All monetary values are integer minor units (i64)

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod queue;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{QueueError, ValidationError};
pub use money::{AmountFormat, Money};
pub use queue::{QuantityEdit, SalesQueue};
pub use types::{Product, QueueLine};
