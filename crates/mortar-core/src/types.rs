//! # Domain Types
//!
//! Core domain types used throughout Mortar POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌──────────────────┐          ┌──────────────────┐                 │
//! │  │     Product      │          │    QueueLine     │                 │
//! │  │  ──────────────  │   add    │  ──────────────  │                 │
//! │  │  id (server)     │ ───────► │  product_id      │                 │
//! │  │  generic_name    │          │  name snapshots  │                 │
//! │  │  brand_name      │          │  unit_price      │                 │
//! │  │  selling_price   │          │  quantity        │                 │
//! │  │  quantity (stock)│          │  subtotal()      │                 │
//! │  │  expiry_dates    │          └──────────────────┘                 │
//! │  └──────────────────┘                                               │
//! │                                                                     │
//! │  Product lives in the Catalog; QueueLine lives in the SalesQueue.   │
//! │  Neither is persisted on the terminal. The catalog copy is replaced │
//! │  wholesale by every accepted search response.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product as last fetched from the server.
///
/// The `quantity` field is the authoritative stock count as displayed to
/// the cashier. It is only ever changed by a fresh search response or by
/// the optimistic decrement after a successful sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, unique per product.
    pub id: i64,

    /// Generic (pharmacological) name.
    pub generic_name: String,

    /// Brand name shown alongside the generic name.
    pub brand_name: String,

    /// Current selling price.
    pub selling_price: Money,

    /// Units available in stock, as last reported by the server.
    pub quantity: i64,

    /// Expiry dates of the batches currently in stock.
    pub expiry_dates: Vec<NaiveDate>,

    /// Barcode, when the product has one registered.
    pub barcode: Option<String>,

    /// Purchase cost, when the server exposes it.
    pub cost_price: Option<Money>,
}

impl Product {
    /// A product with zero stock cannot be added to a sale.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

// =============================================================================
// Queue Line
// =============================================================================

/// A line item in the in-progress sale.
///
/// ## Price Freezing
/// `unit_price` and the display names are captured when the product is
/// added. A later catalog refresh does not rewrite lines already queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueLine {
    /// Product this line refers to.
    pub product_id: i64,

    /// Generic name at time of adding (frozen).
    pub generic_name: String,

    /// Brand name at time of adding (frozen).
    pub brand_name: String,

    /// Unit selling price at time of adding (frozen).
    pub unit_price: Money,

    /// Units being sold. User-editable, at least 1 when created.
    pub quantity: i64,
}

impl QueueLine {
    /// Creates a queue line from a catalog product and an initial quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        QueueLine {
            product_id: product.id,
            generic_name: product.generic_name.clone(),
            brand_name: product.brand_name.clone(),
            unit_price: product.selling_price,
            quantity,
        }
    }

    /// Line subtotal, always derived as unit price × quantity.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
