//! # Session State
//!
//! The state a cashier works against between sales: the displayed catalog,
//! the in-progress sales queue and the formatted grand total.
//!
//! ## State Changes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Session State Changes                         │
//! │                                                                     │
//! │  Cashier Action        Session Method          State Change         │
//! │  ──────────────        ──────────────          ────────────         │
//! │                                                                     │
//! │  Search ─────────────► begin_search()          ticket issued        │
//! │  (response arrives) ─► apply_search() ───────► catalog replaced,    │
//! │                                                stale sets discarded │
//! │  Add / scan ─────────► add_to_queue() ───────► line added/bumped    │
//! │  Edit quantity ──────► edit_queue_quantity()─► qty set or clamped   │
//! │  Remove ─────────────► remove_from_queue() ──► line deleted         │
//! │  Sale accepted ──────► complete_sale() ──────► queue cleared, total │
//! │                                                reset, stock bumped  │
//! │                                                                     │
//! │  The displayed total only changes through recompute_total() and     │
//! │  reset_total(); queue mutators never touch it.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use mortar_core::money::AmountFormat;
use mortar_core::queue::QuantityEdit;
use mortar_core::{Catalog, Product, QueueError, SalesQueue};

/// Handle for one issued catalog search.
///
/// Tickets are monotonically increasing; only the response carrying the
/// most recently issued ticket may replace the catalog. A slow response
/// that arrives after a newer search was issued is discarded instead of
/// overwriting fresher results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// The cashier's working state.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    queue: SalesQueue,
    format: AmountFormat,
    grand_total: String,
    last_issued_search: u64,
}

impl Session {
    /// Creates a fresh session with an empty catalog and queue.
    pub fn new(format: AmountFormat) -> Self {
        let grand_total = format.zero();
        Session {
            catalog: Catalog::new(),
            queue: SalesQueue::new(),
            format,
            grand_total,
            last_issued_search: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn queue(&self) -> &SalesQueue {
        &self.queue
    }

    /// The formatted grand total as currently displayed.
    pub fn grand_total(&self) -> &str {
        &self.grand_total
    }

    // =========================================================================
    // Catalog Search Sequencing
    // =========================================================================

    /// Issues a ticket for a new catalog search.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.last_issued_search += 1;
        SearchTicket(self.last_issued_search)
    }

    /// Applies a search response.
    ///
    /// Returns false (and leaves the catalog untouched) when the ticket is
    /// not the latest issued one.
    pub fn apply_search(&mut self, ticket: SearchTicket, products: Vec<Product>) -> bool {
        if ticket.0 != self.last_issued_search {
            return false;
        }
        self.catalog.replace(products);
        true
    }

    // =========================================================================
    // Queue Mutations
    // =========================================================================
    // All of these leave the displayed total alone; the event router
    // recomputes it synchronously after each mutation.

    /// Adds units of a product to the queue (stock guard applies).
    pub fn add_to_queue(&mut self, product: &Product, quantity: i64) -> Result<(), QueueError> {
        self.queue.add_or_increment(&self.catalog, product, quantity)
    }

    /// Applies a direct quantity edit (clamping against displayed stock).
    pub fn edit_queue_quantity(&mut self, product_id: i64, raw: &str) -> Option<QuantityEdit> {
        self.queue.edit_quantity(&self.catalog, product_id, raw)
    }

    /// Removes a line from the queue.
    pub fn remove_from_queue(&mut self, product_id: i64) -> bool {
        self.queue.remove(product_id)
    }

    // =========================================================================
    // Grand Total
    // =========================================================================

    /// Re-derives the displayed total from the queue, from scratch.
    pub fn recompute_total(&mut self) {
        self.grand_total = self.format.format(self.queue.grand_total());
    }

    /// Resets the displayed total to zero without re-reading the queue.
    pub fn reset_total(&mut self) {
        self.grand_total = self.format.zero();
    }

    // =========================================================================
    // Sale Completion
    // =========================================================================

    /// Settles state after the server accepted the sale: the queue is
    /// cleared, the total reset, and each sold product's displayed stock
    /// decremented by the submitted quantity (optimistic update, no
    /// re-fetch).
    pub fn complete_sale(&mut self, sold: &[(i64, i64)]) {
        self.queue.clear();
        for &(product_id, quantity) in sold {
            self.catalog.decrement(product_id, quantity);
        }
        self.reset_total();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
