//! # Sales Queue
//!
//! The in-progress, not-yet-submitted list of line items for the current
//! sale.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Sales Queue Operations                          │
//! │                                                                     │
//! │  Cashier Action            Operation              Queue Change      │
//! │  ──────────────            ─────────              ────────────      │
//! │                                                                     │
//! │  Add / scan product ─────► add_or_increment() ──► line++ or new     │
//! │                                                                     │
//! │  Edit quantity cell ─────► edit_quantity() ─────► qty set/clamped   │
//! │                                                                     │
//! │  Remove line ────────────► remove() ────────────► line deleted      │
//! │                                                                     │
//! │  Sale completed ─────────► clear() ─────────────► all lines gone    │
//! │                                                                     │
//! │  NOTE: none of these touch the displayed grand total. The caller    │
//! │  recomputes it synchronously after every mutation.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id; re-adding increments instead
//! - A rejected add leaves the queue untouched (no partial increment)
//! - Subtotals are derived, never stored

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::QueueError;
use crate::money::Money;
use crate::types::{Product, QueueLine};
use crate::validation::{parse_quantity, validate_submit_quantity};

/// Result of a direct quantity edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityEdit {
    /// The edited value was accepted as-is.
    Applied { quantity: i64 },

    /// The edited value exceeded displayed stock and was clamped down.
    /// The caller surfaces a warning with the available quantity.
    Clamped { available: i64 },
}

/// The sales queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesQueue {
    lines: Vec<QueueLine>,
}

impl SalesQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        SalesQueue::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[QueueLine] {
        &self.lines
    }

    /// Looks up the line for a product, if one exists.
    pub fn find(&self, product_id: i64) -> Option<&QueueLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Quantity already queued for a product (0 when absent).
    pub fn queued_quantity(&self, product_id: i64) -> i64 {
        self.find(product_id).map(|l| l.quantity).unwrap_or(0)
    }

    /// Adds a product to the queue, or increments its existing line.
    ///
    /// ## Behavior
    /// - The prospective total (already queued + requested) is checked
    ///   against the catalog's stock guard *before* anything changes.
    ///   A guard trip aborts the entire operation.
    /// - If a line for the product exists, its quantity is raised; the
    ///   subtotal follows because it is derived.
    /// - Otherwise a new line is appended with the product's current
    ///   price and names frozen in.
    pub fn add_or_increment(
        &mut self,
        catalog: &Catalog,
        product: &Product,
        requested_qty: i64,
    ) -> Result<(), QueueError> {
        let prospective = self.queued_quantity(product.id) + requested_qty;

        if catalog.would_exceed(product.id, prospective) {
            return Err(QueueError::StockExceeded {
                product_id: product.id,
                available: catalog.available_quantity(product.id).unwrap_or(0),
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = prospective;
            return Ok(());
        }

        self.lines.push(QueueLine::from_product(product, requested_qty));
        Ok(())
    }

    /// Applies a direct edit of a line's quantity cell.
    ///
    /// The raw text is parsed leniently (anything non-numeric counts as 0,
    /// matching how an emptied input field reads). When the parsed value
    /// exceeds the displayed stock it is clamped to the available quantity
    /// and the caller is told, so the cashier sees a warning. The line's
    /// subtotal is re-derived in every case.
    ///
    /// Returns `None` when no line exists for the product.
    pub fn edit_quantity(
        &mut self,
        catalog: &Catalog,
        product_id: i64,
        raw: &str,
    ) -> Option<QuantityEdit> {
        let line = self.lines.iter_mut().find(|l| l.product_id == product_id)?;
        let mut quantity = parse_quantity(raw);

        let mut clamped = None;
        if let Some(available) = catalog.available_quantity(product_id) {
            if quantity > available {
                quantity = available;
                clamped = Some(available);
            }
        }

        line.quantity = quantity;
        Some(match clamped {
            Some(available) => QuantityEdit::Clamped { available },
            None => QuantityEdit::Applied { quantity },
        })
    }

    /// Removes the line for a product. No-op when absent.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    /// The grand total, recomputed from scratch over all line subtotals.
    ///
    /// There is no incremental accumulator; the queue itself is the only
    /// source of truth.
    pub fn grand_total(&self) -> Money {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }

    /// True when any line has a non-positive quantity.
    ///
    /// Submission is blocked while this holds.
    pub fn has_invalid_quantity(&self) -> bool {
        self.lines
            .iter()
            .any(|l| validate_submit_quantity(l.quantity).is_err())
    }

    /// Drops every line. Used after a successful submission.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price_cents: i64, quantity: i64) -> Product {
        Product {
            id,
            generic_name: format!("Generic {}", id),
            brand_name: format!("Brand {}", id),
            selling_price: Money::from_cents(price_cents),
            quantity,
            expiry_dates: Vec::new(),
            barcode: None,
            cost_price: None,
        }
    }

    fn catalog_with(products: Vec<Product>) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.replace(products);
        catalog
    }

    #[test]
    fn test_add_creates_single_line() {
        let catalog = catalog_with(vec![product(1, 1000, 10)]);
        let mut queue = SalesQueue::new();

        queue.add_or_increment(&catalog, catalog.get(1).unwrap(), 1).unwrap();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.find(1).unwrap().quantity, 1);
        assert_eq!(queue.find(1).unwrap().subtotal().cents(), 1000);
    }

    #[test]
    fn test_add_twice_increments_one_line() {
        let catalog = catalog_with(vec![product(1, 1000, 10)]);
        let p = catalog.get(1).unwrap().clone();
        let mut queue = SalesQueue::new();

        queue.add_or_increment(&catalog, &p, 2).unwrap();
        queue.add_or_increment(&catalog, &p, 3).unwrap();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.queued_quantity(1), 5);
        assert_eq!(queue.grand_total().cents(), 5000);
    }

    #[test]
    fn test_add_aborts_on_stock_guard_with_no_partial_effect() {
        let catalog = catalog_with(vec![product(1, 1000, 5)]);
        let p = catalog.get(1).unwrap().clone();
        let mut queue = SalesQueue::new();

        queue.add_or_increment(&catalog, &p, 4).unwrap();

        // 4 + 1 = 5 reaches displayed stock, which the guard rejects.
        let err = queue.add_or_increment(&catalog, &p, 1).unwrap_err();
        assert_eq!(
            err,
            QueueError::StockExceeded {
                product_id: 1,
                available: 5
            }
        );
        assert_eq!(queue.queued_quantity(1), 4);
    }

    #[test]
    fn test_add_unrendered_product_is_unguarded() {
        // A barcode hit that is not in the catalog has no displayed stock.
        let catalog = Catalog::new();
        let p = product(8, 500, 2);
        let mut queue = SalesQueue::new();

        queue.add_or_increment(&catalog, &p, 1).unwrap();
        assert_eq!(queue.queued_quantity(8), 1);
    }

    #[test]
    fn test_edit_quantity_applies_and_rederives_subtotal() {
        let catalog = catalog_with(vec![product(1, 1000, 10)]);
        let p = catalog.get(1).unwrap().clone();
        let mut queue = SalesQueue::new();
        queue.add_or_increment(&catalog, &p, 1).unwrap();

        let edit = queue.edit_quantity(&catalog, 1, "7").unwrap();
        assert_eq!(edit, QuantityEdit::Applied { quantity: 7 });
        assert_eq!(queue.find(1).unwrap().subtotal().cents(), 7000);
    }

    #[test]
    fn test_edit_quantity_clamps_to_available() {
        let catalog = catalog_with(vec![product(1, 1000, 5)]);
        let p = catalog.get(1).unwrap().clone();
        let mut queue = SalesQueue::new();
        queue.add_or_increment(&catalog, &p, 1).unwrap();

        let edit = queue.edit_quantity(&catalog, 1, "12").unwrap();
        assert_eq!(edit, QuantityEdit::Clamped { available: 5 });
        assert_eq!(queue.find(1).unwrap().quantity, 5);
        assert_eq!(queue.find(1).unwrap().subtotal().cents(), 5000);
    }

    #[test]
    fn test_edit_quantity_garbage_reads_as_zero() {
        let catalog = catalog_with(vec![product(1, 1000, 5)]);
        let p = catalog.get(1).unwrap().clone();
        let mut queue = SalesQueue::new();
        queue.add_or_increment(&catalog, &p, 2).unwrap();

        let edit = queue.edit_quantity(&catalog, 1, "abc").unwrap();
        assert_eq!(edit, QuantityEdit::Applied { quantity: 0 });
        assert_eq!(queue.find(1).unwrap().subtotal().cents(), 0);
        assert!(queue.has_invalid_quantity());
    }

    #[test]
    fn test_edit_quantity_missing_line() {
        let catalog = Catalog::new();
        let mut queue = SalesQueue::new();
        assert_eq!(queue.edit_quantity(&catalog, 1, "3"), None);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let catalog = catalog_with(vec![product(1, 1000, 10), product(2, 550, 10)]);
        let mut queue = SalesQueue::new();
        queue
            .add_or_increment(&catalog, catalog.get(1).unwrap(), 1)
            .unwrap();
        queue
            .add_or_increment(&catalog, catalog.get(2).unwrap(), 1)
            .unwrap();

        let before = queue.grand_total();
        assert!(queue.remove(2));
        assert_eq!(queue.len(), 1);
        assert_eq!((before - queue.grand_total()).cents(), 550);

        assert!(!queue.remove(2));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_grand_total_is_exact_sum() {
        let catalog = catalog_with(vec![product(1, 1000, 10), product(2, 550, 10)]);
        let mut queue = SalesQueue::new();
        queue
            .add_or_increment(&catalog, catalog.get(1).unwrap(), 1)
            .unwrap();
        queue
            .add_or_increment(&catalog, catalog.get(2).unwrap(), 1)
            .unwrap();

        assert_eq!(queue.grand_total().cents(), 1550);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.grand_total(), Money::zero());
    }
}
