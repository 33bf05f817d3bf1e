//! # Catalog
//!
//! The currently displayed, searchable set of products with live stock
//! counts, plus the stock guard that protects the sales queue against
//! over-selling.
//!
//! The catalog is replaced wholesale by every accepted search response.
//! There is no merge path: stale rows disappear together with the result
//! set that produced them.

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// The product list the cashier is currently looking at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Replaces the entire catalog with a fresh result set.
    ///
    /// An empty result set is valid and leaves the catalog empty.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// All products, in server result order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Displayed stock for a product, when it is in the catalog.
    pub fn available_quantity(&self, product_id: i64) -> Option<i64> {
        self.get(product_id).map(|p| p.quantity)
    }

    /// The stock guard.
    ///
    /// Returns true iff `candidate_total_qty >= available` for the product
    /// as currently displayed. The boundary is deliberately `>=`, not `>`:
    /// reaching the displayed stock exactly already counts as exceeded.
    ///
    /// A product that is not in the catalog is never "exceeded"; a barcode
    /// hit that was never rendered has no displayed stock to guard against.
    pub fn would_exceed(&self, product_id: i64, candidate_total_qty: i64) -> bool {
        match self.available_quantity(product_id) {
            Some(available) => candidate_total_qty >= available,
            None => false,
        }
    }

    /// Decrements displayed stock after a successful sale submission.
    ///
    /// Unknown ids are ignored; displayed stock never goes below zero.
    pub fn decrement(&mut self, product_id: i64, sold_qty: i64) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
            product.quantity = (product.quantity - sold_qty).max(0);
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, quantity: i64) -> Product {
        Product {
            id,
            generic_name: format!("Generic {}", id),
            brand_name: format!("Brand {}", id),
            selling_price: Money::from_cents(1000),
            quantity,
            expiry_dates: Vec::new(),
            barcode: None,
            cost_price: None,
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 5), product(2, 0)]);
        assert_eq!(catalog.len(), 2);

        catalog.replace(vec![product(3, 7)]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(1).is_none());
        assert_eq!(catalog.available_quantity(3), Some(7));

        catalog.replace(Vec::new());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_stock_guard_boundary() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 5)]);

        // Reaching the available quantity exactly counts as exceeded.
        assert!(catalog.would_exceed(1, 5));
        assert!(!catalog.would_exceed(1, 4));
        assert!(catalog.would_exceed(1, 6));
    }

    #[test]
    fn test_stock_guard_unknown_product() {
        let catalog = Catalog::new();
        assert!(!catalog.would_exceed(42, 1_000_000));
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 3)]);

        catalog.decrement(1, 2);
        assert_eq!(catalog.available_quantity(1), Some(1));

        catalog.decrement(1, 5);
        assert_eq!(catalog.available_quantity(1), Some(0));

        // Unknown id is a no-op
        catalog.decrement(9, 1);
    }
}
