//! # Views
//!
//! Pure projections of session state into what the cashier sees. Nothing
//! in here mutates state, and nothing elsewhere reads state back out of
//! rendered text; these tables are write-only output.

use chrono::NaiveDate;

use mortar_core::{Catalog, SalesQueue};

// =============================================================================
// Catalog Table
// =============================================================================

/// One rendered catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub product_id: i64,
    pub generic_name: String,
    pub brand_name: String,
    pub quantity: i64,
    pub selling_price: String,
    pub expiry_dates: Vec<String>,

    /// Zero-stock rows are visually flagged.
    pub out_of_stock: bool,

    /// The add control is disabled exactly when stock is zero.
    pub add_enabled: bool,
}

/// Projects the catalog into display rows. A full replace every time;
/// an empty catalog projects to an empty row set.
pub fn catalog_rows(catalog: &Catalog) -> Vec<CatalogRow> {
    catalog
        .products()
        .iter()
        .map(|p| CatalogRow {
            product_id: p.id,
            generic_name: p.generic_name.clone(),
            brand_name: p.brand_name.clone(),
            quantity: p.quantity,
            selling_price: p.selling_price.to_string(),
            expiry_dates: p.expiry_dates.iter().copied().map(format_expiry).collect(),
            out_of_stock: p.is_out_of_stock(),
            add_enabled: !p.is_out_of_stock(),
        })
        .collect()
}

/// Human-readable month/year rendering of an expiry date.
pub fn format_expiry(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Renders the catalog as a text table.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<20} {:<16} {:>5} {:>12}  {:<24} {}\n",
        "ID", "GENERIC NAME", "BRAND", "QTY", "PRICE", "EXPIRY", ""
    ));

    for row in catalog_rows(catalog) {
        let add_control = if row.add_enabled { "[add]" } else { "  -  " };
        let flag = if row.out_of_stock { " !" } else { "" };
        out.push_str(&format!(
            "{:<4} {:<20} {:<16} {:>5} {:>12}  {:<24} {}{}\n",
            row.product_id,
            row.generic_name,
            row.brand_name,
            row.quantity,
            row.selling_price,
            row.expiry_dates.join(", "),
            add_control,
            flag,
        ));
    }

    out
}

// =============================================================================
// Queue Table
// =============================================================================

/// One rendered sales queue row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRow {
    pub product_id: i64,
    pub generic_name: String,
    pub brand_name: String,
    pub unit_price: String,
    pub quantity: i64,
    pub subtotal: String,
}

/// Projects the queue into display rows.
pub fn queue_rows(queue: &SalesQueue) -> Vec<QueueRow> {
    queue
        .lines()
        .iter()
        .map(|l| QueueRow {
            product_id: l.product_id,
            generic_name: l.generic_name.clone(),
            brand_name: l.brand_name.clone(),
            unit_price: l.unit_price.to_string(),
            quantity: l.quantity,
            subtotal: l.subtotal().to_string(),
        })
        .collect()
}

/// Renders the sales queue plus the displayed grand total.
pub fn render_queue(queue: &SalesQueue, grand_total: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<20} {:<16} {:>12} {:>5} {:>14}\n",
        "ID", "GENERIC NAME", "BRAND", "PRICE", "QTY", "SUBTOTAL"
    ));

    for row in queue_rows(queue) {
        out.push_str(&format!(
            "{:<4} {:<20} {:<16} {:>12} {:>5} {:>14}\n",
            row.product_id,
            row.generic_name,
            row.brand_name,
            row.unit_price,
            row.quantity,
            row.subtotal,
        ));
    }

    out.push_str(&format!("{:>75}\n", format!("GRAND TOTAL  {}", grand_total)));
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mortar_core::money::Money;
    use mortar_core::Product;

    fn product(id: i64, quantity: i64) -> Product {
        Product {
            id,
            generic_name: format!("Generic {}", id),
            brand_name: format!("Brand {}", id),
            selling_price: Money::from_cents(105_000),
            quantity,
            expiry_dates: vec![NaiveDate::from_ymd_opt(2027, 3, 14).unwrap()],
            barcode: None,
            cost_price: None,
        }
    }

    #[test]
    fn test_row_count_matches_input() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 5), product(2, 0), product(3, 9)]);

        let rows = catalog_rows(&catalog);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_out_of_stock_rows_disable_add() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 5), product(2, 0)]);

        let rows = catalog_rows(&catalog);
        assert!(rows[0].add_enabled);
        assert!(!rows[0].out_of_stock);
        assert!(!rows[1].add_enabled);
        assert!(rows[1].out_of_stock);
    }

    #[test]
    fn test_empty_catalog_renders_empty_body() {
        let catalog = Catalog::new();
        assert!(catalog_rows(&catalog).is_empty());

        // Header only, no rows, no panic.
        let rendered = render_catalog(&catalog);
        assert_eq!(rendered.lines().count(), 1);
    }

    #[test]
    fn test_expiry_is_month_year() {
        let date = NaiveDate::from_ymd_opt(2027, 3, 14).unwrap();
        assert_eq!(format_expiry(date), "March 2027");
    }

    #[test]
    fn test_queue_rows_carry_derived_subtotals() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 5)]);
        let p = catalog.get(1).unwrap().clone();

        let mut queue = SalesQueue::new();
        queue.add_or_increment(&catalog, &p, 2).unwrap();

        let rows = queue_rows(&queue);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit_price, "1050.00");
        assert_eq!(rows[0].subtotal, "2100.00");

        let rendered = render_queue(&queue, "2,100.00");
        assert!(rendered.contains("GRAND TOTAL  2,100.00"));
    }
}
