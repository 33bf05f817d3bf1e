//! # Wire Types
//!
//! DTOs matching the server's JSON. Prices are decimal numbers on the
//! wire; they are converted to integer-cent [`Money`] the moment they
//! cross into the domain, and back only when a request is serialized.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mortar_core::money::Money;
use mortar_core::types::{Product, QueueLine};

// =============================================================================
// Product
// =============================================================================

/// A product as the server serializes it.
///
/// The server includes bookkeeping fields (timestamps) this client never
/// reads; serde drops them on the floor. `barcode` and `cost_price` are
/// defaulted because older server builds omit them from search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub generic_name: String,
    pub brand_name: String,
    pub selling_price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub expiry_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub cost_price: Option<f64>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.id,
            generic_name: dto.generic_name,
            brand_name: dto.brand_name,
            selling_price: Money::from_decimal(dto.selling_price),
            quantity: dto.quantity,
            expiry_dates: dto.expiry_dates,
            barcode: dto.barcode.filter(|b| !b.is_empty()),
            cost_price: dto.cost_price.map(Money::from_decimal),
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// Request body for transaction creation.
///
/// ```json
/// { "products": [ { "id": 1, "selling_price": 1000.0, "quantity": 2 } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub products: Vec<TransactionLine>,
}

/// One sold line inside a transaction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionLine {
    pub id: i64,
    pub selling_price: f64,
    pub quantity: i64,
}

impl From<&QueueLine> for TransactionLine {
    fn from(line: &QueueLine) -> Self {
        TransactionLine {
            id: line.product_id,
            selling_price: line.unit_price.to_decimal(),
            quantity: line.quantity,
        }
    }
}

impl TransactionRequest {
    /// Serializes the whole queue for submission.
    pub fn from_lines(lines: &[QueueLine]) -> Self {
        TransactionRequest {
            products: lines.iter().map(TransactionLine::from).collect(),
        }
    }
}

// =============================================================================
// Error Body
// =============================================================================

/// Body the server attaches to a rejected transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_server_json() {
        // Shape as produced by the server, including fields we ignore.
        let json = r#"{
            "id": 4,
            "generic_name": "Paracetamol",
            "brand_name": "Panadol",
            "quantity": 12,
            "cost_price": 800.0,
            "selling_price": 1050.5,
            "expiry_dates": ["2027-03-01", "2027-09-01"],
            "barcode": "6291041500213",
            "created_at": "2026-01-05T09:30:00Z",
            "updated_at": "2026-02-11T14:00:00Z"
        }"#;

        let product: Product = serde_json::from_str::<ProductDto>(json).unwrap().into();

        assert_eq!(product.id, 4);
        assert_eq!(product.generic_name, "Paracetamol");
        assert_eq!(product.selling_price.cents(), 105_050);
        assert_eq!(product.quantity, 12);
        assert_eq!(product.expiry_dates.len(), 2);
        assert_eq!(product.barcode.as_deref(), Some("6291041500213"));
        assert_eq!(product.cost_price.unwrap().cents(), 80_000);
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "generic_name": "Amoxicillin",
            "brand_name": "Amoxil",
            "quantity": 0,
            "selling_price": 500.0
        }"#;

        let product: Product = serde_json::from_str::<ProductDto>(json).unwrap().into();
        assert!(product.is_out_of_stock());
        assert!(product.expiry_dates.is_empty());
        assert_eq!(product.barcode, None);
    }

    #[test]
    fn test_transaction_request_shape() {
        let line = QueueLine {
            product_id: 1,
            generic_name: "Paracetamol".to_string(),
            brand_name: "Panadol".to_string(),
            unit_price: Money::from_cents(100_000),
            quantity: 2,
        };

        let body = serde_json::to_value(TransactionRequest::from_lines(&[line])).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "products": [ { "id": 1, "selling_price": 1000.0, "quantity": 2 } ]
            })
        );
    }

    #[test]
    fn test_error_body() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Insufficient stock"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Insufficient stock"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.error, None);
    }
}
