//! # Event Router
//!
//! Cashier interactions arrive as [`UiEvent`]s, are classified into typed
//! [`Action`]s, and dispatched to exactly one handler each. There is no
//! inspection of widget classes or field names at dispatch time; the
//! intent is declared by the event itself.
//!
//! ## Routing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Event Routing                               │
//! │                                                                     │
//! │  Input events (precedence: quantity edit > name search > barcode)   │
//! │     QueueQuantity ──► EditQuantity ──► clamp + re-derive subtotal   │
//! │     ProductSearch ──► SearchByName ──► replace catalog (sequenced)  │
//! │     Barcode ────────► ScanBarcode ───► lookup, add one unit         │
//! │                                                                     │
//! │  Click events (precedence: add > remove)                            │
//! │     AddButton ──────► AddToQueue ────► add one unit from catalog    │
//! │     RemoveButton ───► RemoveFromQueue► delete the line              │
//! │     CreateTransaction ► SubmitSale ──► validate, POST, settle       │
//! │                                                                     │
//! │  Exactly one branch fires per event. After every queue mutation the │
//! │  grand total is recomputed before the handler returns.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use tracing::{debug, error, info, warn};

use mortar_api::{ApiError, PosApi};
use mortar_core::queue::QuantityEdit;
use mortar_core::validation::validate_search_query;
use mortar_core::QueueError;

use crate::session::Session;

// =============================================================================
// Events
// =============================================================================

/// Which input field the cashier typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputField {
    /// The quantity cell of a queue line.
    QueueQuantity { product_id: i64 },

    /// The product name search box.
    ProductSearch,

    /// The barcode scan box.
    Barcode,
}

/// Which control the cashier activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The add button on a catalog row.
    AddButton { product_id: i64 },

    /// The remove button on a queue line.
    RemoveButton { product_id: i64 },

    /// The create-transaction control.
    CreateTransaction,
}

/// A raw interaction, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Input { field: InputField, value: String },
    Click { target: ClickTarget },
}

/// A classified cashier intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditQuantity { product_id: i64, raw: String },
    SearchByName { query: String },
    ScanBarcode { code: String },
    AddToQueue { product_id: i64 },
    RemoveFromQueue { product_id: i64 },
    SubmitSale,
}

/// Classifies an event into its action.
///
/// The arms are listed in the fixed routing precedence: for input events
/// quantity-edit, then name-search, then barcode; for clicks add, then
/// remove, then submit.
pub fn route(event: UiEvent) -> Action {
    match event {
        UiEvent::Input {
            field: InputField::QueueQuantity { product_id },
            value,
        } => Action::EditQuantity {
            product_id,
            raw: value,
        },
        UiEvent::Input {
            field: InputField::ProductSearch,
            value,
        } => Action::SearchByName { query: value },
        UiEvent::Input {
            field: InputField::Barcode,
            value,
        } => Action::ScanBarcode { code: value },
        UiEvent::Click {
            target: ClickTarget::AddButton { product_id },
        } => Action::AddToQueue { product_id },
        UiEvent::Click {
            target: ClickTarget::RemoveButton { product_id },
        } => Action::RemoveFromQueue { product_id },
        UiEvent::Click {
            target: ClickTarget::CreateTransaction,
        } => Action::SubmitSale,
    }
}

// =============================================================================
// Alerts
// =============================================================================

/// A blocking, cashier-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The stock guard refused an add, or an edit was clamped.
    InsufficientStock { available: i64 },

    /// A scanned product has zero stock and was not added.
    OutOfStock { generic_name: String },

    /// Some queue line has a zero or invalid quantity.
    InvalidQuantity,

    /// The queue is empty; there is nothing to submit.
    EmptyQueue,

    /// The server rejected the transaction.
    TransactionFailed { message: String },

    /// The request never completed or the response was unreadable.
    RequestFailed,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::InsufficientStock { available } => write!(
                f,
                "Insufficient quantity in stock. Available quantity: {}",
                available
            ),
            Alert::OutOfStock { generic_name } => {
                write!(f, "{} is out of stock!", generic_name)
            }
            Alert::InvalidQuantity => write!(f, "Invalid quantity for some products!"),
            Alert::EmptyQueue => write!(f, "No products in the sales queue or quantity is 0!"),
            Alert::TransactionFailed { message } => write!(f, "{}", message),
            Alert::RequestFailed => write!(f, "An error occurred"),
        }
    }
}

/// Fallback shown when the server rejects a sale without detail.
const GENERIC_REJECTION: &str = "Insufficient quantity in stock!";

// =============================================================================
// Outcomes
// =============================================================================

/// What a dispatched action changed, for the caller to re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Nothing to re-render.
    None,

    /// The catalog was replaced with a fresh result set.
    Catalog { count: usize },

    /// The queue (and therefore the total) changed.
    Queue,

    /// The sale went through; queue, total and stock were settled.
    SaleCompleted { lines: usize },
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub change: Change,
    pub alert: Option<Alert>,
}

impl Outcome {
    fn nothing() -> Self {
        Outcome {
            change: Change::None,
            alert: None,
        }
    }

    fn changed(change: Change) -> Self {
        Outcome {
            change,
            alert: None,
        }
    }

    fn blocked(alert: Alert) -> Self {
        Outcome {
            change: Change::None,
            alert: Some(alert),
        }
    }

    fn changed_with(change: Change, alert: Alert) -> Self {
        Outcome {
            change,
            alert: Some(alert),
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Dispatches one action against the session.
///
/// Each branch is independent; validation failures abort before any
/// network I/O, and the grand total is recomputed synchronously after
/// every queue mutation.
pub async fn dispatch(session: &mut Session, api: &dyn PosApi, action: Action) -> Outcome {
    match action {
        Action::EditQuantity { product_id, raw } => edit_quantity(session, product_id, &raw),
        Action::SearchByName { query } => search_by_name(session, api, &query).await,
        Action::ScanBarcode { code } => scan_barcode(session, api, &code).await,
        Action::AddToQueue { product_id } => add_to_queue(session, product_id),
        Action::RemoveFromQueue { product_id } => remove_from_queue(session, product_id),
        Action::SubmitSale => submit_sale(session, api).await,
    }
}

fn edit_quantity(session: &mut Session, product_id: i64, raw: &str) -> Outcome {
    debug!(product_id, raw, "quantity edit");

    let Some(edit) = session.edit_queue_quantity(product_id, raw) else {
        warn!(product_id, "quantity edit for a product not in the queue");
        return Outcome::nothing();
    };

    session.recompute_total();

    match edit {
        QuantityEdit::Applied { quantity } => {
            debug!(product_id, quantity, "quantity applied");
            Outcome::changed(Change::Queue)
        }
        QuantityEdit::Clamped { available } => Outcome::changed_with(
            Change::Queue,
            Alert::InsufficientStock { available },
        ),
    }
}

async fn search_by_name(session: &mut Session, api: &dyn PosApi, query: &str) -> Outcome {
    let query = match validate_search_query(query) {
        Ok(q) => q,
        Err(e) => {
            warn!(error = %e, "search query rejected");
            return Outcome::nothing();
        }
    };

    let ticket = session.begin_search();
    match api.search_products(&query).await {
        Ok(products) => {
            let count = products.len();
            if session.apply_search(ticket, products) {
                info!(count, query = %query, "catalog replaced");
                Outcome::changed(Change::Catalog { count })
            } else {
                debug!(query = %query, "stale search response discarded");
                Outcome::nothing()
            }
        }
        // The previous catalog stays on failure.
        Err(e) => {
            error!(error = %e, "product search failed");
            Outcome::nothing()
        }
    }
}

async fn scan_barcode(session: &mut Session, api: &dyn PosApi, code: &str) -> Outcome {
    let code = code.trim();
    if code.is_empty() {
        return Outcome::nothing();
    }

    let product = match api.lookup_barcode(code).await {
        Ok(product) => product,
        // A miss is routine at the counter (mistyped scan, unregistered
        // code) and is never surfaced to the cashier.
        Err(ApiError::NotFound) => {
            debug!(barcode = code, "no product for barcode");
            return Outcome::nothing();
        }
        Err(e) => {
            error!(barcode = code, error = %e, "barcode lookup failed");
            return Outcome::nothing();
        }
    };

    if product.is_out_of_stock() {
        return Outcome::blocked(Alert::OutOfStock {
            generic_name: product.generic_name,
        });
    }

    match session.add_to_queue(&product, 1) {
        Ok(()) => {
            session.recompute_total();
            info!(product_id = product.id, "barcode add");
            Outcome::changed(Change::Queue)
        }
        Err(QueueError::StockExceeded { available, .. }) => {
            Outcome::blocked(Alert::InsufficientStock { available })
        }
        Err(e) => {
            error!(error = %e, "barcode add rejected");
            Outcome::nothing()
        }
    }
}

fn add_to_queue(session: &mut Session, product_id: i64) -> Outcome {
    let Some(product) = session.catalog().get(product_id).cloned() else {
        warn!(product_id, "add for a product not in the catalog");
        return Outcome::nothing();
    };

    match session.add_to_queue(&product, 1) {
        Ok(()) => {
            session.recompute_total();
            info!(product_id, "added to queue");
            Outcome::changed(Change::Queue)
        }
        Err(QueueError::StockExceeded { available, .. }) => {
            Outcome::blocked(Alert::InsufficientStock { available })
        }
        Err(e) => {
            error!(error = %e, "add rejected");
            Outcome::nothing()
        }
    }
}

fn remove_from_queue(session: &mut Session, product_id: i64) -> Outcome {
    if !session.remove_from_queue(product_id) {
        return Outcome::nothing();
    }

    session.recompute_total();
    info!(product_id, "removed from queue");
    Outcome::changed(Change::Queue)
}

async fn submit_sale(session: &mut Session, api: &dyn PosApi) -> Outcome {
    // Client-side validation first; nothing is sent when it fails.
    if session.queue().has_invalid_quantity() {
        return Outcome::blocked(Alert::InvalidQuantity);
    }
    if session.queue().is_empty() {
        return Outcome::blocked(Alert::EmptyQueue);
    }

    let sold: Vec<(i64, i64)> = session
        .queue()
        .lines()
        .iter()
        .map(|l| (l.product_id, l.quantity))
        .collect();

    match api.create_transaction(session.queue().lines()).await {
        Ok(()) => {
            let lines = sold.len();
            session.complete_sale(&sold);
            info!(lines, "sale completed");
            Outcome::changed(Change::SaleCompleted { lines })
        }
        Err(ApiError::Rejected { message }) => {
            let message = message.unwrap_or_else(|| GENERIC_REJECTION.to_string());
            warn!(message = %message, "transaction rejected by server");
            Outcome::blocked(Alert::TransactionFailed { message })
        }
        Err(e) => {
            error!(error = %e, "transaction submission failed");
            Outcome::blocked(Alert::RequestFailed)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
