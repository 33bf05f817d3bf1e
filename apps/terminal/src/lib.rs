//! # Mortar Terminal Library
//!
//! The cashier-facing sales counter. This crate wires the pure state in
//! `mortar-core` to the HTTP client in `mortar-api` behind a line-oriented
//! terminal UI.
//!
//! ## Module Organization
//! ```text
//! mortar_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── session.rs      ◄─── Catalog + queue + grand total state
//! ├── actions.rs      ◄─── UiEvent/Action router and dispatch
//! ├── view.rs         ◄─── Catalog and queue table projections
//! ├── repl.rs         ◄─── Input loop and line parser
//! ├── config.rs       ◄─── terminal.toml + env overrides
//! └── error.rs        ◄─── Fatal terminal errors
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod repl;
pub mod session;
pub mod view;

use tracing::info;
use tracing_subscriber::EnvFilter;

use mortar_api::HttpClient;

use config::TerminalConfig;
use error::TerminalError;
use session::Session;

/// Runs the terminal.
///
/// ## Startup Sequence
/// 1. Initialize tracing (`RUST_LOG` overrides the default filter)
/// 2. Load configuration (file, then environment overrides)
/// 3. Build the HTTP client from the server section
/// 4. Hand control to the REPL until EOF or `/quit`
pub async fn run() -> Result<(), TerminalError> {
    init_tracing();

    let config = TerminalConfig::load()?;
    info!(
        base_url = %config.server.base_url,
        currency = %config.display.currency,
        "starting Mortar POS terminal"
    );

    let api = HttpClient::new(config.server.clone())?;
    let mut session = Session::new(config.display.amount_format());

    repl::run(&mut session, &api).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default: INFO overall, DEBUG for the mortar crates. Override with
/// `RUST_LOG` (e.g. `RUST_LOG=mortar_api=trace`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mortar=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
