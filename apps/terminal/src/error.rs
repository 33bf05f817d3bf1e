//! # Terminal Error Type
//!
//! Failures that end the terminal session (startup and I/O). Everything
//! the cashier can recover from at the counter is an
//! [`Alert`](crate::actions::Alert) instead and never reaches this type.

use thiserror::Error;

use mortar_api::ApiError;

/// Fatal terminal errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// The config file exists but cannot be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API client could not be built.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Reading cashier input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
