//! # Terminal Configuration
//!
//! Configuration for one sales counter.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Configuration Priority                          │
//! │                                                                     │
//! │  1. Environment Variables (highest priority)                        │
//! │     MORTAR_SERVER_URL=http://10.0.0.5:8080                          │
//! │     MORTAR_TRANSACTION_PATH=/transactions                           │
//! │     MORTAR_TRANSACTION_METHOD=POST                                  │
//! │                                                                     │
//! │  2. TOML Config File                                                │
//! │     $MORTAR_CONFIG, or terminal.toml under the platform config      │
//! │     directory (~/.config/mortar-pos/ on Linux)                      │
//! │                                                                     │
//! │  3. Default Values (lowest priority)                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # terminal.toml
//! [server]
//! base_url = "http://localhost:8080"
//! timeout_seconds = 30
//!
//! [server.transaction]
//! path = "/transactions"
//! method = "POST"
//!
//! [display]
//! currency = "UGX"
//! thousands_separator = ","
//! decimal_separator = "."
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mortar_api::ApiConfig;
use mortar_core::money::AmountFormat;

use crate::error::TerminalError;

/// Full terminal configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Server endpoints; the transaction endpoint is injected here rather
    /// than hard-coded anywhere in the client.
    pub server: ApiConfig,

    /// Amount display settings.
    pub display: DisplayConfig,
}

/// How amounts are rendered on this counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Currency code, shown in the terminal banner.
    pub currency: String,

    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency: "UGX".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl DisplayConfig {
    /// The grand-total formatter for this counter.
    pub fn amount_format(&self) -> AmountFormat {
        AmountFormat {
            thousands_separator: self.thousands_separator,
            decimal_separator: self.decimal_separator,
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from file and environment.
    ///
    /// A missing config file is not an error (defaults apply); a file
    /// that exists but does not parse is.
    pub fn load() -> Result<Self, TerminalError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)?;
                let config: TerminalConfig = toml::from_str(&raw)
                    .map_err(|e| TerminalError::Config(format!("{}: {}", path.display(), e)))?;
                info!(path = %path.display(), "configuration loaded");
                config
            }
            Some(path) => {
                info!(path = %path.display(), "no config file, using defaults");
                TerminalConfig::default()
            }
            None => {
                warn!("no config directory available, using defaults");
                TerminalConfig::default()
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Resolves the config file path.
    ///
    /// `MORTAR_CONFIG` overrides the platform default.
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("MORTAR_CONFIG") {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("com", "mortar", "pos")
            .map(|dirs| dirs.config_dir().join("terminal.toml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("MORTAR_SERVER_URL") {
            self.server.base_url = url;
        }
        if let Ok(path) = std::env::var("MORTAR_TRANSACTION_PATH") {
            self.server.transaction.path = path;
        }
        if let Ok(method) = std::env::var("MORTAR_TRANSACTION_METHOD") {
            self.server.transaction.method = method;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
