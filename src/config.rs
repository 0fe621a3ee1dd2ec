//! Configuration for the console core.
//!
//! The embedding application points this at a TOML file; a missing file
//! yields defaults so the console works without any configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// Console configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsoleConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. When unset, logs go to stderr (or the platform default
    /// path when file logging is requested explicitly).
    pub file: Option<PathBuf>,

    /// Default tracing filter when RUST_LOG is unset (e.g. "info",
    /// "bnc_console=debug").
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            ConsoleError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            ConsoleError::config(format!("invalid config {}: {e}", path.display()))
        })
    }
}
