//! Logging initialization for the console.
//!
//! The embedding application calls one of these once at startup. File logging
//! exists because a bouncer's stderr is often not connected to anything
//! useful once daemonized.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initializes logging to stderr, honoring RUST_LOG over the configured
/// default filter.
pub fn init_stderr_logging(config: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .init();
}

/// Initializes logging to a file: the configured path, or the platform
/// default when none is set. Falls back to no logging rather than failing
/// startup when the file cannot be created.
pub fn init_file_logging(config: &LoggingConfig) {
    let log_path = config.file.clone().unwrap_or_else(default_log_path);

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Returns the default log file path: the XDG state directory on Linux
/// (`~/.local/state/bnc-console/console.log`), the config directory on other
/// platforms, or the temp directory as a last resort.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("bnc-console").join("console.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("bnc-console").join("console.log");
    }

    std::env::temp_dir().join("console.log")
}
