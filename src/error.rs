//! Error types for the console core.
//!
//! Defines the typed failures the dispatch surface can report back to the
//! session layer. Handler faults are deliberately not represented here: a
//! command handler returns `anyhow::Result<()>` and the dispatcher converts
//! any fault into a logged event plus a generic notice line, so a misbehaving
//! command can never surface as an error from `Dispatcher::handle`.

use thiserror::Error;

/// Main error type for console operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// No resolvable command for the requested token. Also returned when the
    /// command exists but the caller lacks administrative standing, so an
    /// unprivileged caller cannot probe for privileged command names.
    #[error("No command is known by {0}")]
    NotFound(String),

    /// Empty or blank command line.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A command could not be bound to all of its declared tokens. The
    /// registry is left as if the add never happened.
    #[error("Registration error: {0}")]
    Registration(String),

    /// A filter's parameters failed validation; carries the offending literal.
    #[error("Invalid filter argument: {literal}")]
    FilterArgument {
        /// The literal that failed to parse.
        literal: String,
    },

    /// The requested filter name is not registered.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Configuration errors (unreadable file, malformed TOML, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Creates a not-found error for the given token.
    pub fn not_found(token: impl Into<String>) -> Self {
        Self::NotFound(token.into())
    }

    /// Creates an invalid-input error with the given message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a registration error with the given message.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }

    /// Creates a filter-argument error carrying the offending literal.
    pub fn filter_argument(literal: impl Into<String>) -> Self {
        Self::FilterArgument {
            literal: literal.into(),
        }
    }

    /// Creates an unknown-filter error for the given name.
    pub fn unknown_filter(name: impl Into<String>) -> Self {
        Self::UnknownFilter(name.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Not Found",
            Self::InvalidInput(_) => "Invalid Input",
            Self::Registration(_) => "Registration Error",
            Self::FilterArgument { .. } => "Filter Argument Error",
            Self::UnknownFilter(_) => "Unknown Filter",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using ConsoleError.
pub type Result<T> = std::result::Result<T, ConsoleError>;
