//! Error types for the mcgreeks CLI.

use pricer_mc::PricingError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pricing rejected its inputs
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
