//! Build errors for calculator construction.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
