//! Configuration and builder API for calculator construction.
//!
//! Most callers want [`Calculator::new`](crate::engine::Calculator::new).
//! The builder exists for presentation layers that size the history
//! differently or want stricter decimal input.
//!
//! # Example
//!
//! ```rust
//! use calcbook::builder::CalculatorBuilder;
//!
//! let calc = CalculatorBuilder::new()
//!     .history_capacity(25)
//!     .reject_repeated_decimal_point(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calc.history().capacity(), 25);
//! ```

pub mod error;

pub use error::BuildError;

use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::engine::Calculator;
use serde::{Deserialize, Serialize};

/// Tunable behaviour of a calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,

    /// Ignore a second `.` within one operand instead of appending it
    pub reject_repeated_decimal_point: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            reject_repeated_decimal_point: false,
        }
    }
}

impl CalculatorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration describes a usable calculator.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}

/// Builder for constructing calculators with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of history entries kept.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Ignore repeated decimal points within one operand.
    pub fn reject_repeated_decimal_point(mut self, reject: bool) -> Self {
        self.config.reject_repeated_decimal_point = reject;
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        Ok(Calculator::with_config(self.config))
    }
}
