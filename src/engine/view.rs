//! Read-only projection handed to the presentation layer.

use crate::core::History;
use crate::engine::Calculator;
use serde::{Deserialize, Serialize};

/// Everything the calculator and history screens render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorView {
    pub display_value: String,
    pub expression: String,
    pub history: History,
}

impl CalculatorView {
    /// Display text as the screen shows it: an empty display reads `0`.
    pub fn display_or_zero(&self) -> &str {
        if self.display_value.is_empty() {
            "0"
        } else {
            &self.display_value
        }
    }

    /// Serialize the view for a renderer that consumes JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&Calculator> for CalculatorView {
    fn from(calc: &Calculator) -> Self {
        Self {
            display_value: calc.display_value().to_string(),
            expression: calc.expression().to_string(),
            history: calc.history().clone(),
        }
    }
}
