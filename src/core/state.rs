//! Session state of the calculator.
//!
//! `CalculatorState` holds everything the engine knows about the
//! computation in progress. It is owned by the engine and only exposed to
//! callers by shared reference.

use super::token::Operator;
use serde::{Deserialize, Serialize};

/// Mutable accumulator state of one calculator session.
///
/// The default value is the start-up state: empty display, no pending
/// operation, not waiting for an operand.
///
/// # Example
///
/// ```rust
/// use calcbook::core::CalculatorState;
///
/// let state = CalculatorState::default();
/// assert_eq!(state.display_value(), "");
/// assert!(state.operation().is_none());
/// assert!(!state.is_waiting_for_operand());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display_value: String,
    pub(crate) previous_value: Option<f64>,
    pub(crate) operation: Option<Operator>,
    pub(crate) waiting_for_operand: bool,
    pub(crate) expression: String,
    pub(crate) last_operation: Option<Operator>,
}

impl CalculatorState {
    /// The operand currently being edited.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Left operand of the pending operation.
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// The pending operator, if any.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// True right after an operator or an evaluation, until the next
    /// operand token starts a fresh operand.
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Human-readable reconstruction of the computation so far.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The most recently armed operator. Survives evaluation; only
    /// `clear` resets it.
    pub fn last_operation(&self) -> Option<Operator> {
        self.last_operation
    }

    /// Reset every field to its start-up value.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
