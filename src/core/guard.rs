//! Guard predicates for calculator commands.
//!
//! Guards are pure boolean functions over [`CalculatorState`] that decide
//! whether a command changes the state. A command whose guard fails is
//! silently ignored, so the guards are the complete list of the engine's
//! "invalid input" rules.

use super::state::CalculatorState;

/// Named, pure predicate over the calculator state.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{guard, CalculatorState};
///
/// let state = CalculatorState::default();
///
/// assert!(!guard::HAS_OPERAND.check(&state));
/// assert!(!guard::READY_TO_EVALUATE.check(&state));
/// ```
#[derive(Clone, Copy)]
pub struct Guard {
    name: &'static str,
    predicate: fn(&CalculatorState) -> bool,
}

impl Guard {
    /// Create a guard from a name and a pure predicate.
    pub const fn new(name: &'static str, predicate: fn(&CalculatorState) -> bool) -> Self {
        Self { name, predicate }
    }

    /// Name used when logging rejected commands.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether the guard allows the command in this state.
    pub fn check(&self, state: &CalculatorState) -> bool {
        (self.predicate)(state)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Guard").field(&self.name).finish()
    }
}

/// Nothing has been typed yet, so a `-` starts a negative literal.
pub const DISPLAY_EMPTY: Guard = Guard::new("display_empty", |s| s.display_value.is_empty());

/// An operand exists that an operator can take as its left side.
pub const HAS_OPERAND: Guard = Guard::new("has_operand", |s| {
    !s.display_value.is_empty() && s.display_value != "-"
});

/// A pending operation has its right operand typed.
///
/// Gates both `calculate` and the implicit evaluation of a chained
/// operator.
pub const READY_TO_EVALUATE: Guard = Guard::new("ready_to_evaluate", |s| {
    s.operation.is_some() && !s.waiting_for_operand
});

/// The next operand token replaces the display instead of extending it.
pub const STARTS_NEW_OPERAND: Guard = Guard::new("starts_new_operand", |s| s.waiting_for_operand);

/// The operand being edited has no decimal point yet.
pub const NO_DECIMAL_POINT: Guard = Guard::new("no_decimal_point", |s| {
    s.waiting_for_operand || !s.display_value.contains('.')
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn state(display: &str, operation: Option<Operator>, waiting: bool) -> CalculatorState {
        CalculatorState {
            display_value: display.to_string(),
            operation,
            waiting_for_operand: waiting,
            ..CalculatorState::default()
        }
    }

    #[test]
    fn has_operand_rejects_empty_and_lone_minus() {
        assert!(!HAS_OPERAND.check(&state("", None, false)));
        assert!(!HAS_OPERAND.check(&state("-", None, false)));
        assert!(HAS_OPERAND.check(&state("-4", None, false)));
        assert!(HAS_OPERAND.check(&state("0", None, false)));
    }

    #[test]
    fn ready_to_evaluate_needs_pending_operation_and_operand() {
        assert!(!READY_TO_EVALUATE.check(&state("4", None, false)));
        assert!(!READY_TO_EVALUATE.check(&state("3", Some(Operator::Add), true)));
        assert!(READY_TO_EVALUATE.check(&state("4", Some(Operator::Add), false)));
    }

    #[test]
    fn no_decimal_point_resets_with_new_operand() {
        assert!(NO_DECIMAL_POINT.check(&state("12", None, false)));
        assert!(!NO_DECIMAL_POINT.check(&state("1.2", None, false)));
        assert!(NO_DECIMAL_POINT.check(&state("1.2", Some(Operator::Add), true)));
    }

    #[test]
    fn guard_is_deterministic() {
        let s = state("7", Some(Operator::Divide), false);
        assert_eq!(READY_TO_EVALUATE.check(&s), READY_TO_EVALUATE.check(&s));
    }

    #[test]
    fn guard_debug_shows_name() {
        assert_eq!(format!("{:?}", DISPLAY_EMPTY), "Guard(\"display_empty\")");
        assert_eq!(STARTS_NEW_OPERAND.name(), "starts_new_operand");
    }
}
