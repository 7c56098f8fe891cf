//! Calculator engine that applies commands to the session state.

use crate::builder::CalculatorConfig;
use crate::core::{
    format_number, guard, parse_number, CalculatorState, Guard, History, HistoryEntry, Operator,
    Token,
};
use crate::engine::view::CalculatorView;
use crate::input::Command;
use chrono::Utc;
use tracing::{debug, trace};

/// Calculator engine owning one session state and its history.
///
/// Commands never fail: input that makes no sense in the current state is
/// ignored, and numeric edge cases such as division by zero propagate as
/// IEEE-754 special values.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{Operator, Token};
/// use calcbook::engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.append(Token::digit(3).unwrap());
/// calc.append(Token::Operator(Operator::Add));
/// calc.append(Token::digit(4).unwrap());
/// calc.calculate();
///
/// assert_eq!(calc.display_value(), "7");
/// assert_eq!(calc.expression(), "3 + 4 =");
/// assert_eq!(calc.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    history: History,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator from an already validated configuration.
    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            history: History::with_capacity(config.history_capacity),
            config,
        }
    }

    /// Current session state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Operand currently shown on the display (pure)
    pub fn display_value(&self) -> &str {
        self.state.display_value()
    }

    /// Expression line shown above the display (pure)
    pub fn expression(&self) -> &str {
        self.state.expression()
    }

    /// Completed calculations, newest first (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Snapshot of everything a renderer needs.
    pub fn view(&self) -> CalculatorView {
        CalculatorView::from(self)
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Append(token) => self.append(token),
            Command::Clear => self.clear(),
            Command::Calculate => self.calculate(),
        }
    }

    /// Apply a sequence of commands in order.
    pub fn dispatch_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Feed a digit, decimal point or operator.
    pub fn append(&mut self, token: Token) {
        match token {
            Token::Operator(op) => self.append_operator(op),
            Token::Digit(_) | Token::DecimalPoint => self.append_operand(token),
        }
    }

    /// Reset the session state. History is kept.
    pub fn clear(&mut self) {
        self.state.reset();
        debug!("calculator cleared");
    }

    /// Evaluate the pending operation, if its right operand was entered.
    pub fn calculate(&mut self) {
        if !self.allows(guard::READY_TO_EVALUATE, "calculate") {
            return;
        }
        self.evaluate();
    }

    fn append_operator(&mut self, op: Operator) {
        if op == Operator::Subtract && guard::DISPLAY_EMPTY.check(&self.state) {
            self.state.display_value.push('-');
            trace!("negative literal started");
            return;
        }

        if !self.allows(guard::HAS_OPERAND, "operator") {
            return;
        }

        if guard::READY_TO_EVALUATE.check(&self.state) {
            debug!(next = %op, "chaining pending operation");
            self.evaluate();
        }

        let state = &mut self.state;
        state.expression = format!("{} {}", state.display_value, op);
        state.previous_value = Some(parse_number(&state.display_value));
        state.operation = Some(op);
        state.waiting_for_operand = true;
        state.last_operation = Some(op);
    }

    fn append_operand(&mut self, token: Token) {
        if token == Token::DecimalPoint
            && self.config.reject_repeated_decimal_point
            && !self.allows(guard::NO_DECIMAL_POINT, "decimal point")
        {
            return;
        }

        let Some(key) = token.operand_char() else {
            return;
        };
        let state = &mut self.state;

        if guard::STARTS_NEW_OPERAND.check(state) {
            state.display_value = key.to_string();
            state.waiting_for_operand = false;
            state.expression.push(' ');
            state.expression.push_str(&state.display_value);
            return;
        }

        if state.display_value == "0" {
            state.display_value = key.to_string();
        } else {
            state.display_value.push(key);
        }

        if let Some(op) = state.operation {
            state.expression = format!(
                "{} {} {}",
                format_number(state.previous_value.unwrap_or(f64::NAN)),
                op,
                state.display_value
            );
        }
    }

    /// Evaluation step shared by `calculate` and operator chaining.
    ///
    /// Callers must have checked `READY_TO_EVALUATE`.
    fn evaluate(&mut self) {
        let Some(op) = self.state.operation else {
            return;
        };
        let previous = self.state.previous_value.unwrap_or(f64::NAN);
        let current = parse_number(&self.state.display_value);
        let result = op.apply(previous, current);

        let expression = format!(
            "{} {} {}",
            format_number(previous),
            op,
            format_number(current)
        );
        debug!(%expression, result, "calculation committed");

        self.history = self.history.record(HistoryEntry {
            expression: expression.clone(),
            result,
            timestamp: Utc::now(),
        });

        let state = &mut self.state;
        state.expression = format!("{expression} =");
        state.display_value = format_number(result);
        state.previous_value = Some(result);
        state.operation = None;
        state.waiting_for_operand = true;
    }

    fn allows(&self, guard: Guard, command: &'static str) -> bool {
        let allowed = guard.check(&self.state);
        if !allowed {
            trace!(command, guard = guard.name(), "input ignored");
        }
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CalculatorBuilder;
    use crate::input::parse_keys;

    fn run(keys: &str) -> Calculator {
        let mut calc = Calculator::new();
        calc.dispatch_all(parse_keys(keys).unwrap());
        calc
    }

    #[test]
    fn digits_concatenate() {
        let calc = run("123");
        assert_eq!(calc.display_value(), "123");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn leading_zero_is_replaced() {
        assert_eq!(run("05").display_value(), "5");
        assert_eq!(run("00").display_value(), "0");
        assert_eq!(run("0.5").display_value(), ".5");
    }

    #[test]
    fn minus_on_empty_display_starts_negative_literal() {
        let calc = run("-");
        assert_eq!(calc.display_value(), "-");
        assert_eq!(calc.state().operation(), None);

        let calc = run("-5");
        assert_eq!(calc.display_value(), "-5");
    }

    #[test]
    fn operator_without_operand_is_ignored() {
        for keys in ["+", "*", "/", "-+", "--"] {
            let calc = run(keys);
            assert_eq!(calc.state().operation(), None, "keys {keys}");
            assert!(calc.display_value().is_empty() || calc.display_value() == "-");
        }
    }

    #[test]
    fn operator_arms_pending_operation() {
        let calc = run("12+");
        let state = calc.state();

        assert_eq!(state.display_value(), "12");
        assert_eq!(state.previous_value(), Some(12.0));
        assert_eq!(state.operation(), Some(Operator::Add));
        assert!(state.is_waiting_for_operand());
        assert_eq!(state.expression(), "12 +");
        assert_eq!(state.last_operation(), Some(Operator::Add));
    }

    #[test]
    fn expression_tracks_typed_operand() {
        let calc = run("12+3");
        assert_eq!(calc.expression(), "12 + 3");

        let calc = run("12+34");
        assert_eq!(calc.expression(), "12 + 34");
    }

    #[test]
    fn calculate_commits_history_entry() {
        let calc = run("3+4=");
        let state = calc.state();

        assert_eq!(state.display_value(), "7");
        assert_eq!(state.previous_value(), Some(7.0));
        assert_eq!(state.operation(), None);
        assert!(state.is_waiting_for_operand());
        assert_eq!(state.expression(), "3 + 4 =");

        let entry = calc.history().latest().unwrap();
        assert_eq!(entry.expression, "3 + 4");
        assert_eq!(entry.result, 7.0);
    }

    #[test]
    fn second_operator_chains_evaluation() {
        let calc = run("3+4*");
        assert_eq!(calc.display_value(), "7");
        assert_eq!(calc.state().previous_value(), Some(7.0));
        assert_eq!(calc.state().operation(), Some(Operator::Multiply));
        assert_eq!(calc.expression(), "7 *");
        assert_eq!(calc.history().len(), 1);

        let calc = run("3+4*2=");
        assert_eq!(calc.display_value(), "14");
        assert_eq!(calc.history().len(), 2);
        assert_eq!(calc.history().latest().unwrap().expression, "7 * 2");
    }

    #[test]
    fn replacing_operator_does_not_evaluate() {
        let calc = run("3+*");
        assert_eq!(calc.state().operation(), Some(Operator::Multiply));
        assert_eq!(calc.state().previous_value(), Some(3.0));
        assert!(calc.history().is_empty());
    }

    #[test]
    fn calculate_without_pending_operation_is_noop() {
        let mut calc = run("42");
        let before = calc.state().clone();

        calc.calculate();
        calc.calculate();

        assert_eq!(calc.state(), &before);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn repeated_equals_is_noop() {
        let mut calc = run("3+4=");
        let before = calc.state().clone();

        calc.calculate();

        assert_eq!(calc.state(), &before);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn equals_without_right_operand_is_noop() {
        let calc = run("3+=");
        assert_eq!(calc.state().operation(), Some(Operator::Add));
        assert!(calc.history().is_empty());
    }

    #[test]
    fn result_chains_into_next_operator() {
        let calc = run("3+4=-2=");
        assert_eq!(calc.display_value(), "5");
        assert_eq!(calc.history().latest().unwrap().expression, "7 - 2");
    }

    #[test]
    fn digit_after_result_starts_new_operand() {
        let calc = run("3+4=5");
        assert_eq!(calc.display_value(), "5");
        assert_eq!(calc.expression(), "3 + 4 = 5");
        assert!(!calc.state().is_waiting_for_operand());
    }

    #[test]
    fn division_by_zero_propagates_infinity() {
        let calc = run("5/0=");
        assert_eq!(calc.display_value(), "inf");
        assert_eq!(calc.history().latest().unwrap().result, f64::INFINITY);
    }

    #[test]
    fn zero_over_zero_is_nan() {
        let calc = run("0/0=");
        assert_eq!(calc.display_value(), "NaN");
        assert!(calc.history().latest().unwrap().result.is_nan());
    }

    #[test]
    fn negative_operand_in_expression() {
        let calc = run("-3*2=");
        assert_eq!(calc.display_value(), "-6");
        assert_eq!(calc.history().latest().unwrap().expression, "-3 * 2");
    }

    #[test]
    fn floating_point_result_uses_shortest_form() {
        let calc = run(".1+.2=");
        assert_eq!(calc.display_value(), "0.30000000000000004");
        assert_eq!(calc.history().latest().unwrap().expression, "0.1 + 0.2");
    }

    #[test]
    fn repeated_decimal_points_are_accepted_by_default() {
        let calc = run("1.2.3+");
        assert_eq!(calc.state().previous_value(), Some(1.2));
        assert_eq!(calc.expression(), "1.2.3 +");

        let calc = run("1.2.3+1=");
        assert_eq!(calc.history().latest().unwrap().expression, "1.2 + 1");
    }

    #[test]
    fn repeated_decimal_points_can_be_rejected() {
        let mut calc = CalculatorBuilder::new()
            .reject_repeated_decimal_point(true)
            .build()
            .unwrap();
        calc.dispatch_all(parse_keys("1.2.3").unwrap());
        assert_eq!(calc.display_value(), "1.23");

        calc.dispatch_all(parse_keys("+.5.").unwrap());
        assert_eq!(calc.display_value(), ".5");
    }

    #[test]
    fn clear_resets_state_but_keeps_history() {
        let mut calc = run("3+4=*2");
        calc.clear();

        assert_eq!(calc.state(), &CalculatorState::default());
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn last_operation_survives_evaluation() {
        let calc = run("8/2=");
        assert_eq!(calc.state().operation(), None);
        assert_eq!(calc.state().last_operation(), Some(Operator::Divide));
    }

    #[test]
    fn history_capacity_follows_config() {
        let mut calc = CalculatorBuilder::new().history_capacity(3).build().unwrap();
        for _ in 0..5 {
            calc.dispatch_all(parse_keys("1+1=").unwrap());
        }
        assert_eq!(calc.history().len(), 3);
        assert_eq!(calc.history().capacity(), 3);
    }
}
