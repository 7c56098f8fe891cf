//! Input tokens fed to the calculator.
//!
//! A token is one button press on the calculator's keypad: a digit, the
//! decimal point, or one of the four binary operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator that can be armed as the pending operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol used in expressions and on the keypad.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not an error: it yields an infinity, or `NaN`
    /// for `0 / 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcbook::core::Operator;
    ///
    /// assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
    /// assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit's ASCII character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One keypad input accepted by [`Calculator::append`](crate::engine::Calculator::append).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Token {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
}

impl Token {
    /// Token for a digit value. Returns `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Map a keypad character to a token.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Self::digit),
            '.' => Some(Self::DecimalPoint),
            _ => Operator::from_symbol(c).map(Self::Operator),
        }
    }

    /// Character appended to the display for operand tokens.
    ///
    /// Operators are never appended to the display and return `None`.
    pub fn operand_char(self) -> Option<char> {
        match self {
            Self::Digit(digit) => Some(digit.as_char()),
            Self::DecimalPoint => Some('.'),
            Self::Operator(_) => None,
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Digit> for Token {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{}", digit.as_char()),
            Self::DecimalPoint => write!(f, "."),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}
