//! Commands the presentation layer sends to the engine.
//!
//! A keypad is a grid of labelled buttons. Each label maps to exactly one
//! [`Command`], which the engine applies with
//! [`Calculator::dispatch`](crate::engine::Calculator::dispatch).
//!
//! # Example
//!
//! ```rust
//! use calcbook::input::Command;
//!
//! let commands: Vec<Command> = ["7", "*", "6", "="]
//!     .iter()
//!     .map(|label| label.parse())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(commands.len(), 4);
//! assert_eq!(commands[3], Command::Calculate);
//! ```

pub mod error;

pub use error::InputError;

use crate::core::{Operator, Token};
use std::fmt;
use std::str::FromStr;

/// One event accepted by the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Command {
    /// Feed a digit, decimal point or operator
    Append(Token),
    /// Reset the session state
    Clear,
    /// Evaluate the pending operation
    Calculate,
}

impl Command {
    /// Append command for a digit value.
    pub fn digit(value: u8) -> Result<Self, InputError> {
        Token::digit(value)
            .map(Self::Append)
            .ok_or(InputError::DigitOutOfRange(value))
    }

    /// Append command for an operator.
    pub fn operator(op: Operator) -> Self {
        Self::Append(Token::Operator(op))
    }
}

impl From<Token> for Command {
    fn from(token: Token) -> Self {
        Self::Append(token)
    }
}

impl TryFrom<char> for Command {
    type Error = InputError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key {
            '=' => Ok(Self::Calculate),
            'C' | 'c' => Ok(Self::Clear),
            _ => Token::from_char(key)
                .map(Self::Append)
                .ok_or_else(|| InputError::UnknownKey(key.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::try_from(key),
            _ => Err(InputError::UnknownKey(label.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append(token) => write!(f, "{token}"),
            Self::Clear => write!(f, "C"),
            Self::Calculate => write!(f, "="),
        }
    }
}

/// Parse a run of keypad labels written without separators, e.g. `"3+4="`.
///
/// Whitespace is skipped. Fails on the first unknown key.
pub fn parse_keys(keys: &str) -> Result<Vec<Command>, InputError> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(Command::try_from)
        .collect()
}
