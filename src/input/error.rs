//! Errors raised while translating keypad labels into commands.

use thiserror::Error;

/// Errors that can occur when mapping a key label to a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown key {0:?}. Expected one of 0-9 . + - * / = C")]
    UnknownKey(String),

    #[error("Digit {0} out of range. Expected 0-9")]
    DigitOutOfRange(u8),
}
