//! Core calculator types and logic.
//!
//! This module contains the pure pieces the engine is built from:
//! - Input tokens and operators
//! - The session state and its guard predicates
//! - Number parsing and formatting
//! - The bounded calculation history

pub mod guard;
mod history;
mod number;
mod state;
mod token;

pub use guard::Guard;
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use number::{format_number, parse_number};
pub use state::CalculatorState;
pub use token::{Digit, Operator, Token};
