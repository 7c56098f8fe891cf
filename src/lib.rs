//! Calcbook: a calculator input engine with a rolling history
//!
//! Calcbook turns a stream of keypad events (digits, decimal point,
//! operators, clear, equals) into the text a calculator screen shows and a
//! bounded history of completed calculations. Rendering and navigation are
//! left to the caller, which sends commands and reads projections.
//!
//! # Core Concepts
//!
//! - **Tokens**: Closed enums for digits, the decimal point and operators
//! - **State**: The session accumulator, owned by the engine
//! - **Guards**: Pure predicates naming when a command takes effect
//! - **History**: Newest-first, capacity-bounded record of results
//!
//! There is no operator precedence. Pressing a second operator evaluates
//! the pending one first, so `3 + 4 * 2 =` yields `14`.
//!
//! # Example
//!
//! ```rust
//! use calcbook::engine::Calculator;
//! use calcbook::input::parse_keys;
//!
//! let mut calc = Calculator::new();
//! calc.dispatch_all(parse_keys("3+4*2=").unwrap());
//!
//! assert_eq!(calc.display_value(), "14");
//! assert_eq!(calc.expression(), "7 * 2 =");
//! assert_eq!(calc.history().len(), 2);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod input;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use crate::core::{CalculatorState, History, HistoryEntry, Operator, Token};
pub use engine::{Calculator, CalculatorView, SharedCalculator};
pub use input::{Command, InputError};
