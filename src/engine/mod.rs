//! The calculator engine and its read-only projections.
//!
//! [`Calculator`] is the single owner of a session. It is driven
//! synchronously: each command runs to completion before the next one is
//! accepted. [`SharedCalculator`] wraps it for callers on several threads.

pub mod calculator;
pub mod shared;
pub mod view;

pub use calculator::Calculator;
pub use shared::SharedCalculator;
pub use view::CalculatorView;
