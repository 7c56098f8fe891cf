//! Basic Session
//!
//! This example walks through a short calculator session and prints what
//! the screen would show after every key press.
//!
//! Key concepts:
//! - Keypad labels parse into commands
//! - A second operator evaluates the pending one first
//! - Invalid presses are ignored, never errors
//!
//! Run with: RUST_LOG=calcbook=trace cargo run --example basic_session

use calcbook::engine::Calculator;
use calcbook::input::Command;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Session Example ===\n");

    let mut calc = Calculator::new();

    for label in ["+", "3", "+", "4", "*", "2", "=", "=", "/", "0", "="] {
        let command: Command = match label.parse() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("skipping key: {err}");
                continue;
            }
        };
        calc.dispatch(command);

        let view = calc.view();
        println!(
            "pressed {:>2} | {:<16} | {}",
            label,
            view.expression,
            view.display_or_zero()
        );
    }

    println!("\n=== Example Complete ===");
}
