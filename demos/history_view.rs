//! History View
//!
//! This example fills the history past its capacity and renders it the
//! way the history screen lists completed calculations.
//!
//! Run with: cargo run --example history_view

use calcbook::builder::CalculatorBuilder;
use calcbook::input::parse_keys;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== History View Example ===\n");

    let mut calc = CalculatorBuilder::new().history_capacity(5).build()?;

    for n in 1..=8 {
        calc.clear();
        calc.dispatch_all(parse_keys(&format!("{n}*{n}="))?);
    }

    let view = calc.view();
    if view.history.is_empty() {
        println!("No calculations yet");
    }
    for entry in &view.history {
        println!("{:<12} {}", entry.to_string(), entry.formatted_timestamp());
    }

    println!("\nAs JSON:\n{}", view.to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
