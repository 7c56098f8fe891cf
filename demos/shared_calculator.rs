//! Shared Calculator
//!
//! This example drives one calculator from several threads. Every batch of
//! commands runs under a single lock, so results never interleave.
//!
//! Run with: RUST_LOG=calcbook=debug cargo run --example shared_calculator

use calcbook::engine::SharedCalculator;
use calcbook::input::parse_keys;
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    println!("=== Shared Calculator Example ===\n");

    let shared = SharedCalculator::default();

    let workers: Vec<_> = (1..=4)
        .map(|n| {
            let handle = shared.clone();
            let keys = parse_keys(&format!("C{n}+{n}="));
            thread::spawn(move || keys.map(|commands| handle.dispatch_all(commands)))
        })
        .collect();

    for worker in workers {
        if let Ok(result) = worker.join() {
            result?;
        }
    }

    for entry in &shared.history() {
        println!("{entry}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
