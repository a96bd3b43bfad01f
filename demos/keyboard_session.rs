//! Keyboard Session
//!
//! This example replays a sequence of key presses through the engine, the
//! way a UI host would forward its keyboard events.
//!
//! Key concepts:
//! - Explicit key-to-action dispatch (no global listeners)
//! - Display projection after every event
//! - Transition logging through `tracing`
//!
//! Run with: RUST_LOG=keypad_calc=debug cargo run --example keyboard_session -- 5 + 3 '*' 2 Enter

use keypad_calc::engine::{Calculator, Key};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let keys: Vec<String> = if args.is_empty() {
        ["1", "2", "0", "0", "*", "3", "+", "5", "0", "0", "0", "Enter"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        args
    };

    println!("=== Keyboard Session ===\n");

    let mut calc = Calculator::new();
    for name in &keys {
        let Some(key) = Key::from_name(name) else {
            println!("{name:>10}  (unknown key name)");
            continue;
        };
        if !calc.handle_key(&key) {
            println!("{name:>10}  (unbound)");
            continue;
        }

        let display = calc.snapshot();
        println!(
            "{name:>10}  {:>16}  {}",
            display.formatted_value, display.expression
        );
    }

    println!("\nHistory (newest first):");
    for item in calc.history() {
        println!("  {} = {}", item.calculation, item.result);
    }

    println!("\n=== Session Complete ===");
}
