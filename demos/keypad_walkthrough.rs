//! Keypad Walkthrough
//!
//! This example drives the calculator through its on-screen keypad:
//! memory, percent, chained operators, division by zero, and reloading
//! a result from history.
//!
//! Run with: cargo run --example keypad_walkthrough

use keypad_calc::engine::{Button, Calculator, KEYPAD_LAYOUT};

fn press_all(calc: &mut Calculator, labels: &[&str]) {
    for label in labels {
        match Button::from_label(label) {
            Some(button) => calc.press(button),
            None => println!("  no button labelled {label:?}"),
        }
    }
    let display = calc.snapshot();
    println!(
        "  {:<28} -> {}{}",
        labels.join(" "),
        display.formatted_value,
        if display.memory_active { "  [M]" } else { "" }
    );
}

fn main() {
    println!("=== Keypad Walkthrough ===\n");

    println!("Keypad:");
    for row in KEYPAD_LAYOUT.chunks(4) {
        let labels: Vec<String> = row.iter().map(|b| format!("{:>3}", b.label())).collect();
        println!("  {}", labels.join(" "));
    }
    println!();

    let mut calc = Calculator::new();

    println!("Chained evaluation (left to right, no precedence):");
    press_all(&mut calc, &["5", "+", "3", "×", "2", "="]);

    println!("\nPercent-of:");
    press_all(&mut calc, &["AC", "2", "0", "0", "%", "5", "="]);

    println!("\nMemory:");
    press_all(&mut calc, &["M+", "AC", "MR"]);

    println!("\nDivision by zero:");
    press_all(&mut calc, &["9", "÷", "0", "="]);
    press_all(&mut calc, &["CE"]);

    println!("\nHistory:");
    for (index, item) in calc.history().iter().enumerate() {
        println!("  [{index}] {} = {}", item.calculation, item.result);
    }

    if !calc.history().is_empty() {
        let oldest = calc.history().len() - 1;
        calc.select_history(oldest);
        println!("\nReloaded history[{oldest}]: {}", calc.display_value());
    }

    println!("\n=== Example Complete ===");
}
