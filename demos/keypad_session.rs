//! Keypad Session
//!
//! This example replays a keyboard session through the calculator shell.
//!
//! Key concepts:
//! - Key names are mapped to events with the keymap
//! - Chained operators fold on the fly
//! - Division by zero shows a transient Error display
//! - A manual clock drives the error reset deterministically
//!
//! Run with: cargo run --example keypad_session

use calcfold::keymap::event_for_key;
use calcfold::shell::ManualClock;
use calcfold::{CalculatorBuilder, Output};
use chrono::{Duration, Utc};

fn show(key: &str, output: &Output) {
    let preview = output.preview_text.as_deref().unwrap_or("");
    println!(
        "{key:>9} | {:>15} | {:<14} | {preview}",
        output.display_text, output.history_text
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Keypad Session Example ===\n");

    let clock = ManualClock::new(Utc::now());
    let mut calculator = CalculatorBuilder::new()
        .clock(clock.clone())
        .build()
        .expect("default settings are valid");

    let keys = [
        "5", "+", "3", "+", "2", "Enter", "*", "1", "2", "%", "=", "/", "0", "Enter",
    ];
    for key in keys {
        if let Some(event) = event_for_key(key) {
            let output = calculator.dispatch(event);
            show(key, &output);
        }
    }

    clock.advance(Duration::milliseconds(1800));
    if let Some(output) = calculator.tick() {
        show("(timer)", &output);
    }

    println!("\nPhases visited: {:?}", calculator.log().phases());
    println!("\n=== Example Complete ===");
}
