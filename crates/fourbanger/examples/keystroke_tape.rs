//! Keystroke tape demo
//!
//! Drives the calculator engine through representative sessions and prints
//! an adding-machine-style tape from the display observer, showing how a
//! presentation layer consumes the engine.
//!
//! Run with: cargo run --example keystroke_tape
//! (set RUST_LOG=debug to watch the state transitions)

#![allow(clippy::unwrap_used)]

use fourbanger::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

fn fresh_with_tape() -> Calculator {
    let mut calc = Calculator::new();
    calc.on_display_change(|display| println!("   tape | {display:?}"));
    calc
}

fn main() {
    init_tracing();

    println!("fourbanger keystroke tape");
    println!("=========================");

    println!("\n1. Addition: 7 + 2 =");
    let mut calc = fresh_with_tape();
    calc.enter_digit('7').unwrap();
    calc.select_operation(Operation::Add);
    calc.enter_digit('2').unwrap();
    calc.compute_result();
    println!("   result: {} (state {:?})", calc.display(), calc.state());

    println!("\n2. Equals straight after an operation: 4 * =");
    let mut calc = fresh_with_tape();
    calc.enter_digit('4').unwrap();
    calc.select_operation(Operation::Multiply);
    calc.compute_result();
    println!("   result: {} (the operand is applied to itself)", calc.display());

    println!("\n3. Division by zero: 9 / 0 =");
    let mut calc = fresh_with_tape();
    calc.enter_digit('9').unwrap();
    calc.select_operation(Operation::Divide);
    calc.enter_digit('0').unwrap();
    calc.compute_result();
    println!("   state: {:?}, display is empty; digits are now absorbed", calc.state());
    calc.enter_digit('5').unwrap();
    println!("   after typing 5: still {:?}", calc.state());
    calc.reset();
    println!("   after clear: {} (state {:?})", calc.display(), calc.state());

    println!("\n4. Division modes: 7 / 2 =");
    let mut truncating = Calculator::new();
    truncating.enter_digit('7').unwrap();
    truncating.select_operation(Operation::Divide);
    truncating.enter_digit('2').unwrap();
    truncating.compute_result();
    println!("   integer mode: {}", truncating.display());

    let real = CalculatorConfig::new().with_division_mode(DivisionMode::Real);
    let mut fractional = Calculator::with_config(real);
    fractional.enter_digit('7').unwrap();
    fractional.select_operation(Operation::Divide);
    fractional.enter_digit('2').unwrap();
    fractional.compute_result();
    println!("   real mode:    {}", fractional.display());

    println!("\n5. Event stream snapshot and replay");
    let six = Digit::from_char('6').unwrap();
    let nine = Digit::from_char('9').unwrap();
    let events = vec![
        Event::Digit(six),
        Event::Digit(nine),
        Event::Operation(Operation::Subtract),
        Event::Digit(nine),
        Event::Equals,
    ];
    let json = serde_json::to_string(&events).unwrap();
    println!("   events: {json}");
    let replayed: Vec<Event> = serde_json::from_str(&json).unwrap();
    let mut calc = Calculator::new();
    for event in replayed {
        calc.apply(event);
    }
    println!("   replayed result: {}", calc.display());

    println!("\ndone");
}
