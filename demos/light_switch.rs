//! Light Switch
//!
//! This example walks a two-state machine through triggers, undo and redo.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Event-driven transitions
//! - Undo/redo history
//!
//! Run with: RUST_LOG=debug cargo run --example light_switch

use rewind::StateMachine;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "initial": "off",
    "states": {
        "off": { "transitions": { "turnOn": "on" } },
        "on": { "transitions": { "turnOff": "off" } }
    }
}"#;

fn main() -> Result<(), rewind::FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch Example ===\n");

    let mut machine = StateMachine::from_json(CONFIG)?;
    println!("Initial state: {}", machine.current_state());

    machine.trigger("turnOn")?;
    println!("After turnOn: {}", machine.current_state());

    if let Err(e) = machine.trigger("turnOn") {
        println!("turnOn again: {e}");
    }

    for _ in 0..2 {
        let undone = machine.undo();
        println!("Undo: {undone} -> {}", machine.current_state());
    }
    let redone = machine.redo();
    println!("Redo: {redone} -> {}", machine.current_state());

    println!("States handling turnOff: {:?}", machine.states(Some("turnOff")));

    println!("\n=== Example Complete ===");
    Ok(())
}
