//! Coffee Machine
//!
//! This example walks a coffee machine through a working morning.
//!
//! Key concepts:
//! - Readiness chain vetoing a brew until supplies are topped up
//! - Brew and Clean commands driven by a remote control with undo
//! - State progression Idle -> Brewing -> Cleaning -> Idle, plus cancel
//! - Panel participants coordinated by a mediator
//! - Brew strength rolled back from a snapshot log
//!
//! Run with: cargo run --example coffee_machine

use percolator::command::{Command, RemoteControl, UndoOutcome};
use percolator::device::CoffeeMachine;
use percolator::mediator::LoggerMediator;
use percolator::memento::SnapshotLog;
use percolator::MachineConfig;

const CONFIG: &str = r#"{
    "readiness": { "water_min": 500, "beans_min": 300 },
    "supplies": { "water": 200, "beans": 400, "cup_present": true },
    "initial_strength": 2
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Coffee Machine ===\n");

    let config = MachineConfig::from_json(CONFIG).unwrap();
    let mut machine = CoffeeMachine::builder().config(config).build().unwrap();
    machine.subscribe(|t| println!("  [transition] {} -> {} on {}", t.from, t.to, t.event.name()));

    let mut remote = RemoteControl::builder()
        .command(Command::Brew)
        .build()
        .unwrap();

    println!("Brewing with a low water tank:");
    match remote.press_do(&mut machine, 1) {
        Ok(execution) => println!("  brewed {} cup(s)", execution.times),
        Err(err) => println!("  refused: {err}"),
    }

    println!("\nFilling the tank and brewing two cups:");
    machine.supplies_mut().fill_water(400);
    let execution = remote.press_do(&mut machine, 2).unwrap();
    println!("  state: {}", execution.state);
    println!(
        "  display: {}",
        machine.panel().display().current().unwrap_or("")
    );

    println!("\nChanged our mind, undoing the brew:");
    if let UndoOutcome::Reverted { state, .. } = remote.press_undo(&mut machine) {
        println!("  state: {state}");
    }
    machine.next();

    println!("\nTrying a stronger cup, then rolling the strength back:");
    let mut strengths = SnapshotLog::new();
    strengths.checkpoint(machine.settings());
    machine.settings_mut().set_strength(5).unwrap();
    println!("  strength now {}", machine.settings().strength());
    strengths.undo(machine.settings_mut());
    println!("  strength restored to {}", machine.settings().strength());

    println!("\nBrewing one cup, then cleaning:");
    remote.press_do(&mut machine, 1).unwrap();
    remote.set_command(Command::Clean);
    if let Err(err) = remote.press_do(&mut machine, 3) {
        println!("  refused: {err}");
    }
    remote.press_do(&mut machine, 1).unwrap();
    machine.next();
    println!("  state: {}", machine.state());

    println!("\nLogger panel:");
    let mut panel = LoggerMediator::new();
    panel.press_button();
    for line in panel.display().lines() {
        println!("  {line}");
    }

    println!("\nStatus:");
    println!(
        "{}",
        serde_json::to_string_pretty(&machine.status()).unwrap()
    );

    println!("\n=== Example Complete ===");
}
