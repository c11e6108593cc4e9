//! End-to-end scenarios driving the machine the way an operator would.

use percolator::command::{Command, CommandError, RemoteControl, UndoOutcome};
use percolator::config::{MachineConfig, ReadinessThresholds};
use percolator::core::DeviceState;
use percolator::device::{CoffeeMachine, DeviceAction, Supplies};
use percolator::mediator::{LoggerMediator, PanelEffect};
use percolator::memento::{BrewSettings, SnapshotLog};
use percolator::readiness::{CheckKind, ReadinessChain};
use std::sync::{Arc, Mutex};

#[test]
fn stocked_machine_passes_readiness() {
    let chain = ReadinessChain::standard(
        &Supplies::new(600, 400, true),
        &ReadinessThresholds::default(),
    );
    assert!(chain.handle());
}

#[test]
fn low_water_vetoes_without_checking_beans_or_cup() {
    let chain = ReadinessChain::standard(
        &Supplies::new(300, 400, true),
        &ReadinessThresholds::default(),
    );

    let report = chain.inspect();
    assert!(!report.is_ready());
    assert_eq!(report.evaluated, vec![CheckKind::Water]);
}

#[test]
fn state_cycle_with_cancel_and_reset() {
    let mut machine = CoffeeMachine::new();
    assert_eq!(machine.state(), DeviceState::Idle);
    assert_eq!(machine.next(), DeviceState::Brewing);
    assert_eq!(machine.next(), DeviceState::Cleaning);
    assert_eq!(machine.cancel(), DeviceState::Cancelled);
    assert_eq!(machine.next(), DeviceState::Idle);
}

#[test]
fn strength_backups_restore_newest_first() {
    let mut settings = BrewSettings::default();
    let mut log = SnapshotLog::new();

    for strength in [3, 5, 7] {
        settings.set_strength(strength).unwrap();
        log.checkpoint(&settings);
    }

    assert_eq!(log.undo(&mut settings), Some(7));
    assert_eq!(log.undo(&mut settings), Some(5));
    assert_eq!(settings.strength(), 5);
}

#[test]
fn full_brew_and_clean_cycle_through_the_remote() {
    let config = MachineConfig::from_json(
        r#"{ "supplies": { "water": 800, "beans": 500, "cup_present": true } }"#,
    )
    .unwrap();
    let mut machine = CoffeeMachine::builder().config(config).build().unwrap();

    let transitions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&transitions);
    machine.subscribe(move |t| sink.lock().unwrap().push(t.to));

    let mut remote = RemoteControl::builder()
        .command(Command::Brew)
        .build()
        .unwrap();

    remote.press_do(&mut machine, 2).unwrap();
    remote.set_command(Command::Clean);
    remote.press_do(&mut machine, 1).unwrap();
    machine.next();

    assert_eq!(machine.state(), DeviceState::Idle);
    assert_eq!(
        *transitions.lock().unwrap(),
        vec![DeviceState::Brewing, DeviceState::Cleaning, DeviceState::Idle]
    );
    assert_eq!(
        machine.panel().effects(),
        &[
            PanelEffect::DisplayShown("Brewing".to_string()),
            PanelEffect::CleanerRan,
            PanelEffect::DisplayShown("Cleaning".to_string()),
        ]
    );
}

#[test]
fn remote_session_with_undo_and_rejected_parameter() {
    let mut machine = CoffeeMachine::builder()
        .supplies(Supplies::new(600, 400, true))
        .build()
        .unwrap();
    let mut remote = RemoteControl::new(Command::Brew);

    remote.press_do(&mut machine, 2).unwrap();
    assert!(matches!(
        remote.press_undo(&mut machine),
        UndoOutcome::Reverted {
            state: DeviceState::Cancelled,
            ..
        }
    ));

    remote.set_command(Command::Clean);
    let err = remote.press_do(&mut machine, 2).unwrap_err();
    assert!(matches!(err, CommandError::InvalidParameter { max: 1, .. }));
    assert_eq!(remote.press_undo(&mut machine), UndoOutcome::NoOp);

    assert_eq!(
        machine.actions(),
        &[
            DeviceAction::Brewed {
                cups: 2,
                strength: 1
            },
            DeviceAction::BrewCancelled,
        ]
    );
    assert_eq!(machine.state(), DeviceState::Cancelled);
}

#[test]
fn refilling_unblocks_a_vetoed_brew() {
    let mut machine = CoffeeMachine::new();
    let mut remote = RemoteControl::new(Command::Brew);

    let err = remote.press_do(&mut machine, 1).unwrap_err();
    assert!(matches!(err, CommandError::PreconditionFailed { .. }));
    assert!(remote.pending().is_none());

    machine.supplies_mut().fill_water(500);
    machine.supplies_mut().fill_beans(300);
    machine.supplies_mut().place_cup();

    assert!(remote.press_do(&mut machine, 1).is_ok());
}

#[test]
fn brew_strength_can_be_rolled_back_between_brews() {
    let mut machine = CoffeeMachine::builder()
        .supplies(Supplies::new(600, 400, true))
        .build()
        .unwrap();
    let mut log = SnapshotLog::new();
    let mut remote = RemoteControl::new(Command::Brew);

    log.checkpoint(machine.settings());
    machine.settings_mut().set_strength(5).unwrap();
    remote.press_do(&mut machine, 1).unwrap();
    machine.cancel();
    machine.next();

    log.undo(machine.settings_mut());
    remote.press_do(&mut machine, 1).unwrap();

    assert_eq!(
        machine.actions(),
        &[
            DeviceAction::Brewed {
                cups: 1,
                strength: 5
            },
            DeviceAction::Brewed {
                cups: 1,
                strength: 1
            },
        ]
    );
}

#[test]
fn logger_panel_records_both_tags() {
    let mut panel = LoggerMediator::new();
    panel.press_button();

    assert_eq!(
        panel.display().lines(),
        &["brewing button press", "cleaning start"]
    );
}

#[test]
fn status_serializes_for_readers() {
    let machine = CoffeeMachine::builder()
        .supplies(Supplies::new(600, 400, true))
        .build()
        .unwrap();

    let json = serde_json::to_value(machine.status()).unwrap();
    assert_eq!(json["state"], "Idle");
    assert_eq!(json["supplies"]["water"], 600);
    assert_eq!(json["strength"], 1);
}
