//! Snapshot log for undoing configuration changes.
//!
//! The [`SnapshotLog`] is a stack of immutable [`Snapshot`]s. It only touches
//! the configuration holder through the [`Originator`] trait: `capture` when
//! checkpointing, `restore` when undoing.
//!
//! # Example
//!
//! ```rust
//! use percolator::memento::{BrewSettings, SnapshotLog};
//!
//! let mut settings = BrewSettings::default();
//! let mut log = SnapshotLog::new();
//!
//! for strength in [3, 5, 7] {
//!     settings.set_strength(strength).unwrap();
//!     log.checkpoint(&settings);
//! }
//!
//! settings.set_strength(9).unwrap();
//! assert_eq!(log.undo(&mut settings), Some(7));
//! assert_eq!(log.undo(&mut settings), Some(5));
//! assert_eq!(settings.strength(), 5);
//! ```

mod error;
mod settings;

pub use error::SettingsError;
pub use settings::BrewSettings;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
use uuid::Uuid;

/// A configuration holder whose value can be captured and restored.
pub trait Originator {
    type Value: Clone;
    type Error: fmt::Display;

    fn capture(&self) -> Self::Value;

    /// Install `value`. A holder may refuse values it considers invalid.
    fn restore(&mut self, value: Self::Value) -> Result<(), Self::Error>;
}

/// Immutable capture of one configuration value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    id: Uuid,
    value: T,
    taken_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    fn new(value: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            taken_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

/// Stack of snapshots. Grows only through `backup`/`checkpoint`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLog<T> {
    stack: Vec<Snapshot<T>>,
}

impl<T> Default for SnapshotLog<T> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T: Clone + std::fmt::Debug> SnapshotLog<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a snapshot of `value`. Returns the snapshot's id.
    pub fn backup(&mut self, value: T) -> Uuid {
        let snapshot = Snapshot::new(value);
        let id = snapshot.id;
        info!(snapshot = %id, value = ?snapshot.value, depth = self.stack.len() + 1, "configuration backed up");
        self.stack.push(snapshot);
        id
    }

    /// Back up the holder's current value.
    pub fn checkpoint<O>(&mut self, holder: &O) -> Uuid
    where
        O: Originator<Value = T>,
    {
        self.backup(holder.capture())
    }

    /// Pop the newest snapshot and restore it into `holder`.
    ///
    /// Returns the restored value, or `None` (leaving `holder` untouched)
    /// when there is nothing to undo or the holder refuses the snapshot. A
    /// refused snapshot is still consumed.
    pub fn undo<O>(&mut self, holder: &mut O) -> Option<T>
    where
        O: Originator<Value = T>,
    {
        let Some(snapshot) = self.stack.pop() else {
            warn!("no snapshot to restore");
            return None;
        };

        if let Err(err) = holder.restore(snapshot.value.clone()) {
            warn!(snapshot = %snapshot.id, value = ?snapshot.value, error = %err, "snapshot refused by holder");
            return None;
        }

        info!(snapshot = %snapshot.id, value = ?snapshot.value, "configuration restored");
        Some(snapshot.value)
    }

    /// Newest snapshot, without removing it.
    pub fn peek(&self) -> Option<&Snapshot<T>> {
        self.stack.last()
    }

    /// Snapshots oldest first.
    pub fn snapshots(&self) -> &[Snapshot<T>] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_on_empty_log_leaves_holder_unchanged() {
        let mut settings = BrewSettings::new(4).unwrap();
        let mut log: SnapshotLog<u32> = SnapshotLog::new();

        assert_eq!(log.undo(&mut settings), None);
        assert_eq!(settings.strength(), 4);
    }

    #[test]
    fn undo_restores_in_reverse_push_order() {
        let mut settings = BrewSettings::default();
        let mut log = SnapshotLog::new();

        log.backup(3);
        log.backup(5);
        log.backup(7);

        assert_eq!(log.undo(&mut settings), Some(7));
        assert_eq!(settings.strength(), 7);
        assert_eq!(log.undo(&mut settings), Some(5));
        assert_eq!(settings.strength(), 5);
        assert_eq!(log.undo(&mut settings), Some(3));
        assert_eq!(log.undo(&mut settings), None);
        assert_eq!(settings.strength(), 3);
    }

    #[test]
    fn undo_never_re_pushes() {
        let mut settings = BrewSettings::default();
        let mut log = SnapshotLog::new();
        log.backup(2);

        log.undo(&mut settings);
        assert!(log.is_empty());
    }

    #[test]
    fn checkpoint_captures_holder_value() {
        let mut settings = BrewSettings::new(6).unwrap();
        let mut log = SnapshotLog::new();

        let id = log.checkpoint(&settings);
        settings.set_strength(8).unwrap();

        let top = log.peek().unwrap();
        assert_eq!(top.id(), id);
        assert_eq!(*top.value(), 6);
        assert!(top.taken_at() <= Utc::now());
    }

    #[test]
    fn refused_snapshot_is_consumed_and_holder_kept() {
        let mut settings = BrewSettings::new(5).unwrap();
        let mut log = SnapshotLog::new();
        log.backup(2);
        log.backup(0);

        assert_eq!(log.undo(&mut settings), None);
        assert_eq!(settings.strength(), 5);
        assert_eq!(log.len(), 1);
        assert_eq!(log.undo(&mut settings), Some(2));
    }

    #[test]
    fn snapshot_ids_are_unique() {
        let mut log = SnapshotLog::new();
        let a = log.backup(1);
        let b = log.backup(1);

        assert_ne!(a, b);
        assert_eq!(log.len(), 2);
        assert_eq!(log.snapshots()[0].id(), a);
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = SnapshotLog::new();
        log.backup(3u32);

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: SnapshotLog<u32> = serde_json::from_str(&json).unwrap();

        assert_eq!(log, deserialized);
    }
}
