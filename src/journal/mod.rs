//! Transition journal: an ordered, serializable record of stack operations.
//!
//! Every push and pop performed by a
//! [`StateMachine`](crate::core::StateMachine) is appended to its journal,
//! giving diagnostics and replay tooling a timeline of where a machine has
//! been. A `change_state` records one pop and one push; an `end` records one
//! pop per stacked state; the discard performed by `initialize` records
//! nothing, because no exits run.
//!
//! Journals serialize to JSON for inspection and to a compact binary format
//! for storage, with a version stamp validated on import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

pub mod error;

pub use error::JournalError;

/// Version identifier for the journal export format.
pub const JOURNAL_VERSION: u32 = 1;

/// The two primitive stack operations a journal distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// A state was pushed and entered.
    Push,
    /// A state was exited and popped.
    Pop,
}

/// Record of a single stack operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Whether the state was pushed or popped
    pub kind: TransitionKind,
    /// Name of the state involved
    pub state: String,
    /// Stack depth after the operation
    pub depth: usize,
    /// When the operation occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of one machine's stack operations.
///
/// # Example
///
/// ```rust
/// use perennial::journal::{Journal, TransitionKind};
/// use uuid::Uuid;
///
/// let mut journal = Journal::new(Uuid::new_v4());
/// journal.record(TransitionKind::Push, "gameplay", 1);
/// journal.record(TransitionKind::Push, "pause", 2);
/// journal.record(TransitionKind::Pop, "pause", 1);
///
/// assert_eq!(journal.len(), 3);
/// assert_eq!(journal.path(), vec!["gameplay", "pause"]);
///
/// let json = journal.to_json().unwrap();
/// let restored = Journal::from_json(&json).unwrap();
/// assert_eq!(restored.len(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Journal {
    version: u32,
    machine: Uuid,
    records: Vec<TransitionRecord>,
}

impl Journal {
    /// Create an empty journal for the machine identified by `machine`.
    pub fn new(machine: Uuid) -> Self {
        Self {
            version: JOURNAL_VERSION,
            machine,
            records: Vec::new(),
        }
    }

    /// Identifier of the machine this journal belongs to.
    pub fn machine(&self) -> Uuid {
        self.machine
    }

    /// Append a record for a stack operation, timestamped now.
    ///
    /// `depth` is the stack depth after the operation.
    pub fn record(&mut self, kind: TransitionKind, state: impl Into<String>, depth: usize) {
        self.records.push(TransitionRecord {
            kind,
            state: state.into(),
            depth,
            timestamp: Utc::now(),
        });
    }

    /// All recorded operations in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of the states entered, in push order.
    pub fn path(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.kind == TransitionKind::Push)
            .map(|r| r.state.as_str())
            .collect()
    }

    /// Duration between the first and last recorded operation.
    ///
    /// Returns `None` when the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// Discard all records, keeping the machine id and version.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Export the journal as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, JournalError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JournalError::SerializationFailed(e.to_string()))
    }

    /// Import a journal from JSON, validating the version stamp.
    pub fn from_json(json: &str) -> Result<Self, JournalError> {
        let journal: Self = serde_json::from_str(json)
            .map_err(|e| JournalError::DeserializationFailed(e.to_string()))?;
        journal.validate_version()?;
        Ok(journal)
    }

    /// Export the journal in a compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, JournalError> {
        bincode::serialize(self).map_err(|e| JournalError::SerializationFailed(e.to_string()))
    }

    /// Import a journal from the binary format, validating the version stamp.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, JournalError> {
        let journal: Self = bincode::deserialize(bytes)
            .map_err(|e| JournalError::DeserializationFailed(e.to_string()))?;
        journal.validate_version()?;
        Ok(journal)
    }

    fn validate_version(&self) -> Result<(), JournalError> {
        if self.version != JOURNAL_VERSION {
            return Err(JournalError::UnsupportedVersion {
                found: self.version,
                supported: JOURNAL_VERSION,
            });
        }
        Ok(())
    }
}
