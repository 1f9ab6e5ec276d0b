use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DispatchError;

/// Immutable audit record of one execute attempt
///
/// Entries are created by the dispatcher, exactly one per `execute` call,
/// and never modified after append. The `before`/`after` fields hold the
/// entity's rendered snapshot around a successful handler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A command resolved and its handler succeeded
    Executed {
        command: String,
        before: String,
        after: String,
        recorded_at: DateTime<Utc>,
    },

    /// A command resolved but its handler rejected the invocation
    Failed {
        command: String,
        error: String,
        recorded_at: DateTime<Utc>,
    },

    /// A command name had no registry binding at execute time
    UnknownCommand {
        command: String,
        recorded_at: DateTime<Utc>,
    },
}

impl HistoryEntry {
    /// Record a successful execution with before/after snapshots
    pub fn executed(command: impl Into<String>, before: String, after: String) -> Self {
        HistoryEntry::Executed {
            command: command.into(),
            before,
            after,
            recorded_at: Utc::now(),
        }
    }

    /// Record a handler failure with its rendered description
    pub fn failed(command: impl Into<String>, error: &DispatchError) -> Self {
        HistoryEntry::Failed {
            command: command.into(),
            error: error.to_string(),
            recorded_at: Utc::now(),
        }
    }

    /// Record a registry lookup miss
    pub fn unknown(command: impl Into<String>) -> Self {
        HistoryEntry::UnknownCommand {
            command: command.into(),
            recorded_at: Utc::now(),
        }
    }

    /// The command name this entry records
    pub fn command(&self) -> &str {
        match self {
            HistoryEntry::Executed { command, .. }
            | HistoryEntry::Failed { command, .. }
            | HistoryEntry::UnknownCommand { command, .. } => command,
        }
    }

    /// True for `Executed` entries
    pub fn is_success(&self) -> bool {
        matches!(self, HistoryEntry::Executed { .. })
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryEntry::Executed {
                command,
                before,
                after,
                ..
            } => write!(f, "{command}: {before} -> {after}"),
            HistoryEntry::Failed { command, error, .. } => {
                write!(f, "{command}: failed ({error})")
            }
            HistoryEntry::UnknownCommand { command, .. } => {
                write!(f, "{command}: unknown command")
            }
        }
    }
}

/// Append-only, ordered execution log
///
/// Entries keep occurrence order for the whole run; there is no deletion,
/// truncation, or reordering API. Persistence across runs is out of scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one entry, preserving order. O(1).
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Read-only view of all entries, in append order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
