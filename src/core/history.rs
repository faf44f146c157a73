//! Navigable state history.
//!
//! The history is a linear log of every state that has been made current,
//! paired with a cursor marking which entry is current right now. Moving the
//! cursor backwards and forwards implements undo and redo.

use super::config::StateId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// A state that was made current at a specific point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// The state that became current
    pub state: StateId,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: StateId) -> Self {
        Self {
            state,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of visited states with an undo/redo cursor.
///
/// The log is never empty and the cursor always points at a valid entry.
/// Recording a new entry while the cursor is behind the tail discards the
/// entries after the cursor, so redo only ever replays the current branch.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateHistory;
///
/// let mut history = StateHistory::new("draft");
/// history.record("review");
/// history.record("published");
///
/// assert_eq!(history.path(), vec!["draft", "review", "published"]);
///
/// assert!(history.undo());
/// assert_eq!(history.current(), "review");
///
/// // Branching from the middle drops "published"
/// history.record("rejected");
/// assert_eq!(history.path(), vec!["draft", "review", "rejected"]);
/// assert!(!history.redo());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct StateHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl StateHistory {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            entries: vec![HistoryEntry::now(initial.into())],
            index: 0,
        }
    }

    /// The state under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.index].state
    }

    /// Position of the cursor within [`entries`](Self::entries).
    pub fn index(&self) -> usize {
        self.index
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// State ids of all retained entries, oldest first.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.state.as_str()).collect()
    }

    pub fn can_undo(&self) -> bool {
        self.index != 0
    }

    pub fn can_redo(&self) -> bool {
        self.index != self.entries.len() - 1
    }

    /// Make `state` current by appending it after the cursor.
    ///
    /// Any entries after the cursor are discarded first.
    pub fn record(&mut self, state: impl Into<StateId>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::now(state.into()));
        self.index = self.entries.len() - 1;
    }

    /// Move the cursor back one entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Forget everything except the current entry.
    pub fn clear(&mut self) {
        let current = self.entries.swap_remove(self.index);
        self.entries = vec![current];
        self.index = 0;
    }

    /// Time elapsed between the oldest and newest retained entries.
    ///
    /// Returns `None` if the clock went backwards between them.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
