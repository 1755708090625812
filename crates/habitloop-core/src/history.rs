//! Append-only history of completed habits.
//!
//! Entries are written only by the rollover engine and are immutable once
//! recorded. The log is ordered newest-first; a new entry is prepended.

use serde::{Deserialize, Serialize};

use crate::day::DayKey;

/// One day's snapshot of completed habit names.
///
/// `date` is the day that ended at the rollover, and an entry exists only
/// if at least one habit was completed that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: DayKey,
    pub completed: Vec<String>,
}

impl HistoryEntry {
    pub fn new(date: DayKey, completed: Vec<String>) -> Self {
        Self { date, completed }
    }
}

/// Newest-first log of history entries, copy-on-write like the stores.
///
/// Serializes as a plain JSON array, the persisted form of the
/// `habitHistory` blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog(Vec<HistoryEntry>);

impl HistoryLog {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    /// New log with `entry` at the front.
    pub fn with_prepended(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.0.len() + 1);
        entries.push(entry);
        entries.extend(self.0.iter().cloned());
        Self(entries)
    }
}
