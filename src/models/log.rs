use super::entry::Entry;
use chrono::NaiveDate;

/// Whether the last session of a log is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogState {
    /// Last entry is unfinished.
    Open,
    /// Last entry is finished, or the log is empty.
    Closed,
}

impl LogState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogState::Open => "open",
            LogState::Closed => "closed",
        }
    }
}

/// Entries in insertion order, which is also chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Log {
    entries: Vec<Entry>,
}

impl Log {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Derived from the last element only.
    pub fn state(&self) -> LogState {
        match self.entries.last() {
            Some(e) if e.is_unfinished() => LogState::Open,
            _ => LogState::Closed,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// In-place mutation is only ever allowed on the last element.
    pub fn last_mut(&mut self) -> Option<&mut Entry> {
        self.entries.last_mut()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Latest day across all entries, regardless of position.
    pub fn max_day(&self) -> Option<NaiveDate> {
        self.entries.iter().map(|e| e.day).max()
    }

    /// The last `n` entries, used to show the tail after a transition.
    pub fn tail(&self, n: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}
