//! Calculation history tracking.
//!
//! Provides an immutable, capacity-bounded log of completed calculations,
//! newest first.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Record of one completed calculation.
///
/// Entries are immutable values. The serialized field names match the
/// persisted layout; `calculation` is accepted as an alias of `expression`.
///
/// # Example
///
/// ```rust
/// use abacus::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("12 + 7", "19");
/// assert_eq!(entry.expression(), "12 + 7");
/// assert_eq!(entry.result(), "19");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The calculation as shown to the user, e.g. `12 + 7`
    #[serde(alias = "calculation")]
    expression: String,
    /// The formatted result
    result: String,
    /// Local wall-clock time the calculation completed
    timestamp: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self::with_timestamp(
            expression,
            result,
            Local::now().format("%H:%M:%S").to_string(),
        )
    }

    pub fn with_timestamp(
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Ordered, bounded history of calculations.
///
/// History is immutable - `record` returns a new log with the entry
/// prepended and the oldest entries beyond capacity dropped. Index 0 is
/// always the most recent calculation.
///
/// # Example
///
/// ```rust
/// use abacus::core::{HistoryEntry, HistoryLog};
///
/// let history = HistoryLog::with_capacity(2)
///     .record(HistoryEntry::new("1 + 1", "2"))
///     .record(HistoryEntry::new("2 + 2", "4"))
///     .record(HistoryEntry::new("3 + 3", "6"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.entries()[0].result(), "6");
/// assert_eq!(history.entries()[1].result(), "4");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log with the default capacity of 50.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Rebuild a log from previously persisted entries, newest first.
    ///
    /// Entries beyond `capacity` are dropped.
    pub fn from_entries(mut entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Record an entry, returning a new log.
    ///
    /// This does not mutate the existing log.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity((self.entries.len() + 1).min(self.capacity));
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(self.capacity);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// An empty log with the same capacity.
    pub fn cleared(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::with_timestamp(format!("{} + 0", n), n.to_string(), "12:00:00")
    }

    #[test]
    fn new_history_is_empty() {
        let history = HistoryLog::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), 50);
    }

    #[test]
    fn record_prepends_entry() {
        let history = HistoryLog::new().record(entry(1)).record(entry(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0], entry(2));
        assert_eq!(history.entries()[1], entry(1));
    }

    #[test]
    fn record_is_immutable() {
        let history = HistoryLog::new();
        let new_history = history.record(entry(1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_beyond_capacity() {
        let mut history = HistoryLog::new();
        for n in 0..51 {
            history = history.record(entry(n));
        }

        assert_eq!(history.len(), 50);
        assert_eq!(history.latest(), Some(&entry(50)));
        assert_eq!(history.get(49), Some(&entry(1)));
    }

    #[test]
    fn from_entries_truncates_to_capacity() {
        let entries = (0..10).map(entry).collect();
        let history = HistoryLog::from_entries(entries, 3);

        assert_eq!(history.len(), 3);
        assert_eq!(history.latest(), Some(&entry(0)));
    }

    #[test]
    fn cleared_keeps_capacity() {
        let history = HistoryLog::with_capacity(5).record(entry(1)).cleared();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 5);
    }

    #[test]
    fn new_entry_gets_time_stamp() {
        let entry = HistoryEntry::new("1 + 1", "2");
        assert_eq!(entry.timestamp().len(), 8);
        assert_eq!(entry.timestamp().matches(':').count(), 2);
    }

    #[test]
    fn entry_serializes_correctly() {
        let entry = entry(7);
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn entry_accepts_calculation_alias() {
        let json = r#"{"calculation":"2 × 3","result":"6","timestamp":"9:15:00 AM"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.expression(), "2 × 3");
        assert_eq!(entry.timestamp(), "9:15:00 AM");
    }
}
