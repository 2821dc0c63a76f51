//! Persistence of the calculation history.

use super::{keys, KeyValueStore, StorageError};
use crate::core::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
use tracing::warn;

/// Loads and saves a [`HistoryLog`] as a JSON array under
/// [`keys::HISTORY`].
///
/// # Example
///
/// ```rust
/// use abacus::core::{HistoryEntry, HistoryLog};
/// use abacus::storage::{HistoryStore, InMemoryStore};
///
/// let mut store = InMemoryStore::new();
/// let history_store = HistoryStore::default();
///
/// let log = HistoryLog::new().record(HistoryEntry::new("12 + 7", "19"));
/// history_store.persist(&mut store, &log).unwrap();
///
/// let restored = history_store.load(&store);
/// assert_eq!(restored.entries(), log.entries());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryStore {
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Restore the persisted history.
    ///
    /// Missing data and data that fails to parse both yield an empty log.
    pub fn load(&self, store: &impl KeyValueStore) -> HistoryLog {
        let Some(raw) = store.get(keys::HISTORY) else {
            return HistoryLog::with_capacity(self.capacity);
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => HistoryLog::from_entries(entries, self.capacity),
            Err(error) => {
                warn!(%error, "discarding unreadable calculation history");
                HistoryLog::with_capacity(self.capacity)
            }
        }
    }

    pub fn persist(
        &self,
        store: &mut impl KeyValueStore,
        log: &HistoryLog,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(log.entries())
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        store.set(keys::HISTORY, json)
    }
}
