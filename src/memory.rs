//! The persisted memory accumulator.

use crate::core::{format_plain, parse_numeric_prefix};
use crate::storage::{keys, KeyValueStore, StorageError};

/// A single numeric accumulator mirrored under [`keys::MEMORY`].
///
/// The cell keeps its own copy of the value so that recall still works
/// when the stored string is missing or unreadable.
///
/// # Example
///
/// ```rust
/// use abacus::memory::MemoryCell;
/// use abacus::storage::InMemoryStore;
///
/// let mut store = InMemoryStore::new();
/// let mut cell = MemoryCell::load(&store);
///
/// cell.store(&mut store, 40.0).unwrap();
/// cell.add(&mut store, 2.0).unwrap();
/// assert_eq!(cell.recall(&store), 42.0);
///
/// cell.clear(&mut store).unwrap();
/// assert_eq!(cell.recall(&store), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryCell {
    value: f64,
}

impl MemoryCell {
    /// Restore the cell from the store; absent or malformed data gives 0.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            value: read(store).unwrap_or(0.0),
        }
    }

    /// The in-session value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn store(&mut self, store: &mut impl KeyValueStore, value: f64) -> Result<(), StorageError> {
        self.value = value;
        self.persist(store)
    }

    /// The persisted value, falling back to the in-session one.
    pub fn recall(&self, store: &impl KeyValueStore) -> f64 {
        read(store).unwrap_or(self.value)
    }

    pub fn add(&mut self, store: &mut impl KeyValueStore, value: f64) -> Result<f64, StorageError> {
        self.value += value;
        self.persist(store)?;
        Ok(self.value)
    }

    pub fn subtract(
        &mut self,
        store: &mut impl KeyValueStore,
        value: f64,
    ) -> Result<f64, StorageError> {
        self.value -= value;
        self.persist(store)?;
        Ok(self.value)
    }

    /// Zero the cell and drop the persisted key.
    pub fn clear(&mut self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        self.value = 0.0;
        store.remove(keys::MEMORY)
    }

    fn persist(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        store.set(keys::MEMORY, format_plain(self.value))
    }
}

fn read(store: &impl KeyValueStore) -> Option<f64> {
    store
        .get(keys::MEMORY)
        .and_then(|raw| parse_numeric_prefix(&raw))
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[test]
    fn starts_at_zero() {
        let store = InMemoryStore::new();
        assert_eq!(MemoryCell::load(&store).value(), 0.0);
    }

    #[test]
    fn loads_persisted_value() {
        let store: InMemoryStore = [(keys::MEMORY, "12.5")].into_iter().collect();
        assert_eq!(MemoryCell::load(&store).value(), 12.5);
    }

    #[test]
    fn store_persists_plain_decimal() {
        let mut store = InMemoryStore::new();
        let mut cell = MemoryCell::default();
        cell.store(&mut store, 0.5).unwrap();
        assert_eq!(store.get(keys::MEMORY).as_deref(), Some("0.5"));
    }

    #[test]
    fn add_and_subtract_accumulate() {
        let mut store = InMemoryStore::new();
        let mut cell = MemoryCell::default();
        assert_eq!(cell.add(&mut store, 10.0).unwrap(), 10.0);
        assert_eq!(cell.subtract(&mut store, 3.0).unwrap(), 7.0);
        assert_eq!(store.get(keys::MEMORY).as_deref(), Some("7"));
    }

    #[test]
    fn recall_falls_back_when_store_is_unreadable() {
        let mut store = InMemoryStore::new();
        let mut cell = MemoryCell::default();
        cell.store(&mut store, 9.0).unwrap();

        store.set(keys::MEMORY, "garbage".to_string()).unwrap();
        assert_eq!(cell.recall(&store), 9.0);

        store.remove(keys::MEMORY).unwrap();
        assert_eq!(cell.recall(&store), 9.0);
    }

    #[test]
    fn clear_removes_key() {
        let mut store = InMemoryStore::new();
        let mut cell = MemoryCell::default();
        cell.store(&mut store, 5.0).unwrap();
        cell.clear(&mut store).unwrap();

        assert!(!store.contains(keys::MEMORY));
        assert_eq!(cell.value(), 0.0);
    }
}
