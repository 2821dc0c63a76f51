//! Volatile store for tests and throwaway sessions.

use super::{KeyValueStore, StorageError};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_value() {
        let mut store = InMemoryStore::new();
        store.set("k", "1".to_string()).unwrap();
        store.set("k", "2".to_string()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let mut store = InMemoryStore::new();
        assert!(store.remove("nothing").is_ok());
        assert!(store.is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let store: InMemoryStore = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }
}
