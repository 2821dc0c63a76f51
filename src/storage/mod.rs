//! Key-value persistence.
//!
//! Everything the calculator keeps across sessions (history, the memory
//! cell, theme settings) is stored as strings under fixed keys. Readers
//! never fail: missing or malformed values degrade to defaults.

mod error;
mod file;
mod history;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use history::HistoryStore;
pub use memory::InMemoryStore;

/// Keys under which calculator state is persisted.
pub mod keys {
    /// JSON array of history entries, newest first
    pub const HISTORY: &str = "calculatorHistory";
    /// Memory cell value as a decimal string
    pub const MEMORY: &str = "calculatorMemory";
    /// `"light"` or `"dark"`
    pub const THEME: &str = "calculatorTheme";
    /// Name of the active color preset
    pub const THEME_PRESET: &str = "calculatorThemePreset";
    /// `"true"` or `"false"`
    pub const HIGH_CONTRAST: &str = "calculatorHighContrast";
    /// `"true"` or `"false"`
    pub const COLOR_BLIND: &str = "calculatorColorBlind";
}

/// A synchronous string key-value store.
///
/// # Example
///
/// ```rust
/// use abacus::storage::{InMemoryStore, KeyValueStore};
///
/// let mut store = InMemoryStore::new();
/// store.set("calculatorTheme", "dark".to_string()).unwrap();
/// assert_eq!(store.get("calculatorTheme").as_deref(), Some("dark"));
///
/// store.remove("calculatorTheme").unwrap();
/// assert!(store.get("calculatorTheme").is_none());
/// ```
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Read a boolean flag stored as `"true"`; anything else is `false`.
pub fn get_flag(store: &impl KeyValueStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

pub fn set_flag(store: &mut impl KeyValueStore, key: &str, value: bool) -> Result<(), StorageError> {
    store.set(key, value.to_string())
}
