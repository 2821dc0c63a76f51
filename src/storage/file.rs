//! JSON file-backed store.

use super::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A store persisted as a single JSON object on disk.
///
/// The whole map is loaded on open and rewritten on every change. Writes
/// go to a temporary file that is then renamed over the target, so a crash
/// mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. A file that is not a JSON
    /// object of strings is logged and treated as empty; it is overwritten
    /// on the next change.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(path = %path.display(), %error, "ignoring malformed store file");
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(StorageError::io(path, error)),
        };
        debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        fs::write(&temp_path, json).map_err(|e| StorageError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
