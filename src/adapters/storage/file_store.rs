//! File-based Key-Value Store Adapter
//!
//! Keeps every key in a single YAML mapping on disk. The file is read on
//! each `get` and rewritten on each `set`; there are only ever a handful of
//! keys.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, String>;

/// File-backed key-value store
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store backed by the YAML file at `path`.
    ///
    /// The file and its parent directory are created on first `set`.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/clarity.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let yaml = fs::read_to_string(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        if yaml.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_yaml::from_str(&yaml).map_err(|e| StoreError::Deserialization(e.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let yaml = serde_yaml::to_string(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, yaml).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Deserialization(reason)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "Store file is corrupt, starting a fresh one"
                );
                Entries::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileKeyValueStore {
        FileKeyValueStore::new(dir.path().join("state.yaml"))
    }

    #[test]
    fn test_file_store_get_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert_eq!(store.get("clarity-mode").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.set("clarity-mode", "\"TEACH\"").unwrap();

        assert_eq!(
            store.get("clarity-mode").unwrap().as_deref(),
            Some("\"TEACH\"")
        );
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        store_in(&temp_dir).set("k", "v").unwrap();

        let reopened = store_in(&temp_dir);

        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_set_overwrites_and_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("nested/deeper/state.yaml"));

        store.set("k", "v").unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_file_store_corrupt_file_fails_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "- just\n- a list\n").unwrap();

        assert!(matches!(
            store.get("k"),
            Err(StoreError::Deserialization(_))
        ));
    }

    #[test]
    fn test_file_store_corrupt_file_is_replaced_on_set() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "- not\n- a mapping\n").unwrap();

        store.set("k", "v").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_empty_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "").unwrap();

        assert_eq!(store.get("k").unwrap(), None);
    }
}
