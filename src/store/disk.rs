//! Disk-backed key-value store, one file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::KvStore;
use crate::error::StoreError;

/// Stores each collection as `<key>.json` inside a data directory.
pub struct DiskStore {
    data_dir: PathBuf,
}

impl DiskStore {
    /// Create a DiskStore rooted at the given directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the default data directory: ~/.larder/data
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".larder").join("data"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl KvStore for DiskStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(key, e))?;
        fs::write(self.key_path(key), value).map_err(|e| StoreError::io(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::new(dir.path().to_path_buf());
        assert!(store.get("recipes").unwrap().is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::new(dir.path().join("nested"));

        store.put("pantry", "[1,2,3]").unwrap();
        assert_eq!(store.get("pantry").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn put_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::new(dir.path().to_path_buf());

        store.put("shopping_list", "[]").unwrap();
        store.put("shopping_list", "[{}]").unwrap();
        assert_eq!(
            store.get("shopping_list").unwrap().as_deref(),
            Some("[{}]")
        );
    }
}
