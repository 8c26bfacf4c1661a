//! File-backed session store
//!
//! Keeps the session keys in a small TOML table so the CLI stays signed in
//! between invocations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::store::{SessionStore, StoreError};

/// Session store persisted as a TOML file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| StoreError::Parse(e.to_string()))
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(entries).map_err(|e| StoreError::Parse(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!("Failed to read session file {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        let store = FileStore::new(&path);
        store.set("token", "t1").unwrap();
        store.set("role", "investor").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("token").as_deref(), Some("t1"));
        assert_eq!(reopened.get("role").as_deref(), Some("investor"));
        assert_eq!(reopened.get("username"), None);
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.toml"));

        store.set("token", "t1").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get("token"), None);

        // Removing a missing key is not an error
        store.remove("role").unwrap();
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("token"), None);
        assert!(matches!(store.set("token", "t1"), Err(StoreError::Parse(_))));
    }
}
