//! Key-value blob storage for persisted application state.

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

use crate::error::AppError;

/// String blobs addressed by key, the shape of browser local storage
pub trait KeyValueStore: Send {
    /// The blob under `key`, `None` when it was never written
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Volatile store, used for tests and one-shot sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        // Readers never see a partially written blob
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(&path).map_err(|e| e.error)?;
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("likes").unwrap(), None);

        store.set("likes", "[]").unwrap();
        assert_eq!(store.get("likes").unwrap().as_deref(), Some("[]"));

        let seeded = MemoryStore::with_entry("likes", "{");
        assert_eq!(seeded.get("likes").unwrap().as_deref(), Some("{"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("likes").unwrap(), None);
        store.set("likes", r#"[{"id":"1"}]"#).unwrap();
        store.set("likes", "[]").unwrap();

        assert_eq!(store.get("likes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/likes.json").exists());
    }

    #[test]
    fn test_file_store_concurrent_writers() {
        let dir = tempfile::tempdir().unwrap();

        let handles: Vec<_> = ["a", "b"]
            .into_iter()
            .map(|value| {
                let mut store = FileStore::new(dir.path());
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.set("likes", value).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stored = FileStore::new(dir.path()).get("likes").unwrap();
        assert!(matches!(stored.as_deref(), Some("a") | Some("b")));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.path_for("../etc/passwd"), dir.path().join("___etc_passwd.json"));
    }
}
