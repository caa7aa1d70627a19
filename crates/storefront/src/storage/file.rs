//! File-backed key-value store.
//!
//! An origin directory holds a single `local_storage.json` document mapping
//! keys to string values. Every write rewrites the document through a
//! temporary file and a rename, so a crash leaves either the old or the new
//! document on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::{KeyValueStore, StorageError, check_quota};

/// Name of the document inside the origin directory.
pub const DOCUMENT_FILE_NAME: &str = "local_storage.json";
const TMP_FILE_NAME: &str = "local_storage.json.tmp";

/// A [`KeyValueStore`] persisted in an origin directory.
///
/// Nothing is cached: every read goes to the document, and every write
/// re-reads it, applies one key change and commits. Handles on the same
/// directory therefore see each other's writes, and only a race on the same
/// key is last-write-wins.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    quota: Option<usize>,
    lock: Mutex<()>,
}

impl FileStore {
    /// Open (creating if needed) the store in `dir`.
    ///
    /// An unreadable or malformed document reads as empty and is replaced on
    /// the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be created.
    pub fn open(dir: impl Into<PathBuf>, quota: Option<usize>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let store = Self {
            dir,
            quota,
            lock: Mutex::new(()),
        };
        tracing::debug!(dir = %store.dir.display(), keys = store.read_document().len(), "Opened file store");
        Ok(store)
    }

    /// The origin directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.lock.lock().map_err(|_| StorageError::Poisoned)
    }

    /// Current contents of the document on disk.
    fn read_document(&self) -> BTreeMap<String, String> {
        let path = self.dir.join(DOCUMENT_FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Discarding malformed storage document");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Storage document unreadable, reading as empty");
                BTreeMap::new()
            }
        }
    }

    /// Write `next` to disk through a temporary file.
    fn commit(&self, next: &BTreeMap<String, String>) -> Result<(), StorageError> {
        check_quota(next, self.quota)?;
        let json = serde_json::to_string_pretty(next)?;
        let tmp = self.dir.join(TMP_FILE_NAME);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.dir.join(DOCUMENT_FILE_NAME))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock()?;
        Ok(self.read_document().remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock()?;
        let mut next = self.read_document();
        next.insert(key.to_owned(), value.to_owned());
        self.commit(&next)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock()?;
        let mut next = self.read_document();
        if next.remove(key).is_none() {
            return Ok(());
        }
        self.commit(&next)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock()?;
        self.commit(&BTreeMap::new())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, StorageError> {
        let _guard = self.lock()?;
        Ok(self.read_document().into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        {
            let store = FileStore::open(tmp.path(), None).unwrap();
            store.set("theme", "dark").unwrap();
            store.set("rooftop_cart", "[]").unwrap();
        }

        let reopened = FileStore::open(tmp.path(), None).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("rooftop_cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("origin").join("rooftop");
        let store = FileStore::open(&dir, None).unwrap();
        store.set("k", "v").unwrap();
        assert!(dir.join(DOCUMENT_FILE_NAME).exists());
        assert!(!dir.join(TMP_FILE_NAME).exists());
    }

    #[test]
    fn test_malformed_document_starts_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(DOCUMENT_FILE_NAME), "{not json").unwrap();

        let store = FileStore::open(tmp.path(), None).unwrap();
        assert!(store.entries().unwrap().is_empty());

        store.set("theme", "light").unwrap();
        let reopened = FileStore::open(tmp.path(), None).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_quota_failure_leaves_disk_untouched() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path(), Some(32)).unwrap();
        store.set("a", "1").unwrap();

        assert!(matches!(
            store.set("b", &"x".repeat(100)),
            Err(StorageError::QuotaExceeded { .. })
        ));

        let reopened = FileStore::open(tmp.path(), None).unwrap();
        assert_eq!(reopened.get("b").unwrap(), None);
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path(), None).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(tmp.path(), None).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);

        reopened.clear().unwrap();
        assert_eq!(store.get("b").unwrap(), None);
        let cleared = FileStore::open(tmp.path(), None).unwrap();
        assert!(cleared.entries().unwrap().is_empty());
    }

    #[test]
    fn test_handles_on_one_directory_keep_unrelated_keys() {
        let tmp = TempDir::new().unwrap();
        let first = FileStore::open(tmp.path(), None).unwrap();
        let second = FileStore::open(tmp.path(), None).unwrap();

        first.set("theme", "dark").unwrap();
        second.set("rooftop_cart", "[]").unwrap();

        assert_eq!(first.get("rooftop_cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(second.get("theme").unwrap().as_deref(), Some("dark"));

        second.remove("theme").unwrap();
        assert_eq!(first.get("theme").unwrap(), None);
        assert_eq!(first.entries().unwrap().len(), 1);
    }
}
