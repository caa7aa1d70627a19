//! Origin-scoped key-value storage.
//!
//! The site keeps everything it remembers (cart, theme, visit count) as
//! string values under fixed keys, the same way a browser's local storage
//! does. [`KeyValueStore`] is that contract; controllers receive an
//! `Arc<dyn KeyValueStore>` at construction.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - in-process map, used by tests and as a fallback
//! - [`FileStore`] - one JSON document inside an origin directory
//! - [`ExpiringStore`] - wrapper storing values in timestamped envelopes

mod expiring;
mod file;
mod memory;

use std::collections::BTreeMap;

use thiserror::Error;

pub use expiring::ExpiringStore;
pub use file::{DOCUMENT_FILE_NAME, FileStore};
pub use memory::MemoryStore;

/// Default quota, matching the 5 MiB most browsers grant an origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Errors from a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing would exceed the configured quota.
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A previous writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key-value storage scoped to one origin.
///
/// All methods take `&self`; implementations synchronize internally so a
/// single store can be shared by every controller.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] if the write does not fit, or
    /// an I/O error if it cannot be persisted. The previous value is kept in
    /// either case.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Delete every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    fn clear(&self) -> Result<(), StorageError>;

    /// Snapshot of every key and value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn entries(&self) -> Result<Vec<(String, String)>, StorageError>;
}

/// Bytes used by keys plus values.
pub(crate) fn used_bytes(entries: &BTreeMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

/// Check that `entries` fits in `quota`, if there is one.
pub(crate) fn check_quota(
    entries: &BTreeMap<String, String>,
    quota: Option<usize>,
) -> Result<(), StorageError> {
    let Some(quota) = quota else {
        return Ok(());
    };
    let needed = used_bytes(entries);
    if needed > quota {
        return Err(StorageError::QuotaExceeded { needed, quota });
    }
    Ok(())
}
