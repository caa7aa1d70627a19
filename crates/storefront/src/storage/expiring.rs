//! Timestamped values with optional expiry on top of any store.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StorageError};

/// Envelope written for every value: `{value, timestamp, expiry?}`.
///
/// Timestamps are epoch milliseconds.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    value: T,
    timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiry: Option<i64>,
}

/// Wraps a [`KeyValueStore`] with typed, optionally expiring values.
///
/// Reads never fail: an unreadable, malformed or expired entry reads as
/// `None`, and an expired one is deleted on the way.
#[derive(Clone)]
pub struct ExpiringStore {
    inner: Arc<dyn KeyValueStore>,
}

impl ExpiringStore {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Store `value` under `key`, expiring after `expiry_days` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or written.
    pub fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        expiry_days: Option<u32>,
    ) -> Result<(), StorageError> {
        self.set_at(key, value, expiry_days, Utc::now())
    }

    /// [`ExpiringStore::set`] with an explicit clock reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or written.
    pub fn set_at<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        expiry_days: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let envelope = Envelope {
            value,
            timestamp: now.timestamp_millis(),
            expiry: expiry_days
                .map(|days| (now + Duration::days(i64::from(days))).timestamp_millis()),
        };
        let json = serde_json::to_string(&envelope)?;
        self.inner.set(key, &json).inspect_err(|e| {
            tracing::error!(key = %key, error = %e, "Storage error");
        })
    }

    /// Value under `key`, unless missing, malformed or expired.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_at(key, Utc::now())
    }

    /// [`ExpiringStore::get`] with an explicit clock reading.
    #[must_use]
    pub fn get_at<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let raw = match self.inner.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Storage error");
                return None;
            }
        };

        let envelope: Envelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Storage error");
                return None;
            }
        };

        if envelope
            .expiry
            .is_some_and(|expiry| now.timestamp_millis() > expiry)
        {
            if let Err(e) = self.inner.remove(key) {
                tracing::warn!(key = %key, error = %e, "Failed to remove expired entry");
            }
            return None;
        }

        Some(envelope.value)
    }

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }

    /// Delete every key in the underlying store, not just envelopes.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion cannot be persisted.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.inner.clear()
    }

    /// Approximate space used by the whole store, e.g. `"0.42 KB"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn size(&self) -> Result<String, StorageError> {
        let bytes: usize = self
            .inner
            .entries()?
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum();
        #[allow(clippy::cast_precision_loss)] // storage sizes stay far below 2^52
        let kb = bytes as f64 / 1024.0;
        Ok(format!("{kb:.2} KB"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::storage::MemoryStore;

    fn fixture() -> (Arc<MemoryStore>, ExpiringStore) {
        let inner = Arc::new(MemoryStore::new());
        let store = ExpiringStore::new(inner.clone());
        (inner, store)
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_roundtrip_without_expiry() {
        let (inner, store) = fixture();
        store.set_at("visit_count", &7_u64, None, day(1)).unwrap();

        assert_eq!(store.get_at::<u64>("visit_count", day(30)), Some(7));
        let raw = inner.get("visit_count").unwrap().unwrap();
        assert!(!raw.contains("expiry"));
    }

    #[test]
    fn test_expired_value_is_removed() {
        let (inner, store) = fixture();
        store.set_at("promo_seen", &true, Some(2), day(1)).unwrap();

        assert_eq!(store.get_at::<bool>("promo_seen", day(2)), Some(true));
        assert_eq!(store.get_at::<bool>("promo_seen", day(4)), None);
        assert_eq!(inner.get("promo_seen").unwrap(), None);
    }

    #[test]
    fn test_malformed_value_reads_as_none() {
        let (inner, store) = fixture();
        inner.set("visit_count", "12").unwrap();
        assert_eq!(store.get::<u64>("visit_count"), None);
    }

    #[test]
    fn test_size_reports_kilobytes() {
        let (inner, store) = fixture();
        inner.set("k", &"v".repeat(1023)).unwrap();
        assert_eq!(store.size().unwrap(), "1.00 KB");
    }
}
