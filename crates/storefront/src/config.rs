//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults match the live site.
//!
//! - `ROOFTOP_STORAGE_DIR` - Origin directory of the file store (default: .rooftop)
//! - `ROOFTOP_STORAGE_QUOTA_BYTES` - Store quota in bytes (default: 5242880)
//! - `ROOFTOP_NOTIFICATION_MS` - Cart banner display time (default: 3000)
//! - `ROOFTOP_AUTO_SLIDE_MS` - Testimonial autoplay period (default: 5000)
//! - `ROOFTOP_PROMO_ROTATE_MS` - Promo banner rotation period (default: 8000)
//! - `ROOFTOP_NEWSLETTER_DELAY_MS` - Simulated newsletter request time (default: 1000)
//! - `ROOFTOP_CONTACT_DELAY_MS` - Simulated contact request time (default: 1500)
//! - `ROOFTOP_SCROLL_THRESHOLD` - Offset at which the header compacts (default: 100)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::storage::DEFAULT_QUOTA_BYTES;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeConfig {
    /// Directory backing the file store
    pub storage_dir: PathBuf,
    /// Store quota in bytes
    pub storage_quota: usize,
    /// How long the "added to cart" banner stays up
    pub notification_duration: Duration,
    /// Testimonial autoplay period
    pub auto_slide_interval: Duration,
    /// Promo banner rotation period
    pub promo_interval: Duration,
    /// Simulated newsletter request time
    pub newsletter_delay: Duration,
    /// Simulated contact request time
    pub contact_delay: Duration,
    /// Scroll offset at which the header switches to its compact style
    pub scroll_threshold: u32,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".rooftop"),
            storage_quota: DEFAULT_QUOTA_BYTES,
            notification_duration: Duration::from_millis(3000),
            auto_slide_interval: Duration::from_millis(5000),
            promo_interval: Duration::from_millis(8000),
            newsletter_delay: Duration::from_millis(1000),
            contact_delay: Duration::from_millis(1500),
            scroll_threshold: 100,
        }
    }
}

impl CafeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            storage_dir: lookup("ROOFTOP_STORAGE_DIR")
                .map_or(defaults.storage_dir, PathBuf::from),
            storage_quota: parse_or(&lookup, "ROOFTOP_STORAGE_QUOTA_BYTES", defaults.storage_quota)?,
            notification_duration: millis_or(
                &lookup,
                "ROOFTOP_NOTIFICATION_MS",
                defaults.notification_duration,
            )?,
            auto_slide_interval: millis_or(
                &lookup,
                "ROOFTOP_AUTO_SLIDE_MS",
                defaults.auto_slide_interval,
            )?,
            promo_interval: millis_or(&lookup, "ROOFTOP_PROMO_ROTATE_MS", defaults.promo_interval)?,
            newsletter_delay: millis_or(
                &lookup,
                "ROOFTOP_NEWSLETTER_DELAY_MS",
                defaults.newsletter_delay,
            )?,
            contact_delay: millis_or(&lookup, "ROOFTOP_CONTACT_DELAY_MS", defaults.contact_delay)?,
            scroll_threshold: parse_or(&lookup, "ROOFTOP_SCROLL_THRESHOLD", defaults.scroll_threshold)?,
        })
    }

    /// Same configuration with every simulated delay removed.
    #[must_use]
    pub fn without_delays(mut self) -> Self {
        self.newsletter_delay = Duration::ZERO;
        self.contact_delay = Duration::ZERO;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise use `default`.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse a millisecond count if set, otherwise use `default`.
fn millis_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match lookup(key) {
        Some(_) => parse_or(lookup, key, 0_u64).map(Duration::from_millis),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CafeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CafeConfig::default());
        assert_eq!(config.notification_duration, Duration::from_secs(3));
        assert_eq!(config.storage_quota, 5 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = CafeConfig::from_lookup(lookup_from(&[
            ("ROOFTOP_STORAGE_DIR", "/tmp/rooftop"),
            ("ROOFTOP_AUTO_SLIDE_MS", "2500"),
            ("ROOFTOP_SCROLL_THRESHOLD", " 80 "),
        ]))
        .unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/rooftop"));
        assert_eq!(config.auto_slide_interval, Duration::from_millis(2500));
        assert_eq!(config.scroll_threshold, 80);
    }

    #[test]
    fn test_invalid_value() {
        let err = CafeConfig::from_lookup(lookup_from(&[("ROOFTOP_CONTACT_DELAY_MS", "soon")]))
            .unwrap_err();
        let ConfigError::InvalidEnvVar(key, _) = err;
        assert_eq!(key, "ROOFTOP_CONTACT_DELAY_MS");
    }

    #[test]
    fn test_without_delays() {
        let config = CafeConfig::default().without_delays();
        assert_eq!(config.newsletter_delay, Duration::ZERO);
        assert_eq!(config.contact_delay, Duration::ZERO);
    }
}
