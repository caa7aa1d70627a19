//! CLI command implementations.
//!
//! Every command opens the origin store named by the configuration, so
//! state persists between invocations exactly as it does between page loads.

#![allow(clippy::print_stdout)]

pub mod cart;
pub mod forms;
pub mod search;
pub mod theme;
pub mod visit;

use std::sync::Arc;

use rooftop_storefront::config::CafeConfig;
use rooftop_storefront::error::Result;
use rooftop_storefront::storage::{FileStore, KeyValueStore};
use rooftop_storefront::toast::Toast;

/// Configuration plus the opened store.
pub struct Context {
    pub config: CafeConfig,
    pub store: Arc<dyn KeyValueStore>,
}

impl Context {
    /// Load configuration from the environment and open its store.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is malformed or the storage directory
    /// cannot be created.
    pub fn from_env() -> Result<Self> {
        let config = CafeConfig::from_env()?;
        let store = FileStore::open(config.storage_dir.clone(), Some(config.storage_quota))?;
        tracing::debug!(dir = %store.dir().display(), "Using file store");
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }
}

/// Print a toast the way the page would show it.
pub fn print_toast(toast: &Toast) {
    println!("{toast}");
}
