//! Integration tests for the Roof Top Cafe storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rooftop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart behavior across reloads of a file-backed origin
//! - `storefront_events` - Page events through the bootstrap dispatcher
//! - `preferences` - Theme, visit counter and expiring values on disk
//!
//! Every test gets its own temporary origin directory; nothing touches the
//! real `ROOFTOP_STORAGE_DIR`.

use std::path::Path;
use std::sync::Arc;

use rooftop_storefront::app::{Effect, PageLayout, Storefront};
use rooftop_storefront::cart::{CartManager, NoopNotifier};
use rooftop_storefront::config::CafeConfig;
use rooftop_storefront::storage::{FileStore, KeyValueStore, StorageError};
use tempfile::TempDir;

/// A throwaway origin: a temporary directory plus a delay-free config.
pub struct TestOrigin {
    dir: TempDir,
    pub config: CafeConfig,
}

impl TestOrigin {
    /// Create an empty origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let config = CafeConfig {
            storage_dir: dir.path().to_path_buf(),
            ..CafeConfig::default()
        }
        .without_delays();
        Ok(Self { dir, config })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open the origin's store, as a fresh page load would.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn open_store(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        let store = FileStore::open(self.path(), Some(self.config.storage_quota))?;
        Ok(Arc::new(store))
    }

    /// A cart loaded from a fresh store, with signals discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn cart(&self) -> Result<CartManager, StorageError> {
        Ok(CartManager::new(self.open_store()?, Arc::new(NoopNotifier)))
    }

    /// Bootstrap the storefront over a fresh store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn load_page(&self) -> Result<(Storefront, Vec<Effect>), StorageError> {
        Ok(Storefront::bootstrap(
            self.config.clone(),
            self.open_store()?,
            PageLayout::default(),
        ))
    }
}

/// The badge counts in `effects`, in order.
#[must_use]
pub fn badges(effects: &[Effect]) -> Vec<u32> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Badge { count } => Some(*count),
            _ => None,
        })
        .collect()
}

/// Whether any effect navigates away.
#[must_use]
pub fn navigates(effects: &[Effect]) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, Effect::Navigate { .. }))
}
