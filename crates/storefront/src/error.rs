//! Unified error handling.
//!
//! Provides a unified `AppError` type that every controller error converts
//! into. The [`Storefront`](crate::app::Storefront) dispatcher is the only
//! place these are handled: it logs them and turns the user-facing ones into
//! toasts, so no error ever escapes to the page.

use thiserror::Error;

use crate::config::ConfigError;
use crate::controllers::contact::ContactError;
use crate::controllers::newsletter::NewsletterError;
use crate::controllers::search::SearchError;
use crate::storage::StorageError;
use crate::toast::Toast;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Search input was rejected.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Newsletter sign-up was rejected.
    #[error("Newsletter error: {0}")]
    Newsletter(#[from] NewsletterError),

    /// Contact form was rejected.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// An event referred to something the page does not have.
    #[error("Unknown target: {0}")]
    UnknownTarget(String),
}

impl AppError {
    /// Toast to show the visitor, if this error is theirs to fix.
    ///
    /// Internal errors are only logged. Contact form errors are shown inline
    /// next to the fields instead.
    #[must_use]
    pub fn user_toast(&self) -> Option<Toast> {
        match self {
            Self::Search(e) => Some(Toast::warning(e.to_string())),
            Self::Newsletter(e) => Some(Toast::error(e.to_string())),
            Self::Storage(_) | Self::Config(_) | Self::Contact(_) | Self::UnknownTarget(_) => {
                None
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
