//! Light/dark theme with persistence.

use std::sync::Arc;

use rooftop_core::Theme;

use crate::storage::{KeyValueStore, StorageError};

/// Store key holding the theme literal.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Current theme, backed by the store.
pub struct DarkMode {
    store: Arc<dyn KeyValueStore>,
    theme: Theme,
}

impl DarkMode {
    /// Create the controller with the saved theme applied.
    ///
    /// The saved theme is written back, as applying a theme always persists
    /// it. A missing or unknown value means [`Theme::Light`].
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let saved = match store.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read saved theme");
                None
            }
        };
        let mut dark_mode = Self {
            store,
            theme: Theme::default(),
        };
        dark_mode.set(Theme::from_stored(saved.as_deref()));
        dark_mode
    }

    /// Apply and persist `theme`.
    ///
    /// The theme is applied even if persisting fails.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.persist() {
            tracing::warn!(theme = %theme, error = %e, "Could not save theme");
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str())
    }

    /// Switch to the other theme and return it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Value of the toggle's `aria-pressed` attribute.
    #[must_use]
    pub const fn aria_pressed(&self) -> &'static str {
        if self.theme.is_dark() { "true" } else { "false" }
    }
}

impl std::fmt::Debug for DarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarkMode")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
