//! Keyboard input and global shortcuts.

use std::time::Duration;

/// A key press as delivered by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// The `KeyboardEvent.key` value, e.g. `"k"`, `"Escape"`, `" "`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    /// A key without modifiers.
    #[must_use]
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    /// A key with Ctrl held.
    #[must_use]
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            meta: false,
        }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub const fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }

    /// Enter or Space, the keys that activate a focused control.
    #[must_use]
    pub fn is_activation(&self) -> bool {
        self.key == "Enter" || self.key == " "
    }
}

/// A global shortcut action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    ToggleSidebar,
    ToggleTheme,
    ShowHelp,
}

/// Help text listing the shortcuts.
pub const SHORTCUT_HELP: &str = "Keyboard Shortcuts:\n\n\
    Ctrl/Cmd + K: Focus search\n\
    Ctrl/Cmd + B: Toggle sidebar\n\
    Ctrl/Cmd + D: Toggle dark mode\n\
    ?: Show this help\n\
    ESC: Close modals/sidebar";

/// The help toast stays up longer than a regular toast.
pub const HELP_DURATION: Duration = Duration::from_millis(5000);

/// Maps key presses to [`Shortcut`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardShortcuts;

impl KeyboardShortcuts {
    /// The shortcut bound to `press`, if any.
    #[must_use]
    pub fn resolve(self, press: &KeyPress) -> Option<Shortcut> {
        if press.command() {
            return match press.key.as_str() {
                "k" => Some(Shortcut::FocusSearch),
                "b" => Some(Shortcut::ToggleSidebar),
                "d" => Some(Shortcut::ToggleTheme),
                _ => None,
            };
        }
        (press.key == "?").then_some(Shortcut::ShowHelp)
    }
}
