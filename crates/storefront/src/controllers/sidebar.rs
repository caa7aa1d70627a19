//! Slide-in navigation sidebar.

use super::KeyPress;

/// Open/closed state of the sidebar.
///
/// While open the page body must not scroll.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Value of the sidebar's `aria-hidden` attribute.
    #[must_use]
    pub const fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    /// Escape closes an open sidebar. Returns `true` if that happened.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        if press.is_escape() && self.open {
            self.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut sidebar = Sidebar::new();
        assert!(!sidebar.is_open());
        assert_eq!(sidebar.aria_hidden(), "true");

        sidebar.open();
        assert!(sidebar.is_open());
        assert_eq!(sidebar.aria_hidden(), "false");

        sidebar.toggle();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_escape_only_closes_when_open() {
        let mut sidebar = Sidebar::new();
        assert!(!sidebar.handle_key(&KeyPress::plain("Escape")));

        sidebar.open();
        assert!(!sidebar.handle_key(&KeyPress::plain("a")));
        assert!(sidebar.handle_key(&KeyPress::plain("Escape")));
        assert!(!sidebar.is_open());
    }
}
