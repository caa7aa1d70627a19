//! Navigation dropdown menus, at most one open at a time.

use super::KeyPress;

/// The dropdown menus of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownMenu {
    count: usize,
    open: Option<usize>,
}

impl DropdownMenu {
    /// `count` menus, all closed.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, open: None }
    }

    /// Close every menu, then open `index` if it was closed before.
    ///
    /// Out-of-range indices only close everything.
    pub fn toggle(&mut self, index: usize) {
        let was_open = self.open == Some(index);
        self.close_all();
        if !was_open && index < self.count {
            self.open = Some(index);
        }
    }

    /// Close every menu (e.g. on a click outside).
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Enter or Space on a menu button toggles it. Returns `true` if handled.
    pub fn handle_key(&mut self, index: usize, press: &KeyPress) -> bool {
        if press.is_activation() {
            self.toggle(index);
            return true;
        }
        false
    }

    /// The open menu, if any.
    #[must_use]
    pub const fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Value of the `aria-expanded` attribute of button `index`.
    #[must_use]
    pub fn aria_expanded(&self, index: usize) -> &'static str {
        if self.open == Some(index) { "true" } else { "false" }
    }
}
