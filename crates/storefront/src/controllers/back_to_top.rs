//! "Back to top" button.

/// The button appears once the page is scrolled past this offset.
pub const SHOW_AFTER_PX: u32 = 300;

/// Visibility of the back-to-top button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackToTop {
    visible: bool,
}

impl BackToTop {
    #[must_use]
    pub const fn new() -> Self {
        Self { visible: false }
    }

    /// Update for scroll offset `y`; returns the new visibility.
    pub const fn handle_scroll(&mut self, y: u32) -> bool {
        self.visible = y > SHOW_AFTER_PX;
        self.visible
    }

    /// Scroll target when the button is clicked.
    #[must_use]
    pub const fn target(&self) -> u32 {
        0
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility() {
        let mut button = BackToTop::new();
        assert!(!button.handle_scroll(300));
        assert!(button.handle_scroll(301));
        assert!(button.is_visible());
        assert!(!button.handle_scroll(0));
    }
}
