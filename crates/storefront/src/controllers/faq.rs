//! FAQ accordion: opening one answer closes the others.

/// Which FAQ item is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    count: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, open: None }
    }

    /// Toggle item `index`, closing every other item.
    ///
    /// Returns `true` when the item was just opened, in which case the view
    /// should scroll to it.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }

    #[must_use]
    pub const fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
