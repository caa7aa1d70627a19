//! Header behaviour while scrolling.

/// Offset past which a downward scroll hides the header.
pub const HIDE_AFTER_PX: u32 = 200;

/// How the header should look after a scroll.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavbarState {
    /// Compact "scrolled" styling.
    pub scrolled: bool,
    /// Slid out of view.
    pub hidden: bool,
}

/// Tracks the previous scroll offset to tell scroll direction.
///
/// Before the first scroll event there is no direction, so that event never
/// hides the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarScroll {
    threshold: u32,
    previous_y: Option<u32>,
}

impl NavbarScroll {
    /// `threshold` is the offset past which the header counts as scrolled.
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self {
            threshold,
            previous_y: None,
        }
    }

    /// Header state for scroll offset `y`.
    pub fn update(&mut self, y: u32) -> NavbarState {
        let state = NavbarState {
            scrolled: y > self.threshold,
            hidden: self.previous_y.is_some_and(|previous| y > previous) && y > HIDE_AFTER_PX,
        };
        self.previous_y = Some(y);
        state
    }
}
