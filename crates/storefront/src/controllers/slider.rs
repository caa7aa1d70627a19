//! Testimonial carousel with autoplay and swipe.

/// Horizontal gap between slides, in pixels.
pub const SLIDE_GAP_PX: u32 = 40;

/// Minimum horizontal travel for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: u32 = 50;

/// Position and autoplay state of the testimonial slider.
///
/// A slider without slides is inert: every method leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialSlider {
    total: usize,
    current: usize,
    autoplay: bool,
}

impl TestimonialSlider {
    /// A slider over `total` slides, starting at the first with autoplay on.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            total,
            current: 0,
            autoplay: total > 0,
        }
    }

    /// Advance one slide, wrapping to the first.
    pub const fn next(&mut self) -> usize {
        if self.total > 0 {
            self.current = (self.current + 1) % self.total;
        }
        self.current
    }

    /// Go back one slide, wrapping to the last.
    pub const fn prev(&mut self) -> usize {
        if self.total > 0 {
            self.current = (self.current + self.total - 1) % self.total;
        }
        self.current
    }

    /// Handle a touch that started at `start_x` and ended at `end_x`.
    ///
    /// A leftward swipe advances, a rightward one goes back. Returns the new
    /// index if the slide changed.
    pub fn handle_swipe(&mut self, start_x: i32, end_x: i32) -> Option<usize> {
        let diff = start_x.saturating_sub(end_x);
        if diff.unsigned_abs() <= SWIPE_THRESHOLD_PX || self.total == 0 {
            return None;
        }
        Some(if diff > 0 { self.next() } else { self.prev() })
    }

    /// Autoplay timer fired. Advances only while autoplay runs.
    pub const fn tick(&mut self) -> Option<usize> {
        if self.autoplay {
            Some(self.next())
        } else {
            None
        }
    }

    /// Pointer entered the track.
    pub const fn pause(&mut self) {
        self.autoplay = false;
    }

    /// Pointer left the track.
    pub const fn resume(&mut self) {
        self.autoplay = self.total > 0;
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.autoplay
    }

    /// Track translation for slides `slide_width` pixels wide.
    #[must_use]
    pub fn offset_px(&self, slide_width: u32) -> u64 {
        let step = u64::from(slide_width) + u64::from(SLIDE_GAP_PX);
        (self.current as u64).saturating_mul(step)
    }
}
