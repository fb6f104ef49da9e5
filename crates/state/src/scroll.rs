//! Toolbar visibility from scroll direction
//!
//! A two-threshold filter over vertical scroll offsets so the toolbar
//! does not flicker near the top of the page.

/// Offset past which scrolling down hides the toolbar
pub const HIDE_THRESHOLD: f64 = 50.0;

/// Offset at or under which the toolbar is always shown
pub const SHOW_THRESHOLD: f64 = 20.0;

/// Scroll direction reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSignal {
    /// Content moved up past the hide threshold
    Down,
    /// Content moved down, or is near the top
    Up,
}

impl ScrollSignal {
    /// Toolbar visibility this signal asks for
    pub fn toolbar_visible(self) -> bool {
        matches!(self, ScrollSignal::Up)
    }
}

/// Tracks the previous scroll offset of the current page
#[derive(Debug, Clone, Default)]
pub struct ToolbarPolicy {
    last_offset: f64,
}

impl ToolbarPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scroll offset sample, returning the signal it produces, if any
    pub fn observe(&mut self, offset: f64) -> Option<ScrollSignal> {
        let signal = if offset > self.last_offset && offset > HIDE_THRESHOLD {
            Some(ScrollSignal::Down)
        } else if offset < self.last_offset || offset <= SHOW_THRESHOLD {
            Some(ScrollSignal::Up)
        } else {
            None
        };

        // Overscroll can report negative offsets
        self.last_offset = offset.max(0.0);
        signal
    }

    /// Forget the previous offset, as when a new page loads
    pub fn reset(&mut self) {
        self.last_offset = 0.0;
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
