//! Render window along the scroll axis.

use serde::{Deserialize, Serialize};

/// Inclusive range of scroll-axis coordinates whose cells are eligible for
/// correction: the viewport widened by the render offset on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderWindow {
    /// First coordinate inside the window
    pub start: i32,
    /// Last coordinate inside the window
    pub end: i32,
}

impl RenderWindow {
    /// Build the window for a scroll position.
    ///
    /// `scroll_offset` is already relative to the first cell, i.e. any
    /// header offset has been subtracted. Edges saturate at the `i32` range,
    /// so `i32::MAX` works as an unbounded viewport.
    #[must_use]
    pub const fn new(scroll_offset: i32, window_size: i32, render_offset: i32) -> Self {
        Self {
            start: scroll_offset.saturating_sub(render_offset),
            end: scroll_offset
                .saturating_add(window_size)
                .saturating_add(render_offset),
        }
    }

    /// Whether the span `[start, end]` touches the window. Boundaries count.
    #[must_use]
    pub const fn intersects(&self, start: i32, end: i32) -> bool {
        start <= self.end && end >= self.start
    }

    /// Length of the window.
    #[must_use]
    pub const fn len(&self) -> i32 {
        self.end.saturating_sub(self.start)
    }

    /// True when the arithmetic produced an inverted window.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end < self.start
    }
}
