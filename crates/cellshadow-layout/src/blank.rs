//! Blank space measurement at the edges of rendered content.

use serde::{Deserialize, Serialize};

/// Empty space between rendered content and the edges of the viewport.
///
/// Values are signed. A negative value means content overhangs that edge,
/// which callers usually read as "no blank".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlankArea {
    /// Blank before the first rendered cell
    pub start: i32,
    /// Blank after the last rendered cell
    pub end: i32,
}

impl BlankArea {
    /// Create a blank area measurement.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Both edges with negative values replaced by zero.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(self.start.max(0), self.end.max(0))
    }

    /// Largest blank visible at either edge, never negative.
    #[must_use]
    pub fn visible_blank(&self) -> i32 {
        self.start.max(self.end).max(0)
    }

    /// True when neither edge shows blank space.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.visible_blank() == 0
    }
}

/// Aggregate of blank area samples collected while scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlankAreaSummary {
    /// Sum of visible blank over all samples
    pub cumulative_blank_area: i64,
    /// Largest visible blank seen
    pub max_blank_area: i32,
    /// Number of samples recorded
    pub sample_count: u64,
}

impl BlankAreaSummary {
    /// Mean visible blank per sample.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_blank_area(&self) -> f64 {
        if self.sample_count == 0 {
            0.0
        } else {
            self.cumulative_blank_area as f64 / self.sample_count as f64
        }
    }
}

/// Collects [`BlankArea`] samples from successive layout passes.
#[derive(Debug, Default)]
pub struct BlankAreaTracker {
    summary: BlankAreaSummary,
}

impl BlankAreaTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one measurement.
    pub fn record(&mut self, blank: BlankArea) {
        let visible = blank.visible_blank();
        self.summary.cumulative_blank_area += i64::from(visible);
        self.summary.max_blank_area = self.summary.max_blank_area.max(visible);
        self.summary.sample_count += 1;
    }

    /// Current aggregate.
    #[must_use]
    pub const fn summary(&self) -> BlankAreaSummary {
        self.summary
    }

    /// Drop all samples.
    pub fn reset(&mut self) {
        self.summary = BlankAreaSummary::default();
    }
}
