//! Auto-layout shadow: reconciles cell positions produced by piecemeal
//! native layout passes.
//!
//! Cells arrive in list order with whatever positions the last upstream
//! layout left them at. Each pass walks them once and snaps cells that sit
//! inside the [`RenderWindow`] against their predecessor, so rendered content
//! is contiguous along the scroll axis. Cells outside the window are left
//! alone; they get re-measured when they scroll in.

use cellshadow_core::{Axis, CellContainer};
use tracing::{debug, info};

use crate::blank::BlankArea;
use crate::config::{LayoutMode, ShadowConfig};
use crate::window::RenderWindow;

/// Scroll-axis extent of all cells seen by the last correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ContentBounds {
    min_start: i32,
    max_end: i32,
}

impl ContentBounds {
    fn measure<C: CellContainer>(axis: Axis, cells: &[C]) -> Self {
        let mut iter = cells.iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let initial = Self {
            min_start: axis.start(first),
            max_end: axis.end(first),
        };
        iter.fold(initial, |bounds, cell| Self {
            min_start: bounds.min_start.min(axis.start(cell)),
            max_end: bounds.max_end.max(axis.end(cell)),
        })
    }
}

fn edges<C: CellContainer>(cell: &C) -> [i32; 4] {
    [cell.left(), cell.top(), cell.right(), cell.bottom()]
}

/// Gap and overlap corrector for one list instance.
///
/// The owning list creates one shadow, updates the public fields before every
/// layout pass, and hands in the cell slice. The shadow never keeps the
/// slice; it only remembers the content bounds needed for blank measurement.
#[derive(Debug, Clone, Default)]
pub struct AutoLayoutShadow {
    /// Scroll axis being corrected
    pub axis: Axis,
    /// Viewport size along the scroll axis
    pub window_size: i32,
    /// Margin beyond each side of the viewport that is still corrected
    pub render_offset: i32,
    /// Current scroll position of the scroll container
    pub scroll_offset: i32,
    /// Distance from the scroll origin to the first cell
    pub offset_from_start: i32,
    /// Pass used by [`run_layout_pass`](Self::run_layout_pass)
    pub layout_mode: LayoutMode,
    /// Skip correction in layout passes and footer fixing
    pub disable_auto_layout: bool,
    /// Report blank area from layout passes
    pub enable_instrumentation: bool,
    blank_offset_at_start: i32,
    blank_offset_at_end: i32,
    bounds: ContentBounds,
}

impl AutoLayoutShadow {
    /// Create a shadow for a vertical list with an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shadow from a config.
    #[must_use]
    pub fn from_config(config: &ShadowConfig) -> Self {
        let mut shadow = Self::new();
        shadow.apply_config(config);
        shadow
    }

    /// Copy every setting from `config`. Measured outputs are kept.
    pub fn apply_config(&mut self, config: &ShadowConfig) {
        self.axis = config.axis();
        self.window_size = config.window_size;
        self.render_offset = config.render_offset;
        self.scroll_offset = config.scroll_offset;
        self.offset_from_start = config.offset_from_start;
        self.layout_mode = config.layout_mode;
        self.disable_auto_layout = config.disable_auto_layout;
        self.enable_instrumentation = config.enable_instrumentation;
    }

    /// Snapshot the current settings.
    #[must_use]
    pub const fn config(&self) -> ShadowConfig {
        ShadowConfig {
            horizontal: self.axis.is_horizontal(),
            window_size: self.window_size,
            render_offset: self.render_offset,
            scroll_offset: self.scroll_offset,
            offset_from_start: self.offset_from_start,
            layout_mode: self.layout_mode,
            disable_auto_layout: self.disable_auto_layout,
            enable_instrumentation: self.enable_instrumentation,
        }
    }

    /// Select the axis from a `horizontal` flag.
    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.axis = Axis::from_horizontal(horizontal);
    }

    /// Whether the list scrolls along x.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.axis.is_horizontal()
    }

    /// Window of coordinates eligible for correction, relative to the first
    /// cell.
    #[must_use]
    pub const fn render_window(&self) -> RenderWindow {
        RenderWindow::new(
            self.scroll_offset.saturating_sub(self.offset_from_start),
            self.window_size,
            self.render_offset,
        )
    }

    /// Snap every in-window cell to the end of its predecessor.
    ///
    /// The first cell is the anchor and never moves. A cell is corrected when
    /// its start differs from the previous cell's end and its span touches the
    /// render window; it is shifted along the scroll axis with its length
    /// kept. Cross-axis edges are never written.
    #[tracing::instrument(level = "trace", skip_all, fields(cells = cells.len()))]
    pub fn clear_gaps_and_overlaps<C: CellContainer>(&mut self, cells: &mut [C]) {
        let axis = self.axis;
        let window = self.render_window();
        let mut corrected = 0usize;

        for i in 1..cells.len() {
            let expected_start = axis.end(&cells[i - 1]);
            let cell = &mut cells[i];
            let start = axis.start(cell);
            if start != expected_start && window.intersects(start, axis.end(cell)) {
                axis.translate(cell, expected_start.saturating_sub(start));
                corrected += 1;
            }
        }

        self.bounds = ContentBounds::measure(axis, cells);
        debug!(
            corrected,
            content_extent = self.bounds.max_end,
            "cleared gaps and overlaps"
        );
    }

    /// Reflow a multi-column list.
    ///
    /// For every in-window cell, its successor either continues the same row
    /// (greater cross start) and is packed against it on the cross axis and
    /// aligned to its scroll-axis start, or opens a new row and is stacked
    /// below the furthest in-window end seen so far. Uses construction-time
    /// sizes, so stale placeholder edges are replaced.
    #[tracing::instrument(level = "trace", skip_all, fields(cells = cells.len()))]
    pub fn clear_grid_gaps_and_overlaps<C: CellContainer>(&mut self, cells: &mut [C]) {
        let axis = self.axis;
        let window = self.render_window();
        let mut max_bound = i32::MIN;
        let mut corrected = 0usize;

        for i in 0..cells.len().saturating_sub(1) {
            let (head, tail) = cells.split_at_mut(i + 1);
            let cell = &head[i];
            let neighbour = &mut tail[0];

            if !window.intersects(axis.start(cell), axis.end(cell)) {
                continue;
            }
            max_bound = max_bound.max(axis.end(cell));
            let before = edges(neighbour);

            if axis.cross_start(cell) < axis.cross_start(neighbour) {
                let cross_end = axis.cross_end(cell);
                if cross_end != axis.cross_start(neighbour) {
                    let cross_size = axis.cross_size(neighbour);
                    axis.set_cross_span(neighbour, cross_end, cross_end.saturating_add(cross_size));
                }
                let row_start = axis.start(cell);
                if row_start != axis.start(neighbour) {
                    let main_size = axis.main_size(neighbour);
                    axis.set_span(neighbour, row_start, row_start.saturating_add(main_size));
                }
            } else {
                let main_size = axis.main_size(neighbour);
                axis.set_span(neighbour, max_bound, max_bound.saturating_add(main_size));
            }

            if edges(neighbour) != before {
                corrected += 1;
            }
        }

        self.bounds = ContentBounds::measure(axis, cells);
        debug!(
            corrected,
            content_extent = self.bounds.max_end,
            "cleared grid gaps and overlaps"
        );
    }

    /// Measure blank space at both edges for a scroll position.
    ///
    /// Uses the content bounds recorded by the last correction pass.
    /// `distance_from_window_start`/`_end` shrink the measured blank by space
    /// the host fills with something else (e.g. a header or footer). The
    /// result is not clamped to zero; it saturates at the `i32` range.
    pub fn compute_blank_from_given_offset(
        &mut self,
        actual_scroll_offset: i32,
        distance_from_window_start: i32,
        distance_from_window_end: i32,
    ) -> BlankArea {
        let actual = actual_scroll_offset.saturating_sub(self.offset_from_start);
        self.blank_offset_at_start = self
            .bounds
            .min_start
            .saturating_sub(actual)
            .saturating_sub(distance_from_window_start);
        self.blank_offset_at_end = actual
            .saturating_add(self.window_size)
            .saturating_sub(self.bounds.max_end)
            .saturating_sub(distance_from_window_end);
        self.blank_area()
    }

    /// Correct `cells` with the configured pass and measure blank space.
    ///
    /// Returns the blank area only when instrumentation is enabled.
    pub fn run_layout_pass<C: CellContainer>(
        &mut self,
        cells: &mut [C],
        actual_scroll_offset: i32,
    ) -> Option<BlankArea> {
        if self.disable_auto_layout {
            self.bounds = ContentBounds::measure(self.axis, cells);
        } else {
            match self.layout_mode {
                LayoutMode::Linear => self.clear_gaps_and_overlaps(cells),
                LayoutMode::Grid => self.clear_grid_gaps_and_overlaps(cells),
            }
        }

        let blank = self.compute_blank_from_given_offset(actual_scroll_offset, 0, 0);
        if !self.enable_instrumentation {
            return None;
        }
        info!(
            offset_start = blank.start,
            offset_end = blank.end,
            "blank area"
        );
        Some(blank)
    }

    /// How far a footer placed at `container_extent` is from the real end of
    /// content.
    #[must_use]
    pub const fn footer_offset(&self, container_extent: i32) -> i32 {
        self.bounds.max_end.saturating_sub(container_extent)
    }

    /// Move a footer so it follows corrected content. Returns the shift
    /// applied.
    pub fn fix_footer<C: CellContainer>(&self, footer: &mut C, container_extent: i32) -> i32 {
        if self.disable_auto_layout {
            return 0;
        }
        let diff = self.footer_offset(container_extent);
        if diff != 0 {
            self.axis.translate(footer, diff);
        }
        diff
    }

    /// Furthest scroll-axis end over all cells of the last pass.
    #[must_use]
    pub const fn content_extent(&self) -> i32 {
        self.bounds.max_end
    }

    /// Nearest scroll-axis start over all cells of the last pass.
    #[must_use]
    pub const fn content_start(&self) -> i32 {
        self.bounds.min_start
    }

    /// Blank before content from the last measurement.
    #[must_use]
    pub const fn blank_offset_at_start(&self) -> i32 {
        self.blank_offset_at_start
    }

    /// Blank after content from the last measurement.
    #[must_use]
    pub const fn blank_offset_at_end(&self) -> i32 {
        self.blank_offset_at_end
    }

    /// Both blank offsets from the last measurement.
    #[must_use]
    pub const fn blank_area(&self) -> BlankArea {
        BlankArea::new(self.blank_offset_at_start, self.blank_offset_at_end)
    }
}
