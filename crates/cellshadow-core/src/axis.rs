//! Scroll-axis selection and edge accessors.

use serde::{Deserialize, Serialize};

use crate::geometry::CellContainer;

/// The axis a list scrolls along.
///
/// Every correction pass reads and writes cells through these accessors, so
/// the vertical and horizontal cases share one implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Scrolls along y; `top`/`bottom` are the scroll-axis edges.
    #[default]
    Vertical,
    /// Scrolls along x; `left`/`right` are the scroll-axis edges.
    Horizontal,
}

impl Axis {
    /// Map a host's `horizontal` flag to an axis.
    #[must_use]
    pub const fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Whether this is the horizontal axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Scroll-axis start edge.
    #[inline]
    pub fn start<C: CellContainer + ?Sized>(self, cell: &C) -> i32 {
        match self {
            Self::Vertical => cell.top(),
            Self::Horizontal => cell.left(),
        }
    }

    /// Scroll-axis end edge.
    #[inline]
    pub fn end<C: CellContainer + ?Sized>(self, cell: &C) -> i32 {
        match self {
            Self::Vertical => cell.bottom(),
            Self::Horizontal => cell.right(),
        }
    }

    /// Cross-axis start edge.
    #[inline]
    pub fn cross_start<C: CellContainer + ?Sized>(self, cell: &C) -> i32 {
        self.cross().start(cell)
    }

    /// Cross-axis end edge.
    #[inline]
    pub fn cross_end<C: CellContainer + ?Sized>(self, cell: &C) -> i32 {
        self.cross().end(cell)
    }

    /// Construction-time size along the scroll axis.
    #[inline]
    pub fn main_size<C: CellContainer + ?Sized>(self, cell: &C) -> i32 {
        match self {
            Self::Vertical => cell.height(),
            Self::Horizontal => cell.width(),
        }
    }

    /// Construction-time size along the cross axis.
    #[inline]
    pub fn cross_size<C: CellContainer + ?Sized>(self, cell: &C) -> i32 {
        self.cross().main_size(cell)
    }

    /// Overwrite both scroll-axis edges.
    #[inline]
    pub fn set_span<C: CellContainer + ?Sized>(self, cell: &mut C, start: i32, end: i32) {
        match self {
            Self::Vertical => {
                cell.set_top(start);
                cell.set_bottom(end);
            }
            Self::Horizontal => {
                cell.set_left(start);
                cell.set_right(end);
            }
        }
    }

    /// Overwrite both cross-axis edges.
    #[inline]
    pub fn set_cross_span<C: CellContainer + ?Sized>(self, cell: &mut C, start: i32, end: i32) {
        self.cross().set_span(cell, start, end);
    }

    /// Shift a cell along the scroll axis, keeping its current length.
    ///
    /// Edges saturate at the `i32` range instead of wrapping.
    #[inline]
    pub fn translate<C: CellContainer + ?Sized>(self, cell: &mut C, delta: i32) {
        let start = self.start(cell);
        let end = self.end(cell);
        self.set_span(cell, start.saturating_add(delta), end.saturating_add(delta));
    }
}
