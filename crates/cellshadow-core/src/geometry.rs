//! Cell geometry: [`CellRect`] and the [`CellContainer`] trait.

use serde::{Deserialize, Serialize};

/// Anything with four mutable integer edges that a list can lay out.
///
/// `width` and `height` are the sizes the host assigned when the cell was
/// created. They are not re-derived from the edges, so a placeholder cell can
/// carry its intended size while its edges are still stale.
pub trait CellContainer {
    /// Left edge.
    fn left(&self) -> i32;
    /// Top edge.
    fn top(&self) -> i32;
    /// Right edge.
    fn right(&self) -> i32;
    /// Bottom edge.
    fn bottom(&self) -> i32;
    /// Construction-time width.
    fn width(&self) -> i32;
    /// Construction-time height.
    fn height(&self) -> i32;

    /// Set the left edge.
    fn set_left(&mut self, value: i32);
    /// Set the top edge.
    fn set_top(&mut self, value: i32);
    /// Set the right edge.
    fn set_right(&mut self, value: i32);
    /// Set the bottom edge.
    fn set_bottom(&mut self, value: i32);
}

/// A list cell's on-screen rectangle in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellRect {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge
    pub right: i32,
    /// Bottom edge
    pub bottom: i32,
    /// Width assigned at creation
    pub width: i32,
    /// Height assigned at creation
    pub height: i32,
}

impl CellRect {
    /// Create a cell from its edges; width and height follow the edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    /// Create a cell whose intended size differs from its current edges.
    #[must_use]
    pub const fn with_size(
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width,
            height,
        }
    }

    /// Create a cell from its top-left corner and size.
    #[must_use]
    pub const fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left.saturating_add(width), top.saturating_add(height))
    }

    /// Extent of the current edges along x.
    #[must_use]
    pub const fn edge_width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Extent of the current edges along y.
    #[must_use]
    pub const fn edge_height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether the current edges match the construction-time size.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.edge_width() == self.width && self.edge_height() == self.height
    }
}

impl CellContainer for CellRect {
    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }

    fn right(&self) -> i32 {
        self.right
    }

    fn bottom(&self) -> i32 {
        self.bottom
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_left(&mut self, value: i32) {
        self.left = value;
    }

    fn set_top(&mut self, value: i32) {
        self.top = value;
    }

    fn set_right(&mut self, value: i32) {
        self.right = value;
    }

    fn set_bottom(&mut self, value: i32) {
        self.bottom = value;
    }
}
