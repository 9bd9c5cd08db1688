#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
//! Gap and overlap correction for virtualized list cells.
//!
//! A virtualized list lays its cells out in asynchronous, piecemeal native
//! passes, so neighbouring cells can end up with gaps or overlaps between
//! them. [`AutoLayoutShadow`] walks the cells once per layout pass and snaps
//! the ones inside the render window back into a contiguous run.
//!
//! # Layout passes
//!
//! - **Linear**: `clear_gaps_and_overlaps` moves each in-window cell to the
//!   end of its predecessor along the scroll axis.
//! - **Grid**: `clear_grid_gaps_and_overlaps` packs cells of a row along the
//!   cross axis and stacks rows below the furthest rendered edge.
//!
//! After a pass, `compute_blank_from_given_offset` reports how much of the
//! viewport is left blank at either edge, and [`BlankAreaTracker`] aggregates
//! those measurements.
//!
//! ```rust
//! use cellshadow_core::CellRect;
//! use cellshadow_layout::AutoLayoutShadow;
//!
//! let mut shadow = AutoLayoutShadow::new();
//! shadow.window_size = 500;
//!
//! let mut cells = [CellRect::new(0, 0, 100, 100), CellRect::new(0, 120, 100, 220)];
//! shadow.clear_gaps_and_overlaps(&mut cells);
//! assert_eq!(cells[1].top, 100);
//!
//! let blank = shadow.compute_blank_from_given_offset(0, 0, 0);
//! assert_eq!(blank.end, 300);
//! ```

mod blank;
mod config;
mod error;
mod shadow;
mod window;

pub use blank::{BlankArea, BlankAreaSummary, BlankAreaTracker};
pub use config::{LayoutMode, ShadowConfig};
pub use error::ConfigError;
pub use shadow::AutoLayoutShadow;
pub use window::RenderWindow;
