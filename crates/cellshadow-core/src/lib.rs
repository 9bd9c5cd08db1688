//! Core types for cellshadow list layout correction.
//!
//! This crate provides the geometry shared by the layout passes:
//! - Cell rectangles: [`CellRect`] and the [`CellContainer`] trait hosts
//!   implement on their own view handles
//! - Scroll-axis selection: [`Axis`] with edge accessors for either direction

mod axis;
mod geometry;

pub use axis::Axis;
pub use geometry::{CellContainer, CellRect};
