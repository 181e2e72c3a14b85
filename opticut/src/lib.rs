//!
//! A single-sheet 2D cutting-stock nesting engine.
//!
//! Demand shapes (rectangles, squares, circles and right triangles) are packed onto one raw-material
//! board by their axis-aligned bounding boxes, using a maximal-rectangles free-space tracker.
//! The resulting [`PlacementReport`](entities::PlacementReport) lists every placement and the
//! shapes that could not be placed, together with utilization and waste statistics.
//!

/// Entities modelling the nesting problem: shapes, demand, board and the placement report
pub mod entities;

/// Error taxonomy of the library
pub mod error;

/// Axis-aligned geometric primitives
pub mod geometry;

/// Importing and exporting of jobs and reports
pub mod io;

/// The packing algorithm
pub mod nesting;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::{NestError, Result};
