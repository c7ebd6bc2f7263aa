//! Geometry module: Integer points, sizes and rectangles in surface space.
//!
//! Coordinates are signed so that shapes may extend past the surface edge;
//! every fill is clipped to the surface bounds at draw time.

mod point;
mod rect;

pub use point::{Point, Size};
pub use rect::{border_rects, Rect};
