//! Payload types for the shape and border operations.

use crate::config;
use crate::geometry::Point;
use crate::surface::Rgb;

/// One instance of the "T-180" mark: a horizontal and a vertical bar
/// meeting at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Center x.
    pub x: i32,
    /// Center y.
    pub y: i32,
    /// Bar length; bar thickness is a fifth of it.
    pub size: i32,
    /// Fill color.
    pub color: Rgb,
}

impl Shape {
    /// Create a shape.
    pub const fn new(x: i32, y: i32, size: i32, color: Rgb) -> Self {
        Self { x, y, size, color }
    }

    /// A shape as created by the `figure` command.
    pub const fn figure(x: i32, y: i32) -> Self {
        Self::new(x, y, config::FIGURE_SIZE, config::FIGURE_COLOR)
    }

    /// The center point.
    pub const fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the center.
    pub const fn move_to(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }
}

/// A frame drawn just inside the surface edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSpec {
    /// Frame width in pixels.
    pub thickness: i32,
    /// Frame color.
    pub color: Rgb,
}

impl BorderSpec {
    /// Create a border.
    pub const fn new(thickness: i32, color: Rgb) -> Self {
        Self { thickness, color }
    }

    /// A border of the standard thickness.
    pub const fn with_color(color: Rgb) -> Self {
        Self::new(config::BORDER_THICKNESS, color)
    }
}
