//! Named defaults for colors, sizes and the scheduler.
//!
//! Every literal that maps a command to a visible result lives here so that
//! the command-to-behavior mapping can be audited in one place.

use crate::geometry::{Point, Size};
use crate::surface::Rgb;

/// Extent that `bgrect` fractions are scaled by.
pub const CANVAS_EXTENT: f64 = 800.0;

/// Size of each of the two frame surfaces.
pub const SURFACE_SIZE: Size = Size::new(800, 800);

/// Background after start-up and after `reset`.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::GREEN;

/// Background selected by the `white` command.
pub const WHITE_BACKGROUND: Rgb = Rgb::WHITE;

/// Background selected by the `green` command.
pub const GREEN_BACKGROUND: Rgb = Rgb::GREEN;

/// Color of the bounded region fill.
pub const REGION_FILL_COLOR: Rgb = Rgb::BLACK;

/// Size of shapes created by the `figure` command.
pub const FIGURE_SIZE: i32 = 100;

/// Size of the shape seeded at start-up.
pub const SEED_FIGURE_SIZE: i32 = 200;

/// Color of every shape the command language creates.
pub const FIGURE_COLOR: Rgb = Rgb::YELLOW;

/// Thickness of the `border` frame.
pub const BORDER_THICKNESS: i32 = 10;

/// Border color when no (or an unknown) color name is given.
pub const DEFAULT_BORDER_COLOR: Rgb = Rgb::BLACK;

/// Border color drawn by the fallback scene.
pub const FALLBACK_BORDER_COLOR: Rgb = Rgb::WHITE;

/// Resolve a `border` color argument. Names are matched exactly; anything
/// else, including `GREEN`, falls back to black.
pub fn border_color(name: &str) -> Rgb {
    match name {
        "green" => Rgb::LIME,
        "white" => Rgb::WHITE,
        "red" => Rgb::RED,
        _ => DEFAULT_BORDER_COLOR,
    }
}

/// Configuration for the [`Scheduler`](crate::actor::Scheduler).
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Size of the two frame surfaces.
    pub surface_size: Size,
    /// Name given to the worker thread.
    pub thread_name: String,
}

impl LoopConfig {
    /// Where the seeded shape sits.
    pub const fn seed_position(&self) -> Point {
        self.surface_size.center()
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            surface_size: SURFACE_SIZE,
            thread_name: "painter-loop".to_string(),
        }
    }
}
