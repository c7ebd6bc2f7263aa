//! Surface module: Off-screen drawing targets for the scheduler.
//!
//! This module contains:
//! - [`Surface`]: The minimal drawing contract (bounds + rectangular fill)
//! - [`Canvas`]: An in-memory RGB pixel surface
//! - [`SurfaceFactory`]: Allocates the scheduler's two frame surfaces
//! - [`Rgb`]: True-color representation

mod canvas;
mod rgb;

pub use canvas::{Canvas, CanvasFactory};
pub use rgb::Rgb;

use crate::geometry::{Rect, Size};
use thiserror::Error;

/// A drawable target supporting rectangular fills.
///
/// Fills use replace compositing: the source color overwrites whatever was
/// there. Rectangles extending past [`Surface::bounds`] are clipped.
pub trait Surface: Send + Sync {
    /// The drawable area, with `min` at the origin.
    fn bounds(&self) -> Rect;

    /// Fill `rect` (clipped to the bounds) with `color`.
    fn fill(&mut self, rect: Rect, color: Rgb);
}

/// Errors raised while allocating surfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// Requested a surface with a zero dimension.
    #[error("surface size must be non-zero, got {0:?}")]
    ZeroSize(Size),

    /// The backing allocation failed.
    #[error("failed to allocate surface: {0}")]
    Allocation(String),
}

/// Supplies the independently allocated, equally sized surfaces the
/// scheduler double-buffers between.
pub trait SurfaceFactory {
    /// The surface type produced.
    type Surface: Surface + Clone + 'static;

    /// Allocate one surface of the given size.
    fn create(&self, size: Size) -> Result<Self::Surface, SurfaceError>;
}
