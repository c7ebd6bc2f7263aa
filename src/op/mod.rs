//! Operations: The closed vocabulary of drawing and control actions.
//!
//! An [`Operation`] is produced by the command compiler (or built directly
//! by a producer), queued on the scheduler and applied exactly once by the
//! worker thread.
//!
//! [`Operation::apply`] gives each variant's self-contained meaning against a
//! bare surface. The scheduler does not use it for the stateful variants: it
//! records fills, shapes and borders in its scene and only rasterises them on
//! [`Operation::Commit`].

mod render;
mod shape;

pub use render::{
    draw_border, draw_fallback_scene, draw_shape, draw_t180, draw_t180_upper,
};
pub use shape::{BorderSpec, Shape};

use crate::config;
use crate::geometry::{Point, Rect};
use crate::surface::{Rgb, Surface};
use std::sync::Arc;

/// A drawing or control action.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Replace the background color.
    FillBackground {
        /// New background.
        color: Rgb,
    },

    /// Fill an axis-aligned rectangle with the region color.
    BoundedRegionFill {
        /// Area to fill.
        rect: Rect,
    },

    /// Add a shape instance.
    Shape(Shape),

    /// Move every tracked shape to a new center.
    Reposition {
        /// New center for all shapes.
        position: Point,
    },

    /// Draw a frame inset from the surface edge.
    Border(BorderSpec),

    /// Restore the default background and drop region, border and shapes.
    Reset,

    /// Render the accumulated state and publish it.
    Commit,

    /// An ordered group applied as one unit.
    Composite(Vec<Operation>),

    /// An opaque callback run against the live surface. Never publishes.
    Custom(Callback),
}

impl Operation {
    /// Build a [`Operation::Custom`] from a closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Surface) + Send + Sync + 'static,
    {
        Self::Custom(Callback::new(f))
    }

    /// Apply this operation to `surface` on its own, without a scheduler.
    ///
    /// Returns `true` if the operation asks for the surface to be published.
    pub fn apply(&self, surface: &mut dyn Surface) -> bool {
        match self {
            Self::FillBackground { color } => {
                let bounds = surface.bounds();
                surface.fill(bounds, *color);
                false
            }
            Self::BoundedRegionFill { rect } => {
                surface.fill(*rect, config::REGION_FILL_COLOR);
                false
            }
            Self::Shape(shape) => {
                // A zero coordinate means "not placed": center on the surface.
                let (x, y) = if shape.x == 0 || shape.y == 0 {
                    let c = surface.bounds().center();
                    (c.x, c.y)
                } else {
                    (shape.x, shape.y)
                };
                draw_t180(surface, x, y, shape.size, shape.color);
                false
            }
            Self::Border(border) => {
                draw_border(surface, border);
                false
            }
            Self::Reset => {
                let bounds = surface.bounds();
                surface.fill(bounds, Rgb::BLACK);
                false
            }
            Self::Reposition { .. } => false,
            Self::Commit => true,
            Self::Composite(ops) => ops
                .iter()
                .fold(false, |ready, op| op.apply(surface) || ready),
            Self::Custom(callback) => {
                callback.call(surface);
                false
            }
        }
    }

    /// Short variant name for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FillBackground { .. } => "FillBackground",
            Self::BoundedRegionFill { .. } => "BoundedRegionFill",
            Self::Shape(_) => "Shape",
            Self::Reposition { .. } => "Reposition",
            Self::Border(_) => "Border",
            Self::Reset => "Reset",
            Self::Commit => "Commit",
            Self::Composite(_) => "Composite",
            Self::Custom(_) => "Custom",
        }
    }
}

/// A shareable callback for [`Operation::Custom`].
///
/// Two callbacks compare equal only if they are clones of the same one.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&mut dyn Surface) + Send + Sync>);

impl Callback {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Surface) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the callback.
    #[inline]
    pub fn call(&self, surface: &mut dyn Surface) {
        (self.0)(surface);
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Anything operations can be submitted to.
///
/// Submission never fails from the producer's point of view; validation
/// happens before an operation is built.
pub trait OperationSink {
    /// Queue `op` for application.
    fn submit(&self, op: Operation);
}

impl<T: OperationSink + ?Sized> OperationSink for Arc<T> {
    fn submit(&self, op: Operation) {
        (**self).submit(op);
    }
}
