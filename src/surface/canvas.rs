//! Canvas: A grid of pixels used as an off-screen frame.
//!
//! Pixels are stored contiguously in row-major order.

use super::{Rgb, Surface, SurfaceError, SurfaceFactory};
use crate::geometry::{Point, Rect, Size};

/// An in-memory RGB surface.
///
/// Access is in row-major order: `index = y * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Contiguous pixel storage (row-major order).
    pixels: Vec<Rgb>,
    /// Dimensions in pixels.
    size: Size,
}

impl Canvas {
    /// Create a new canvas filled with black.
    ///
    /// # Panics
    /// Panics if width or height is 0. Use [`Canvas::try_new`] to handle
    /// that case as an error.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Canvas dimensions must be non-zero");
        Self {
            pixels: vec![Rgb::BLACK; Size::new(width, height).area()],
            size: Size::new(width, height),
        }
    }

    /// Create a new canvas, reporting zero sizes and allocation failure.
    pub fn try_new(size: Size) -> Result<Self, SurfaceError> {
        if size.is_empty() {
            return Err(SurfaceError::ZeroSize(size));
        }
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(size.area())
            .map_err(|e| SurfaceError::Allocation(e.to_string()))?;
        pixels.resize(size.area(), Rgb::BLACK);
        Ok(Self { pixels, size })
    }

    /// Get the canvas dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Get the canvas width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.size.width
    }

    /// Get the canvas height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.size.height
    }

    /// Get a reference to the underlying pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Convert a point to a linear index.
    ///
    /// Returns `None` if the point is out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        (x < w && y < h).then(|| y * w + x)
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// Returns `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index_of(Point::new(x, y)).map(|i| self.pixels[i])
    }

    /// Set a single pixel. Returns `false` if out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        if let Some(idx) = self.index_of(Point::new(x, y)) {
            self.pixels[idx] = color;
            true
        } else {
            false
        }
    }

    /// Fill the whole canvas with black.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// Count pixels of exactly `color`.
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Copy content from another canvas.
    ///
    /// The canvases must have the same dimensions.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.size, other.size);
        self.pixels.copy_from_slice(&other.pixels);
    }

    /// Copy `src` onto this canvas with nearest-neighbour scaling.
    pub fn scale_from(&mut self, src: &Self) {
        if self.size == src.size {
            self.copy_from(src);
            return;
        }
        let (dw, dh) = (self.size.width as usize, self.size.height as usize);
        let (sw, sh) = (src.size.width as usize, src.size.height as usize);
        for y in 0..dh {
            let sy = y * sh / dh;
            for x in 0..dw {
                let sx = x * sw / dw;
                self.pixels[y * dw + x] = src.pixels[sy * sw + sx];
            }
        }
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.size.width as usize)
    }
}

impl Surface for Canvas {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    fn fill(&mut self, rect: Rect, color: Rgb) {
        let clipped = self.bounds().intersect(&rect);
        if clipped.is_empty() {
            return;
        }
        let w = self.size.width as usize;
        // Both corners are within bounds after clipping, so they are non-negative.
        let (x0, x1) = (clipped.min.x as usize, clipped.max.x as usize);
        for y in clipped.min.y..clipped.max.y {
            let row = y as usize * w;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas").field("size", &self.size).finish()
    }
}

/// Allocates [`Canvas`] surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasFactory;

impl SurfaceFactory for CanvasFactory {
    type Surface = Canvas;

    fn create(&self, size: Size) -> Result<Canvas, SurfaceError> {
        Canvas::try_new(size)
    }
}
