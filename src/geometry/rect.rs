//! Rect: An axis-aligned rectangle primitive for fills.

use super::point::{Point, Size};

/// A half-open rectangle `[min, max)`.
///
/// Rectangles built through [`Rect::new`] are canonical: `min` is never to
/// the right of or below `max`, whatever order the corners were given in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner (inclusive).
    pub min: Point,
    /// Bottom-right corner (exclusive).
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from two opposite corners, swapping coordinates
    /// as needed so that the result is canonical.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Create a rectangle covering a surface of the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width as i32, size.height as i32)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Check if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// The center point, rounded towards `min`.
    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() / 2,
            self.min.y + self.height() / 2,
        )
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Check if this rectangle intersects with another.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// The overlapping part of two rectangles, or [`Rect::ZERO`].
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            return Self::ZERO;
        }
        Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }

    /// Shrink the rectangle by a margin on all sides.
    ///
    /// Returns [`Rect::ZERO`] when nothing would be left.
    #[inline]
    #[must_use]
    pub const fn inset(&self, margin: i32) -> Self {
        let m2 = margin.saturating_mul(2);
        if self.width() <= m2 || self.height() <= m2 {
            return Self::ZERO;
        }
        Self::new(
            self.min.x.saturating_add(margin),
            self.min.y.saturating_add(margin),
            self.max.x.saturating_sub(margin),
            self.max.y.saturating_sub(margin),
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({},{}-{},{})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

/// The strips forming a frame of `thickness` pixels just inside `rect`.
///
/// Yields top, bottom, left and right strips. A non-positive thickness or an
/// empty rectangle yields nothing; a frame that would swallow the whole
/// rectangle yields the rectangle itself.
pub fn border_rects(rect: Rect, thickness: i32) -> Vec<Rect> {
    if thickness <= 0 || rect.is_empty() {
        return Vec::new();
    }
    if rect.inset(thickness).is_empty() {
        return vec![rect];
    }

    let Rect { min, max } = rect;
    let (top, bottom) = (min.y.saturating_add(thickness), max.y.saturating_sub(thickness));
    let (left, right) = (min.x.saturating_add(thickness), max.x.saturating_sub(thickness));
    vec![
        Rect::new(min.x, min.y, max.x, top),
        Rect::new(min.x, bottom, max.x, max.y),
        Rect::new(min.x, top, left, bottom),
        Rect::new(right, top, max.x, bottom),
    ]
}
