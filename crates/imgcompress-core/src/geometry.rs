//! Integer points and axis-aligned rectangles.
//!
//! A [`Rect`] is half-open: `min` is inclusive and `max` is exclusive, so a
//! rectangle from `(0, 0)` to `(10, 10)` covers exactly 10x10 pixels. All
//! arithmetic saturates at the `i32` limits instead of wrapping.

/// A point in raster coordinates. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle spanning `min` (inclusive) to `max` (exclusive).
///
/// Rectangles built through [`Rect::new`] are always well-formed
/// (`min.x <= max.x` and `min.y <= max.y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const ZERO: Rect = Rect {
        min: Point::ORIGIN,
        max: Point::ORIGIN,
    };

    /// Create a rectangle from two corners, swapping coordinates if needed.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Create a rectangle at the origin with the given size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::from_origin_size(0, 0, width, height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y)
    }

    /// Returns true if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Compute the largest rectangle contained in both `self` and `other`.
    ///
    /// Disjoint rectangles (including ones that only share an edge) yield
    /// [`Rect::ZERO`].
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() {
            Rect::ZERO
        } else {
            r
        }
    }

    /// Returns true if every pixel of `other` lies inside `self`.
    ///
    /// The empty rectangle is contained in everything.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        if other.is_empty() {
            return true;
        }
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Returns true if the pixel at `p` lies inside the rectangle.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Shift the rectangle by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            min: Point::new(self.min.x.saturating_add(dx), self.min.y.saturating_add(dy)),
            max: Point::new(self.max.x.saturating_add(dx), self.max.y.saturating_add(dy)),
        }
    }
}
