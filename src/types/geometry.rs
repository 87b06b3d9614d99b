//! Integer points and rectangles in canvas space.

use serde::{Deserialize, Serialize};

/// A pixel position. Coordinates may lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by (dx, dy), saturating at the i32 range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        let (dx, dy) = self.delta(other);
        (dx as f64).hypot(dy as f64)
    }

    /// `other - self` per axis, widened so it cannot overflow.
    pub fn delta(self, other: Point) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }

    /// Integer midpoint, rounding toward negative infinity.
    pub fn midpoint(self, other: Point) -> Point {
        let mid = |a: i32, b: i32| (i64::from(a) + i64::from(b)).div_euclid(2) as i32;
        Point::new(mid(self.x, other.x), mid(self.y, other.y))
    }

    /// Round a floating-point position to the nearest pixel.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x.round() as i32, y.round() as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Corners passed to [`Rect::from_corners`] are clamped to this range so the
/// size still fits in an i32.
const CORNER_LIMIT: i32 = i32::MAX / 2;

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The inclusive rectangle spanned by two corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let clamp = |v: i32| v.clamp(-CORNER_LIMIT, CORNER_LIMIT);
        let (ax, bx) = (clamp(a.x), clamp(b.x));
        let (ay, by) = (clamp(a.y), clamp(b.y));
        let (x0, x1) = if ax <= bx { (ax, bx) } else { (bx, ax) };
        let (y0, y1) = if ay <= by { (ay, by) } else { (by, ay) };
        Self::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        let (x0, y0) = (i64::from(self.x), i64::from(self.y));
        x >= x0 && x < x0 + i64::from(self.w) && y >= y0 && y < y0 + i64::from(self.h)
    }
}
