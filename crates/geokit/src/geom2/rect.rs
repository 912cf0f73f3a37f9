//! Axis-aligned rectangles.
//!
//! Conventions
//! - `(x, y)` is the top-left corner for non-negative sizes; y grows downward.
//! - Negative width/height is accepted as constructed and kept as-is by
//!   `offset`, `inset` and `unpack`. Every geometric predicate (intersection,
//!   union, containment, flipping) first canonicalizes via `standardized()`.
//! - Overlap is strict: rects that only share an edge or a corner do not
//!   intersect, and their intersection is the empty rect `(0, 0, 0, 0)`.
//! - `contains_point` is half-open (`left <= x < right`, `top <= y < bottom`);
//!   `contains_rect` is closed.

use serde::{Deserialize, Serialize};

use super::error::GeomError;
use super::polygon::Polygon;
use super::types::{Point, Size};

/// Mirror axis for `Rect::flip_relative_to_rect`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flip {
    #[default]
    Unflipped,
    FlippedX,
    FlippedY,
    FlippedXY,
}

impl Flip {
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Flip::Unflipped => 0,
            Flip::FlippedX => 1,
            Flip::FlippedY => 2,
            Flip::FlippedXY => 3,
        }
    }

    #[inline]
    fn flips_x(self) -> bool {
        matches!(self, Flip::FlippedX | Flip::FlippedXY)
    }

    #[inline]
    fn flips_y(self) -> bool {
        matches!(self, Flip::FlippedY | Flip::FlippedXY)
    }
}

impl TryFrom<i32> for Flip {
    type Error = GeomError;
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Flip::Unflipped),
            1 => Ok(Flip::FlippedX),
            2 => Ok(Flip::FlippedY),
            3 => Ok(Flip::FlippedXY),
            other => Err(GeomError::InvalidFlip(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The canonical empty rect `(0, 0, 0, 0)`.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn unpack(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Exact field-wise equality.
    #[inline]
    pub fn is_equal(&self, other: &Rect) -> bool {
        self == other
    }

    /// Same rect with non-negative width and height.
    pub fn standardized(&self) -> Rect {
        let (x, y, width, height) = canonical(self.x, self.y, self.width, self.height);
        Rect::new(x, y, width, height)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn center_point(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Closed ring of the four corners, clockwise on screen from `(x, y)`.
    pub(crate) fn corner_ring(&self) -> [Point; 5] {
        let (l, t) = (self.x, self.y);
        let (r, b) = (self.x + self.width, self.y + self.height);
        [
            Point::new(l, t),
            Point::new(r, t),
            Point::new(r, b),
            Point::new(l, b),
            Point::new(l, t),
        ]
    }

    /// Closed four-vertex polygon (five points, first repeated).
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corner_ring().to_vec())
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_xy(p.x, p.y)
    }

    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_rect_xywh(other.x, other.y, other.width, other.height)
    }

    pub fn contains_rect_xywh(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        let o = Rect::new(x, y, width, height).standardized();
        o.x >= self.left()
            && o.x + o.width <= self.right()
            && o.y >= self.top()
            && o.y + o.height <= self.bottom()
    }

    /// True iff the two rects share a region of positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Overlapping region, or `Rect::empty()` when there is none.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let (x, y, w, h) = fast_intersection(
            self.x,
            self.y,
            self.width,
            self.height,
            other.x,
            other.y,
            other.width,
            other.height,
        );
        Rect::new(x, y, w, h)
    }

    /// Smallest rect containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let (x, y, w, h) = fast_union(
            self.x,
            self.y,
            self.width,
            self.height,
            other.x,
            other.y,
            other.width,
            other.height,
        );
        Rect::new(x, y, w, h)
    }

    /// Shrinks symmetrically about the center (negative values grow).
    pub fn inset(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        self.width -= 2.0 * dx;
        self.height -= 2.0 * dy;
    }

    pub fn inset_by(mut self, dx: f64, dy: f64) -> Rect {
        self.inset(dx, dy);
        self
    }

    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn offset_by(mut self, dx: f64, dy: f64) -> Rect {
        self.offset(dx, dy);
        self
    }

    /// Mirrors the rect about the center lines of `reference`.
    ///
    /// The result is in canonical (non-negative size) form.
    pub fn flip_relative_to_rect(&mut self, reference: &Rect, flip: Flip) {
        *self = self.flipped_relative_to_rect(reference, flip);
    }

    pub fn flipped_relative_to_rect(&self, reference: &Rect, flip: Flip) -> Rect {
        let mut r = self.standardized();
        let c = reference.standardized().center_point();
        if flip.flips_x() {
            r.x = 2.0 * c.x - (r.x + r.width);
        }
        if flip.flips_y() {
            r.y = 2.0 * c.y - (r.y + r.height);
        }
        r
    }
}

#[inline]
fn canonical(x: f64, y: f64, w: f64, h: f64) -> (f64, f64, f64, f64) {
    let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
    let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };
    (x, y, w, h)
}

/// Smallest extent with `start + extent >= end`.
///
/// `end - start` can round so that `start + (end - start)` lands one ulp
/// short of `end`.
#[inline]
fn extent_reaching(start: f64, end: f64) -> f64 {
    let mut e = end - start;
    while start + e < end {
        e = f64::from_bits(e.to_bits() + 1);
    }
    e
}

/// Largest extent with `start + extent <= end`, for `end > start`.
#[inline]
fn extent_within(start: f64, end: f64) -> f64 {
    let mut e = end - start;
    while start + e > end {
        e = f64::from_bits(e.to_bits() - 1);
    }
    e
}

/// Scalar fast path of [`Rect::intersection`].
///
/// Returns `(x, y, width, height)` of the overlap, or `(0, 0, 0, 0)` when the
/// rects do not overlap with positive area.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn fast_intersection(
    x1: f64,
    y1: f64,
    w1: f64,
    h1: f64,
    x2: f64,
    y2: f64,
    w2: f64,
    h2: f64,
) -> (f64, f64, f64, f64) {
    let (x1, y1, w1, h1) = canonical(x1, y1, w1, h1);
    let (x2, y2, w2, h2) = canonical(x2, y2, w2, h2);
    let left = x1.max(x2);
    let right = (x1 + w1).min(x2 + w2);
    let top = y1.max(y2);
    let bottom = (y1 + h1).min(y2 + h2);
    if right <= left || bottom <= top {
        return (0.0, 0.0, 0.0, 0.0);
    }
    (
        left,
        top,
        extent_within(left, right),
        extent_within(top, bottom),
    )
}

/// Scalar fast path of [`Rect::union`].
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn fast_union(
    x1: f64,
    y1: f64,
    w1: f64,
    h1: f64,
    x2: f64,
    y2: f64,
    w2: f64,
    h2: f64,
) -> (f64, f64, f64, f64) {
    let (x1, y1, w1, h1) = canonical(x1, y1, w1, h1);
    let (x2, y2, w2, h2) = canonical(x2, y2, w2, h2);
    let left = x1.min(x2);
    let right = (x1 + w1).max(x2 + w2);
    let top = y1.min(y2);
    let bottom = (y1 + h1).max(y2 + h2);
    (
        left,
        top,
        extent_reaching(left, right),
        extent_reaching(top, bottom),
    )
}
