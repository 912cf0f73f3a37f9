//! Line segments between two points.
//!
//! A segment may be degenerate (both endpoints equal); its length is then 0
//! and it intersects nothing.

use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use super::predicates::{self, Intersections};
use super::rect::Rect;
use super::types::{GeomCfg, Point, Vector2D};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[inline]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[inline]
    pub fn unpack(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        super::types::distance_to_point(self.x1, self.y1, self.x2, self.y2)
    }

    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.x1 += dx;
        self.y1 += dy;
        self.x2 += dx;
        self.y2 += dy;
    }

    pub fn offset_by(mut self, dx: f64, dy: f64) -> Self {
        self.offset(dx, dy);
        self
    }

    #[inline]
    pub fn mid_point(&self) -> Point {
        Point::new((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    /// `end - start`.
    #[inline]
    pub fn segment_vector(&self) -> Vector2D {
        self.end() - self.start()
    }

    /// Point `distance` units from the start, clamped to the segment.
    pub fn point_on_line(&self, distance: f64) -> Point {
        let len = self.length();
        if len == 0.0 {
            return self.start();
        }
        let t = (distance / len).clamp(0.0, 1.0);
        self.start() + self.segment_vector() * t
    }

    /// Orthogonal projection of `p` onto the segment, clamped to its endpoints.
    pub fn closest_point_on_line_to_point(&self, p: Point) -> Point {
        let v = self.segment_vector();
        let vv = v.magnitude_squared();
        if vv == 0.0 {
            return self.start();
        }
        let t = ((p - self.start()).dot_product(v) / vv).clamp(0.0, 1.0);
        self.start() + v * t
    }

    /// Unique intersection point with `other`, if any.
    ///
    /// Parallel and colinear-overlapping segments report `None`.
    #[inline]
    pub fn intersects_line_segment(&self, other: &LineSegment) -> Option<Point> {
        fast_intersection(
            self.x1, self.y1, self.x2, self.y2, other.x1, other.y1, other.x2, other.y2,
        )
        .map(|(x, y)| Point::new(x, y))
    }

    /// All distinct points where the segment crosses an edge of `poly`.
    pub fn intersects_polygon(&self, poly: &Polygon) -> Intersections {
        self.intersects_polygon_cfg(poly, &GeomCfg::default())
    }

    pub fn intersects_polygon_cfg(&self, poly: &Polygon, cfg: &GeomCfg) -> Intersections {
        predicates::edge_intersections(&[self.start(), self.end()], poly.vertices(), cfg)
    }

    /// All distinct points where the segment crosses an edge of `rect`.
    pub fn intersects_rect(&self, rect: &Rect) -> Intersections {
        self.intersects_rect_cfg(rect, &GeomCfg::default())
    }

    pub fn intersects_rect_cfg(&self, rect: &Rect, cfg: &GeomCfg) -> Intersections {
        predicates::edge_intersections(
            &[self.start(), self.end()],
            &rect.standardized().corner_ring(),
            cfg,
        )
    }
}

/// Scalar fast path of [`LineSegment::intersects_line_segment`].
///
/// Tests `(x1, y1)-(x2, y2)` against `(x3, y3)-(x4, y4)` and returns the
/// intersection coordinates, if any.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn fast_intersection(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Option<(f64, f64)> {
    predicates::fast_segment_intersection(x1, y1, x2, y2, x3, y3, x4, y4)
}
