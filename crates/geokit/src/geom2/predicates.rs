//! Intersection and containment engine shared by segments, rects and polygons.
//!
//! - `fast_segment_intersection`: parametric segment/segment test on raw scalars.
//! - `point_in_polygon`: crossing test under an explicit `FillRule`.
//! - `edge_intersections`: all-pairs edge test collecting distinct points.
//!
//! Everything here works on plain slices and scalars so shape types can call
//! in without building intermediate values.
//!
//! Code cross-refs: `segment::LineSegment`, `rect::Rect`, `polygon::Polygon`

use serde::{Deserialize, Serialize};

use super::error::GeomError;
use super::types::{GeomCfg, Point};

/// Rule deciding which points are inside a possibly self-intersecting polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Inside iff a ray from the point crosses the boundary an odd number of times.
    #[default]
    EvenOdd,
    /// Inside iff the signed crossing count (winding number) is non-zero.
    NonZero,
}

impl FillRule {
    /// Integer encoding shared with the rendering side.
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            FillRule::NonZero => 0,
            FillRule::EvenOdd => 1,
        }
    }
}

impl TryFrom<i32> for FillRule {
    type Error = GeomError;
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FillRule::NonZero),
            1 => Ok(FillRule::EvenOdd),
            other => Err(GeomError::InvalidFillRule(other)),
        }
    }
}

/// Set of distinct intersection points between two shapes, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Intersections {
    pub points: Vec<Point>,
}

impl Intersections {
    #[inline]
    pub fn intersects(&self) -> bool {
        !self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds `p` unless a point within `eps` is already present.
    fn push_distinct(&mut self, p: Point, eps: f64) {
        let eps2 = eps * eps;
        if self
            .points
            .iter()
            .any(|q| q.squared_distance_to_point(p) <= eps2)
        {
            return;
        }
        self.points.push(p);
    }
}

/// Segment/segment intersection on raw coordinates.
///
/// Solves `P1 + t (P2 - P1) = P3 + u (P4 - P3)`; returns the point iff both
/// `t` and `u` lie in `[0, 1]`. A zero determinant (parallel or colinear
/// segments, degenerate segments) yields `None`.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn fast_segment_intersection(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Option<(f64, f64)> {
    let rx = x2 - x1;
    let ry = y2 - y1;
    let sx = x4 - x3;
    let sy = y4 - y3;
    let det = rx * sy - ry * sx;
    if det == 0.0 {
        return None;
    }
    let qx = x3 - x1;
    let qy = y3 - y1;
    let t = (qx * sy - qy * sx) / det;
    let u = (qx * ry - qy * rx) / det;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some((x1 + t * rx, y1 + t * ry))
}

#[inline]
pub(crate) fn segment_intersection(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    fast_segment_intersection(a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y)
        .map(|(x, y)| Point::new(x, y))
}

/// Consecutive vertex pairs. An open chain yields `len - 1` edges; closing is
/// the caller's business (closed polygons repeat their first vertex).
#[inline]
pub(crate) fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    vertices.windows(2).map(|w| (w[0], w[1]))
}

/// Tests every edge of `a` against every edge of `b`.
pub fn edge_intersections(a: &[Point], b: &[Point], cfg: &GeomCfg) -> Intersections {
    let mut out = Intersections::default();
    for (p1, p2) in edges(a) {
        for (p3, p4) in edges(b) {
            if let Some(p) = segment_intersection(p1, p2, p3, p4) {
                out.push_distinct(p, cfg.eps_merge);
            }
        }
    }
    out
}

/// Short-circuiting form of `edge_intersections`.
pub fn any_edge_intersection(a: &[Point], b: &[Point]) -> bool {
    edges(a).any(|(p1, p2)| edges(b).any(|(p3, p4)| segment_intersection(p1, p2, p3, p4).is_some()))
}

/// Point-in-polygon by horizontal ray casting.
///
/// The vertex ring is treated as closed: an edge from the last vertex back to
/// the first is implied when they differ. Crossings use the half-open rule
/// `min(y) <= py < max(y)` so shared vertices are counted once. Points exactly
/// on the boundary are unspecified.
pub fn point_in_polygon(vertices: &[Point], px: f64, py: f64, rule: FillRule) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut crossings: u32 = 0;
    let mut winding: i32 = 0;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[j];
        let b = vertices[i];
        j = i;
        let a_above = a.y > py;
        let b_above = b.y > py;
        if a_above == b_above {
            continue;
        }
        let x_cross = a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y);
        if px >= x_cross {
            continue;
        }
        match rule {
            FillRule::EvenOdd => crossings += 1,
            // Edge heading towards +y winds one way, towards -y the other.
            FillRule::NonZero => winding += if b_above { 1 } else { -1 },
        }
    }
    match rule {
        FillRule::EvenOdd => crossings % 2 == 1,
        FillRule::NonZero => winding != 0,
    }
}
