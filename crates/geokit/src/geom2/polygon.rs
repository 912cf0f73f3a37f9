//! Open or closed polygons over an ordered vertex list.
//!
//! Invariants
//! - At least one vertex.
//! - Closed iff `close()` was called or the first and last vertices coincide.
//!   `close()` appends the first vertex when needed, so the closing edge is an
//!   ordinary edge and `length()` counts it.
//!
//! Containment treats the ring as closed regardless of the flag; edge
//! intersection only uses the edges that exist.
//!
//! Code cross-refs: `predicates::{point_in_polygon, edge_intersections}`

use serde::{Deserialize, Serialize};

use super::error::GeomError;
use super::predicates::{self, FillRule, Intersections};
use super::rect::Rect;
use super::segment::LineSegment;
use super::types::{GeomCfg, Point};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonRepr")]
pub struct Polygon {
    vertices: Vec<Point>,
    closed: bool,
}

/// Wire form; deserialization goes through [`Polygon::try_new`].
#[derive(Deserialize)]
struct PolygonRepr {
    vertices: Vec<Point>,
    #[serde(default)]
    closed: bool,
}

impl TryFrom<PolygonRepr> for Polygon {
    type Error = GeomError;

    fn try_from(repr: PolygonRepr) -> Result<Self, GeomError> {
        let mut p = Polygon::try_new(repr.vertices)?;
        p.closed = repr.closed;
        Ok(p)
    }
}

impl Polygon {
    /// Polygon over `vertices`, closed if the first and last coincide.
    ///
    /// # Panics
    /// If `vertices` is empty. Use [`Polygon::try_new`] for untrusted input.
    pub fn new(vertices: Vec<Point>) -> Self {
        match Self::try_new(vertices) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(vertices: Vec<Point>) -> Result<Self, GeomError> {
        if vertices.is_empty() {
            return Err(GeomError::EmptyPolygon);
        }
        Ok(Self {
            vertices,
            closed: false,
        })
    }

    /// Polygon from a flat `[x1, y1, x2, y2, ...]` list.
    pub fn from_xy(coords: &[f64]) -> Result<Self, GeomError> {
        if coords.len() % 2 != 0 {
            return Err(GeomError::OddCoordinateCount(coords.len()));
        }
        Self::try_new(
            coords
                .chunks_exact(2)
                .map(|c| Point::new(c[0], c[1]))
                .collect(),
        )
    }

    /// `n` vertices at the origin, to be filled with `set_point_at`.
    ///
    /// # Panics
    /// If `n == 0`.
    pub fn zeroed(n: usize) -> Self {
        Self::new(vec![Point::default(); n])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Point] {
        &mut self.vertices
    }

    /// Closes the polygon, appending the first vertex if the ring is open.
    /// Idempotent.
    pub fn close(&mut self) {
        let first = self.vertices[0];
        if self.vertices.len() < 2 || self.vertices[self.vertices.len() - 1] != first {
            self.vertices.push(first);
        }
        self.closed = true;
    }

    pub fn closed(mut self) -> Self {
        self.close();
        self
    }

    pub fn is_closed(&self) -> bool {
        if self.closed {
            return true;
        }
        let n = self.vertices.len();
        n >= 2 && self.vertices[0] == self.vertices[n - 1]
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Sum of the edge lengths.
    pub fn length(&self) -> f64 {
        predicates::edges(&self.vertices)
            .map(|(a, b)| a.distance_to_point(b))
            .sum()
    }

    /// # Panics
    /// If `n >= self.count()`.
    pub fn point_at(&self, n: usize) -> Point {
        self.check_index(n);
        self.vertices[n]
    }

    /// # Panics
    /// If `n >= self.count()`.
    pub fn set_point_at(&mut self, n: usize, x: f64, y: f64) {
        self.check_index(n);
        self.vertices[n] = Point::new(x, y);
    }

    #[inline]
    fn check_index(&self, n: usize) {
        assert!(
            n < self.vertices.len(),
            "vertex index {n} out of range for polygon with {} vertices",
            self.vertices.len()
        );
    }

    /// Axis-aligned bounds as `(x, y, width, height)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let first = self.vertices[0];
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.vertices[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn bounds_rect(&self) -> Rect {
        let (x, y, w, h) = self.bounds();
        Rect::new(x, y, w, h)
    }

    /// Moves every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.vertices {
            p.offset(dx, dy);
        }
    }

    pub fn translated_by(mut self, dx: f64, dy: f64) -> Self {
        self.translate(dx, dy);
        self
    }

    /// Point `distance` units along the edges from the first vertex.
    ///
    /// Distances are clamped to `[0, length()]`.
    pub fn point_on_polygon(&self, distance: f64) -> Point {
        let mut remaining = distance.max(0.0);
        for (a, b) in predicates::edges(&self.vertices) {
            let len = a.distance_to_point(b);
            if remaining <= len {
                return LineSegment::from_points(a, b).point_on_line(remaining);
            }
            remaining -= len;
        }
        self.vertices[self.vertices.len() - 1]
    }

    /// Containment under the default even-odd rule.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_xy(p.x, p.y, FillRule::default())
    }

    #[inline]
    pub fn contains_point_with_rule(&self, p: Point, rule: FillRule) -> bool {
        self.contains_xy(p.x, p.y, rule)
    }

    pub fn contains_xy(&self, x: f64, y: f64, rule: FillRule) -> bool {
        predicates::point_in_polygon(&self.vertices, x, y, rule)
    }

    /// True iff an edge of `self` crosses an edge of `other`.
    pub fn intersects(&self, other: &Polygon) -> bool {
        predicates::any_edge_intersection(&self.vertices, &other.vertices)
    }

    pub fn intersects_polygon(&self, other: &Polygon) -> Intersections {
        self.intersects_polygon_cfg(other, &GeomCfg::default())
    }

    pub fn intersects_polygon_cfg(&self, other: &Polygon, cfg: &GeomCfg) -> Intersections {
        predicates::edge_intersections(&self.vertices, &other.vertices, cfg)
    }

    pub fn intersects_rect(&self, rect: &Rect) -> Intersections {
        self.intersects_rect_cfg(rect, &GeomCfg::default())
    }

    pub fn intersects_rect_cfg(&self, rect: &Rect, cfg: &GeomCfg) -> Intersections {
        predicates::edge_intersections(&self.vertices, &rect.standardized().corner_ring(), cfg)
    }

    pub fn intersects_line_segment(&self, segment: &LineSegment) -> Intersections {
        self.intersects_line_segment_cfg(segment, &GeomCfg::default())
    }

    pub fn intersects_line_segment_cfg(
        &self,
        segment: &LineSegment,
        cfg: &GeomCfg,
    ) -> Intersections {
        predicates::edge_intersections(&self.vertices, &[segment.start(), segment.end()], cfg)
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeomError;
    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Self::try_new(vertices)
    }
}
