//! 2D affine transforms `p ↦ M p + t`.
//!
//! Coefficient layout:
//! ```text
//! [m11 m12 tx]
//! [m21 m22 ty]
//! [ 0   0   1]
//! ```
//!
//! Composition order
//! - `a.concat(&b)` yields the transform that applies `a` first, then `b`.
//!   The incremental operations (`translate`, `scale`, `rotate`, `skew`) are
//!   concatenations of the matching elementary transform, so a sequence of
//!   calls applies in call order.
//! - `a * b` is plain matrix composition (`b` first, then `a`), so
//!   `(a * b) * p == a * (b * p)`.
//!
//! Angles are degrees, clockwise positive on a y-down screen.
//!
//! Code cross-refs: `types::{Point, Vector2D}`, `polygon::Polygon`

use std::ops::Mul;

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use super::rect::Rect;
use super::segment::LineSegment;
use super::types::{Point, Vector2D};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    #[inline]
    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, tx: f64, ty: f64) -> Self {
        Self {
            m: Matrix2::new(m11, m12, m21, m22),
            t: Vector2::new(tx, ty),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Clockwise rotation about the origin.
    pub fn rotation(angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Self::new(c, -s, s, c, 0.0, 0.0)
    }

    /// Clockwise rotation about `pivot`.
    pub fn rotation_about(angle_deg: f64, pivot: Point) -> Self {
        Self::translation(-pivot.x, -pivot.y)
            .concatenated(&Self::rotation(angle_deg))
            .concatenated(&Self::translation(pivot.x, pivot.y))
    }

    /// Skew by `sx` degrees along x and `sy` degrees along y.
    pub fn skewing(sx_deg: f64, sy_deg: f64) -> Self {
        Self::new(
            1.0,
            sx_deg.to_radians().tan(),
            sy_deg.to_radians().tan(),
            1.0,
            0.0,
            0.0,
        )
    }

    #[inline]
    pub fn m11(&self) -> f64 {
        self.m[(0, 0)]
    }
    #[inline]
    pub fn m12(&self) -> f64 {
        self.m[(0, 1)]
    }
    #[inline]
    pub fn m21(&self) -> f64 {
        self.m[(1, 0)]
    }
    #[inline]
    pub fn m22(&self) -> f64 {
        self.m[(1, 1)]
    }
    #[inline]
    pub fn tx(&self) -> f64 {
        self.t.x
    }
    #[inline]
    pub fn ty(&self) -> f64 {
        self.t.y
    }

    /// `[m11, m12, m21, m22, tx, ty]`, the layout renderers expect.
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.m11(),
            self.m12(),
            self.m21(),
            self.m22(),
            self.tx(),
            self.ty(),
        ]
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Composition `self ∘ other` (apply `other`, then `self`).
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Inverse map, or `None` when the linear part is singular.
    pub fn try_inverse(&self) -> Option<Self> {
        if !self.is_invertible() {
            return None;
        }
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    /// Inverts in place.
    ///
    /// # Panics
    /// If the linear part is singular (determinant exactly zero).
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// # Panics
    /// If the linear part is singular (determinant exactly zero).
    pub fn inverted(&self) -> Self {
        match self.try_inverse() {
            Some(inv) => inv,
            None => panic!("cannot invert a singular affine transform: {self:?}"),
        }
    }

    /// Appends `af`: the result applies `self` first, then `af`.
    pub fn concat(&mut self, af: &Self) {
        *self = af.compose(self);
    }

    pub fn concatenated(mut self, af: &Self) -> Self {
        self.concat(af);
        self
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.concat(&Self::translation(dx, dy));
    }

    pub fn translated_by(self, dx: f64, dy: f64) -> Self {
        self.concatenated(&Self::translation(dx, dy))
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(&Self::scaling(sx, sy));
    }

    pub fn scaled_by(self, sx: f64, sy: f64) -> Self {
        self.concatenated(&Self::scaling(sx, sy))
    }

    /// Same factor on both axes.
    pub fn scale_uniform(&mut self, s: f64) {
        self.scale(s, s);
    }

    pub fn scaled_uniform_by(self, s: f64) -> Self {
        self.scaled_by(s, s)
    }

    pub fn rotate(&mut self, angle_deg: f64) {
        self.concat(&Self::rotation(angle_deg));
    }

    pub fn rotated_by(self, angle_deg: f64) -> Self {
        self.concatenated(&Self::rotation(angle_deg))
    }

    pub fn rotate_about(&mut self, angle_deg: f64, pivot: Point) {
        self.concat(&Self::rotation_about(angle_deg, pivot));
    }

    pub fn rotated_about(self, angle_deg: f64, pivot: Point) -> Self {
        self.concatenated(&Self::rotation_about(angle_deg, pivot))
    }

    pub fn skew(&mut self, sx_deg: f64, sy_deg: f64) {
        self.concat(&Self::skewing(sx_deg, sy_deg));
    }

    pub fn skewed_by(self, sx_deg: f64, sy_deg: f64) -> Self {
        self.concatenated(&Self::skewing(sx_deg, sy_deg))
    }

    /// Scalar fast path: transforms `(x, y)` directly.
    #[inline]
    pub fn transform_xy(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m11() * x + self.m12() * y + self.t.x,
            self.m21() * x + self.m22() * y + self.t.y,
        )
    }

    #[inline]
    pub fn transform_point(&self, p: &mut Point) {
        *p = self.transformed_point(*p);
    }

    #[inline]
    pub fn transformed_point(&self, p: Point) -> Point {
        let (x, y) = self.transform_xy(p.x, p.y);
        Point::new(x, y)
    }

    /// Vectors are displacements: only the linear part applies.
    #[inline]
    pub fn transform_vector(&self, v: &mut Vector2D) {
        *v = self.transformed_vector(*v);
    }

    #[inline]
    pub fn transformed_vector(&self, v: Vector2D) -> Vector2D {
        (self.m * Vector2::<f64>::from(v)).into()
    }

    pub fn transform_line_segment(&self, ls: &mut LineSegment) {
        *ls = self.transformed_line_segment(*ls);
    }

    pub fn transformed_line_segment(&self, ls: LineSegment) -> LineSegment {
        let (x1, y1) = self.transform_xy(ls.x1, ls.y1);
        let (x2, y2) = self.transform_xy(ls.x2, ls.y2);
        LineSegment::new(x1, y1, x2, y2)
    }

    /// Replaces `r` with the axis-aligned box enclosing its transformed corners.
    pub fn transform_aabb(&self, r: &mut Rect) {
        *r = self.transformed_aabb(*r);
    }

    pub fn transformed_aabb(&self, r: Rect) -> Rect {
        let corners = [
            self.transform_xy(r.x, r.y),
            self.transform_xy(r.x + r.width, r.y),
            self.transform_xy(r.x + r.width, r.y + r.height),
            self.transform_xy(r.x, r.y + r.height),
        ];
        let (mut min_x, mut min_y) = corners[0];
        let (mut max_x, mut max_y) = corners[0];
        for &(x, y) in &corners[1..] {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Transforms every vertex in place; the closed state is kept.
    pub fn transform_polygon(&self, p: &mut Polygon) {
        for v in p.vertices_mut() {
            self.transform_point(v);
        }
    }

    pub fn transformed_polygon(&self, p: &Polygon) -> Polygon {
        let mut out = p.clone();
        self.transform_polygon(&mut out);
        out
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;
    #[inline]
    fn mul(self, rhs: AffineTransform) -> AffineTransform {
        self.compose(&rhs)
    }
}

impl Mul<Point> for AffineTransform {
    type Output = Point;
    #[inline]
    fn mul(self, p: Point) -> Point {
        self.transformed_point(p)
    }
}

impl Mul<Vector2D> for AffineTransform {
    type Output = Vector2D;
    #[inline]
    fn mul(self, v: Vector2D) -> Vector2D {
        self.transformed_vector(v)
    }
}

impl Mul<LineSegment> for AffineTransform {
    type Output = LineSegment;
    #[inline]
    fn mul(self, ls: LineSegment) -> LineSegment {
        self.transformed_line_segment(ls)
    }
}

impl Mul<&Polygon> for AffineTransform {
    type Output = Polygon;
    fn mul(self, p: &Polygon) -> Polygon {
        self.transformed_polygon(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.approx_eq(b, 1e-9)
    }

    #[test]
    fn identity_is_exact() {
        let id = AffineTransform::default();
        for p in [Point::new(0.0, 0.0), Point::new(-3.25, 1e9), Point::new(0.1, 0.2)] {
            assert_eq!(id.transformed_point(p), p);
        }
        assert_eq!(id.coefficients(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn coefficient_layout() {
        let t = AffineTransform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(t.transform_xy(1.0, 1.0), (8.0, 13.0));
        assert_eq!((t.m12(), t.m21()), (2.0, 3.0));
    }

    #[test]
    fn incremental_ops_apply_in_call_order() {
        // Translate then scale: (1,0) -> (11,0) -> (22,0).
        let mut t = AffineTransform::identity();
        t.translate(10.0, 0.0);
        t.scale(2.0, 2.0);
        assert_eq!(t.transformed_point(Point::new(1.0, 0.0)), Point::new(22.0, 0.0));

        // Scale then translate: (1,0) -> (2,0) -> (12,0).
        let u = AffineTransform::identity()
            .scaled_by(2.0, 2.0)
            .translated_by(10.0, 0.0);
        assert_eq!(u.transformed_point(Point::new(1.0, 0.0)), Point::new(12.0, 0.0));
    }

    #[test]
    fn concat_versus_mul() {
        let a = AffineTransform::translation(5.0, 0.0);
        let b = AffineTransform::scaling(3.0, 3.0);
        let p = Point::new(1.0, 1.0);
        let ab = a.concatenated(&b);
        assert_eq!(ab * p, b * (a * p));
        assert_eq!((b * a) * p, b * (a * p));
        assert_eq!(ab, b * a);
    }

    #[test]
    fn rotation_is_clockwise_from_up() {
        let r = AffineTransform::rotation(90.0);
        assert!(close(r * Point::new(0.0, -1.0), Point::new(1.0, 0.0)));
        assert!(close(r * Point::new(1.0, 0.0), Point::new(0.0, 1.0)));

        let pivot = Point::new(10.0, 10.0);
        let mut t = AffineTransform::identity();
        t.rotate_about(180.0, pivot);
        assert!(close(t * Point::new(12.0, 10.0), Point::new(8.0, 10.0)));
        assert!(close(t * pivot, pivot));
        let u = AffineTransform::identity().rotated_about(180.0, pivot);
        assert!(close(u * Point::new(12.0, 10.0), Point::new(8.0, 10.0)));
    }

    #[test]
    fn skew_shifts_by_tangent() {
        let s = AffineTransform::identity().skewed_by(45.0, 0.0);
        assert!(close(s * Point::new(0.0, 2.0), Point::new(2.0, 2.0)));
        let mut k = AffineTransform::identity();
        k.skew(0.0, 45.0);
        assert!(close(k * Point::new(3.0, 0.0), Point::new(3.0, 3.0)));
    }

    #[test]
    fn inversion() {
        let t = AffineTransform::identity()
            .scaled_by(2.0, 4.0)
            .rotated_by(30.0)
            .translated_by(3.0, -7.0);
        let inv = t.inverted();
        let p = Point::new(5.0, 9.0);
        assert!(close(inv * (t * p), p));
        assert!(close(t * (inv * p), p));
        let mut back = inv;
        back.invert();
        for (a, b) in back.coefficients().iter().zip(t.coefficients()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn singular_has_no_inverse() {
        let s = AffineTransform::scaling(0.0, 1.0);
        assert!(!s.is_invertible());
        assert!(s.try_inverse().is_none());
    }

    #[test]
    #[should_panic(expected = "singular")]
    fn inverting_singular_panics() {
        let mut s = AffineTransform::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
        s.invert();
    }

    #[test]
    fn reset_restores_identity() {
        let mut t = AffineTransform::rotation(33.0);
        t.reset();
        assert_eq!(t, AffineTransform::identity());
    }

    #[test]
    fn vectors_ignore_translation() {
        let t = AffineTransform::translation(100.0, 100.0).scaled_by(2.0, 2.0);
        assert_eq!(t * Vector2D::new(1.0, 1.0), Vector2D::new(2.0, 2.0));
        let mut v = Vector2D::new(0.5, 0.0);
        t.transform_vector(&mut v);
        assert_eq!(v, Vector2D::new(1.0, 0.0));
    }

    #[test]
    fn aabb_encloses_rotated_rect() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        let t = AffineTransform::rotation_about(45.0, Point::new(1.0, 1.0));
        let bb = t.transformed_aabb(r);
        let h = 2.0_f64.sqrt();
        assert!((bb.x - (1.0 - h)).abs() < 1e-9);
        assert!((bb.width - 2.0 * h).abs() < 1e-9);
        assert!((bb.height - 2.0 * h).abs() < 1e-9);
        let mut m = r;
        AffineTransform::translation(1.0, 2.0).transform_aabb(&mut m);
        assert_eq!(m, Rect::new(1.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn segments_and_polygons() {
        let t = AffineTransform::translation(1.0, 1.0);
        let mut ls = LineSegment::new(0.0, 0.0, 1.0, 0.0);
        t.transform_line_segment(&mut ls);
        assert_eq!(ls, LineSegment::new(1.0, 1.0, 2.0, 1.0));
        assert_eq!(t * LineSegment::new(0.0, 0.0, 0.0, 0.0), LineSegment::new(1.0, 1.0, 1.0, 1.0));

        let mut poly = Polygon::from_xy(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0])
            .unwrap()
            .closed();
        let moved = t * &poly;
        assert!(moved.is_closed());
        assert_eq!(moved.point_at(2), Point::new(2.0, 2.0));
        t.transform_polygon(&mut poly);
        assert_eq!(poly, moved);
    }
}
