//! Scalar value types and tolerances.
//!
//! - `GeomCfg`: centralizes the few epsilons the engine needs.
//! - `Point`: a position. `Vector2D`: a displacement. `Size`: an extent.
//!
//! Conventions
//! - `Point - Point = Vector2D`, `Point + Vector2D = Point`.
//! - Screen coordinates: y grows downward, so 0° is "up" (negative y) and
//!   positive angles run clockwise.
//!
//! Code cross-refs: `segment::LineSegment`, `affine::AffineTransform`

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::segment::LineSegment;

/// Geometry configuration (tolerances).
///
/// Exact predicates (parallel segments, singular transforms, rect equality)
/// do not consult these values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Two intersection points closer than this are reported once.
    pub eps_merge: f64,
    /// Tolerance read by the `approx_eq_cfg` helpers.
    pub eps_approx: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_merge: 1e-9,
            eps_approx: 1e-9,
        }
    }
}

/// Squared distance between `(x1, y1)` and `(x2, y2)` without building points.
#[inline]
pub fn squared_distance_to_point(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

/// Distance between `(x1, y1)` and `(x2, y2)` without building points.
#[inline]
pub fn distance_to_point(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    squared_distance_to_point(x1, y1, x2, y2).sqrt()
}

/// Two-dimensional position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn unpack(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Moves the point in place.
    #[inline]
    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Returns the point moved by `(dx, dy)`.
    #[inline]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn squared_distance_to_point(&self, p: Point) -> f64 {
        squared_distance_to_point(self.x, self.y, p.x, p.y)
    }

    #[inline]
    pub fn distance_to_point(&self, p: Point) -> f64 {
        distance_to_point(self.x, self.y, p.x, p.y)
    }

    /// Segment from `self` to `other`.
    #[inline]
    pub fn segment_to(self, other: Point) -> LineSegment {
        LineSegment::from_points(self, other)
    }

    /// Component-wise comparison with slack `eps`.
    #[inline]
    pub fn approx_eq(&self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// [`Point::approx_eq`] with `cfg.eps_approx`.
    #[inline]
    pub fn approx_eq_cfg(&self, other: Point, cfg: &GeomCfg) -> bool {
        self.approx_eq(other, cfg.eps_approx)
    }
}

impl From<Point2<f64>> for Point {
    #[inline]
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl Add<Vector2D> for Point {
    type Output = Point;
    #[inline]
    fn add(self, v: Vector2D) -> Point {
        Point::new(self.x + v.dx, self.y + v.dy)
    }
}

impl AddAssign<Vector2D> for Point {
    #[inline]
    fn add_assign(&mut self, v: Vector2D) {
        self.x += v.dx;
        self.y += v.dy;
    }
}

impl Sub<Vector2D> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, v: Vector2D) -> Point {
        Point::new(self.x - v.dx, self.y - v.dy)
    }
}

impl Sub for Point {
    type Output = Vector2D;
    /// `p1 - p2` is the displacement taking `p2` to `p1`.
    #[inline]
    fn sub(self, rhs: Point) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Two-dimensional displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub dx: f64,
    pub dy: f64,
}

impl Vector2D {
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn unpack(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    #[inline]
    pub fn add_vector(&mut self, v: Vector2D) {
        self.dx += v.dx;
        self.dy += v.dy;
    }

    #[inline]
    pub fn scale(&mut self, s: f64) {
        self.dx *= s;
        self.dy *= s;
    }

    #[inline]
    pub fn scaled_by(self, s: f64) -> Self {
        Self::new(self.dx * s, self.dy * s)
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Rescales to unit length. The zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let m = self.magnitude();
        if m > 0.0 {
            self.dx /= m;
            self.dy /= m;
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    pub fn dot_product(&self, v: Vector2D) -> f64 {
        self.dx * v.dx + self.dy * v.dy
    }

    /// z-component of the 3D cross product.
    #[inline]
    pub fn cross_product(&self, v: Vector2D) -> f64 {
        self.dx * v.dy - self.dy * v.dx
    }

    /// Unsigned angle to `v` in degrees, in `[0, 180]`.
    ///
    /// Returns 0 when either vector is zero.
    pub fn angle_between(&self, v: Vector2D) -> f64 {
        if self.magnitude_squared() == 0.0 || v.magnitude_squared() == 0.0 {
            return 0.0;
        }
        self.cross_product(v).abs().atan2(self.dot_product(v)).to_degrees()
    }

    /// The vector rotated 90° counterclockwise on screen (same length).
    #[inline]
    pub fn left_normal(&self) -> Self {
        Self::new(self.dy, -self.dx)
    }

    /// The vector rotated 90° clockwise on screen (same length).
    #[inline]
    pub fn right_normal(&self) -> Self {
        Self::new(-self.dy, self.dx)
    }

    /// Replaces `self` with its projection onto the line spanned by `v`.
    ///
    /// Projecting along the zero vector yields the zero vector.
    pub fn project_along(&mut self, v: Vector2D) {
        *self = self.projected_along(v);
    }

    pub fn projected_along(self, v: Vector2D) -> Self {
        let vv = v.magnitude_squared();
        if vv == 0.0 {
            return Self::zero();
        }
        v.scaled_by(self.dot_product(v) / vv)
    }

    #[inline]
    pub fn approx_eq(&self, other: Vector2D, eps: f64) -> bool {
        (self.dx - other.dx).abs() <= eps && (self.dy - other.dy).abs() <= eps
    }

    #[inline]
    pub fn approx_eq_cfg(&self, other: Vector2D, cfg: &GeomCfg) -> bool {
        self.approx_eq(other, cfg.eps_approx)
    }
}

impl From<Vector2<f64>> for Vector2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2<f64> {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.dx, v.dy)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2D) {
        self.add_vector(rhs);
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.dx -= rhs.dx;
        self.dy -= rhs.dy;
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Vector2D {
        Vector2D::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, s: f64) -> Vector2D {
        self.scaled_by(s)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    #[inline]
    fn mul(self, v: Vector2D) -> Vector2D {
        v.scaled_by(self)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn div(self, s: f64) -> Vector2D {
        Vector2D::new(self.dx / s, self.dy / s)
    }
}

/// Width/height extent. No sign is enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn unpack(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Grows (or shrinks, for negative deltas) in place.
    #[inline]
    pub fn offset(&mut self, dw: f64, dh: f64) {
        self.width += dw;
        self.height += dh;
    }

    #[inline]
    pub fn offset_by(mut self, dw: f64, dh: f64) -> Self {
        self.offset(dw, dh);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(4.0, 6.0);
        let v = q - p;
        assert_eq!(v, Vector2D::new(3.0, 4.0));
        assert_eq!(p + v, q);
        assert_eq!(q - v, p);
        assert_eq!(p.distance_to_point(q), 5.0);
        assert_eq!(p.squared_distance_to_point(q), 25.0);
        assert_eq!(distance_to_point(1.0, 2.0, 4.0, 6.0), 5.0);
    }

    #[test]
    fn offset_pairs() {
        let mut p = Point::new(1.0, 1.0);
        let q = p.offset_by(2.0, -3.0);
        assert_eq!(p, Point::new(1.0, 1.0));
        p.offset(2.0, -3.0);
        assert_eq!(p, q);

        let s = Size::new(4.0, 3.0);
        assert_eq!(s.offset_by(1.0, -1.0).unpack(), (5.0, 2.0));
        assert_eq!(s.unpack(), (4.0, 3.0));
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        let n = v.normalized();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(Vector2D::zero().normalized(), Vector2D::zero());
        let mut z = Vector2D::zero();
        z.normalize();
        assert_eq!(z, Vector2D::zero());
    }

    #[test]
    fn approx_eq_cfg_reads_eps_approx() {
        let p = Point::new(1.0, 1.0);
        let q = Point::new(1.0 + 1e-6, 1.0);
        assert!(!p.approx_eq_cfg(q, &GeomCfg::default()));
        let loose = GeomCfg {
            eps_approx: 1e-5,
            ..GeomCfg::default()
        };
        assert!(p.approx_eq_cfg(q, &loose));

        let v = Vector2D::new(3.0, 4.0);
        let w = v.normalized().scaled_by(5.0);
        assert!(v.approx_eq_cfg(w, &GeomCfg::default()));
        assert!(!v.approx_eq_cfg(Vector2D::new(3.0, 4.001), &loose));
    }

    #[test]
    fn angle_between_is_unsigned_degrees() {
        let right = Vector2D::new(1.0, 0.0);
        let down = Vector2D::new(0.0, 1.0);
        assert!((right.angle_between(down) - 90.0).abs() < 1e-12);
        assert!((down.angle_between(right) - 90.0).abs() < 1e-12);
        assert!((right.angle_between(-right) - 180.0).abs() < 1e-12);
        assert_eq!(right.angle_between(right), 0.0);
        assert_eq!(right.angle_between(Vector2D::zero()), 0.0);
    }

    #[test]
    fn normals_are_perpendicular() {
        let v = Vector2D::new(1.0, 0.0);
        // y grows downward: "left" of a rightward vector is up.
        assert_eq!(v.left_normal(), Vector2D::new(0.0, -1.0));
        assert_eq!(v.right_normal(), Vector2D::new(0.0, 1.0));
        let w = Vector2D::new(2.5, -7.0);
        assert_eq!(w.dot_product(w.left_normal()), 0.0);
        assert_eq!(w.left_normal(), -w.right_normal());
    }

    #[test]
    fn projection() {
        let mut v = Vector2D::new(2.0, 3.0);
        let along = Vector2D::new(4.0, 0.0);
        assert_eq!(v.projected_along(along), Vector2D::new(2.0, 0.0));
        v.project_along(Vector2D::zero());
        assert_eq!(v, Vector2D::zero());
    }

    #[test]
    fn operators() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -1.0);
        assert_eq!(a + b, Vector2D::new(4.0, 1.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 3.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, Vector2D::new(0.5, 1.0));
        let mut c = a;
        c.add_vector(b);
        assert_eq!(c, a + b);
        assert_eq!(Size::new(3.0, 4.0).unpack(), (3.0, 4.0));
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = Point::new(1.5, -2.0);
        let np: Point2<f64> = p.into();
        assert_eq!(Point::from(np), p);
        let v = Vector2D::new(0.25, 8.0);
        let nv: Vector2<f64> = v.into();
        assert_eq!(Vector2D::from(nv), v);
    }
}
