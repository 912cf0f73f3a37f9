//! Circular arcs.
//!
//! Angles are degrees, 0° is up, positive angles run clockwise. A clockwise
//! arc sweeps from `start_angle` forward to `end_angle`; a counterclockwise
//! one sweeps backward. When the endpoints sit on the "wrong" side for the
//! chosen direction, the sweep wraps around the circle.

use serde::{Deserialize, Serialize};

use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
}

impl Arc {
    /// New arc around `(x, y)`.
    ///
    /// With `direction == None` the arc is clockwise iff
    /// `end_angle >= start_angle`. A negative radius is taken by magnitude.
    pub fn new(
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: Option<bool>,
    ) -> Self {
        Self {
            x,
            y,
            radius: radius.abs(),
            start_angle,
            end_angle,
            clockwise: direction.unwrap_or(end_angle >= start_angle),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    #[inline]
    pub fn set_is_clockwise(&mut self, flag: bool) {
        self.clockwise = flag;
    }

    /// Swept angle in degrees, always `>= 0`.
    pub fn angular_span(&self) -> f64 {
        let d = if self.clockwise {
            self.end_angle - self.start_angle
        } else {
            self.start_angle - self.end_angle
        };
        if d < 0.0 {
            d.rem_euclid(360.0)
        } else {
            d
        }
    }

    /// `radius × span` with the span in radians.
    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * self.angular_span().to_radians()
    }

    /// Point `distance` units along the arc from the start angle.
    ///
    /// Distances are clamped to `[0, length()]`.
    pub fn point_on_arc(&self, distance: f64) -> Point {
        if self.radius == 0.0 {
            return self.center();
        }
        let swept = (distance / self.radius)
            .to_degrees()
            .max(0.0)
            .min(self.angular_span());
        let angle = if self.clockwise {
            self.start_angle + swept
        } else {
            self.start_angle - swept
        };
        point_at_angle(self.x, self.y, self.radius, angle)
    }
}

/// Point on the circle of `radius` around `(cx, cy)` at `angle_deg`
/// (0° up, clockwise positive, y down).
#[inline]
pub(crate) fn point_at_angle(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Point::new(cx + radius * s, cy - radius * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn direction_inference() {
        assert!(Arc::new(0.0, 0.0, 10.0, 0.0, 90.0, None).is_clockwise());
        assert!(!Arc::new(0.0, 0.0, 10.0, 90.0, 0.0, None).is_clockwise());
        assert!(!Arc::new(0.0, 0.0, 10.0, 0.0, 90.0, Some(false)).is_clockwise());
        let mut a = Arc::new(0.0, 0.0, 10.0, 0.0, 90.0, None);
        a.set_is_clockwise(false);
        assert!(!a.is_clockwise());
    }

    #[test]
    fn length_is_radius_times_radians() {
        let a = Arc::new(0.0, 0.0, 10.0, 0.0, 90.0, None);
        assert!((a.length() - 5.0 * PI).abs() < 1e-12);
        let full = Arc::new(0.0, 0.0, 2.0, 0.0, 360.0, None);
        assert!((full.length() - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn span_wraps_against_direction() {
        // Clockwise from 350° to 10° goes through 0°.
        let a = Arc::new(0.0, 0.0, 1.0, 350.0, 10.0, Some(true));
        assert!((a.angular_span() - 20.0).abs() < 1e-12);
        // Counterclockwise from 0° to 90° goes the long way round.
        let b = Arc::new(0.0, 0.0, 1.0, 0.0, 90.0, Some(false));
        assert!((b.angular_span() - 270.0).abs() < 1e-12);
    }

    #[test]
    fn sampling_honors_direction() {
        let cw = Arc::new(100.0, 100.0, 10.0, 0.0, 180.0, None);
        let start = cw.point_on_arc(0.0);
        assert!(start.approx_eq(Point::new(100.0, 90.0), 1e-12));
        // A quarter turn clockwise from up is right.
        let q = cw.point_on_arc(10.0 * PI / 2.0);
        assert!(q.approx_eq(Point::new(110.0, 100.0), 1e-9));

        let ccw = Arc::new(100.0, 100.0, 10.0, 0.0, -180.0, None);
        let q = ccw.point_on_arc(10.0 * PI / 2.0);
        assert!(q.approx_eq(Point::new(90.0, 100.0), 1e-9));
    }

    #[test]
    fn sampling_clamps() {
        let a = Arc::new(0.0, 0.0, 10.0, 0.0, 90.0, None);
        assert!(a.point_on_arc(-5.0).approx_eq(Point::new(0.0, -10.0), 1e-12));
        assert!(a.point_on_arc(1e6).approx_eq(Point::new(10.0, 0.0), 1e-9));
        let dot = Arc::new(3.0, 4.0, 0.0, 0.0, 90.0, None);
        assert_eq!(dot.point_on_arc(1.0), Point::new(3.0, 4.0));
    }
}
