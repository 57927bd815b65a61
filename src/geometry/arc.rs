use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

use super::Circle;

/// A directed circular arc.
///
/// Bounded by `start_angle` and `end_angle` on a [`Circle`], both in radians
/// counter-clockwise from the positive x-axis. The traversal direction is
/// encoded in the signed sweep `end_angle - start_angle`:
/// - sweep > 0: counter-clockwise
/// - sweep < 0: clockwise
///
/// The end angle is deliberately not normalized, so `|sweep| <= 2π` can
/// express any arc on the circle in either direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    circle: Circle,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep magnitude exceeds a full turn.
    pub fn new(circle: Circle, start_angle: f64, end_angle: f64) -> Result<Self> {
        if (end_angle - start_angle).abs() > TAU + 1e-9 {
            return Err(GeometryError::Degenerate(
                "arc sweep exceeds a full turn".into(),
            )
            .into());
        }
        Ok(Self {
            circle,
            start_angle,
            end_angle,
        })
    }

    /// Returns the circle the arc lies on.
    #[must_use]
    pub fn circle(&self) -> Circle {
        self.circle
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle in radians.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Signed angular sweep, positive for counter-clockwise traversal.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns `true` when the arc is traversed counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.sweep() >= 0.0
    }

    /// Evaluates a point on the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.circle.point_at(self.start_angle + self.sweep() * t)
    }

    /// Start point of the arc.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// End point of the arc.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(1.0)
    }

    /// Unit tangent in the direction of traversal at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let angle = self.start_angle + self.sweep() * t;
        let sign = if self.is_ccw() { 1.0 } else { -1.0 };
        // Tangent to the circle at angle θ is (-sin θ, cos θ) for CCW travel.
        Vector2::new(-sign * angle.sin(), sign * angle.cos())
    }

    /// Arc length, `radius * |sweep|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.circle.radius() * self.sweep().abs()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-10;

    fn unit_arc(start: f64, end: f64) -> Arc {
        let circle = Circle::new(Point2::origin(), 1.0).unwrap();
        Arc::new(circle, start, end).unwrap()
    }

    #[test]
    fn ccw_quarter_endpoints() {
        let arc = unit_arc(0.0, FRAC_PI_2);
        let s = arc.start_point();
        let e = arc.end_point();
        assert!((s.x - 1.0).abs() < TOL && s.y.abs() < TOL);
        assert!(e.x.abs() < TOL && (e.y - 1.0).abs() < TOL);
        assert!(arc.is_ccw());
    }

    #[test]
    fn cw_arc_midpoint() {
        // From +x axis clockwise down to -y axis; midpoint at -π/4.
        let arc = unit_arc(0.0, -FRAC_PI_2);
        let m = arc.point_at(0.5);
        let expected = (PI / 4.0).cos();
        assert!((m.x - expected).abs() < TOL, "m.x={}", m.x);
        assert!((m.y + expected).abs() < TOL, "m.y={}", m.y);
        assert!(!arc.is_ccw());
    }

    #[test]
    fn tangent_direction_flips_with_sweep() {
        let ccw = unit_arc(0.0, PI);
        let cw = unit_arc(0.0, -PI);
        let t_ccw = ccw.tangent_at(0.0);
        let t_cw = cw.tangent_at(0.0);
        assert!((t_ccw - Vector2::new(0.0, 1.0)).norm() < TOL);
        assert!((t_cw - Vector2::new(0.0, -1.0)).norm() < TOL);
    }

    #[test]
    fn tangent_is_unit() {
        let arc = unit_arc(1.0, 2.5);
        let t = arc.tangent_at(0.7);
        assert!((t.norm() - 1.0).abs() < TOL);
    }

    #[test]
    fn length_scales_with_radius() {
        let circle = Circle::new(Point2::origin(), 2.0).unwrap();
        let arc = Arc::new(circle, 0.0, PI).unwrap();
        assert!((arc.length() - 2.0 * PI).abs() < TOL);
    }

    #[test]
    fn over_full_turn_rejected() {
        let circle = Circle::new(Point2::origin(), 1.0).unwrap();
        assert!(Arc::new(circle, 0.0, 3.0 * PI).is_err());
    }
}
