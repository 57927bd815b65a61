use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A circle in the plane.
///
/// Defined by a center and a positive radius. Points on the circle are
/// addressed by their polar angle, measured counter-clockwise from the
/// positive x-axis: `P(θ) = center + radius * (cos θ, sin θ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates the point on the circle at polar angle `angle`.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Returns the polar angle of `p` relative to the circle's center.
    ///
    /// Uses the quadrant-correct two-argument arctangent; the result is in
    /// `(-π, π]`. `p` need not lie on the circle.
    #[must_use]
    pub fn angle_of(&self, p: Point2) -> f64 {
        (p.y - self.center.y).atan2(p.x - self.center.x)
    }

    /// Curvature of the circle, `1 / radius`.
    #[must_use]
    pub fn curvature(&self) -> f64 {
        1.0 / self.radius
    }
}
