use std::f64::consts::TAU;

use crate::error::{FitError, Result};
use crate::geometry::{Arc, Circle};
use crate::math::angle_2d::ccw_delta;
use crate::math::{Point2, TOLERANCE};

/// Computes the unique circle through three non-collinear points.
///
/// Solves the determinant form of the circle equation
/// `a(x² + y²) + bx + cy + d = 0`; the center is `(-b/2a, -c/2a)` and the
/// squared radius `(b² + c²)/(2a)² - d/a`.
///
/// # Errors
///
/// - [`FitError::CollinearPoints`] when the points lie on a line (`a ≈ 0`).
/// - [`FitError::NumericalFailure`] when the squared radius comes out
///   non-positive.
pub fn circumscribed_circle(p1: Point2, p2: Point2, p3: Point2) -> Result<Circle> {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3) = (p3.x, p3.y);

    let a = x1 * (y2 - y3) - y1 * (x2 - x3) + x2 * y3 - x3 * y2;
    if a.abs() < TOLERANCE {
        return Err(FitError::CollinearPoints.into());
    }

    let sq1 = x1 * x1 + y1 * y1;
    let sq2 = x2 * x2 + y2 * y2;
    let sq3 = x3 * x3 + y3 * y3;

    let b = sq1 * (y3 - y2) + sq2 * (y1 - y3) + sq3 * (y2 - y1);
    let c = sq1 * (x2 - x3) + sq2 * (x3 - x1) + sq3 * (x1 - x2);
    let d = sq1 * (y2 * x3 - x2 * y3) + sq2 * (x1 * y3 - y1 * x3) + sq3 * (y1 * x2 - x1 * y2);

    let center = Point2::new(-b / (2.0 * a), -c / (2.0 * a));
    let radius_sq = (b * b + c * c) / (4.0 * a * a) - d / a;
    if radius_sq <= 0.0 {
        return Err(FitError::NumericalFailure(radius_sq).into());
    }

    Circle::new(center, radius_sq.sqrt())
}

/// Computes the arc from `p1` to `p3` passing through `p2`.
///
/// The circle is fitted with [`circumscribed_circle`]; the sweep direction
/// is then chosen in wrapped angle space so that `p2`'s angle lies inside
/// the sweep. This stays correct when the arc crosses the ±π branch cut of
/// the arctangent.
///
/// # Errors
///
/// Propagates [`circumscribed_circle`] failures.
pub fn arc_through_points(p1: Point2, p2: Point2, p3: Point2) -> Result<Arc> {
    let circle = circumscribed_circle(p1, p2, p3)?;
    let theta1 = circle.angle_of(p1);
    let theta2 = circle.angle_of(p2);
    let theta3 = circle.angle_of(p3);

    let sweep_ccw = ccw_delta(theta1, theta3);
    let mid_ccw = ccw_delta(theta1, theta2);

    // Counter-clockwise from θ1 passes through θ2 before reaching θ3 iff
    // the wrapped deltas are ordered; otherwise the arc runs clockwise.
    let end_angle = if mid_ccw <= sweep_ccw {
        theta1 + sweep_ccw
    } else {
        theta1 - (TAU - sweep_ccw)
    };

    Arc::new(circle, theta1, end_angle)
}

/// Fits arcs through a point sequence, three points at a time.
///
/// Triple `k` covers points `{2k, 2k+1, 2k+2}`, so each interior boundary
/// point ends one arc and starts the next. Fewer than three points yield an
/// empty list.
///
/// # Errors
///
/// Propagates the first triple that fails to fit; callers that want a
/// skip-or-substitute policy fit triple by triple instead.
pub fn arcs_through_points(points: &[Point2]) -> Result<Vec<Arc>> {
    let mut arcs = Vec::new();
    let mut i = 0;
    while i + 2 < points.len() {
        arcs.push(arc_through_points(points[i], points[i + 1], points[i + 2])?);
        i += 2;
    }
    Ok(arcs)
}

/// Computes the curvature `1/R` seen at each point of a sequence.
///
/// Arcs are fitted as in [`arcs_through_points`]; every point contributes
/// one `(point index, curvature)` entry per arc that covers it, in point
/// order, so boundary points shared by two arcs appear twice.
///
/// # Errors
///
/// Propagates arc-fitting failures.
pub fn curvature_profile(points: &[Point2]) -> Result<Vec<(usize, f64)>> {
    let arcs = arcs_through_points(points)?;

    let mut owners: Vec<Vec<usize>> = vec![Vec::new(); points.len()];
    for (k, _) in arcs.iter().enumerate() {
        for offset in 0..3 {
            owners[2 * k + offset].push(k);
        }
    }

    let mut profile = Vec::new();
    for (i, arc_indices) in owners.iter().enumerate() {
        for &k in arc_indices {
            profile.push((i, arcs[k].circle().curvature()));
        }
    }
    Ok(profile)
}
