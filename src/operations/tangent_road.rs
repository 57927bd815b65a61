use tracing::debug;

use crate::error::{Result, RoadError};
use crate::geometry::{Arc, Circle, Path, Segment};
use crate::math::angle_2d::{ccw_delta, cw_delta};
use crate::math::{Point2, Rotation2, Vector2, TOLERANCE};

/// One circle of a road: a center to route around and the turning radius
/// to use there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub center: Point2,
    pub radius: f64,
}

impl Waypoint {
    /// Creates a new waypoint.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// A constructed road: straight tangent segments between consecutive
/// circles, filleted by arcs on each interior circle.
///
/// For `n` waypoints there are `n - 1` tangents and `n - 2` fillets.
#[derive(Debug, Clone)]
pub struct Road {
    tangents: Vec<Segment>,
    fillets: Vec<Arc>,
}

impl Road {
    /// Returns the tangent segments, one per consecutive waypoint pair.
    #[must_use]
    pub fn tangents(&self) -> &[Segment] {
        &self.tangents
    }

    /// Returns the fillet arcs, one per interior waypoint.
    #[must_use]
    pub fn fillets(&self) -> &[Arc] {
        &self.fillets
    }

    /// Interleaves tangents and fillets into a single traversable path:
    /// `tangent 0, fillet 1, tangent 1, …, tangent n-2`.
    #[must_use]
    pub fn to_path(&self) -> Path {
        let mut path = Path::new();
        for (i, tangent) in self.tangents.iter().enumerate() {
            path.push(*tangent);
            if i < self.fillets.len() {
                path.push(self.fillets[i]);
            }
        }
        path
    }
}

/// Builds a smooth road through a sequence of waypoint circles.
///
/// Each consecutive circle pair is joined by an external tangent segment;
/// each interior circle gets the fillet arc connecting its incoming and
/// outgoing tangent points, swept in the direction the incoming tangent
/// implies, so the traversal direction never reverses at a joint.
#[derive(Debug)]
pub struct BuildTangentRoad {
    waypoints: Vec<Waypoint>,
}

impl BuildTangentRoad {
    /// Creates a new road construction operation.
    #[must_use]
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// - [`RoadError::TooFewWaypoints`] for fewer than 2 waypoints.
    /// - [`RoadError::CoincidentCenters`] when consecutive centers coincide.
    /// - [`RoadError::TangentUnreachable`] when one circle nests inside its
    ///   neighbor, leaving no external tangent.
    /// - A geometry error for a non-positive waypoint radius.
    pub fn execute(&self) -> Result<Road> {
        let n = self.waypoints.len();
        if n < 2 {
            return Err(RoadError::TooFewWaypoints(n).into());
        }

        let circles: Vec<Circle> = self
            .waypoints
            .iter()
            .map(|w| Circle::new(w.center, w.radius))
            .collect::<Result<_>>()?;

        let mut tangents = Vec::with_capacity(n - 1);
        for (i, pair) in circles.windows(2).enumerate() {
            let tangent = external_tangent(pair[0], pair[1], i)?;
            debug!(
                index = i,
                start = ?(tangent.start().x, tangent.start().y),
                end = ?(tangent.end().x, tangent.end().y),
                "tangent constructed"
            );
            tangents.push(tangent);
        }

        let mut fillets = Vec::with_capacity(n - 2);
        for i in 1..n - 1 {
            fillets.push(fillet_between(circles[i], &tangents[i - 1], &tangents[i])?);
        }

        Ok(Road { tangents, fillets })
    }
}

/// Computes the external tangent segment from `c1` to `c2`.
///
/// The tangent point on `c1` is the segment start, the one on `c2` the end.
/// For distinct radii the construction rotates the center line by
/// `asin((r2 - r1) / d)` and projects the resulting intermediate point back
/// onto both circles; equal radii degenerate to a pure translation of the
/// center line along its left normal.
fn external_tangent(c1: Circle, c2: Circle, index: usize) -> Result<Segment> {
    let v = c2.center() - c1.center();
    let d = v.norm();
    if d < TOLERANCE {
        return Err(RoadError::CoincidentCenters { index }.into());
    }

    let radius_delta = c2.radius() - c1.radius();
    if d * d < radius_delta * radius_delta {
        return Err(RoadError::TangentUnreachable {
            index,
            d,
            radius_delta: radius_delta.abs(),
        }
        .into());
    }

    if radius_delta.abs() < TOLERANCE {
        // Equal radii: the rotated construction divides by r2 - r1, but the
        // tangent is just the center line shifted out along its left normal.
        let normal = Vector2::new(-v.y, v.x) / d;
        let start = c1.center() + normal * c1.radius();
        let end = c2.center() + normal * c2.radius();
        return Segment::new(start, end);
    }

    let tangent_len = (d * d - radius_delta * radius_delta).sqrt();
    let alpha = (radius_delta / d).asin();
    let intermediate = c1.center() + Rotation2::new(alpha) * v * (tangent_len / d);

    // `intermediate - c2.center()` has norm |r2 - r1|; dividing by the
    // signed delta yields the common unit normal of both touch points,
    // on the same side for either radius ordering.
    let normal = (intermediate - c2.center()) / radius_delta;
    let start = c1.center() + normal * c1.radius();
    let end = c2.center() + normal * c2.radius();

    Segment::new(start, end)
}

/// Builds the fillet arc on `circle` between the incoming tangent's end
/// point and the outgoing tangent's start point.
///
/// The sweep direction is fixed by continuity: the arc must leave the entry
/// point travelling the way the incoming tangent was travelling. The exit
/// tangent then matches the outgoing segment automatically, since both
/// lines touch the same circle.
fn fillet_between(circle: Circle, incoming: &Segment, outgoing: &Segment) -> Result<Arc> {
    let entry = incoming.end();
    let exit = outgoing.start();

    let theta_in = circle.angle_of(entry);
    let theta_out = circle.angle_of(exit);

    let radial = entry - circle.center();
    let travel = incoming.direction();
    let end_angle = if radial.perp(&travel) > 0.0 {
        theta_in + ccw_delta(theta_in, theta_out)
    } else {
        theta_in - cw_delta(theta_in, theta_out)
    };

    Arc::new(circle, theta_in, end_angle)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArclineError;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-9;

    fn waypoints(data: &[(f64, f64, f64)]) -> Vec<Waypoint> {
        data.iter()
            .map(|&(x, y, r)| Waypoint::new(Point2::new(x, y), r))
            .collect()
    }

    fn on_circle(p: Point2, c: Circle) -> bool {
        ((p - c.center()).norm() - c.radius()).abs() < TOL
    }

    #[test]
    fn equal_radii_horizontal_tangent() {
        // Two unit circles 5 apart on the x-axis: the tangent is horizontal.
        let road = BuildTangentRoad::new(waypoints(&[(0.0, 0.0, 1.0), (5.0, 0.0, 1.0)]))
            .execute()
            .unwrap();
        assert_eq!(road.tangents().len(), 1);
        assert!(road.fillets().is_empty());
        let t = road.tangents()[0];
        assert_relative_eq!(t.start().y, 1.0, epsilon = TOL);
        assert_relative_eq!(t.end().y, 1.0, epsilon = TOL);
        assert_relative_eq!(t.start().x, 0.0, epsilon = TOL);
        assert_relative_eq!(t.end().x, 5.0, epsilon = TOL);
    }

    #[test]
    fn tangent_points_lie_on_circles() {
        let wps = waypoints(&[(1.0, 1.0, 1.0), (4.0, 2.0, 1.5), (7.0, -3.0, 2.0)]);
        let road = BuildTangentRoad::new(wps.clone()).execute().unwrap();

        for (i, t) in road.tangents().iter().enumerate() {
            let c1 = Circle::new(wps[i].center, wps[i].radius).unwrap();
            let c2 = Circle::new(wps[i + 1].center, wps[i + 1].radius).unwrap();
            assert!(on_circle(t.start(), c1), "tangent {i} start off circle");
            assert!(on_circle(t.end(), c2), "tangent {i} end off circle");

            // Tangency: the segment is perpendicular to each radius.
            let dir = t.direction();
            let r1 = t.start() - c1.center();
            let r2 = t.end() - c2.center();
            assert!(dir.dot(&r1).abs() < TOL, "not tangent at start of {i}");
            assert!(dir.dot(&r2).abs() < TOL, "not tangent at end of {i}");
        }
    }

    #[test]
    fn fillet_joins_tangents_continuously() {
        let wps = waypoints(&[(1.0, 1.0, 1.0), (4.0, 2.0, 1.5), (7.0, -3.0, 2.0)]);
        let road = BuildTangentRoad::new(wps).execute().unwrap();
        assert_eq!(road.fillets().len(), 1);

        let fillet = road.fillets()[0];
        let incoming = road.tangents()[0];
        let outgoing = road.tangents()[1];

        // Fillet endpoints meet the tangent points exactly.
        assert!((fillet.start_point() - incoming.end()).norm() < TOL);
        assert!((fillet.end_point() - outgoing.start()).norm() < TOL);

        // Direction is continuous at both joints.
        assert!((fillet.tangent_at(0.0) - incoming.direction()).norm() < 1e-6);
        assert!((fillet.tangent_at(1.0) - outgoing.direction()).norm() < 1e-6);
    }

    #[test]
    fn five_waypoint_road_shape() {
        // The classic interchange data set: 5 circles, 4 tangents, 3 fillets.
        let wps = waypoints(&[
            (1.0, 1.0, 1.0),
            (4.0, 2.0, 1.5),
            (7.0, -3.0, 2.0),
            (2.0, -6.0, 2.2),
            (-4.0, -1.0, 3.0),
        ]);
        let road = BuildTangentRoad::new(wps).execute().unwrap();
        assert_eq!(road.tangents().len(), 4);
        assert_eq!(road.fillets().len(), 3);

        let path = road.to_path();
        assert_eq!(path.len(), 7);

        // The interleaved path is connected end to end.
        for pair in path.elements().windows(2) {
            assert!(
                (pair[0].end_point() - pair[1].start_point()).norm() < TOL,
                "disconnected joint"
            );
        }
    }

    #[test]
    fn decreasing_radii_stay_tangent() {
        // A bump road: small, large, small. The second pair has r2 < r1,
        // which flips the sign of the projection scale.
        let wps = waypoints(&[(0.0, 0.0, 1.0), (5.0, 0.0, 3.0), (10.0, 0.0, 1.0)]);
        let road = BuildTangentRoad::new(wps.clone()).execute().unwrap();

        for (i, t) in road.tangents().iter().enumerate() {
            let c1 = Circle::new(wps[i].center, wps[i].radius).unwrap();
            let c2 = Circle::new(wps[i + 1].center, wps[i + 1].radius).unwrap();
            assert!(on_circle(t.start(), c1), "tangent {i} start off circle");
            assert!(on_circle(t.end(), c2), "tangent {i} end off circle");
            let dir = t.direction();
            assert!(dir.dot(&(t.start() - c1.center())).abs() < TOL);
            assert!(dir.dot(&(t.end() - c2.center())).abs() < TOL);
            // Both tangents run along the top of the bump.
            assert!(t.start().y > 0.0 && t.end().y > 0.0);
        }

        // The fillet crosses the top of the middle circle: a short sweep
        // through (5, 3).
        let fillet = road.fillets()[0];
        let apex = fillet.point_at(0.5);
        assert_relative_eq!(apex.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(apex.y, 3.0, epsilon = 1e-9);
        assert!(fillet.sweep().abs() < std::f64::consts::PI);
    }

    #[test]
    fn nested_circles_unreachable() {
        let r = BuildTangentRoad::new(waypoints(&[(0.0, 0.0, 5.0), (1.0, 0.0, 1.0)])).execute();
        assert!(matches!(
            r,
            Err(ArclineError::Road(RoadError::TangentUnreachable {
                index: 0,
                ..
            }))
        ));
    }

    #[test]
    fn coincident_centers_rejected() {
        let r = BuildTangentRoad::new(waypoints(&[(1.0, 1.0, 1.0), (1.0, 1.0, 2.0)])).execute();
        assert!(matches!(
            r,
            Err(ArclineError::Road(RoadError::CoincidentCenters { index: 0 }))
        ));
    }

    #[test]
    fn single_waypoint_rejected() {
        let r = BuildTangentRoad::new(waypoints(&[(0.0, 0.0, 1.0)])).execute();
        assert!(matches!(
            r,
            Err(ArclineError::Road(RoadError::TooFewWaypoints(1)))
        ));
    }

    #[test]
    fn left_turn_wraps_the_long_way() {
        // Equal radii, road bending left: the tangents run along the left
        // side, so continuity forces the long clockwise sweep around the
        // middle circle.
        let wps = waypoints(&[(0.0, 0.0, 1.0), (5.0, 0.0, 1.0), (10.0, 5.0, 1.0)]);
        let road = BuildTangentRoad::new(wps).execute().unwrap();
        let fillet = road.fillets()[0];
        assert!(!fillet.is_ccw());
        assert!(fillet.sweep().abs() > std::f64::consts::PI);
        // Continuity still holds at both ends.
        assert!((fillet.tangent_at(0.0) - road.tangents()[0].direction()).norm() < 1e-9);
        assert!((fillet.tangent_at(1.0) - road.tangents()[1].direction()).norm() < 1e-9);
    }
}
