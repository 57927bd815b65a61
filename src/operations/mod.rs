mod fit_arc;
mod segment_path;
mod tangent_road;

pub use fit_arc::{
    arc_through_points, arcs_through_points, circumscribed_circle, curvature_profile,
};
pub use segment_path::{SegmentParams, SegmentPath};
pub use tangent_road::{BuildTangentRoad, Road, Waypoint};
