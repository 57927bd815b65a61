//! Builds a five-circle road, samples it, and re-segments the samples.
//!
//! Run with `cargo run --example road`; set `RUST_LOG=arcline=trace` to see
//! the segmentation windows.

use arcline::math::Point2;
use arcline::operations::{BuildTangentRoad, SegmentPath, SegmentParams, Waypoint};
use arcline::sampling::{sample_path, SamplingParams};

fn main() -> arcline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let waypoints = vec![
        Waypoint::new(Point2::new(1.0, 1.0), 1.0),
        Waypoint::new(Point2::new(4.0, 2.0), 1.5),
        Waypoint::new(Point2::new(7.0, -3.0), 2.0),
        Waypoint::new(Point2::new(2.0, -6.0), 2.2),
        Waypoint::new(Point2::new(-4.0, -1.0), 3.0),
    ];

    let road = BuildTangentRoad::new(waypoints).execute()?;
    println!(
        "road: {} tangents, {} fillets",
        road.tangents().len(),
        road.fillets().len()
    );
    for (i, tangent) in road.tangents().iter().enumerate() {
        println!(
            "  tangent {i}: ({:7.3}, {:7.3}) -> ({:7.3}, {:7.3})",
            tangent.start().x,
            tangent.start().y,
            tangent.end().x,
            tangent.end().y
        );
    }
    for (i, fillet) in road.fillets().iter().enumerate() {
        println!(
            "  fillet {i}: r = {:.3}, sweep = {:7.2} deg",
            fillet.circle().radius(),
            fillet.sweep().to_degrees()
        );
    }

    let path = road.to_path();
    let samples = sample_path(&path, &SamplingParams::default())?;
    println!(
        "sampled {} points over {} elements ({:.3} units of road)",
        samples.len(),
        path.len(),
        path.total_length()
    );

    // Round trip: the sampled tangent runs come back as straight segments.
    let first_tangent = &samples[..SamplingParams::default().samples_per_element];
    let decomposed = SegmentPath::new(SegmentParams::default()).execute(first_tangent)?;
    println!(
        "re-segmented first tangent into {} element(s)",
        decomposed.len()
    );

    Ok(())
}
