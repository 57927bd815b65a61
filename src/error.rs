use thiserror::Error;

/// Top-level error type for the arcline kernel.
#[derive(Debug, Error)]
pub enum ArclineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Segmentation(#[from] SegmentationError),

    #[error(transparent)]
    Road(#[from] RoadError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Errors related to geometric value construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors from fitting circles and arcs through points.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("cannot fit a circle through collinear points")]
    CollinearPoints,

    #[error("circle fit failed numerically: squared radius = {0}")]
    NumericalFailure(f64),
}

/// Errors from segmenting a point sequence into lines and curves.
#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("invalid segmentation parameters: {0}")]
    InvalidParams(String),

    #[error("insufficient points: got {got}, need at least {min}")]
    InsufficientPoints { got: usize, min: usize },

    #[error("degenerate regression: zero x-variance in window [{start}, {end})")]
    DegenerateRegression { start: usize, end: usize },
}

/// Errors from tangent road construction.
#[derive(Debug, Error)]
pub enum RoadError {
    #[error("a road needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("waypoint pair {index} has coincident centers")]
    CoincidentCenters { index: usize },

    #[error(
        "no external tangent for waypoint pair {index}: \
         center distance {d} < radius delta {radius_delta}"
    )]
    TangentUnreachable {
        index: usize,
        d: f64,
        radius_delta: f64,
    },
}

/// Errors from sampling a path into points.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("samples per element must be at least 2, got {0}")]
    TooFewSamples(usize),
}

/// Convenience type alias for results using [`ArclineError`].
pub type Result<T> = std::result::Result<T, ArclineError>;
