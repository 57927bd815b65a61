use crate::error::{Result, SamplingError};
use crate::geometry::{Path, PathElement};
use crate::math::Point2;

/// Parameters controlling path sampling density.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Number of points emitted per path element, endpoints included.
    pub samples_per_element: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            samples_per_element: 20,
        }
    }
}

/// Samples a path into a flat, ordered point sequence.
///
/// Each element contributes `samples_per_element` evenly spaced points,
/// inclusive of both endpoints: segments are interpolated linearly, arcs
/// at evenly spaced angles along their recorded sweep direction.
///
/// # Errors
///
/// [`SamplingError::TooFewSamples`] when `samples_per_element < 2`.
pub fn sample_path(path: &Path, params: &SamplingParams) -> Result<Vec<Point2>> {
    let per_element = params.samples_per_element;
    if per_element < 2 {
        return Err(SamplingError::TooFewSamples(per_element).into());
    }

    let mut points = Vec::with_capacity(path.len() * per_element);
    for element in path {
        sample_into(element, per_element, &mut points);
    }
    Ok(points)
}

/// Samples a single path element.
///
/// # Errors
///
/// [`SamplingError::TooFewSamples`] when `samples < 2`.
pub fn sample_element(element: &PathElement, samples: usize) -> Result<Vec<Point2>> {
    if samples < 2 {
        return Err(SamplingError::TooFewSamples(samples).into());
    }
    let mut points = Vec::with_capacity(samples);
    sample_into(element, samples, &mut points);
    Ok(points)
}

#[allow(clippy::cast_precision_loss)]
fn sample_into(element: &PathElement, samples: usize, out: &mut Vec<Point2>) {
    let denominator = (samples - 1) as f64;
    for k in 0..samples {
        let t = k as f64 / denominator;
        let p = match element {
            PathElement::Segment(segment) => segment.point_at(t),
            PathElement::Arc(arc) => arc.point_at(t),
        };
        out.push(p);
    }
}
