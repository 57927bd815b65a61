use tracing::trace;

use crate::error::{ArclineError, FitError, Result, SegmentationError};
use crate::geometry::{Path, PathElement, Segment};
use crate::math::regress_2d::LineFit;
use crate::math::Point2;

use super::fit_arc::arc_through_points;

/// Parameters controlling line/curve segmentation.
#[derive(Debug, Clone, Copy)]
pub struct SegmentParams {
    /// Initial window length for each regression run.
    pub min_window: usize,
    /// A window is "straight enough" while its r² stays at or above this.
    pub r_squared_threshold: f64,
    /// Runs shorter than this are reclassified as curves.
    pub min_line_span: usize,
    /// How many points the next window shares with the previous run.
    pub overlap: usize,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            min_window: 3,
            r_squared_threshold: 0.95,
            min_line_span: 5,
            overlap: 1,
        }
    }
}

/// Decomposes an ordered point sequence into straight segments and arcs.
///
/// # Algorithm
///
/// A rolling window starts at `min_window` points and greedily grows while
/// the linear regression over it stays above `r_squared_threshold`. When
/// growth stops, the window (excluding the point that broke the fit) is one
/// run: straight runs of at least `min_line_span` points become a single
/// [`Segment`] positioned on the regression line; shorter runs are curves
/// and are fitted with arcs, three points at a time advancing by two. The
/// next window starts `overlap` points before the previous run's end.
#[derive(Debug)]
pub struct SegmentPath {
    params: SegmentParams,
}

impl SegmentPath {
    /// Creates a new segmentation operation.
    #[must_use]
    pub fn new(params: SegmentParams) -> Self {
        Self { params }
    }

    /// Executes the segmentation over `points`.
    ///
    /// # Errors
    ///
    /// - [`SegmentationError::InvalidParams`] for an unusable parameter set.
    /// - [`SegmentationError::InsufficientPoints`] when the input is shorter
    ///   than `min_window`.
    /// - [`SegmentationError::DegenerateRegression`] when a window has zero
    ///   x-variance (vertical point run).
    pub fn execute(&self, points: &[Point2]) -> Result<Path> {
        let p = &self.params;
        self.validate_params()?;

        let n = points.len();
        if n < p.min_window {
            return Err(SegmentationError::InsufficientPoints {
                got: n,
                min: p.min_window,
            }
            .into());
        }

        let mut elements: Vec<PathElement> = Vec::new();
        let mut start = 0;

        loop {
            let init_end = (start + p.min_window).min(n);
            let mut fit = LineFit::over(&points[start..init_end]);
            if fit.is_degenerate() {
                return Err(SegmentationError::DegenerateRegression {
                    start,
                    end: init_end,
                }
                .into());
            }

            let mut end = init_end;
            while end < n && fit.r_squared() >= p.r_squared_threshold {
                let grown = {
                    let mut g = fit;
                    g.push(points[end]);
                    g
                };
                if grown.r_squared() < p.r_squared_threshold {
                    // points[end] breaks the fit; the run stops before it.
                    break;
                }
                fit = grown;
                end += 1;
            }

            let run = &points[start..end];
            trace!(
                start,
                end,
                r_squared = fit.r_squared(),
                straight = run.len() >= p.min_line_span,
                "window stopped growing"
            );

            if run.len() >= p.min_line_span {
                // Position the segment on the regression line, not the raw
                // endpoints.
                let x0 = run[0].x;
                let x1 = run[run.len() - 1].x;
                let segment = Segment::new(
                    Point2::new(x0, fit.value_at(x0)),
                    Point2::new(x1, fit.value_at(x1)),
                )?;
                elements.push(segment.into());
            } else {
                emit_curve_run(run, &mut elements)?;
            }

            if end >= n {
                break;
            }
            start = end - p.overlap;
        }

        Ok(Path::from_elements(elements))
    }

    fn validate_params(&self) -> Result<()> {
        let p = &self.params;
        if p.min_window < 2 {
            return Err(
                SegmentationError::InvalidParams("min_window must be at least 2".into()).into(),
            );
        }
        if p.overlap == 0 || p.overlap >= p.min_window {
            return Err(SegmentationError::InvalidParams(
                "overlap must be in 1..min_window".into(),
            )
            .into());
        }
        if p.r_squared_threshold <= 0.0 || p.r_squared_threshold > 1.0 {
            return Err(SegmentationError::InvalidParams(
                "r_squared_threshold must be in (0, 1]".into(),
            )
            .into());
        }
        Ok(())
    }
}

/// Emits arcs for a curve run, three points at a time advancing by two.
///
/// Collinear triples are emitted as the straight segment over their
/// endpoints. Two-point runs and the leftover point of an even-length run
/// are joined with straight segments so the run's index range stays fully
/// covered.
fn emit_curve_run(points: &[Point2], elements: &mut Vec<PathElement>) -> Result<()> {
    let len = points.len();
    if len == 2 {
        elements.push(Segment::new(points[0], points[1])?.into());
        return Ok(());
    }

    let mut i = 0;
    while i + 2 < len {
        match arc_through_points(points[i], points[i + 1], points[i + 2]) {
            Ok(arc) => elements.push(arc.into()),
            Err(ArclineError::Fit(FitError::CollinearPoints)) => {
                elements.push(Segment::new(points[i], points[i + 2])?.into());
            }
            Err(e) => return Err(e),
        }
        i += 2;
    }

    if i + 1 < len {
        elements.push(Segment::new(points[i], points[i + 1])?.into());
    }
    Ok(())
}
