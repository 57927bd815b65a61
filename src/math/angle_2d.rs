/// Wrapped-angle helpers for arcs.
///
/// Angles are in radians, measured counter-clockwise from the positive
/// x-axis. A sweep is a signed angular delta: positive = counter-clockwise,
/// negative = clockwise.
use std::f64::consts::TAU;

/// Normalizes an angle to `[0, 2π)`.
#[must_use]
pub fn wrap_tau(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself when the input is a tiny negative.
    if wrapped >= TAU {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Returns the counter-clockwise delta from `from` to `to`, in `[0, 2π)`.
#[must_use]
pub fn ccw_delta(from: f64, to: f64) -> f64 {
    wrap_tau(to - from)
}

/// Returns the clockwise delta from `from` to `to`, in `[0, 2π)`.
#[must_use]
pub fn cw_delta(from: f64, to: f64) -> f64 {
    wrap_tau(from - to)
}

/// Checks if an angle falls within a sweep starting at `start_angle`.
///
/// Comparison happens in wrapped angle space, so sweeps that cross the
/// ±π boundary are handled correctly.
#[must_use]
pub fn angle_in_sweep(angle: f64, start_angle: f64, sweep: f64) -> bool {
    let eps = 1e-10;
    if sweep >= 0.0 {
        ccw_delta(start_angle, angle) <= sweep + eps
    } else {
        cw_delta(start_angle, angle) <= -sweep + eps
    }
}
