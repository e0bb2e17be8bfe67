//! Shared numeric tolerance.
//!
//! Every "is this zero?" decision in the workspace goes through [`is_zero`],
//! so classification of roots, determinants, and verification residuals all
//! agree on the same threshold.

/// Absolute threshold below which a value is treated as zero.
pub const EPSILON: f64 = 1e-10;

/// Returns `true` if `value` is within [`EPSILON`] of zero.
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    is_zero(a - b)
}

/// Returns `true` if `value` is finite and within [`EPSILON`] of an integer.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && is_zero(value - value.round())
}

/// Snaps values that are within [`EPSILON`] of an integer onto that integer.
///
/// Also turns `-0.0` into `0.0` so rendered output never shows a signed zero.
#[must_use]
pub fn snap(value: f64) -> f64 {
    let rounded = value.round();
    if is_zero(value - rounded) {
        rounded + 0.0
    } else {
        value
    }
}
