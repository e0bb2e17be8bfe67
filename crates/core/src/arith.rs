//! Integer helpers used by factoring and the Rational Root Theorem.

use crate::{
    poly::trim,
    tolerance::{approx_eq, is_integral},
};

/// Largest integer magnitude whose divisors are enumerated.
///
/// Trial division up to `√n` stays below about 32 000 steps at this bound.
pub const MAX_DIVISOR_MAGNITUDE: f64 = 1e9;

/// Decimal places cleared by scaling before candidates are generated.
const MAX_DECIMAL_PLACES: i32 = 2;

/// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Greatest common divisor of two integral values.
///
/// Non-integral inputs, and integers too large to be exact in an `f64`, have
/// no useful common divisor, so the result is `1.0`. `gcd(0, 0)` is `0.0`.
#[must_use]
pub fn gcd(a: f64, b: f64) -> f64 {
    let (Some(mut a), Some(mut b)) = (
        integer_magnitude(a, MAX_EXACT_INTEGER),
        integer_magnitude(b, MAX_EXACT_INTEGER),
    ) else {
        return 1.0;
    };
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as f64
}

/// Positive divisors of `n`, ascending. `factors_of(0)` is `[1]`.
#[must_use]
pub fn factors_of(n: u64) -> Vec<u64> {
    if n == 0 {
        return vec![1];
    }
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// Every `±p/q` with `p | constant` and `q | leading`.
///
/// Candidates are ordered by magnitude with the positive value first, and
/// duplicates such as `2/2` and `1/1` appear once.
///
/// The theorem only speaks about integer polynomials. Coefficients with at
/// most two decimal places are scaled by a power of ten first, which keeps
/// the roots; otherwise the list is empty. It is also empty when the scaled
/// leading or constant term exceeds [`MAX_DIVISOR_MAGNITUDE`]. Callers then
/// fall back to locating zeros numerically.
#[must_use]
pub fn rational_root_candidates(coeffs: &[f64]) -> Vec<f64> {
    let Some(coeffs) = integer_coefficients(trim(coeffs)) else {
        return Vec::new();
    };
    let (Some(leading), Some(constant)) = (
        coeffs
            .first()
            .and_then(|&c| integer_magnitude(c, MAX_DIVISOR_MAGNITUDE)),
        coeffs
            .last()
            .and_then(|&c| integer_magnitude(c, MAX_DIVISOR_MAGNITUDE)),
    ) else {
        return Vec::new();
    };

    let mut candidates: Vec<f64> = Vec::new();
    for q in factors_of(leading) {
        for p in factors_of(constant) {
            let value = p as f64 / q as f64;
            if !candidates.iter().any(|&c| approx_eq(c, value)) {
                candidates.push(value);
            }
        }
    }
    candidates.sort_by(f64::total_cmp);
    candidates
        .into_iter()
        .flat_map(|value| [value, -value])
        .collect()
}

/// The coefficients scaled by the smallest power of ten that makes them all
/// integers, if one within [`MAX_DECIMAL_PLACES`] exists.
fn integer_coefficients(coeffs: &[f64]) -> Option<Vec<f64>> {
    (0..=MAX_DECIMAL_PLACES)
        .map(|places| 10_f64.powi(places))
        .find_map(|scale| {
            let scaled: Vec<f64> = coeffs.iter().map(|c| c * scale).collect();
            scaled
                .iter()
                .all(|&c| is_integral(c))
                .then(|| scaled.into_iter().map(f64::round).collect())
        })
}

/// `|value|` as an integer, if `value` is integral and at most `limit`.
#[must_use]
pub fn integer_magnitude(value: f64, limit: f64) -> Option<u64> {
    let magnitude = value.abs().round();
    (is_integral(value) && magnitude <= limit).then_some(magnitude as u64)
}
