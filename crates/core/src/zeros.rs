//! Locating real zeros: exact rational roots first, then closed forms or
//! bisection between turning points.

use serde::Serialize;

use crate::{
    arith::rational_root_candidates,
    bisection::{self, refine_root},
    poly::{
        cauchy_bound, degree, derivative, discriminant, evaluate, is_root, synthetic_division, trim,
    },
    tolerance::{is_zero, snap},
};

/// Distance below which two located zeros are considered the same.
const MERGE_TOL: f64 = 1e-6;

/// Outcome of applying the Rational Root Theorem with repeated deflation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RationalRoots {
    /// Candidates `±p/q` tested, in testing order.
    pub candidates: Vec<f64>,
    /// Rational roots found, ascending and repeated by multiplicity.
    pub roots: Vec<f64>,
    /// What remains after dividing out every root found.
    pub quotient: Vec<f64>,
}

impl RationalRoots {
    /// Distinct roots, ascending.
    #[must_use]
    pub fn distinct(&self) -> Vec<f64> {
        let mut distinct = self.roots.clone();
        distinct.dedup_by(|a, b| is_zero(*a - *b));
        distinct
    }
}

/// Finds every rational root, deflating the polynomial after each one.
///
/// A zero constant term contributes the root `0` and is factored out before
/// candidates are generated.
#[must_use]
pub fn rational_roots(coeffs: &[f64]) -> RationalRoots {
    let mut quotient = trim(coeffs).to_vec();
    let mut roots = Vec::new();

    while quotient.len() > 1 && quotient.last().is_some_and(|&c| is_zero(c)) {
        quotient.pop();
        roots.push(0.0);
    }

    let candidates = if quotient.len() > 1 {
        rational_root_candidates(&quotient)
    } else {
        Vec::new()
    };

    for &candidate in &candidates {
        while quotient.len() > 1 && is_root(&quotient, candidate) {
            roots.push(candidate);
            quotient = synthetic_division(&quotient, candidate)
                .quotient
                .into_iter()
                .map(snap)
                .collect();
        }
    }

    roots.sort_by(f64::total_cmp);
    RationalRoots {
        candidates,
        roots,
        quotient,
    }
}

/// All distinct real zeros of a polynomial, ascending.
///
/// Rational roots are exact. A linear or quadratic remainder is solved in
/// closed form. Higher remainders are split at their critical points, which
/// are themselves found recursively; between two neighbouring critical points
/// the polynomial is monotonic, so each piece holds at most one zero, and a
/// sign change across it is refined by bisection. A critical point that is a
/// root is a zero of even multiplicity.
#[must_use]
pub fn real_zeros(coeffs: &[f64]) -> Vec<f64> {
    let coeffs = trim(coeffs);
    if degree(coeffs) == 0 {
        return Vec::new();
    }

    let rational = rational_roots(coeffs);
    let mut zeros = rational.distinct();
    let rest = rational.quotient;
    if degree(&rest) >= 1 {
        zeros.extend(numerical_zeros(&rest));
    }

    zeros.sort_by(f64::total_cmp);
    zeros.dedup_by(|a, b| (*a - *b).abs() < MERGE_TOL);
    zeros.into_iter().map(snap).collect()
}

fn numerical_zeros(coeffs: &[f64]) -> Vec<f64> {
    match *trim(coeffs) {
        [] | [_] => Vec::new(),
        [a, b] => vec![-b / a],
        [a, b, c] => quadratic_zeros(a, b, c),
        ref coeffs => bracketed_zeros(coeffs),
    }
}

fn quadratic_zeros(a: f64, b: f64, c: f64) -> Vec<f64> {
    let disc = discriminant(a, b, c);
    if is_zero(disc) {
        return vec![-b / (2.0 * a)];
    }
    if disc < 0.0 {
        return Vec::new();
    }

    // Adding terms of equal sign avoids cancellation in the smaller root.
    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let mut zeros = vec![q / a, c / q];
    zeros.sort_by(f64::total_cmp);
    zeros
}

fn bracketed_zeros(coeffs: &[f64]) -> Vec<f64> {
    let bound = cauchy_bound(coeffs);
    let config = bisection::Config::default();

    let mut points = vec![-bound];
    points.extend(
        real_zeros(&derivative(coeffs))
            .into_iter()
            .filter(|x| x.abs() < bound),
    );
    points.push(bound);

    let mut zeros: Vec<f64> = points
        .iter()
        .copied()
        .filter(|&x| is_root(coeffs, x))
        .collect();

    for pair in points.windows(2) {
        let [left, right] = [pair[0], pair[1]];
        if is_root(coeffs, left) || is_root(coeffs, right) {
            continue;
        }
        if evaluate(coeffs, left) * evaluate(coeffs, right) < 0.0 {
            if let Ok(solution) = refine_root(coeffs, [left, right], &config) {
                zeros.push(solution.x);
            }
        }
    }
    zeros
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rational_roots_of_monic_cubic() {
        let result = rational_roots(&[1.0, -6.0, 11.0, -6.0]);
        assert_eq!(result.roots, vec![1.0, 2.0, 3.0]);
        assert_eq!(result.quotient, vec![1.0]);
    }

    #[test]
    fn rational_roots_track_multiplicity() {
        // (x - 1)²(x + 2) = x³ - 3x + 2
        let result = rational_roots(&[1.0, 0.0, -3.0, 2.0]);
        assert_eq!(result.roots, vec![-2.0, 1.0, 1.0]);
        assert_eq!(result.distinct(), vec![-2.0, 1.0]);
    }

    #[test]
    fn zero_constant_contributes_zero_root() {
        let result = rational_roots(&[1.0, -1.0, 0.0]);
        assert_eq!(result.roots, vec![0.0, 1.0]);
    }

    #[test]
    fn irrational_zeros_found_numerically() {
        let zeros = real_zeros(&[1.0, 0.0, -2.0]);
        assert_eq!(zeros.len(), 2);
        assert_relative_eq!(zeros[0], -(2.0_f64.sqrt()), epsilon = 1e-9);
        assert_relative_eq!(zeros[1], 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn double_irrational_zero_found_through_critical_points() {
        // (x² - 2)² touches the axis without crossing it
        let zeros = real_zeros(&[1.0, 0.0, -4.0, 0.0, 4.0]);
        assert_eq!(zeros.len(), 2);
        assert_relative_eq!(zeros[1], 2.0_f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn close_irrational_zeros_are_both_found() {
        // x² - 2x + 0.999999 = (x - 1)² - 1e-6
        let zeros = real_zeros(&[1.0, -2.0, 0.999_999]);
        assert_eq!(zeros.len(), 2);
        assert_relative_eq!(zeros[0], 0.999, epsilon = 1e-9);
        assert_relative_eq!(zeros[1], 1.001, epsilon = 1e-9);
    }

    #[test]
    fn close_zeros_of_a_quartic_are_separated_by_turning_points() {
        // (x² - 2x + 0.999999)(x² + 1)
        let zeros = real_zeros(&[1.0, -2.0, 1.999_999, -2.0, 0.999_999]);
        assert_eq!(zeros.len(), 2);
        assert_relative_eq!(zeros[0], 0.999, epsilon = 1e-7);
        assert_relative_eq!(zeros[1], 1.001, epsilon = 1e-7);
    }

    #[test]
    fn no_real_zeros() {
        assert!(real_zeros(&[1.0, 0.0, 1.0]).is_empty());
        assert!(real_zeros(&[5.0]).is_empty());
    }
}
