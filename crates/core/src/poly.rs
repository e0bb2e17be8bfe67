//! Polynomial arithmetic on dense coefficient slices.
//!
//! Coefficients are always ordered from the leading term down to the constant,
//! so `[1.0, -3.0, 2.0]` is `x² - 3x + 2`.

use nalgebra::Complex;
use serde::Serialize;

use crate::{
    Error,
    tolerance::{is_zero, snap},
};

/// Evaluates a polynomial at `x` using Horner's scheme.
///
/// An empty slice is the zero polynomial.
#[must_use]
pub fn evaluate(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluates a polynomial at a complex point using Horner's scheme.
#[must_use]
pub fn evaluate_complex(coeffs: &[f64], z: Complex<f64>) -> Complex<f64> {
    coeffs
        .iter()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z + c)
}

/// Returns `true` if `x` is a root of the polynomial.
///
/// The residual is measured relative to the magnitude of the terms being
/// summed, so roots of polynomials with large coefficients are not rejected
/// because of ordinary rounding.
#[must_use]
pub fn is_root(coeffs: &[f64], x: f64) -> bool {
    let scale = coeffs
        .iter()
        .fold(0.0, |acc: f64, &c| acc * x.abs() + c.abs())
        .max(1.0);
    is_zero(evaluate(coeffs, x) / scale)
}

/// Strips leading coefficients that are ≈ 0.
///
/// The zero polynomial keeps its final coefficient so it still has degree 0.
#[must_use]
pub fn trim(coeffs: &[f64]) -> &[f64] {
    match coeffs.iter().position(|&c| !is_zero(c)) {
        Some(start) => &coeffs[start..],
        None => &coeffs[coeffs.len().saturating_sub(1)..],
    }
}

/// Returns the degree of a polynomial after trimming leading zeros.
#[must_use]
pub fn degree(coeffs: &[f64]) -> usize {
    trim(coeffs).len().saturating_sub(1)
}

/// Returns the discriminant `b² - 4ac` of `ax² + bx + c`.
#[must_use]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Returns the coefficients of the derivative.
#[must_use]
pub fn derivative(coeffs: &[f64]) -> Vec<f64> {
    let coeffs = trim(coeffs);
    let n = coeffs.len().saturating_sub(1);
    if n == 0 {
        return vec![0.0];
    }
    coeffs[..n]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * (n - i) as f64)
        .collect()
}

/// Upper bound on the magnitude of every root (Cauchy's bound).
///
/// Returns `0.0` for constants, which have no roots to bound.
#[must_use]
pub fn cauchy_bound(coeffs: &[f64]) -> f64 {
    let coeffs = trim(coeffs);
    let Some((&lead, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    if rest.is_empty() {
        return 0.0;
    }
    1.0 + rest
        .iter()
        .map(|c| (c / lead).abs())
        .fold(0.0, f64::max)
}

/// Result of dividing a polynomial by `(x - root)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticDivision {
    /// Quotient coefficients, one degree lower than the dividend.
    pub quotient: Vec<f64>,
    /// Remainder, equal to the dividend evaluated at `root`.
    pub remainder: f64,
}

/// Divides a polynomial by the linear factor `(x - root)`.
///
/// The running sums of Horner's scheme are the quotient coefficients, and the
/// final sum is the remainder, so `remainder == evaluate(coeffs, root)`.
#[must_use]
pub fn synthetic_division(coeffs: &[f64], root: f64) -> SyntheticDivision {
    let mut sums = Vec::with_capacity(coeffs.len());
    let mut acc = 0.0;
    for &c in coeffs {
        acc = acc * root + c;
        sums.push(acc);
    }
    let remainder = sums.pop().unwrap_or(0.0);
    if sums.is_empty() {
        sums.push(0.0);
    }
    SyntheticDivision {
        quotient: sums,
        remainder,
    }
}

/// One subtraction step of polynomial long division.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionRow {
    /// Coefficient of the quotient term produced by this step.
    pub term: f64,
    /// Power of `x` carried by the quotient term.
    pub power: usize,
    /// `term·x^power` multiplied by the divisor.
    pub product: Vec<f64>,
    /// What is left of the dividend after subtracting `product`.
    pub remainder: Vec<f64>,
}

/// Quotient, remainder, and subtraction trace of a long division.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongDivision {
    pub quotient: Vec<f64>,
    pub remainder: Vec<f64>,
    pub rows: Vec<DivisionRow>,
}

/// Divides `dividend` by `divisor` so that `dividend = divisor·quotient + remainder`.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if the divisor is the zero polynomial.
pub fn long_division(dividend: &[f64], divisor: &[f64]) -> Result<LongDivision, Error> {
    let divisor = trim(divisor);
    let lead = divisor.first().copied().unwrap_or(0.0);
    if is_zero(lead) {
        return Err(Error::InvalidCoefficient {
            name: "divisor leading coefficient",
            value: lead,
        });
    }

    let mut work = trim(dividend).to_vec();
    let m = divisor.len() - 1;
    if work.len() <= m {
        return Ok(LongDivision {
            quotient: vec![0.0],
            remainder: work,
            rows: Vec::new(),
        });
    }

    let steps = work.len() - m;
    let mut quotient = Vec::with_capacity(steps);
    let mut rows = Vec::with_capacity(steps);
    for i in 0..steps {
        let term = snap(work[i] / lead);
        let power = steps - 1 - i;
        for (j, &d) in divisor.iter().enumerate() {
            work[i + j] = snap(work[i + j] - term * d);
        }
        work[i] = 0.0;

        let mut product: Vec<f64> = divisor.iter().map(|&d| snap(term * d)).collect();
        product.resize(divisor.len() + power, 0.0);
        rows.push(DivisionRow {
            term,
            power,
            product,
            remainder: trim(&work[i + 1..]).to_vec(),
        });
        quotient.push(term);
    }

    let remainder = trim(&work[steps..]).to_vec();
    Ok(LongDivision {
        quotient,
        remainder: if remainder.is_empty() {
            vec![0.0]
        } else {
            remainder
        },
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn horner_matches_direct_expansion() {
        let coeffs = [2.0, -3.0, 0.0, 5.0];
        let x = 1.5;
        let direct = 2.0 * x * x * x - 3.0 * x * x + 5.0;
        assert_relative_eq!(evaluate(&coeffs, x), direct);
        assert_eq!(evaluate(&[], 3.0), 0.0);
    }

    #[test]
    fn complex_evaluation_finds_imaginary_roots() {
        // x² + 1 vanishes at ±i
        let value = evaluate_complex(&[1.0, 0.0, 1.0], Complex::new(0.0, 1.0));
        assert!(is_zero(value.re) && is_zero(value.im));
    }

    #[test]
    fn trims_leading_zeros() {
        assert_eq!(trim(&[0.0, 0.0, 1.0, 2.0]), &[1.0, 2.0]);
        assert_eq!(trim(&[0.0, 0.0]), &[0.0]);
        assert_eq!(degree(&[0.0, 3.0, 1.0]), 1);
    }

    #[test]
    fn derivative_of_cubic() {
        assert_eq!(derivative(&[1.0, -6.0, 11.0, -6.0]), vec![3.0, -12.0, 11.0]);
        assert_eq!(derivative(&[4.0]), vec![0.0]);
    }

    #[test]
    fn synthetic_division_remainder_is_value_at_root() {
        let coeffs = [1.0, -6.0, 11.0, -6.0];
        let result = synthetic_division(&coeffs, 1.0);
        assert_eq!(result.quotient, vec![1.0, -5.0, 6.0]);
        assert_eq!(result.remainder, 0.0);

        let result = synthetic_division(&coeffs, 4.0);
        assert_relative_eq!(result.remainder, evaluate(&coeffs, 4.0));
    }

    #[test]
    fn long_division_with_remainder() {
        // (x³ - 2x² + 4) / (x - 3) = x² + x + 3 remainder 13
        let result = long_division(&[1.0, -2.0, 0.0, 4.0], &[1.0, -3.0]).expect("should divide");
        assert_eq!(result.quotient, vec![1.0, 1.0, 3.0]);
        assert_eq!(result.remainder, vec![13.0]);
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.rows[0].power, 2);
        assert_eq!(result.rows[0].product, vec![1.0, -3.0, 0.0, 0.0]);
    }

    #[test]
    fn long_division_by_higher_degree_leaves_dividend() {
        let result = long_division(&[1.0, 1.0], &[1.0, 0.0, 1.0]).expect("should divide");
        assert_eq!(result.quotient, vec![0.0]);
        assert_eq!(result.remainder, vec![1.0, 1.0]);
    }

    #[test]
    fn long_division_rejects_zero_divisor() {
        let result = long_division(&[1.0, 2.0], &[0.0, 0.0]);
        assert!(matches!(result, Err(Error::InvalidCoefficient { .. })));
    }

    #[test]
    fn cauchy_bound_contains_roots() {
        let bound = cauchy_bound(&[1.0, -6.0, 11.0, -6.0]);
        assert!(bound >= 3.0);
        assert_eq!(cauchy_bound(&[5.0]), 0.0);
    }

    #[test]
    fn root_check_is_scale_aware() {
        assert!(is_root(&[3.0, -1.0], 1.0 / 3.0));
        assert!(is_root(&[1.0, -6.0, 11.0, -6.0], 3.0));
        assert!(!is_root(&[1.0, -6.0, 11.0, -6.0], 4.0));
    }
}
