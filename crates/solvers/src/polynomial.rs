//! Solvers for single-polynomial problems.
//!
//! Each routine takes plain coefficients (leading term first) and returns the
//! matching [`Solution`](stepwise_core::Solution) payload.
//!
//! # Solvers
//!
//! - [`quadratic`]: quadratic formula, three-way split on the discriminant
//! - [`factoring`]: AC method over the integers
//! - [`completing_square`]: vertex form
//! - [`cubic`]: rational root, then the quadratic solver
//! - [`quartic`]: biquadratic substitution or rational roots
//! - [`division`]: long and synthetic division
//! - [`rational`]: Rational Root Theorem and rational factorization
//! - [`roots`]: every root of a polynomial up to degree four
//! - [`inequality`]: sign analysis over the partition by zeros
//! - [`graphing`]: end behavior, intercepts, and turning points
//! - [`remainder`]: Remainder and Factor Theorems
//! - [`application`]: roots interpreted in context

pub mod application;
pub mod completing_square;
pub mod cubic;
pub mod division;
pub mod factoring;
pub mod graphing;
pub mod inequality;
pub mod quadratic;
pub mod quartic;
pub mod rational;
pub mod remainder;
pub mod roots;

use stepwise_core::{Error, poly::trim};

/// Highest degree accepted for equation-style problems.
pub const MAX_DEGREE: usize = 4;

/// Validates a coefficient list and strips leading zeros.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] for an empty list and
/// [`Error::InvalidInput`] for non-finite values or a degree outside
/// `min_degree..=MAX_DEGREE`.
pub fn checked_coefficients(coeffs: &[f64], min_degree: usize) -> Result<Vec<f64>, Error> {
    if coeffs.is_empty() {
        return Err(Error::MissingParameter {
            name: "coefficients",
        });
    }
    if let Some(bad) = coeffs.iter().find(|c| !c.is_finite()) {
        return Err(Error::invalid_input(format!(
            "coefficient {bad} is not finite"
        )));
    }

    let trimmed = trim(coeffs).to_vec();
    let degree = trimmed.len() - 1;
    if degree < min_degree {
        return Err(Error::invalid_input(format!(
            "polynomial of degree {degree} is below the required degree {min_degree}"
        )));
    }
    if degree > MAX_DEGREE {
        return Err(Error::invalid_input(format!(
            "polynomial of degree {degree} exceeds the supported degree {MAX_DEGREE}"
        )));
    }
    Ok(trimmed)
}

/// Fails with [`Error::InvalidCoefficient`] if `value` is ≈ 0.
pub(crate) fn nonzero(name: &'static str, value: f64) -> Result<f64, Error> {
    if stepwise_core::tolerance::is_zero(value) || !value.is_finite() {
        Err(Error::InvalidCoefficient { name, value })
    } else {
        Ok(value)
    }
}
