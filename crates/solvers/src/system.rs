//! Solvers for systems of equations in two or three unknowns.
//!
//! # Solvers
//!
//! - [`two_by_two`]: substitution, elimination, graphing, and Cramer's Rule,
//!   all sharing one degeneracy check
//! - [`three_by_three`]: LU decomposition
//! - [`word_problem`]: labeled 2×2 systems
//! - [`inequalities`]: feasible region of linear inequalities
//! - [`nonlinear`]: a line against a parabola

pub mod inequalities;
pub mod nonlinear;
pub mod three_by_three;
pub mod two_by_two;
pub mod word_problem;

use stepwise_core::Error;

/// Fails with [`Error::InvalidInput`] if any value is not finite.
pub(crate) fn finite(values: &[f64]) -> Result<(), Error> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(bad) => Err(Error::invalid_input(format!(
            "coefficient {bad} is not finite"
        ))),
        None => Ok(()),
    }
}
