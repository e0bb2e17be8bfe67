use stepwise_core::{
    Error, RemainderSolution,
    poly::synthetic_division,
    tolerance::{is_zero, snap},
};

use super::checked_coefficients;

/// Evaluates `P(point)` as the remainder of division by `(x - point)` and
/// decides whether `(x - point)` is a factor.
///
/// # Errors
///
/// Returns an error if the coefficients are empty, non-finite, or outside
/// degree `1..=4`, or if `point` is not finite.
pub fn solve(coefficients: &[f64], point: f64) -> Result<RemainderSolution, Error> {
    let coefficients = checked_coefficients(coefficients, 1)?;
    if !point.is_finite() {
        return Err(Error::invalid_input(format!("point {point} is not finite")));
    }

    let division = synthetic_division(&coefficients, point);
    let value = snap(division.remainder);

    Ok(RemainderSolution {
        point,
        value,
        is_factor: is_zero(value),
        quotient: division.quotient.into_iter().map(snap).collect(),
        coefficients,
    })
}
