//! Bisection refinement of real polynomial roots.
//!
//! Used wherever a real zero is known to lie between two sample points with
//! opposite signs but has no rational closed form: numerical estimates for a
//! cubic without rational roots, zeros for inequality and graph analysis, and
//! turning points.

mod bracket;
mod config;
mod error;
mod solution;

pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use crate::poly::evaluate;

/// Refines a root of the polynomial inside `bracket`.
///
/// The bracket endpoints may be given in either order.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or the
/// polynomial does not change sign across it, or if a non-finite value is
/// produced while iterating.
pub fn refine_root(coeffs: &[f64], bracket: [f64; 2], config: &Config) -> Result<Solution, Error> {
    let f = |x: f64| evaluate(coeffs, x);

    let ends = Bracket::ordered(bracket)?;
    let [left, right] = ends;

    let left_value = checked(left, f(left))?;
    if left_value.abs() <= config.residual_tol() {
        return Ok(Solution::new(left, left_value, Status::Converged, 0));
    }
    let right_value = checked(right, f(right))?;
    if right_value.abs() <= config.residual_tol() {
        return Ok(Solution::new(right, right_value, Status::Converged, 0));
    }

    let mut bracket = Bracket::new(ends, left_value, right_value)?;
    let (mut best_x, mut best_value) = if left_value.abs() <= right_value.abs() {
        (left, left_value)
    } else {
        (right, right_value)
    };

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let value = checked(mid, f(mid))?;

        if value.abs() < best_value.abs() {
            best_x = mid;
            best_value = value;
        }

        if value.abs() <= config.residual_tol()
            || bracket.is_narrow(config.x_abs_tol(), config.x_rel_tol())
        {
            return Ok(Solution::new(mid, value, Status::Converged, iter));
        }

        bracket.keep(mid, value);
    }

    Ok(Solution::new(
        best_x,
        best_value,
        Status::MaxIters,
        config.max_iters(),
    ))
}

fn checked(x: f64, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root_of_two() {
        let solution =
            refine_root(&[1.0, 0.0, -2.0], [0.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn finds_real_root_of_cubic_without_rational_roots() {
        // x³ - 2x - 5 has a single real root near 2.0946
        let solution = refine_root(&[1.0, 0.0, -2.0, -5.0], [2.0, 3.0], &Config::default())
            .expect("should solve");

        assert_relative_eq!(solution.x, 2.094_551_481_542_327, epsilon = 1e-9);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let solution =
            refine_root(&[1.0, -6.0], [10.0, 0.0], &Config::default()).expect("should solve");

        assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn endpoint_root_converges_immediately() {
        let solution =
            refine_root(&[1.0, -1.0], [1.0, 3.0], &Config::default()).expect("should solve");

        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn errors_on_zero_width_bracket() {
        let result = refine_root(&[1.0, -1.0], [5.0, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::ZeroWidth))
        ));
    }

    #[test]
    fn errors_on_non_finite_bracket() {
        let result = refine_root(&[1.0, -1.0], [f64::NAN, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));
    }

    #[test]
    fn errors_without_sign_change() {
        let result = refine_root(&[1.0, 0.0, 1.0], [-3.0, 3.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        ));
    }

    #[test]
    fn zero_iters_returns_best_endpoint() {
        let config = Config::new(0, 1e-12, 1e-12, 1e-12).expect("valid config");
        let solution =
            refine_root(&[1.0, 0.0, -9.0], [2.0, 10.0], &config).expect("should return endpoint");

        assert_eq!(solution.status, Status::MaxIters);
        assert_relative_eq!(solution.x, 2.0);
    }
}
