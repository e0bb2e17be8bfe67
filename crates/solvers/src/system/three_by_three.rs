use stepwise_core::{Error, LinearEquation3, System3Solution, linalg::solve_3x3};

use super::finite;

/// Solves three linear equations in `x`, `y`, `z` by LU decomposition.
///
/// A singular coefficient matrix yields no values; whether the system is
/// inconsistent or dependent is not determined.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if a coefficient is not finite.
pub fn solve(equations: [LinearEquation3; 3]) -> Result<System3Solution, Error> {
    let flat: Vec<f64> = equations.iter().flat_map(|e| [e.a, e.b, e.c, e.d]).collect();
    finite(&flat)?;

    let rows = equations.map(|e| [e.a, e.b, e.c]);
    let rhs = equations.map(|e| e.d);
    let lu = solve_3x3(&rows, rhs);
    if lu.solution.is_none() {
        tracing::debug!(determinant = lu.determinant, "singular 3x3 system");
    }

    Ok(System3Solution {
        equations,
        values: lu.solution,
        lu,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn unique_solution() {
        let solution = solve([
            LinearEquation3::new(1.0, 1.0, 1.0, 6.0),
            LinearEquation3::new(2.0, -1.0, 1.0, 3.0),
            LinearEquation3::new(1.0, 2.0, -1.0, 2.0),
        ])
        .expect("should solve");

        let [x, y, z] = solution.values.expect("unique");
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(z, 3.0, epsilon = 1e-12);
        for eq in &solution.equations {
            assert_relative_eq!(eq.lhs(x, y, z), eq.d, epsilon = 1e-10);
        }
    }

    #[test]
    fn singular_system_has_no_values() {
        let solution = solve([
            LinearEquation3::new(1.0, 1.0, 1.0, 6.0),
            LinearEquation3::new(2.0, 2.0, 2.0, 12.0),
            LinearEquation3::new(1.0, -1.0, 0.0, 0.0),
        ])
        .expect("should solve");
        assert!(solution.values.is_none());
        assert_eq!(solution.lu.determinant, 0.0);
    }

    #[test]
    fn rejects_infinite_coefficient() {
        let eq = LinearEquation3::new(1.0, 1.0, 1.0, 1.0);
        let bad = LinearEquation3::new(f64::INFINITY, 1.0, 1.0, 1.0);
        assert!(solve([eq, bad, eq]).is_err());
    }
}
