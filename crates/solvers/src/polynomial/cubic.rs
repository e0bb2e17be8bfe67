use stepwise_core::{
    CubicSolution, Error, Recommendation, Root,
    arith::rational_root_candidates,
    poly::{is_root, synthetic_division},
    sort_roots,
    tolerance::{is_zero, snap},
    zeros::real_zeros,
};

use super::{nonzero, quadratic};

/// Solves `ax³ + bx² + cx + d = 0` through the Rational Root Theorem.
///
/// The first rational root found is divided out synthetically and the
/// remaining quadratic goes to [`quadratic::solve`]. Without a rational root
/// the result is [`CubicSolution::NoRationalRoot`], carrying bisection
/// estimates of the real roots and a recommendation to use numerical or
/// Cardano methods.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if `a ≈ 0`.
pub fn solve(coefficients: [f64; 4]) -> Result<CubicSolution, Error> {
    nonzero("a", coefficients[0])?;

    let candidates = rational_root_candidates(&coefficients);
    let rational_root = if is_zero(coefficients[3]) {
        Some(0.0)
    } else {
        candidates
            .iter()
            .copied()
            .find(|&r| is_root(&coefficients, r))
    };

    let Some(rational_root) = rational_root else {
        tracing::debug!(?coefficients, "cubic has no rational root");
        return Ok(CubicSolution::NoRationalRoot {
            coefficients,
            candidates,
            estimates: real_zeros(&coefficients),
            recommendation: Recommendation::NumericalMethods,
        });
    };

    let quotient: Vec<f64> = synthetic_division(&coefficients, rational_root)
        .quotient
        .into_iter()
        .map(snap)
        .collect();
    let remaining_quadratic = quadratic::solve(quotient[0], quotient[1], quotient[2])?;

    let mut roots = vec![Root::real(rational_root)];
    roots.extend(remaining_quadratic.roots.iter().copied());
    sort_roots(&mut roots);

    Ok(CubicSolution::Reduced {
        coefficients,
        candidates,
        rational_root,
        remaining_quadratic,
        roots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::RootType;

    #[test]
    fn three_rational_roots() {
        let solution = solve([1.0, -6.0, 11.0, -6.0]).expect("should solve");
        let CubicSolution::Reduced {
            candidates,
            rational_root,
            remaining_quadratic,
            roots,
            ..
        } = solution
        else {
            panic!("expected a reduced cubic");
        };

        for expected in [1.0, 2.0, 3.0, 6.0, -1.0, -2.0, -3.0, -6.0] {
            assert!(candidates.contains(&expected));
        }
        assert_eq!(rational_root, 1.0);
        assert_eq!(
            [remaining_quadratic.a, remaining_quadratic.b, remaining_quadratic.c],
            [1.0, -5.0, 6.0]
        );
        assert_eq!(roots, vec![Root::real(1.0), Root::real(2.0), Root::real(3.0)]);
    }

    #[test]
    fn rational_root_with_complex_pair() {
        // (x - 1)(x² + 1)
        let solution = solve([1.0, -1.0, 1.0, -1.0]).expect("should solve");
        let CubicSolution::Reduced {
            remaining_quadratic,
            roots,
            ..
        } = solution
        else {
            panic!("expected a reduced cubic");
        };
        assert_eq!(remaining_quadratic.root_type, RootType::Complex);
        assert_eq!(roots[0], Root::real(1.0));
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn zero_constant_term_uses_zero_root() {
        let solution = solve([2.0, -2.0, -4.0, 0.0]).expect("should solve");
        assert_eq!(
            solution.roots(),
            vec![Root::real(-1.0), Root::real(0.0), Root::real(2.0)]
        );
    }

    #[test]
    fn no_rational_root_reports_estimates() {
        let solution = solve([1.0, 0.0, -2.0, -5.0]).expect("should not error");
        let CubicSolution::NoRationalRoot {
            estimates,
            recommendation,
            ..
        } = solution
        else {
            panic!("expected no rational root");
        };
        assert_eq!(recommendation, Recommendation::NumericalMethods);
        assert_eq!(estimates.len(), 1);
        assert_relative_eq!(estimates[0], 2.094_551_481_542_327, epsilon = 1e-9);
    }

    #[test]
    fn huge_constant_term_skips_the_candidate_search() {
        let solution = solve([1.0, 0.0, 0.0, -1e17]).expect("should not error");
        let CubicSolution::NoRationalRoot {
            candidates,
            estimates,
            ..
        } = solution
        else {
            panic!("expected no rational root");
        };
        assert!(candidates.is_empty());
        assert_eq!(estimates.len(), 1);
        assert_relative_eq!(estimates[0], 1e17_f64.cbrt(), max_relative = 1e-12);
    }

    #[test]
    fn rejects_zero_leading_coefficient() {
        assert!(matches!(
            solve([0.0, 1.0, 1.0, 1.0]),
            Err(Error::InvalidCoefficient { .. })
        ));
    }
}
