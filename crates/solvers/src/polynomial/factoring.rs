use stepwise_core::{
    Error, FactoringSolution, Recommendation,
    arith::{MAX_DIVISOR_MAGNITUDE, factors_of, gcd, integer_magnitude},
    tolerance::{approx_eq, is_integral, is_zero, snap},
};

use super::nonzero;

/// Solves `ax² + bx + c = 0` by the AC method.
///
/// Looks for integers `m, n` with `m·n = a·c` and `m + n = b`, splits the
/// middle term, and factors by grouping. Coefficients that are not integers,
/// or an `a·c` with no suitable pair, yield
/// [`FactoringSolution::NotFactorable`] with a recommendation to use the
/// quadratic formula.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if `a ≈ 0`.
pub fn solve(a: f64, b: f64, c: f64) -> Result<FactoringSolution, Error> {
    nonzero("a", a)?;
    let product = snap(a * c);

    let pair = if [a, b, c].into_iter().all(is_integral) {
        find_pair(product, b)
    } else {
        None
    };

    let Some([m, n]) = pair else {
        tracing::debug!(a, b, c, product, "quadratic does not factor over the integers");
        return Ok(FactoringSolution::NotFactorable {
            a,
            b,
            c,
            product,
            recommendation: Recommendation::QuadraticFormula,
        });
    };

    // Grouping: ax² + mx + nx + c = (g·x + n·g/a)((a/g)·x + m/g), g = ±gcd(a, m)
    let g = gcd(a, m) * a.signum();
    let factors = [[snap(g), snap(n * g / a)], [snap(a / g), snap(m / g)]];

    let mut roots = vec![snap(-m / a), snap(-n / a)];
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|x, y| approx_eq(*x, *y));

    Ok(FactoringSolution::Factored {
        a,
        b,
        c,
        product,
        pair: [m, n],
        factors,
        roots,
    })
}

/// First `[m, n]` with `m·n = product` and `m + n = sum`, scanning divisors
/// of `|product|` upward and trying the positive pair before the negative one.
/// Products beyond [`MAX_DIVISOR_MAGNITUDE`] are not searched.
fn find_pair(product: f64, sum: f64) -> Option<[f64; 2]> {
    if is_zero(product) {
        return Some([0.0, sum]);
    }

    factors_of(integer_magnitude(product, MAX_DIVISOR_MAGNITUDE)?)
        .into_iter()
        .map(|f| f as f64)
        .flat_map(|f| [[f, product / f], [-f, -product / f]])
        .find(|&[m, n]| approx_eq(m + n, sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factored(solution: FactoringSolution) -> ([f64; 2], [[f64; 2]; 2], Vec<f64>) {
        match solution {
            FactoringSolution::Factored {
                pair,
                factors,
                roots,
                ..
            } => (pair, factors, roots),
            FactoringSolution::NotFactorable { .. } => panic!("expected a factorization"),
        }
    }

    #[test]
    fn monic_quadratic() {
        let (pair, factors, roots) = factored(solve(1.0, -5.0, 6.0).expect("should solve"));
        assert_eq!(pair, [-2.0, -3.0]);
        assert_eq!(factors, [[1.0, -3.0], [1.0, -2.0]]);
        assert_eq!(roots, vec![2.0, 3.0]);
    }

    #[test]
    fn non_monic_quadratic() {
        // 2x² + 7x + 3 = (x + 3)(2x + 1)
        let (pair, factors, roots) = factored(solve(2.0, 7.0, 3.0).expect("should solve"));
        assert_eq!(pair, [1.0, 6.0]);
        assert_eq!(factors, [[1.0, 3.0], [2.0, 1.0]]);
        assert_eq!(roots, vec![-3.0, -0.5]);
    }

    #[test]
    fn negative_leading_coefficient_expands_back() {
        // -x² + 3x = (-x + 3)(x + 0)
        let (_, factors, roots) = factored(solve(-1.0, 3.0, 0.0).expect("should solve"));
        let [[p1, q1], [p2, q2]] = factors;
        assert_eq!([p1 * p2, p1 * q2 + q1 * p2, q1 * q2], [-1.0, 3.0, 0.0]);
        assert_eq!(roots, vec![0.0, 3.0]);
    }

    #[test]
    fn perfect_square_has_one_root() {
        let (_, _, roots) = factored(solve(1.0, 6.0, 9.0).expect("should solve"));
        assert_eq!(roots, vec![-3.0]);
    }

    #[test]
    fn prime_quadratic_is_not_factorable() {
        let solution = solve(1.0, 1.0, 1.0).expect("should not error");
        assert!(matches!(
            solution,
            FactoringSolution::NotFactorable {
                recommendation: Recommendation::QuadraticFormula,
                ..
            }
        ));
    }

    #[test]
    fn fractional_coefficients_are_not_factorable() {
        let solution = solve(1.0, 0.5, -0.5).expect("should not error");
        assert!(matches!(solution, FactoringSolution::NotFactorable { .. }));
    }

    #[test]
    fn huge_product_is_not_searched() {
        let solution = solve(1.0, 0.0, -1e18).expect("should not error");
        assert!(matches!(solution, FactoringSolution::NotFactorable { .. }));
    }

    #[test]
    fn rejects_zero_leading_coefficient() {
        assert!(matches!(
            solve(0.0, 1.0, 1.0),
            Err(Error::InvalidCoefficient { .. })
        ));
    }
}
