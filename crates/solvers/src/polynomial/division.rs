use stepwise_core::{
    DivisionSolution, Error, SyntheticDivisionSolution,
    poly::{long_division, synthetic_division, trim},
    tolerance::snap,
};

/// Divides `dividend` by `divisor` so that `P(x) = D(x)·Q(x) + R(x)`.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] if either polynomial is empty, and
/// [`Error::InvalidCoefficient`] if the divisor is zero.
pub fn long(dividend: &[f64], divisor: &[f64]) -> Result<DivisionSolution, Error> {
    if dividend.is_empty() {
        return Err(Error::MissingParameter { name: "dividend" });
    }
    if divisor.is_empty() {
        return Err(Error::MissingParameter { name: "divisor" });
    }

    let division = long_division(dividend, divisor)?;
    Ok(DivisionSolution {
        dividend: trim(dividend).to_vec(),
        divisor: trim(divisor).to_vec(),
        division,
    })
}

/// Divides a polynomial by `(x - root)` and records the synthetic tableau.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] if `coefficients` is empty.
pub fn synthetic(coefficients: &[f64], root: f64) -> Result<SyntheticDivisionSolution, Error> {
    if coefficients.is_empty() {
        return Err(Error::MissingParameter {
            name: "coefficients",
        });
    }
    let coefficients = trim(coefficients).to_vec();

    let result = synthetic_division(&coefficients, root);
    let quotient: Vec<f64> = result.quotient.into_iter().map(snap).collect();
    let remainder = snap(result.remainder);

    let mut sums = quotient.clone();
    sums.truncate(coefficients.len() - 1);
    sums.push(remainder);

    let products = std::iter::once(0.0)
        .chain(sums[..sums.len() - 1].iter().map(|&s| snap(root * s)))
        .collect();

    Ok(SyntheticDivisionSolution {
        coefficients,
        root,
        products,
        sums,
        quotient,
        remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_division_identity() {
        let solution = long(&[2.0, 3.0, -5.0, 7.0], &[1.0, 2.0]).expect("should divide");
        let q = &solution.division.quotient;
        let r = solution.division.remainder[0];
        // (x + 2)(2x² - x - 3) + 13 = 2x³ + 3x² - 5x + 7
        assert_eq!(q, &vec![2.0, -1.0, -3.0]);
        assert_eq!(r, 13.0);
    }

    #[test]
    fn long_division_by_quadratic() {
        // x⁴ - 1 = (x² + 1)(x² - 1)
        let solution = long(&[1.0, 0.0, 0.0, 0.0, -1.0], &[1.0, 0.0, 1.0]).expect("should divide");
        assert_eq!(solution.division.quotient, vec![1.0, 0.0, -1.0]);
        assert_eq!(solution.division.remainder, vec![0.0]);
    }

    #[test]
    fn zero_divisor_is_invalid() {
        assert!(matches!(
            long(&[1.0, 1.0], &[0.0]),
            Err(Error::InvalidCoefficient { .. })
        ));
    }

    #[test]
    fn synthetic_tableau_rows() {
        // 2x³ - 6x² + 2x - 1 ÷ (x - 3)
        let solution = synthetic(&[2.0, -6.0, 2.0, -1.0], 3.0).expect("should divide");
        assert_eq!(solution.products, vec![0.0, 6.0, 0.0, 6.0]);
        assert_eq!(solution.sums, vec![2.0, 0.0, 2.0, 5.0]);
        assert_eq!(solution.quotient, vec![2.0, 0.0, 2.0]);
        assert_eq!(solution.remainder, 5.0);
    }

    #[test]
    fn synthetic_remainder_is_value_at_root() {
        let coefficients = [1.0, -4.0, 0.0, 3.0, -2.0];
        for root in [-2.0, -0.5, 1.0, 2.5] {
            let solution = synthetic(&coefficients, root).expect("should divide");
            let value = stepwise_core::poly::evaluate(&coefficients, root);
            assert!((solution.remainder - value).abs() < 1e-10);
        }
    }
}
