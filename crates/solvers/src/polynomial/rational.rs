use stepwise_core::{
    Error, FactorizationSolution, LinearFactor, RationalRootSolution,
    poly::evaluate,
    tolerance::{approx_eq, snap},
    zeros::rational_roots,
};

use super::checked_coefficients;

/// Lists every `±p/q` candidate, tests each, and collects the rational roots.
///
/// # Errors
///
/// Returns an error if the coefficients are empty, non-finite, or outside
/// degree `1..=4`.
pub fn roots(coefficients: &[f64]) -> Result<RationalRootSolution, Error> {
    let coefficients = checked_coefficients(coefficients, 1)?;
    let rational = rational_roots(&coefficients);

    let tests = rational
        .candidates
        .iter()
        .map(|&c| [c, snap(evaluate(&coefficients, c))])
        .collect();
    let roots = rational.distinct();

    Ok(RationalRootSolution {
        coefficients,
        rational,
        tests,
        roots,
    })
}

/// Factors a polynomial into rational linear factors and an irreducible rest.
///
/// # Errors
///
/// Returns an error if the coefficients are empty, non-finite, or outside
/// degree `1..=4`.
pub fn factor(coefficients: &[f64]) -> Result<FactorizationSolution, Error> {
    let coefficients = checked_coefficients(coefficients, 1)?;
    let rational = rational_roots(&coefficients);

    let mut factors: Vec<LinearFactor> = Vec::new();
    for &root in &rational.roots {
        match factors.last_mut() {
            Some(last) if approx_eq(last.root, root) => last.multiplicity += 1,
            _ => factors.push(LinearFactor {
                root,
                multiplicity: 1,
            }),
        }
    }

    Ok(FactorizationSolution {
        coefficients,
        factors,
        remaining: rational.quotient,
    })
}
