use stepwise_core::{
    AllRootsSolution, Error, Root, RootType,
    poly::{degree, synthetic_division},
    sort_roots,
    tolerance::snap,
    zeros::{rational_roots, real_zeros},
};

use super::{checked_coefficients, quadratic};

/// Finds every root of a polynomial of degree at most four.
///
/// Rational roots come first. The deflated factor is then reduced by real
/// zeros located numerically until a quadratic (or smaller) is left, which is
/// solved exactly. If a factor of degree three or four has no real zeros, it
/// is returned unsolved and the result is marked incomplete.
///
/// # Errors
///
/// Returns an error if the coefficients are empty, non-finite, or outside
/// degree `1..=4`.
pub fn solve(coefficients: &[f64]) -> Result<AllRootsSolution, Error> {
    let coefficients = checked_coefficients(coefficients, 1)?;
    let rational = rational_roots(&coefficients);

    let mut roots: Vec<Root> = rational.roots.iter().map(|&r| Root::real(r)).collect();
    let mut numerical = Vec::new();
    let mut rest = rational.quotient.clone();

    while degree(&rest) > 2 {
        let Some(&zero) = real_zeros(&rest).first() else {
            break;
        };
        numerical.push(zero);
        roots.push(Root::real(zero));
        rest = synthetic_division(&rest, zero)
            .quotient
            .into_iter()
            .map(snap)
            .collect();
    }

    let complete = match degree(&rest) {
        0 => true,
        1 => {
            roots.push(Root::real(-rest[1] / rest[0]));
            true
        }
        2 => {
            let quad = quadratic::solve(rest[0], rest[1], rest[2])?;
            roots.extend(quad.roots.iter().copied());
            if quad.root_type == RootType::RealRepeated {
                roots.extend(quad.roots.iter().copied());
            }
            true
        }
        _ => false,
    };
    sort_roots(&mut roots);

    Ok(AllRootsSolution {
        coefficients,
        rational: rational.roots,
        numerical,
        roots,
        remaining: rest,
        complete,
    })
}
