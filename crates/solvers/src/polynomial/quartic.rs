use nalgebra::{Complex, ComplexField};
use stepwise_core::{
    Error, QuarticMethod, QuarticSolution, QuarticStatus, Root, poly::degree, sort_roots,
    tolerance::is_zero, zeros::rational_roots,
};

use super::{nonzero, quadratic};

/// Solves `ax⁴ + bx³ + cx² + dx + e = 0`.
///
/// With `b ≈ 0` and `d ≈ 0` the equation is biquadratic: `u = x²` gives
/// `au² + cu + e = 0`, and each `u` is taken back through `x = ±√u`.
/// Otherwise only rational roots are extracted; if what remains is a
/// quadratic it is solved too, and anything larger is returned as a
/// [`QuarticStatus::Partial`] result.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if `a ≈ 0`.
pub fn solve(coefficients: [f64; 5]) -> Result<QuarticSolution, Error> {
    let [a, b, c, d, e] = coefficients;
    nonzero("a", a)?;

    if is_zero(b) && is_zero(d) {
        let substitution = quadratic::solve(a, c, e)?;
        let u_roots = substitution.roots.clone();
        let mut roots: Vec<Root> = u_roots.iter().flat_map(|&u| square_roots(u)).collect();
        sort_roots(&mut roots);

        return Ok(QuarticSolution {
            coefficients,
            method: QuarticMethod::Biquadratic {
                substitution,
                u_roots,
            },
            status: QuarticStatus::Complete,
            roots,
            remaining: vec![a],
        });
    }

    let rational = rational_roots(&coefficients);
    let mut roots: Vec<Root> = rational.roots.iter().map(|&r| Root::real(r)).collect();
    let remaining = rational.quotient.clone();

    let (status, remaining_quadratic) = match degree(&remaining) {
        0 => (QuarticStatus::Complete, None),
        1 => {
            roots.push(Root::real(-remaining[1] / remaining[0]));
            (QuarticStatus::Complete, None)
        }
        2 => {
            let quad = quadratic::solve(remaining[0], remaining[1], remaining[2])?;
            roots.extend(quad.roots.iter().copied());
            (QuarticStatus::Complete, Some(quad))
        }
        _ => {
            tracing::debug!(?remaining, "quartic factor left unsolved");
            (QuarticStatus::Partial, None)
        }
    };
    sort_roots(&mut roots);

    Ok(QuarticSolution {
        coefficients,
        method: QuarticMethod::RationalRoots {
            rational,
            remaining_quadratic,
        },
        status,
        roots,
        remaining,
    })
}

/// Both square roots of `u`, collapsing `u ≈ 0` to the single root `0`.
fn square_roots(u: Root) -> Vec<Root> {
    match u {
        Root::Real { value } if is_zero(value) => vec![Root::real(0.0)],
        Root::Real { value } if value > 0.0 => {
            let r = value.sqrt();
            vec![Root::real(-r), Root::real(r)]
        }
        Root::Real { value } => {
            let r = (-value).sqrt();
            vec![
                Root::from_complex(Complex::new(0.0, -r)),
                Root::from_complex(Complex::new(0.0, r)),
            ]
        }
        Root::Complex { .. } => {
            let w = ComplexField::sqrt(u.to_complex());
            vec![Root::from_complex(w), Root::from_complex(-w)]
        }
    }
}
