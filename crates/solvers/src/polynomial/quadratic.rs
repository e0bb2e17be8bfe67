use nalgebra::Complex;
use stepwise_core::{
    Error, QuadraticSolution, Root, RootType, poly::discriminant, sort_roots,
};

use super::nonzero;

/// Solves `ax² + bx + c = 0` with the quadratic formula.
///
/// Distinct real roots are computed with the cancellation-free form
/// `q = -(b + sign(b)·√Δ)/2`, `x₁ = q/a`, `x₂ = c/q`, which equals
/// `(-b ± √Δ)/2a` exactly in real arithmetic.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if `a ≈ 0`.
pub fn solve(a: f64, b: f64, c: f64) -> Result<QuadraticSolution, Error> {
    nonzero("a", a)?;

    let discriminant = discriminant(a, b, c);
    let root_type = RootType::from_discriminant(discriminant);

    let mut roots = match root_type {
        RootType::RealRepeated => vec![Root::real(-b / (2.0 * a))],
        RootType::RealDistinct => {
            let q = -0.5 * (b + b.signum() * discriminant.sqrt());
            vec![Root::real(q / a), Root::real(c / q)]
        }
        RootType::Complex => {
            let re = -b / (2.0 * a);
            let im = (-discriminant).sqrt() / (2.0 * a).abs();
            vec![
                Root::from_complex(Complex::new(re, -im)),
                Root::from_complex(Complex::new(re, im)),
            ]
        }
    };
    sort_roots(&mut roots);

    Ok(QuadraticSolution {
        a,
        b,
        c,
        discriminant,
        root_type,
        roots,
    })
}
