use nalgebra::Complex;
use stepwise_core::{
    CompletingSquareSolution, Error, Point, Root, RootType, poly::discriminant, sort_roots,
    tolerance::snap,
};

use super::nonzero;

/// Solves `ax² + bx + c = 0` by completing the square.
///
/// After dividing by `a`, the equation becomes
/// `(x + b/2a)² = -c/a + (b/2a)²`. The right side has the sign of the
/// discriminant, so the same three-way split as the quadratic formula applies.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if `a ≈ 0`.
pub fn solve(a: f64, b: f64, c: f64) -> Result<CompletingSquareSolution, Error> {
    nonzero("a", a)?;

    let half_coefficient = b / (2.0 * a);
    let square_term = half_coefficient * half_coefficient;
    let right_side = -c / a + square_term;

    let h = -half_coefficient;
    let k = c - a * h * h;

    let discriminant = discriminant(a, b, c);
    let root_type = RootType::from_discriminant(discriminant);

    let mut roots = match root_type {
        RootType::RealRepeated => vec![Root::real(h)],
        RootType::RealDistinct => {
            let offset = right_side.abs().sqrt();
            vec![Root::real(h - offset), Root::real(h + offset)]
        }
        RootType::Complex => {
            let offset = right_side.abs().sqrt();
            vec![
                Root::from_complex(Complex::new(h, -offset)),
                Root::from_complex(Complex::new(h, offset)),
            ]
        }
    };
    sort_roots(&mut roots);

    Ok(CompletingSquareSolution {
        a,
        b,
        c,
        half_coefficient: snap(half_coefficient),
        square_term: snap(square_term),
        right_side: snap(right_side),
        vertex: Point::new(snap(h), snap(k)),
        discriminant,
        root_type,
        roots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::polynomial::quadratic;

    #[test]
    fn monic_with_real_roots() {
        // x² + 6x + 5 = 0  →  (x + 3)² = 4
        let solution = solve(1.0, 6.0, 5.0).expect("should solve");
        assert_eq!(solution.half_coefficient, 3.0);
        assert_eq!(solution.square_term, 9.0);
        assert_eq!(solution.right_side, 4.0);
        assert_eq!(solution.vertex, Point::new(-3.0, -4.0));
        assert_eq!(solution.roots, vec![Root::real(-5.0), Root::real(-1.0)]);
    }

    #[test]
    fn non_monic_with_complex_roots() {
        // 2x² - 4x + 10 = 0  →  (x - 1)² = -4
        let solution = solve(2.0, -4.0, 10.0).expect("should solve");
        assert_eq!(solution.right_side, -4.0);
        assert_eq!(solution.root_type, RootType::Complex);
        assert_eq!(
            solution.roots,
            vec![
                Root::Complex { re: 1.0, im: -2.0 },
                Root::Complex { re: 1.0, im: 2.0 },
            ]
        );
    }

    #[test]
    fn agrees_with_quadratic_formula() {
        for (a, b, c) in [(1.0, 2.0, -7.0), (3.0, -1.0, -2.0), (-1.0, 4.0, -4.0)] {
            let square = solve(a, b, c).expect("should solve");
            let formula = quadratic::solve(a, b, c).expect("should solve");
            assert_eq!(square.root_type, formula.root_type);
            for (s, f) in square.roots.iter().zip(&formula.roots) {
                assert_relative_eq!(s.to_complex().re, f.to_complex().re, epsilon = 1e-10);
                assert_relative_eq!(s.to_complex().im, f.to_complex().im, epsilon = 1e-10);
            }
        }
    }
}
