use std::cmp::Ordering;

use nalgebra::Complex;
use serde::Serialize;

use crate::tolerance::{is_zero, snap};

/// A single root of a polynomial equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Root {
    Real { value: f64 },
    Complex { re: f64, im: f64 },
}

impl Root {
    /// Builds a real root, snapping near-integers.
    #[must_use]
    pub fn real(value: f64) -> Self {
        Self::Real { value: snap(value) }
    }

    /// Builds a root from a complex value, collapsing to [`Root::Real`] when the
    /// imaginary part is ≈ 0.
    #[must_use]
    pub fn from_complex(z: Complex<f64>) -> Self {
        if is_zero(z.im) {
            Self::real(z.re)
        } else {
            Self::Complex {
                re: snap(z.re),
                im: snap(z.im),
            }
        }
    }

    /// Returns the value if the root is real.
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match *self {
            Self::Real { value } => Some(value),
            Self::Complex { .. } => None,
        }
    }

    /// Returns the root as a complex number.
    #[must_use]
    pub fn to_complex(&self) -> Complex<f64> {
        match *self {
            Self::Real { value } => Complex::new(value, 0.0),
            Self::Complex { re, im } => Complex::new(re, im),
        }
    }

    /// Total order used for reporting: reals ascending, then complex roots
    /// by real part and imaginary part.
    #[must_use]
    pub fn report_order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Real { value: a }, Self::Real { value: b }) => a.total_cmp(b),
            (Self::Real { .. }, Self::Complex { .. }) => Ordering::Less,
            (Self::Complex { .. }, Self::Real { .. }) => Ordering::Greater,
            (Self::Complex { re: ar, im: ai }, Self::Complex { re: br, im: bi }) => {
                ar.total_cmp(br).then(ai.total_cmp(bi))
            }
        }
    }
}

/// Sorts roots into reporting order in place.
pub fn sort_roots(roots: &mut [Root]) {
    roots.sort_by(Root::report_order);
}

/// Nature of the roots of a quadratic, fixed by the sign of its discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootType {
    /// Δ > 0: two distinct real roots.
    RealDistinct,
    /// Δ ≈ 0: one repeated real root.
    RealRepeated,
    /// Δ < 0: a complex conjugate pair.
    Complex,
}

impl RootType {
    /// Classifies a discriminant. This is the only way a [`RootType`] is chosen.
    #[must_use]
    pub fn from_discriminant(discriminant: f64) -> Self {
        if is_zero(discriminant) {
            Self::RealRepeated
        } else if discriminant > 0.0 {
            Self::RealDistinct
        } else {
            Self::Complex
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_sign_fixes_root_type() {
        assert_eq!(RootType::from_discriminant(4.0), RootType::RealDistinct);
        assert_eq!(RootType::from_discriminant(1e-12), RootType::RealRepeated);
        assert_eq!(RootType::from_discriminant(-3.0), RootType::Complex);
    }

    #[test]
    fn complex_with_zero_imaginary_part_is_real() {
        let root = Root::from_complex(Complex::new(2.0, 1e-14));
        assert_eq!(root, Root::Real { value: 2.0 });
    }

    #[test]
    fn reals_sort_before_complex() {
        let mut roots = vec![
            Root::Complex { re: 0.0, im: 1.0 },
            Root::real(3.0),
            Root::Complex { re: 0.0, im: -1.0 },
            Root::real(-1.0),
        ];
        sort_roots(&mut roots);
        assert_eq!(
            roots,
            vec![
                Root::real(-1.0),
                Root::real(3.0),
                Root::Complex { re: 0.0, im: -1.0 },
                Root::Complex { re: 0.0, im: 1.0 },
            ]
        );
    }
}
