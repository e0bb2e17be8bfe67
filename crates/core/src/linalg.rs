//! Determinants and small dense linear solves.

use nalgebra::{Matrix3, Vector3};
use serde::Serialize;

use crate::tolerance::{is_zero, snap};

/// Determinant of `[[a1, b1], [a2, b2]]`.
#[must_use]
pub fn determinant_2x2(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    a1 * b2 - a2 * b1
}

/// Determinant of a 3×3 matrix, computed from its LU factorization.
#[must_use]
pub fn determinant_3x3(rows: &[[f64; 3]; 3]) -> f64 {
    to_matrix(rows).lu().determinant()
}

/// LU factorization of a 3×3 system `A·v = rhs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuSolve {
    pub determinant: f64,
    /// Upper-triangular factor `U` of `P·A = L·U`.
    pub upper: [[f64; 3]; 3],
    /// Right-hand side after the same row operations, `L⁻¹·P·rhs`.
    pub reduced_rhs: [f64; 3],
    /// Unique solution, absent when `|det| < ε`.
    pub solution: Option<[f64; 3]>,
}

/// Solves a 3×3 system by LU decomposition with partial pivoting.
#[must_use]
pub fn solve_3x3(rows: &[[f64; 3]; 3], rhs: [f64; 3]) -> LuSolve {
    let lu = to_matrix(rows).lu();
    let determinant = snap(lu.determinant());

    let upper = lu.u();
    let mut permuted = Vector3::from(rhs);
    lu.p().permute_rows(&mut permuted);
    let reduced = lu
        .l()
        .solve_lower_triangular(&permuted)
        .unwrap_or(permuted);

    let solution = if is_zero(determinant) {
        None
    } else {
        lu.solve(&Vector3::from(rhs))
            .map(|v| [snap(v[0]), snap(v[1]), snap(v[2])])
    };

    LuSolve {
        determinant,
        upper: std::array::from_fn(|r| std::array::from_fn(|c| snap(upper[(r, c)]))),
        reduced_rhs: std::array::from_fn(|r| snap(reduced[r])),
        solution,
    }
}

fn to_matrix(rows: &[[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::from_fn(|r, c| rows[r][c])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn two_by_two_determinant() {
        assert_eq!(determinant_2x2(1.0, 1.0, 1.0, -1.0), -2.0);
        assert_eq!(determinant_2x2(2.0, 1.0, 4.0, 2.0), 0.0);
    }

    #[test]
    fn three_by_three_determinant() {
        let rows = [[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]];
        assert_relative_eq!(determinant_3x3(&rows), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn solves_unique_system() {
        // x + y + z = 6, 2x - y + z = 3, x + 2y - z = 2  →  (1, 2, 3)
        let rows = [[1.0, 1.0, 1.0], [2.0, -1.0, 1.0], [1.0, 2.0, -1.0]];
        let result = solve_3x3(&rows, [6.0, 3.0, 2.0]);

        let [x, y, z] = result.solution.expect("should be unique");
        assert_relative_eq!(x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(z, 3.0, epsilon = 1e-10);
        assert_eq!(result.upper[1][0], 0.0);
        assert_eq!(result.upper[2][1], 0.0);
    }

    #[test]
    fn singular_system_has_no_solution() {
        let rows = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]];
        let result = solve_3x3(&rows, [1.0, 2.0, 3.0]);
        assert!(result.solution.is_none());
        assert!(is_zero(result.determinant));
    }
}
