use stepwise_core::{
    Error, LinearEquation, NonlinearSystemSolution, Point,
    poly::evaluate,
    tolerance::{is_zero, snap},
};

use super::finite;
use crate::polynomial::{nonzero, quadratic};

/// Intersects the line `a·x + b·y = c` with the parabola
/// `y = p₀x² + p₁x + p₂`.
///
/// For a non-vertical line, `y = (c - a·x)/b` is substituted into the
/// parabola, leaving `p₀x² + (p₁ + a/b)x + (p₂ - c/b) = 0`. Each real root
/// gives an intersection point; complex roots mean the curves do not meet.
/// A vertical line meets the parabola exactly once.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if the parabola's leading coefficient
/// is ≈ 0 or the line has no variable terms, and [`Error::InvalidInput`] for
/// non-finite values.
pub fn solve(line: LinearEquation, parabola: [f64; 3]) -> Result<NonlinearSystemSolution, Error> {
    finite(&[line.a, line.b, line.c])?;
    finite(&parabola)?;
    nonzero("parabola leading coefficient", parabola[0])?;

    if is_zero(line.b) {
        let a = nonzero("line coefficients", line.a)?;
        let x = snap(line.c / a);
        return Ok(NonlinearSystemSolution {
            line,
            parabola,
            reduced: [0.0; 3],
            quadratic: None,
            points: vec![Point::new(x, snap(evaluate(&parabola, x)))],
        });
    }

    let [p0, p1, p2] = parabola;
    let reduced = [p0, snap(p1 + line.a / line.b), snap(p2 - line.c / line.b)];
    let quadratic = quadratic::solve(reduced[0], reduced[1], reduced[2])?;

    let points = quadratic
        .roots
        .iter()
        .filter_map(|root| root.as_real())
        .map(|x| Point::new(snap(x), snap((line.c - line.a * x) / line.b)))
        .collect::<Vec<_>>();
    tracing::debug!(count = points.len(), "line-parabola intersections");

    Ok(NonlinearSystemSolution {
        line,
        parabola,
        reduced,
        quadratic: Some(quadratic),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn secant_line_meets_twice() {
        // y = x² and y = x + 2, written as -x + y = 2
        let solution = solve(LinearEquation::new(-1.0, 1.0, 2.0), [1.0, 0.0, 0.0])
            .expect("should solve");
        assert_eq!(solution.reduced, [1.0, -1.0, -2.0]);
        assert_eq!(
            solution.points,
            vec![Point::new(-1.0, 1.0), Point::new(2.0, 4.0)]
        );
    }

    #[test]
    fn tangent_line_meets_once() {
        // y = x² and y = 2x - 1
        let solution = solve(LinearEquation::new(-2.0, 1.0, -1.0), [1.0, 0.0, 0.0])
            .expect("should solve");
        assert_eq!(solution.points, vec![Point::new(1.0, 1.0)]);
    }

    #[test]
    fn missing_line_has_no_points() {
        // y = x² + 1 and y = 0
        let solution = solve(LinearEquation::new(0.0, 1.0, 0.0), [1.0, 0.0, 1.0])
            .expect("should solve");
        assert!(solution.points.is_empty());
        assert!(solution.quadratic.is_some());
    }

    #[test]
    fn vertical_line() {
        let solution = solve(LinearEquation::new(2.0, 0.0, 6.0), [1.0, -2.0, 1.0])
            .expect("should solve");
        assert!(solution.quadratic.is_none());
        assert_eq!(solution.points, vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn points_lie_on_both_curves() {
        let line = LinearEquation::new(3.0, 2.0, 7.0);
        let parabola = [2.0, -1.0, -3.0];
        let solution = solve(line, parabola).expect("should solve");
        assert_eq!(solution.points.len(), 2);
        for p in &solution.points {
            assert_relative_eq!(line.lhs(p.x, p.y), line.c, epsilon = 1e-9);
            assert_relative_eq!(evaluate(&parabola, p.x), p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn flat_parabola_is_rejected() {
        assert!(matches!(
            solve(LinearEquation::new(1.0, 1.0, 1.0), [0.0, 1.0, 1.0]),
            Err(Error::InvalidCoefficient { .. })
        ));
    }
}
