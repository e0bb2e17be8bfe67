use stepwise_core::{
    EliminationDetail, Error, Line, LinearEquation, LinearSystemSolution, MethodDetail, Point,
    SolutionType, SubstitutionDetail, SystemMethod, Variable,
    arith::gcd,
    linalg::determinant_2x2,
    tolerance::{is_zero, snap},
};

use super::finite;

/// Solves `a₁x + b₁y = c₁`, `a₂x + b₂y = c₂` with the requested method.
///
/// Every method first classifies the system with
/// [`SolutionType::classify`]; dependent and inconsistent systems stop there
/// with no values. The graphical method computes its intersection with the
/// same determinant formula as Cramer's Rule.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if a coefficient is not finite.
pub fn solve(
    equations: [LinearEquation; 2],
    method: SystemMethod,
) -> Result<LinearSystemSolution, Error> {
    let [e1, e2] = equations;
    finite(&[e1.a, e1.b, e1.c, e2.a, e2.b, e2.c])?;

    let determinant = snap(determinant_2x2(e1.a, e1.b, e2.a, e2.b));
    let solution_type = SolutionType::classify(&e1, &e2);
    let lines = [Line::of(&e1), Line::of(&e2)];

    if solution_type != SolutionType::Unique {
        tracing::debug!(?solution_type, determinant, "degenerate 2x2 system");
        return Ok(LinearSystemSolution {
            method,
            equations,
            determinant,
            solution_type,
            values: None,
            detail: None,
            lines,
        });
    }

    let (values, detail) = match method {
        SystemMethod::Substitution => substitution(&e1, &e2),
        SystemMethod::Elimination => elimination(&e1, &e2),
        SystemMethod::Graphical | SystemMethod::Matrix => cramer(&e1, &e2),
    };

    Ok(LinearSystemSolution {
        method,
        equations,
        determinant,
        solution_type,
        values: Some(values),
        detail: Some(detail),
        lines,
    })
}

/// Isolates the variable with the smaller nonzero coefficient in the first
/// equation, preferring `x` on a tie.
fn substitution(e1: &LinearEquation, e2: &LinearEquation) -> (Point, MethodDetail) {
    let isolated = match (is_zero(e1.a), is_zero(e1.b)) {
        (false, true) => Variable::X,
        (true, false) => Variable::Y,
        _ if e1.b.abs() < e1.a.abs() => Variable::Y,
        _ => Variable::X,
    };
    let other = isolated.other();

    let pivot = isolated.coefficient(e1);
    let constant = e1.c / pivot;
    let coefficient = -other.coefficient(e1) / pivot;

    let reduced_coefficient = isolated.coefficient(e2) * coefficient + other.coefficient(e2);
    let reduced_rhs = e2.c - isolated.coefficient(e2) * constant;
    let other_value = snap(reduced_rhs / reduced_coefficient);
    let isolated_value = snap(constant + coefficient * other_value);

    let detail = SubstitutionDetail {
        isolated,
        constant: snap(constant),
        coefficient: snap(coefficient),
        reduced_coefficient: snap(reduced_coefficient),
        reduced_rhs: snap(reduced_rhs),
        other_value,
        isolated_value,
    };
    (
        point(isolated, isolated_value, other_value),
        MethodDetail::Substitution(detail),
    )
}

/// Scales both equations so one variable's coefficients are opposites, then
/// adds them.
fn elimination(e1: &LinearEquation, e2: &LinearEquation) -> (Point, MethodDetail) {
    let eliminated = choose_eliminated(e1, e2);
    let remaining = eliminated.other();

    let multipliers = opposite_multipliers(eliminated.coefficient(e1), eliminated.coefficient(e2));
    let scaled = [e1.scaled(multipliers[0]), e2.scaled(multipliers[1])];
    let mut combined = LinearEquation::new(
        scaled[0].a + scaled[1].a,
        scaled[0].b + scaled[1].b,
        scaled[0].c + scaled[1].c,
    );
    match eliminated {
        Variable::X => combined.a = 0.0,
        Variable::Y => combined.b = 0.0,
    }

    let remaining_value = snap(combined.c / remaining.coefficient(&combined));

    let back_equation = if is_zero(eliminated.coefficient(e1)) { 1 } else { 0 };
    let back = if back_equation == 0 { e1 } else { e2 };
    let eliminated_value =
        snap((back.c - remaining.coefficient(back) * remaining_value) / eliminated.coefficient(back));

    let detail = EliminationDetail {
        eliminated,
        multipliers,
        scaled,
        combined,
        remaining_value,
        back_equation,
        eliminated_value,
    };
    (
        point(eliminated, eliminated_value, remaining_value),
        MethodDetail::Elimination(detail),
    )
}

/// Picks the variable to eliminate.
///
/// A variable missing from one equation is already eliminated there. When
/// both variables appear in both equations, the one whose coefficients share
/// the larger common factor needs the smaller multipliers; ties go to `x`.
fn choose_eliminated(e1: &LinearEquation, e2: &LinearEquation) -> Variable {
    let present = |v: Variable| !is_zero(v.coefficient(e1)) && !is_zero(v.coefficient(e2));
    match (present(Variable::X), present(Variable::Y)) {
        (true, true) => {
            if gcd(e1.b, e2.b) > gcd(e1.a, e2.a) {
                Variable::Y
            } else {
                Variable::X
            }
        }
        (true, false) => Variable::Y,
        (false, true) => Variable::X,
        (false, false) => {
            if is_zero(e1.a) || is_zero(e2.a) {
                Variable::X
            } else {
                Variable::Y
            }
        }
    }
}

/// Multipliers `[m₁, m₂]` with `m₁·p₁ + m₂·p₂ = 0`.
///
/// For integer coefficients the multipliers are divided by `gcd(|p₁|, |p₂|)`.
/// The second multiplier is negated when `p₁` and `p₂` share a sign, so the
/// scaled coefficients are opposites and the equations are added.
fn opposite_multipliers(p1: f64, p2: f64) -> [f64; 2] {
    if is_zero(p2) {
        return [0.0, 1.0];
    }
    if is_zero(p1) {
        return [1.0, 0.0];
    }

    let g = gcd(p1, p2);
    let m1 = p2.abs() / g;
    let m2 = p1.abs() / g;
    if p1.signum() == p2.signum() {
        [snap(m1), snap(-m2)]
    } else {
        [snap(m1), snap(m2)]
    }
}

fn cramer(e1: &LinearEquation, e2: &LinearEquation) -> (Point, MethodDetail) {
    let d = determinant_2x2(e1.a, e1.b, e2.a, e2.b);
    let dx = e1.c * e2.b - e2.c * e1.b;
    let dy = e1.a * e2.c - e2.a * e1.c;
    (
        Point::new(snap(dx / d), snap(dy / d)),
        MethodDetail::Determinants {
            d: snap(d),
            dx: snap(dx),
            dy: snap(dy),
        },
    )
}

fn point(first: Variable, first_value: f64, second_value: f64) -> Point {
    match first {
        Variable::X => Point::new(first_value, second_value),
        Variable::Y => Point::new(second_value, first_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn system(e1: [f64; 3], e2: [f64; 3]) -> [LinearEquation; 2] {
        [
            LinearEquation::new(e1[0], e1[1], e1[2]),
            LinearEquation::new(e2[0], e2[1], e2[2]),
        ]
    }

    const METHODS: [SystemMethod; 4] = [
        SystemMethod::Substitution,
        SystemMethod::Elimination,
        SystemMethod::Graphical,
        SystemMethod::Matrix,
    ];

    #[test]
    fn every_method_finds_unique_solution() {
        for method in METHODS {
            let solution =
                solve(system([1.0, 1.0, 5.0], [1.0, -1.0, 1.0]), method).expect("should solve");
            assert_eq!(solution.solution_type, SolutionType::Unique);
            assert_eq!(solution.values, Some(Point::new(3.0, 2.0)), "{method:?}");
        }
    }

    #[test]
    fn every_method_detects_degenerate_systems() {
        for method in METHODS {
            let dependent =
                solve(system([2.0, 1.0, 5.0], [4.0, 2.0, 10.0]), method).expect("should solve");
            assert_eq!(dependent.solution_type, SolutionType::Dependent);
            assert!(dependent.values.is_none());

            let inconsistent =
                solve(system([2.0, 1.0, 5.0], [2.0, 1.0, 3.0]), method).expect("should solve");
            assert_eq!(inconsistent.solution_type, SolutionType::Inconsistent);
            assert!(inconsistent.values.is_none());
        }
    }

    #[test]
    fn substitution_isolates_smaller_coefficient() {
        // 4x + y = 9, 3x - 2y = 4: y has the smaller coefficient in eq 1
        let solution = solve(
            system([4.0, 1.0, 9.0], [3.0, -2.0, 4.0]),
            SystemMethod::Substitution,
        )
        .expect("should solve");
        let Some(MethodDetail::Substitution(detail)) = solution.detail else {
            panic!("expected substitution detail");
        };
        assert_eq!(detail.isolated, Variable::Y);
        assert_eq!(detail.constant, 9.0);
        assert_eq!(detail.coefficient, -4.0);
        assert_eq!(detail.reduced_coefficient, 11.0);
        assert_eq!(detail.reduced_rhs, 22.0);
        assert_eq!(solution.values, Some(Point::new(2.0, 1.0)));
    }

    #[test]
    fn elimination_produces_opposite_coefficients() {
        // 3x + 2y = 16, 5x + 2y = 24: y coefficients share the factor 2
        let solution = solve(
            system([3.0, 2.0, 16.0], [5.0, 2.0, 24.0]),
            SystemMethod::Elimination,
        )
        .expect("should solve");
        let Some(MethodDetail::Elimination(detail)) = solution.detail else {
            panic!("expected elimination detail");
        };
        assert_eq!(detail.eliminated, Variable::Y);
        assert_eq!(detail.multipliers, [1.0, -1.0]);
        assert_eq!(detail.scaled[0].b, -detail.scaled[1].b);
        assert_eq!(detail.combined.b, 0.0);
        assert_eq!(solution.values, Some(Point::new(4.0, 2.0)));
    }

    #[test]
    fn elimination_with_opposite_signs_adds_directly() {
        let solution = solve(
            system([2.0, 3.0, 12.0], [4.0, -3.0, 6.0]),
            SystemMethod::Elimination,
        )
        .expect("should solve");
        let Some(MethodDetail::Elimination(detail)) = solution.detail else {
            panic!("expected elimination detail");
        };
        assert_eq!(detail.eliminated, Variable::Y);
        assert_eq!(detail.multipliers, [1.0, 1.0]);
        assert_eq!(solution.values, Some(Point::new(3.0, 2.0)));
    }

    #[test]
    fn elimination_with_missing_variable() {
        // y = 4 and 2x + y = 10
        let solution = solve(
            system([0.0, 1.0, 4.0], [2.0, 1.0, 10.0]),
            SystemMethod::Elimination,
        )
        .expect("should solve");
        assert_eq!(solution.values, Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn cramer_determinants() {
        let solution = solve(
            system([2.0, 3.0, 8.0], [1.0, -1.0, -1.0]),
            SystemMethod::Matrix,
        )
        .expect("should solve");
        assert_eq!(
            solution.detail,
            Some(MethodDetail::Determinants {
                d: -5.0,
                dx: -5.0,
                dy: -10.0
            })
        );
        assert_eq!(solution.values, Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn graphical_reports_lines() {
        let solution = solve(
            system([1.0, 1.0, 5.0], [1.0, -1.0, 1.0]),
            SystemMethod::Graphical,
        )
        .expect("should solve");
        assert_eq!(
            solution.lines[0],
            Line::SlopeIntercept {
                slope: -1.0,
                intercept: 5.0
            }
        );
        assert_eq!(solution.values, Some(Point::new(3.0, 2.0)));
    }

    #[test]
    fn rejects_non_finite_input() {
        let result = solve(
            system([f64::NAN, 1.0, 1.0], [1.0, 1.0, 1.0]),
            SystemMethod::Elimination,
        );
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
    }

    fn coefficient() -> impl Strategy<Value = f64> {
        (-12i32..=12).prop_map(f64::from)
    }

    proptest! {
        #[test]
        fn cramer_and_elimination_agree(
            a1 in coefficient(), b1 in coefficient(), c1 in coefficient(),
            a2 in coefficient(), b2 in coefficient(), c2 in coefficient(),
        ) {
            let equations = system([a1, b1, c1], [a2, b2, c2]);
            let cramer = solve(equations, SystemMethod::Matrix).expect("finite input");
            let elimination = solve(equations, SystemMethod::Elimination).expect("finite input");
            let substitution = solve(equations, SystemMethod::Substitution).expect("finite input");

            prop_assert_eq!(cramer.solution_type, elimination.solution_type);
            prop_assert_eq!(cramer.solution_type, substitution.solution_type);
            if let (Some(p), Some(q), Some(r)) = (cramer.values, elimination.values, substitution.values) {
                assert_relative_eq!(p.x, q.x, epsilon = 1e-9, max_relative = 1e-9);
                assert_relative_eq!(p.y, q.y, epsilon = 1e-9, max_relative = 1e-9);
                assert_relative_eq!(p.x, r.x, epsilon = 1e-9, max_relative = 1e-9);
                assert_relative_eq!(p.y, r.y, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
}
