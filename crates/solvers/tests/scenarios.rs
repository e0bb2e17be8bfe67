use approx::assert_relative_eq;
use proptest::prelude::*;
use stepwise_core::{
    LinearEquation, Point, Problem, ProblemSpec, Relation, Root, RootType, SolutionInterval,
    Solution, SolutionType, SystemMethod,
    poly::{evaluate, synthetic_division},
};
use stepwise_solvers::{
    classify::{PolynomialConfig, SystemConfig, classify_polynomial, classify_system},
    solve,
    verify::{Confidence, verify},
};

fn solve_text(equation: &str) -> Solution {
    let config = PolynomialConfig {
        equation: Some(equation.to_owned()),
        ..PolynomialConfig::default()
    };
    let problem = classify_polynomial(&config).expect("should classify");
    solve(&problem).expect("should solve")
}

fn solve_system(equations: [&str; 2], method: SystemMethod) -> Solution {
    let config = SystemConfig {
        equations: equations.iter().map(|eq| (*eq).to_owned()).collect(),
        method: Some(method),
        ..SystemConfig::default()
    };
    let problem = classify_system(&config).expect("should classify");
    solve(&problem).expect("should solve")
}

#[test]
fn cubic_with_three_rational_roots() {
    let config = PolynomialConfig {
        equation: Some("x^3 - 6x^2 + 11x - 6 = 0".to_owned()),
        scenario: Some("use the rational root theorem".to_owned()),
        ..PolynomialConfig::default()
    };
    let problem = classify_polynomial(&config).expect("should classify");
    let Solution::RationalRoots(solution) = solve(&problem).expect("should solve") else {
        panic!("expected rational roots");
    };

    for candidate in [1.0, 2.0, 3.0, 6.0, -1.0, -2.0, -3.0, -6.0] {
        assert!(solution.rational.candidates.contains(&candidate));
    }
    assert_eq!(solution.roots, vec![1.0, 2.0, 3.0]);
}

#[test]
fn cubic_text_reduces_to_quadratic() {
    let solution = solve_text("x^3 - 6x^2 + 11x - 6 = 0");
    let Solution::Cubic(cubic) = &solution else {
        panic!("expected a cubic solution");
    };
    assert_eq!(
        cubic.roots(),
        vec![Root::real(1.0), Root::real(2.0), Root::real(3.0)]
    );
    assert_eq!(verify(&solution).confidence, Confidence::High);
}

#[test]
fn quadratic_inequality_solution_set() {
    let Solution::Inequality(solution) = solve_text("x^2 - 4 > 0") else {
        panic!("expected an inequality solution");
    };
    assert_eq!(solution.relation, Relation::Gt);
    assert_eq!(
        solution.solution_set,
        vec![
            SolutionInterval {
                start: f64::NEG_INFINITY,
                end: -2.0,
                start_closed: false,
                end_closed: false,
            },
            SolutionInterval {
                start: 2.0,
                end: f64::INFINITY,
                start_closed: false,
                end_closed: false,
            },
        ]
    );
}

#[test]
fn complex_quadratic_verifies() {
    let solution = solve_text("x^2 + 2x + 5 = 0");
    let Solution::Quadratic(quadratic) = &solution else {
        panic!("expected a quadratic solution");
    };
    assert_eq!(quadratic.root_type, RootType::Complex);
    assert_eq!(verify(&solution).confidence, Confidence::High);
}

#[test]
fn degenerate_systems_for_every_method() {
    for method in [
        SystemMethod::Substitution,
        SystemMethod::Elimination,
        SystemMethod::Graphical,
        SystemMethod::Matrix,
    ] {
        let cases = [
            (["2x + y = 5", "4x + 2y = 10"], SolutionType::Dependent, None),
            (["2x + y = 5", "2x + y = 3"], SolutionType::Inconsistent, None),
            (
                ["x + y = 5", "x - y = 1"],
                SolutionType::Unique,
                Some(Point::new(3.0, 2.0)),
            ),
        ];
        for (equations, expected_type, expected_values) in cases {
            let solution = solve_system(equations, method);
            let Solution::LinearSystem(system) = &solution else {
                panic!("expected a linear system");
            };
            assert_eq!(system.solution_type, expected_type, "{method:?} {equations:?}");
            assert_eq!(system.values, expected_values, "{method:?} {equations:?}");

            let confidence = verify(&solution).confidence;
            if expected_type == SolutionType::Unique {
                assert_eq!(confidence, Confidence::High);
            } else {
                assert_eq!(confidence, Confidence::Confirmed);
            }
        }
    }
}

#[test]
fn nonlinear_system_from_text() {
    let config = SystemConfig {
        equations: vec!["y = x^2 - 1".to_owned(), "x + y = 1".to_owned()],
        ..SystemConfig::default()
    };
    let problem = classify_system(&config).expect("should classify");
    let solution = solve(&problem).expect("should solve");
    let Solution::Nonlinear(nonlinear) = &solution else {
        panic!("expected a nonlinear solution");
    };
    // x² - 1 = 1 - x  ⇒  x² + x - 2 = 0  ⇒  x ∈ {-2, 1}
    assert_eq!(
        nonlinear.points,
        vec![Point::new(-2.0, 3.0), Point::new(1.0, 0.0)]
    );
    assert_eq!(verify(&solution).confidence, Confidence::High);
}

#[test]
fn solving_is_deterministic() {
    let problem = Problem::new(ProblemSpec::AllRoots {
        coefficients: vec![1.0, 0.0, -5.0, 0.0, 4.0],
    });
    let first = solve(&problem).expect("should solve");
    let second = solve(&problem).expect("should solve");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializable"),
        serde_json::to_string(&second).expect("serializable")
    );
}

proptest! {
    #[test]
    fn synthetic_division_remainder_is_value(
        coefficients in prop::collection::vec(-20i32..=20, 2..=5),
        root in -5i32..=5,
    ) {
        let coefficients: Vec<f64> = coefficients.into_iter().map(f64::from).collect();
        let root = f64::from(root);
        let division = synthetic_division(&coefficients, root);
        assert_relative_eq!(
            division.remainder,
            evaluate(&coefficients, root),
            epsilon = 1e-9
        );
    }

    #[test]
    fn cramer_matches_elimination(
        a1 in -9i32..=9, b1 in -9i32..=9, c1 in -20i32..=20,
        a2 in -9i32..=9, b2 in -9i32..=9, c2 in -20i32..=20,
    ) {
        let equations = [
            LinearEquation::new(f64::from(a1), f64::from(b1), f64::from(c1)),
            LinearEquation::new(f64::from(a2), f64::from(b2), f64::from(c2)),
        ];
        let by = |method| {
            let problem = Problem::new(ProblemSpec::System2 { method, equations });
            match solve(&problem).expect("should solve") {
                Solution::LinearSystem(system) => system,
                other => panic!("unexpected solution {other:?}"),
            }
        };
        let cramer = by(SystemMethod::Matrix);
        let elimination = by(SystemMethod::Elimination);
        prop_assert_eq!(cramer.solution_type, elimination.solution_type);
        if let (Some(p), Some(q)) = (cramer.values, elimination.values) {
            assert_relative_eq!(p.x, q.x, epsilon = 1e-9, max_relative = 1e-9);
            assert_relative_eq!(p.y, q.y, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}
