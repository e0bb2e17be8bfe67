//! Solution-specific rows of the Final Solution and Analysis sections.

use stepwise_core::{
    CubicSolution, EndBehavior, Expr, FactoringSolution, QuarticMethod, QuarticStatus,
    Recommendation, Root, RootType, Solution, SolutionType, SystemMethod, tolerance::is_zero,
};

use super::Cell;
use crate::{generate::x_poly, render};

type Row = Vec<Cell>;

fn row(label: impl Into<Cell>, value: impl Into<Cell>) -> Row {
    vec![label.into(), value.into()]
}

/// The answer in numbers: one row per root, value, or point.
pub(super) fn final_rows(solution: &Solution) -> Vec<Row> {
    match solution {
        Solution::Quadratic(s) => root_rows(&s.roots),
        Solution::Factoring(FactoringSolution::Factored { roots, .. }) => real_rows("x", roots),
        Solution::Factoring(FactoringSolution::NotFactorable { recommendation, .. }) => vec![
            row("Result", "Not factorable over the integers"),
            row("Recommendation", recommendation_name(*recommendation)),
        ],
        Solution::CompletingSquare(s) => {
            let mut rows = root_rows(&s.roots);
            rows.push(vec!["Vertex".into(), s.vertex.x.into(), s.vertex.y.into()]);
            rows
        }
        Solution::Cubic(CubicSolution::Reduced { roots, .. }) => root_rows(roots),
        Solution::Cubic(CubicSolution::NoRationalRoot {
            estimates,
            recommendation,
            ..
        }) => {
            let mut rows = vec![row("Rational Roots", "None")];
            rows.extend(real_rows("x ≈", estimates));
            rows.push(row("Recommendation", recommendation_name(*recommendation)));
            rows
        }
        Solution::Quartic(s) => {
            let mut rows = root_rows(&s.roots);
            if s.status == QuarticStatus::Partial {
                rows.push(row("Unsolved Factor", render::expr(&x_poly(&s.remaining))));
            }
            rows
        }
        Solution::Division(s) => vec![
            row("Quotient", render::expr(&x_poly(&s.division.quotient))),
            row("Remainder", render::expr(&x_poly(&s.division.remainder))),
        ],
        Solution::SyntheticDivision(s) => vec![
            row("Quotient", render::expr(&x_poly(&s.quotient))),
            row("Remainder", s.remainder),
        ],
        Solution::RationalRoots(s) if s.roots.is_empty() => vec![row("Rational Roots", "None")],
        Solution::RationalRoots(s) => real_rows("x", &s.roots),
        Solution::Factorization(s) => {
            let mut rows: Vec<Row> = s
                .factors
                .iter()
                .map(|f| {
                    vec![
                        render::expr(&Expr::binomial(1.0, -f.root, "x")).into(),
                        "multiplicity".into(),
                        f.multiplicity.into(),
                    ]
                })
                .collect();
            rows.push(row("Remaining Factor", render::expr(&x_poly(&s.remaining))));
            rows
        }
        Solution::AllRoots(s) => {
            let mut rows = root_rows(&s.roots);
            rows.push(row("All Roots Found", s.complete));
            rows
        }
        Solution::Inequality(s) => vec![row(
            "Interval Notation",
            render::expr(&crate::generate::solution_set(&s.solution_set)),
        )],
        Solution::Graph(s) => {
            let mut rows = real_rows("Zero", &s.zeros);
            rows.push(row("y-intercept", s.y_intercept));
            rows.extend(
                s.turning_points
                    .iter()
                    .map(|p| vec!["Turning Point".into(), p.x.into(), p.y.into()]),
            );
            rows
        }
        Solution::Remainder(s) => vec![
            row(format!("P({})", render::number(s.point)), s.value),
            row("Is a Factor", s.is_factor),
        ],
        Solution::Application(s) => {
            let label = match &s.unit {
                Some(unit) => format!("{} ({unit})", s.quantity),
                None => s.quantity.clone(),
            };
            if s.meaningful.is_empty() {
                vec![row(label, "No meaningful solution")]
            } else {
                s.meaningful.iter().map(|&v| row(label.as_str(), v)).collect()
            }
        }
        Solution::LinearSystem(s) => system_rows(s.solution_type, s.values.map(|p| [p.x, p.y])),
        Solution::System3(s) => match s.values {
            Some([x, y, z]) => vec![row("x", x), row("y", y), row("z", z)],
            None => vec![row("Solution", "No unique solution")],
        },
        Solution::WordProblem(s) => match s.system.values {
            Some(p) => vec![
                row(s.labels[0].as_str(), p.x),
                row(s.labels[1].as_str(), p.y),
            ],
            None => system_rows(s.system.solution_type, None),
        },
        Solution::InequalitySystem(s) if s.vertices.is_empty() => {
            vec![row("Vertices", "None")]
        }
        Solution::InequalitySystem(s) => s
            .vertices
            .iter()
            .map(|p| vec!["Vertex".into(), p.x.into(), p.y.into()])
            .collect(),
        Solution::Nonlinear(s) if s.points.is_empty() => vec![row("Intersections", "None")],
        Solution::Nonlinear(s) => s
            .points
            .iter()
            .map(|p| vec!["Intersection".into(), p.x.into(), p.y.into()])
            .collect(),
    }
}

/// Facts about the method and the answer beyond the answer itself.
pub(super) fn analysis_rows(solution: &Solution) -> Vec<Row> {
    match solution {
        Solution::Quadratic(s) => discriminant_rows(s.discriminant, s.root_type),
        Solution::CompletingSquare(s) => {
            let mut rows = discriminant_rows(s.discriminant, s.root_type);
            rows.push(row("Half Coefficient (b/2a)", s.half_coefficient));
            rows.push(row("Added to Both Sides", s.square_term));
            rows
        }
        Solution::Factoring(s) => {
            let (product, b) = match *s {
                FactoringSolution::Factored { product, b, .. }
                | FactoringSolution::NotFactorable { product, b, .. } => (product, b),
            };
            vec![row("Product ac", product), row("Sum b", b)]
        }
        Solution::Cubic(s) => {
            let candidates = match s {
                CubicSolution::Reduced { candidates, .. }
                | CubicSolution::NoRationalRoot { candidates, .. } => candidates.len(),
            };
            vec![row("Candidates Tested", candidates)]
        }
        Solution::Quartic(s) => vec![
            row(
                "Approach",
                match s.method {
                    QuarticMethod::Biquadratic { .. } => "Substitution u = x²",
                    QuarticMethod::RationalRoots { .. } => "Rational Root Theorem",
                },
            ),
            row("Complete", s.status == QuarticStatus::Complete),
        ],
        Solution::Division(s) => vec![row("Subtraction Rounds", s.division.rows.len())],
        Solution::SyntheticDivision(s) => vec![row("Divides Evenly", is_zero(s.remainder))],
        Solution::RationalRoots(s) => vec![row("Candidates Tested", s.tests.len())],
        Solution::Factorization(s) => vec![row("Linear Factors", s.factors.len())],
        Solution::AllRoots(s) => vec![
            row("Rational Roots", s.rational.len()),
            row("Numerical Roots", s.numerical.len()),
        ],
        Solution::Inequality(s) => vec![
            row("Critical Points", s.zeros.len()),
            row("Intervals Tested", s.tests.len()),
        ],
        Solution::Graph(s) => vec![
            row("Leading Coefficient", s.leading_coefficient),
            row("End Behavior", end_behavior_name(s.end_behavior)),
            row("Maximum Turning Points", s.max_turning_points),
        ],
        Solution::Remainder(s) => vec![row("Quotient", render::expr(&x_poly(&s.quotient)))],
        Solution::Application(s) => vec![
            row("Roots Found", s.roots.roots.len()),
            row("Meaningful Roots", s.meaningful.len()),
        ],
        Solution::LinearSystem(s) => vec![
            row("Method", method_name(s.method)),
            row("Determinant", s.determinant),
            row("Solution Type", solution_type_name(s.solution_type)),
        ],
        Solution::System3(s) => vec![row("Determinant", s.lu.determinant)],
        Solution::WordProblem(s) => vec![
            row("Determinant", s.system.determinant),
            row("Solution Type", solution_type_name(s.system.solution_type)),
        ],
        Solution::InequalitySystem(s) => vec![
            row("Boundary Intersections", s.intersections.len()),
            row("Feasible Vertices", s.vertices.len()),
        ],
        Solution::Nonlinear(s) => match &s.quadratic {
            Some(q) => discriminant_rows(q.discriminant, q.root_type),
            None => vec![row("Line", "vertical")],
        },
    }
}

fn root_rows(roots: &[Root]) -> Vec<Row> {
    roots
        .iter()
        .enumerate()
        .map(|(i, root)| match root.as_real() {
            Some(value) => row(format!("x{}", i + 1), value),
            None => row(format!("x{}", i + 1), render::root(root)),
        })
        .collect()
}

fn real_rows(label: &str, values: &[f64]) -> Vec<Row> {
    values.iter().map(|&v| row(label, v)).collect()
}

fn system_rows(solution_type: SolutionType, values: Option<[f64; 2]>) -> Vec<Row> {
    match (solution_type, values) {
        (SolutionType::Unique, Some([x, y])) => vec![row("x", x), row("y", y)],
        (SolutionType::Dependent, _) => vec![row("Solution", "Infinitely many solutions")],
        _ => vec![row("Solution", "No solution")],
    }
}

fn discriminant_rows(discriminant: f64, root_type: RootType) -> Vec<Row> {
    vec![
        row("Discriminant", discriminant),
        row(
            "Root Type",
            match root_type {
                RootType::RealDistinct => "Two distinct real roots",
                RootType::RealRepeated => "One repeated real root",
                RootType::Complex => "Complex conjugate pair",
            },
        ),
    ]
}

fn recommendation_name(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::QuadraticFormula => "Use the quadratic formula",
        Recommendation::NumericalMethods => "Use Cardano's formula or numerical methods",
    }
}

fn end_behavior_name(end_behavior: EndBehavior) -> &'static str {
    match end_behavior {
        EndBehavior::UpUp => "Rises left, rises right",
        EndBehavior::DownDown => "Falls left, falls right",
        EndBehavior::DownUp => "Falls left, rises right",
        EndBehavior::UpDown => "Rises left, falls right",
    }
}

fn method_name(method: SystemMethod) -> &'static str {
    match method {
        SystemMethod::Substitution => "Substitution",
        SystemMethod::Elimination => "Elimination",
        SystemMethod::Graphical => "Graphical",
        SystemMethod::Matrix => "Cramer's Rule",
    }
}

fn solution_type_name(solution_type: SolutionType) -> &'static str {
    match solution_type {
        SolutionType::Unique => "Unique solution",
        SolutionType::Inconsistent => "Inconsistent (no solution)",
        SolutionType::Dependent => "Dependent (infinitely many solutions)",
    }
}

#[cfg(test)]
mod tests {
    use stepwise_core::{LinearEquation3, Problem, ProblemSpec};
    use stepwise_solvers::solve;

    use super::*;

    fn solved(spec: ProblemSpec) -> Solution {
        solve(&Problem::new(spec)).expect("should solve")
    }

    #[test]
    fn complex_roots_render_as_text() {
        let rows = final_rows(&solved(ProblemSpec::Quadratic {
            a: 1.0,
            b: 0.0,
            c: 1.0,
        }));
        assert_eq!(rows[0], row("x1", "-i"));
        assert_eq!(rows[1], row("x2", "i"));
    }

    #[test]
    fn singular_three_by_three_has_no_unique_solution() {
        let rows = final_rows(&solved(ProblemSpec::System3 {
            equations: [
                LinearEquation3::new(1.0, 1.0, 1.0, 3.0),
                LinearEquation3::new(2.0, 2.0, 2.0, 6.0),
                LinearEquation3::new(1.0, -1.0, 0.0, 0.0),
            ],
        }));
        assert_eq!(rows, vec![row("Solution", "No unique solution")]);
    }

    #[test]
    fn inequality_reports_interval_notation() {
        let rows = final_rows(&solved(ProblemSpec::Inequality {
            coefficients: vec![1.0, 0.0, -4.0],
            relation: stepwise_core::Relation::Gt,
        }));
        assert_eq!(rows, vec![row("Interval Notation", "(-∞, -2) ∪ (2, ∞)")]);
    }

    #[test]
    fn graph_analysis_names_end_behavior() {
        let rows = analysis_rows(&solved(ProblemSpec::Graphing {
            coefficients: vec![-1.0, 0.0, 4.0],
        }));
        assert!(rows.contains(&row("End Behavior", "Falls left, falls right")));
        assert!(rows.contains(&row("Maximum Turning Points", 1usize)));
    }
}
