use stepwise_core::{
    EliminationDetail, Expr, InequalitySystemSolution, LinearEquation, LinearSystemSolution,
    MethodDetail, NonlinearSystemSolution, Point, SolutionType, SubstitutionDetail,
    System3Solution, SystemMethod, WordProblemSolution,
};

use super::{
    equation, line, linear_equation, linear_equation3, linear_inequality, parabola_equation,
    point, values,
};
use crate::step::{Concept, Step};

pub(super) fn two_by_two(s: &LinearSystemSolution) -> Vec<Step> {
    let mut steps = vec![write_system(s)];
    match (s.detail, s.values) {
        (Some(detail), Some(values)) => steps.extend(method_steps(s, detail, values)),
        _ => steps.push(degenerate(s)),
    }
    steps
}

pub(super) fn three_by_three(s: &System3Solution) -> Vec<Step> {
    let augmented = s
        .equations
        .iter()
        .map(|e| [e.a, e.b, e.c, e.d].map(Expr::num).to_vec())
        .collect();
    let reduced = s
        .lu
        .upper
        .iter()
        .zip(s.lu.reduced_rhs)
        .map(|(row, rhs)| row.iter().copied().chain([rhs]).map(Expr::num).collect())
        .collect();

    let mut steps = vec![
        Step::new(Concept::WriteSystem, "Write the three equations")
            .after(Expr::List(
                s.equations.iter().map(linear_equation3).collect(),
            ))
            .reasoning("Each equation is a plane; a unique solution is where all three meet"),
        Step::new(
            Concept::Triangulate,
            "Reduce the augmented matrix to upper-triangular form",
        )
        .before(Expr::Matrix(augmented))
        .operation("row swaps and row subtractions")
        .after(Expr::Matrix(reduced))
        .reasoning("Pivoting on the largest entry in each column keeps the arithmetic stable")
        .rule("Gaussian elimination with partial pivoting"),
    ];

    steps.push(match s.values {
        Some([x, y, z]) => Step::new(
            Concept::BackSubstitute,
            "Solve the last row for z, then work upward for y and x",
        )
        .after(Expr::List(vec![
            Expr::assign("x", x),
            Expr::assign("y", y),
            Expr::assign("z", z),
        ]))
        .reasoning("Each row above introduces exactly one new unknown")
        .rule("Back substitution")
        .final_answer(),
        None => Step::new(Concept::Degenerate, "The coefficient matrix is singular")
            .before(Expr::assign("det", s.lu.determinant))
            .after(Expr::Empty)
            .reasoning("With a zero determinant the system has no solution or infinitely many")
            .final_answer(),
    });
    steps
}

pub(super) fn word_problem(s: &WordProblemSolution) -> Vec<Step> {
    let [first, second] = &s.labels;
    let mut steps = two_by_two(&s.system);
    if let Some(setup) = steps.first_mut() {
        setup.description = format!("Let x = {first} and y = {second}, then write the equations");
    }

    if let Some(values) = s.system.values {
        if let Some(last) = steps.last_mut() {
            last.is_final = false;
        }
        steps.push(
            Step::new(Concept::Interpret, "State the answer in terms of the problem")
                .before(point(values))
                .after(Expr::List(vec![
                    Expr::assign(first, values.x),
                    Expr::assign(second, values.y),
                ]))
                .reasoning("x and y stand for the quantities named in the problem")
                .final_answer(),
        );
    }
    steps
}

pub(super) fn inequalities(s: &InequalitySystemSolution) -> Vec<Step> {
    let origin_tests = s
        .inequalities
        .iter()
        .map(|i| Expr::rel(i.relation, Expr::num(0.0), Expr::num(i.c)))
        .collect();

    vec![
        Step::new(Concept::WriteSystem, "Write the inequalities")
            .after(Expr::List(
                s.inequalities.iter().map(linear_inequality).collect(),
            ))
            .reasoning("The solution is every point that satisfies all of them at once"),
        Step::new(Concept::Boundaries, "Replace each inequality sign with = to get the boundary lines")
            .after(Expr::List(s.boundaries.iter().map(line).collect()))
            .reasoning("Strict inequalities give dashed boundaries, inclusive ones solid"),
        Step::new(Concept::Shading, "Test the origin (0, 0) in each inequality")
            .after(Expr::List(origin_tests))
            .reasoning(if s.origin_tests.iter().all(|&ok| ok) {
                "The origin satisfies every inequality, so each region lies on its side"
            } else {
                "Shade toward the origin where the test holds and away from it elsewhere"
            })
            .rule("Test point"),
        Step::new(Concept::Vertices, "Keep the boundary intersections inside every region")
            .before(list_of_points(&s.intersections))
            .after(list_of_points(&s.vertices))
            .reasoning(if s.vertices.is_empty() {
                "No intersection satisfies every inequality"
            } else {
                "These corners outline the feasible region"
            })
            .final_answer(),
    ]
}

pub(super) fn nonlinear(s: &NonlinearSystemSolution) -> Vec<Step> {
    let mut steps = vec![
        Step::new(Concept::WriteSystem, "Write the line and the parabola")
            .after(Expr::List(vec![
                linear_equation(&s.line),
                parabola_equation(&s.parabola),
            ]))
            .reasoning("Intersection points satisfy both equations"),
    ];

    match &s.quadratic {
        Some(q) => {
            steps.push(
                Step::new(
                    Concept::ReduceToQuadratic,
                    "Solve the line for y and substitute into the parabola",
                )
                .before(line(&stepwise_core::Line::of(&s.line)))
                .operation("set the two expressions for y equal")
                .after(equation(&s.reduced))
                .reasoning("Equal y values at the same x give a quadratic in x")
                .rule("Substitution"),
            );
            steps.push(super::polynomial::discriminant(q));
        }
        None => steps.push(
            Step::new(
                Concept::ReduceToQuadratic,
                "The line is vertical, so x is fixed; evaluate the parabola there",
            )
            .before(linear_equation(&s.line))
            .after(values("x", &s.points.iter().map(|p| p.x).collect::<Vec<_>>()))
            .reasoning("A vertical line meets a parabola exactly once"),
        ),
    }

    steps.push(
        Step::new(Concept::Intersection, "Find y for each x to get the intersection points")
            .after(list_of_points(&s.points))
            .reasoning(match s.points.len() {
                0 => "The line misses the parabola",
                1 => "The line touches the parabola at one point",
                _ => "The line crosses the parabola twice",
            })
            .final_answer(),
    );
    steps
}

fn write_system(s: &LinearSystemSolution) -> Step {
    Step::new(Concept::WriteSystem, "Write both equations in standard form")
        .after(Expr::List(s.equations.iter().map(linear_equation).collect()))
        .reasoning("Standard form ax + by = c lines up the coefficients of each variable")
}

fn method_steps(s: &LinearSystemSolution, detail: MethodDetail, values: Point) -> Vec<Step> {
    match detail {
        MethodDetail::Substitution(d) => {
            let mut steps = substitution(&s.equations, &d);
            steps.push(answer(values));
            steps
        }
        MethodDetail::Elimination(d) => {
            let mut steps = elimination(&s.equations, &d);
            steps.push(answer(values));
            steps
        }
        MethodDetail::Determinants { d, dx, dy } if s.method == SystemMethod::Matrix => {
            cramer(&s.equations, d, dx, dy, values)
        }
        MethodDetail::Determinants { .. } => graphical(s, values),
    }
}

fn substitution(equations: &[LinearEquation; 2], d: &SubstitutionDetail) -> Vec<Step> {
    let isolated = d.isolated.name();
    let other = d.isolated.other().name();
    let expression = Expr::sum(vec![
        Expr::num(d.constant),
        Expr::term(d.coefficient, other, 1),
    ]);

    vec![
        Step::new(
            Concept::Isolate,
            format!("Solve the first equation for {isolated}"),
        )
        .before(linear_equation(&equations[0]))
        .operation(format!("divide by the coefficient of {isolated}"))
        .after(Expr::eq(Expr::var(isolated), expression))
        .reasoning("The variable with the smaller coefficient is the simplest to isolate"),
        Step::new(
            Concept::Substitute,
            format!("Replace {isolated} in the second equation"),
        )
        .before(linear_equation(&equations[1]))
        .operation(format!("replace {isolated} with its expression in {other}"))
        .after(Expr::eq(
            Expr::term(d.reduced_coefficient, other, 1),
            Expr::num(d.reduced_rhs),
        ))
        .reasoning(format!("The second equation now has only {other}"))
        .rule("Substitution"),
        Step::new(Concept::SolveRemaining, format!("Solve for {other}"))
            .operation(format!("divide both sides by the coefficient of {other}"))
            .after(Expr::assign(other, d.other_value))
            .reasoning("One equation in one unknown"),
        Step::new(
            Concept::BackSubstitute,
            format!("Substitute {other} back to find {isolated}"),
        )
        .before(Expr::eq(
            Expr::var(isolated),
            Expr::sum(vec![
                Expr::num(d.constant),
                Expr::power_term(d.coefficient, Expr::group(Expr::num(d.other_value)), 1),
            ]),
        ))
        .after(Expr::assign(isolated, d.isolated_value))
        .reasoning("The isolated expression gives the second value directly"),
    ]
}

fn elimination(equations: &[LinearEquation; 2], d: &EliminationDetail) -> Vec<Step> {
    let eliminated = d.eliminated.name();
    let remaining = d.eliminated.other();
    let [m1, m2] = d.multipliers;
    let back = &equations[d.back_equation];

    vec![
        Step::new(
            Concept::Scale,
            format!("Scale the equations so the {eliminated} coefficients are opposites"),
        )
        .before(Expr::List(vec![
            Expr::assign("m₁", m1),
            Expr::assign("m₂", m2),
        ]))
        .operation("multiply each equation by its multiplier")
        .after(Expr::List(d.scaled.iter().map(linear_equation).collect()))
        .reasoning("Opposite coefficients cancel when the equations are added")
        .rule("Multiplication Property of Equality"),
        Step::new(Concept::Combine, format!("Add the equations to eliminate {eliminated}"))
            .before(Expr::List(d.scaled.iter().map(linear_equation).collect()))
            .operation("add")
            .after(linear_equation(&d.combined))
            .reasoning(format!("The {eliminated} terms cancel"))
            .rule("Addition Property of Equality"),
        Step::new(Concept::SolveRemaining, format!("Solve for {}", remaining.name()))
            .operation("divide both sides by the remaining coefficient")
            .after(Expr::assign(remaining.name(), d.remaining_value))
            .reasoning("One equation in one unknown"),
        Step::new(
            Concept::BackSubstitute,
            format!(
                "Substitute {} into equation {}",
                remaining.name(),
                d.back_equation + 1
            ),
        )
        .before(Expr::eq(
            Expr::sum(vec![
                Expr::term(d.eliminated.coefficient(back), eliminated, 1),
                Expr::power_term(
                    remaining.coefficient(back),
                    Expr::group(Expr::num(d.remaining_value)),
                    1,
                ),
            ]),
            Expr::num(back.c),
        ))
        .after(Expr::assign(eliminated, d.eliminated_value))
        .reasoning(format!("Any equation containing {eliminated} gives its value")),
    ]
}

fn cramer(equations: &[LinearEquation; 2], d: f64, dx: f64, dy: f64, values: Point) -> Vec<Step> {
    let [e1, e2] = equations;
    let matrix = |rows: [[f64; 2]; 2]| {
        Expr::Matrix(rows.into_iter().map(|r| r.map(Expr::num).to_vec()).collect())
    };
    vec![
        Step::new(Concept::Determinants, "Compute D, Dx, and Dy")
            .before(Expr::List(vec![
                Expr::eq(Expr::var("D"), matrix([[e1.a, e1.b], [e2.a, e2.b]])),
                Expr::eq(Expr::var("Dx"), matrix([[e1.c, e1.b], [e2.c, e2.b]])),
                Expr::eq(Expr::var("Dy"), matrix([[e1.a, e1.c], [e2.a, e2.c]])),
            ]))
            .operation("ad - bc for each matrix")
            .after(Expr::List(vec![
                Expr::assign("D", d),
                Expr::assign("Dx", dx),
                Expr::assign("Dy", dy),
            ]))
            .reasoning("Dx and Dy replace a column of D with the constants")
            .rule("2×2 determinant"),
        Step::new(Concept::CramerRule, "Divide to get x = Dx/D and y = Dy/D")
            .before(Expr::List(vec![
                Expr::eq(Expr::var("x"), Expr::div(Expr::num(dx), Expr::num(d))),
                Expr::eq(Expr::var("y"), Expr::div(Expr::num(dy), Expr::num(d))),
            ]))
            .after(point(values))
            .reasoning("D ≠ 0, so the quotients are defined")
            .rule("Cramer's Rule")
            .final_answer(),
    ]
}

fn graphical(s: &LinearSystemSolution, values: Point) -> Vec<Step> {
    vec![
        Step::new(Concept::SlopeIntercept, "Rewrite each equation as y = mx + b")
            .before(Expr::List(s.equations.iter().map(linear_equation).collect()))
            .operation("solve each equation for y")
            .after(Expr::List(s.lines.iter().map(line).collect()))
            .reasoning("Slope and intercept are enough to draw each line"),
        Step::new(Concept::Intersection, "Read the point where the lines cross")
            .after(point(values))
            .reasoning("Lines with different slopes meet exactly once")
            .final_answer(),
    ]
}

fn answer(values: Point) -> Step {
    Step::new(Concept::Intersection, "Write the solution as an ordered pair")
        .after(point(values))
        .reasoning("The pair satisfies both equations, so it is where the lines cross")
        .final_answer()
}

fn degenerate(s: &LinearSystemSolution) -> Step {
    let [e1, e2] = &s.equations;
    let determinant = Expr::sub(
        Expr::Mul(vec![Expr::group(Expr::num(e1.a)), Expr::group(Expr::num(e2.b))]),
        Expr::Mul(vec![Expr::group(Expr::num(e2.a)), Expr::group(Expr::num(e1.b))]),
    );
    let step = Step::new(Concept::Degenerate, "Check the determinant of the coefficients")
        .before(Expr::eq(
            Expr::var("D"),
            Expr::eq(determinant, Expr::num(s.determinant)),
        ))
        .rule("Determinant test")
        .final_answer();

    match s.solution_type {
        SolutionType::Dependent => step
            .after(line(&s.lines[0]))
            .reasoning("The equations describe the same line, so there are infinitely many solutions"),
        SolutionType::Inconsistent | SolutionType::Unique => step
            .after(Expr::Empty)
            .reasoning("The lines are parallel and never meet, so there is no solution"),
    }
}

fn list_of_points(points: &[Point]) -> Expr {
    if points.is_empty() {
        Expr::Empty
    } else {
        Expr::List(points.iter().map(|&p| point(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use stepwise_core::{LinearEquation3, Problem, ProblemSpec, Solution};
    use stepwise_solvers::solve;

    use super::*;
    use crate::render;

    fn system(method: SystemMethod, e1: [f64; 3], e2: [f64; 3]) -> Solution {
        solve(&Problem::new(ProblemSpec::System2 {
            method,
            equations: [
                LinearEquation::new(e1[0], e1[1], e1[2]),
                LinearEquation::new(e2[0], e2[1], e2[2]),
            ],
        }))
        .expect("should solve")
    }

    fn concepts(steps: &[Step]) -> Vec<Concept> {
        steps.iter().map(|s| s.concept).collect()
    }

    fn final_answer(steps: &[Step]) -> String {
        let last = steps.last().expect("steps present");
        assert!(last.is_final);
        render::expr(last.after.as_ref().expect("answer shown"))
    }

    #[test]
    fn every_method_ends_at_the_intersection() {
        for method in [
            SystemMethod::Substitution,
            SystemMethod::Elimination,
            SystemMethod::Graphical,
            SystemMethod::Matrix,
        ] {
            let Solution::LinearSystem(s) = system(method, [1.0, 1.0, 5.0], [1.0, -1.0, 1.0])
            else {
                panic!("expected a linear system");
            };
            let steps = two_by_two(&s);
            assert_eq!(final_answer(&steps), "(3, 2)", "{method:?}");
            assert_eq!(steps.iter().filter(|s| s.is_final).count(), 1);
        }
    }

    #[test]
    fn elimination_shows_the_cancelled_sum() {
        let Solution::LinearSystem(s) =
            system(SystemMethod::Elimination, [1.0, 1.0, 5.0], [1.0, -1.0, 1.0])
        else {
            panic!("expected a linear system");
        };
        let steps = two_by_two(&s);
        assert_eq!(
            concepts(&steps),
            vec![
                Concept::WriteSystem,
                Concept::Scale,
                Concept::Combine,
                Concept::SolveRemaining,
                Concept::BackSubstitute,
                Concept::Intersection,
            ]
        );
        assert_eq!(
            render::expr(steps[2].after.as_ref().expect("sum shown")),
            "2y = 4"
        );
    }

    #[test]
    fn parallel_lines_end_at_the_determinant() {
        let Solution::LinearSystem(s) =
            system(SystemMethod::Substitution, [2.0, 1.0, 5.0], [2.0, 1.0, 3.0])
        else {
            panic!("expected a linear system");
        };
        let steps = two_by_two(&s);
        assert_eq!(concepts(&steps), vec![Concept::WriteSystem, Concept::Degenerate]);
        assert_eq!(final_answer(&steps), "∅");
    }

    #[test]
    fn word_problems_end_with_labeled_values() {
        let solution = solve(&Problem::new(ProblemSpec::WordProblem {
            equations: [
                LinearEquation::new(1.0, 1.0, 5.0),
                LinearEquation::new(1.0, -1.0, 1.0),
            ],
            labels: ["adults".to_owned(), "children".to_owned()],
        }))
        .expect("should solve");
        let Solution::WordProblem(s) = solution else {
            panic!("expected a word problem");
        };
        let steps = word_problem(&s);
        assert!(steps[0].description.contains("x = adults"));
        assert_eq!(final_answer(&steps), "adults = 3, children = 2");
        assert_eq!(steps.iter().filter(|s| s.is_final).count(), 1);
    }

    #[test]
    fn three_by_three_back_substitutes() {
        let solution = solve(&Problem::new(ProblemSpec::System3 {
            equations: [
                LinearEquation3::new(1.0, 1.0, 1.0, 6.0),
                LinearEquation3::new(2.0, -1.0, 1.0, 3.0),
                LinearEquation3::new(1.0, 2.0, -1.0, 2.0),
            ],
        }))
        .expect("should solve");
        let Solution::System3(s) = solution else {
            panic!("expected a 3x3 system");
        };
        let steps = three_by_three(&s);
        assert_eq!(
            concepts(&steps),
            vec![
                Concept::WriteSystem,
                Concept::Triangulate,
                Concept::BackSubstitute,
            ]
        );
        assert_eq!(final_answer(&steps), "x = 1, y = 2, z = 3");
    }

    #[test]
    fn nonlinear_reduces_to_a_quadratic() {
        let solution = solve(&Problem::new(ProblemSpec::Nonlinear {
            line: LinearEquation::new(-1.0, 1.0, 2.0),
            parabola: [1.0, 0.0, 0.0],
        }))
        .expect("should solve");
        let Solution::Nonlinear(s) = solution else {
            panic!("expected a nonlinear system");
        };
        let steps = nonlinear(&s);
        assert_eq!(
            render::expr(steps[1].after.as_ref().expect("reduced")),
            "x² - x - 2 = 0"
        );
        assert_eq!(final_answer(&steps), "(-1, 1), (2, 4)");
    }
}
