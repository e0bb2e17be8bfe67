use stepwise_core::{
    AllRootsSolution, ApplicationSolution, CompletingSquareSolution, CubicSolution,
    DivisionSolution, EndBehavior, Expr, FactoringSolution, FactorizationSolution, GraphAnalysis,
    InequalitySolution, LinearFactor, QuadraticSolution, QuarticMethod, QuarticSolution,
    QuarticStatus, RationalRootSolution, Recommendation, RemainderSolution, Root, RootType,
    SyntheticDivisionSolution, poly::degree, tolerance::is_zero,
};

use super::{equation, p_of_x, point, roots, solution_set, values, x_poly};
use crate::step::{Concept, Step};

pub(super) fn quadratic(s: &QuadraticSolution) -> Vec<Step> {
    vec![
        standard_form(&[s.a, s.b, s.c]),
        discriminant(s),
        formula(s),
        answer(&s.roots, s.root_type),
    ]
}

pub(super) fn factoring(s: &FactoringSolution) -> Vec<Step> {
    match *s {
        FactoringSolution::Factored {
            a,
            b,
            c,
            product,
            pair,
            factors,
            ref roots,
        } => vec![
            standard_form(&[a, b, c]),
            Step::new(
                Concept::FactorPairs,
                "Find two integers whose product is ac and whose sum is b",
            )
            .before(pair_conditions(product, b))
            .after(Expr::List(vec![
                Expr::assign("m", pair[0]),
                Expr::assign("n", pair[1]),
            ]))
            .reasoning("Splitting bx as mx + nx lets the quadratic be grouped into two binomials")
            .rule("AC method"),
            Step::new(Concept::FactoredForm, "Group and factor out the common binomial")
                .before(equation(&[a, b, c]))
                .operation("split the middle term and group")
                .after(Expr::eq(
                    Expr::product(
                        factors
                            .iter()
                            .map(|f| Expr::binomial(f[0], f[1], "x"))
                            .collect(),
                    ),
                    Expr::num(0.0),
                ))
                .reasoning("The two groups share a binomial factor"),
            Step::new(Concept::ZeroProduct, "Set each factor equal to zero")
                .after(Expr::List(
                    factors
                        .iter()
                        .map(|f| Expr::eq(x_poly(f), Expr::num(0.0)))
                        .collect(),
                ))
                .reasoning("A product is zero only when one of its factors is zero")
                .rule("Zero Product Property"),
            Step::new(Concept::Solutions, "Solve each linear equation")
                .after(super::values("x", roots))
                .reasoning(if roots.len() == 1 {
                    "Both factors give the same root, a repeated root"
                } else {
                    "Each factor gives one root"
                })
                .final_answer(),
        ],
        FactoringSolution::NotFactorable {
            a,
            b,
            c,
            product,
            recommendation,
        } => vec![
            standard_form(&[a, b, c]),
            Step::new(
                Concept::FactorPairs,
                "Look for two integers whose product is ac and whose sum is b",
            )
            .before(pair_conditions(product, b))
            .after(Expr::Empty)
            .reasoning("No pair of integer divisors of ac adds up to b")
            .rule("AC method"),
            Step::new(
                Concept::NotFactorable,
                "The quadratic does not factor over the integers",
            )
            .reasoning(recommend(recommendation))
            .final_answer(),
        ],
    }
}

pub(super) fn completing_square(s: &CompletingSquareSolution) -> Vec<Step> {
    let b_over_a = s.b / s.a;
    let moved = -s.c / s.a;
    let square = Expr::pow(Expr::binomial(1.0, s.half_coefficient, "x"), 2);

    vec![
        standard_form(&[s.a, s.b, s.c]),
        Step::new(
            Concept::Normalize,
            "Divide by the leading coefficient and move the constant to the right",
        )
        .before(equation(&[s.a, s.b, s.c]))
        .operation("divide by a, then subtract c/a")
        .after(Expr::eq(x_poly(&[1.0, b_over_a, 0.0]), Expr::num(moved)))
        .reasoning("A perfect square (x + p)² begins with x², so the leading coefficient must be 1")
        .rule("Division Property of Equality"),
        Step::new(Concept::CompleteSquare, "Add (b/2a)² to both sides")
            .before(Expr::eq(
                Expr::sum(vec![
                    Expr::pow(Expr::var("x"), 2),
                    Expr::term(b_over_a, "x", 1),
                    Expr::num(s.square_term),
                ]),
                Expr::Add(vec![Expr::num(moved), Expr::num(s.square_term)]),
            ))
            .operation("factor the perfect square trinomial")
            .after(Expr::eq(square.clone(), Expr::num(s.right_side)))
            .reasoning("x² + kx + (k/2)² = (x + k/2)²")
            .rule("Perfect square trinomial"),
        Step::new(Concept::SquareRoot, "Take the square root of both sides and solve for x")
            .before(Expr::eq(square, Expr::num(s.right_side)))
            .operation("take ± square roots")
            .after(Expr::eq(
                Expr::var("x"),
                Expr::plus_minus(
                    Expr::num(-s.half_coefficient),
                    signed_sqrt(s.right_side),
                ),
            ))
            .reasoning(if s.right_side < 0.0 && !is_zero(s.right_side) {
                "A negative right side has imaginary square roots"
            } else {
                "Every positive number has two square roots"
            })
            .rule("Square Root Property"),
        Step::new(Concept::Vertex, "Read the vertex from the completed square")
            .after(Expr::eq(Expr::var("vertex"), super::point(s.vertex)))
            .reasoning("The squared term is smallest, zero, at x = -b/(2a)")
            .rule("Vertex form a(x - h)² + k"),
        answer(&s.roots, s.root_type),
    ]
}

pub(super) fn cubic(s: &CubicSolution) -> Vec<Step> {
    match s {
        CubicSolution::Reduced {
            coefficients,
            candidates,
            rational_root,
            remaining_quadratic,
            roots: all_roots,
        } => {
            let q = remaining_quadratic;
            vec![
                standard_form(coefficients),
                candidates_step(candidates),
                found_root(coefficients, *rational_root),
                Step::new(Concept::Deflate, "Divide by (x - r) to leave a quadratic")
                    .before(equation(coefficients))
                    .operation("synthetic division by the root")
                    .after(Expr::eq(
                        Expr::product(vec![
                            Expr::binomial(1.0, -rational_root, "x"),
                            Expr::group(x_poly(&[q.a, q.b, q.c])),
                        ]),
                        Expr::num(0.0),
                    ))
                    .reasoning("A root r gives the factor (x - r); the quotient is a quadratic")
                    .rule("Factor Theorem"),
                discriminant(q),
                formula(q),
                Step::new(Concept::Solutions, "Collect the rational root and the quadratic's roots")
                    .after(roots(all_roots))
                    .reasoning("A cubic has three roots counted with multiplicity")
                    .final_answer(),
            ]
        }
        CubicSolution::NoRationalRoot {
            coefficients,
            candidates,
            estimates,
            recommendation,
        } => vec![
            standard_form(coefficients),
            candidates_step(candidates),
            Step::new(Concept::TestCandidates, "Evaluate the polynomial at each candidate")
                .after(Expr::Empty)
                .reasoning(if candidates.is_empty() {
                    "With no candidates, the roots must be found numerically"
                } else {
                    "No candidate makes the polynomial zero, so there is no rational root"
                }),
            Step::new(
                Concept::NumericalRoots,
                "Locate the real roots numerically by sign changes",
            )
            .after(values("x", estimates))
            .reasoning(recommend(*recommendation))
            .rule("Intermediate Value Theorem")
            .final_answer(),
        ],
    }
}

pub(super) fn quartic(s: &QuarticSolution) -> Vec<Step> {
    let mut steps = vec![standard_form(&s.coefficients)];
    match &s.method {
        QuarticMethod::Biquadratic {
            substitution,
            u_roots,
        } => {
            steps.push(
                Step::new(Concept::Biquadratic, "Only even powers appear, so let u = x²")
                    .before(equation(&s.coefficients))
                    .operation("substitute u = x²")
                    .after(Expr::eq(
                        Expr::polynomial(&[substitution.a, substitution.b, substitution.c], "u"),
                        Expr::num(0.0),
                    ))
                    .reasoning("x⁴ = (x²)², so the quartic is a quadratic in u")
                    .rule("Substitution"),
            );
            steps.push(discriminant(substitution));
            steps.push(
                Step::new(Concept::Solutions, "Solve the quadratic in u")
                    .after(Expr::List(
                        u_roots
                            .iter()
                            .map(|&r| Expr::eq(Expr::var("u"), Expr::Root(r)))
                            .collect(),
                    ))
                    .reasoning("The quadratic formula applies to u"),
            );
            steps.push(
                Step::new(Concept::ReturnToX, "Solve x² = u for each value of u")
                    .operation("x = ±√u")
                    .after(roots(&s.roots))
                    .reasoning("Each u gives two values of x")
                    .rule("Square Root Property")
                    .final_answer(),
            );
        }
        QuarticMethod::RationalRoots {
            rational,
            remaining_quadratic,
        } => {
            steps.push(candidates_step(&rational.candidates));
            steps.push(
                Step::new(Concept::TestCandidates, "Evaluate the polynomial at each candidate")
                    .after(values("x", &rational.distinct()))
                    .reasoning(if rational.roots.is_empty() {
                        "No candidate is a root"
                    } else {
                        "These candidates make the polynomial zero"
                    }),
            );
            if !rational.roots.is_empty() {
                steps.push(deflated(&s.coefficients, &rational.roots, &rational.quotient));
            }
            if let Some(q) = remaining_quadratic {
                steps.push(discriminant(q));
                steps.push(formula(q));
            }
            let mut last = Step::new(Concept::Solutions, "Collect every root found")
                .after(roots(&s.roots))
                .final_answer();
            last = match s.status {
                QuarticStatus::Complete => {
                    last.reasoning("A quartic has four roots counted with multiplicity")
                }
                QuarticStatus::Partial => last
                    .before(Expr::eq(x_poly(&s.remaining), Expr::num(0.0)))
                    .reasoning(
                        "The remaining factor has no rational roots and no method here splits it",
                    ),
            };
            steps.push(last);
        }
    }
    steps
}

pub(super) fn division(s: &DivisionSolution) -> Vec<Step> {
    let setup = Step::new(
        Concept::DivisionSetup,
        "Write the dividend and divisor in decreasing powers of x",
    )
    .after(Expr::div(
        Expr::group(x_poly(&s.dividend)),
        Expr::group(x_poly(&s.divisor)),
    ))
    .reasoning("Missing powers are kept as zero coefficients so the columns line up");

    let rows = s.division.rows.iter().map(|row| {
        Step::new(
            Concept::LongDivision,
            "Divide the leading terms, multiply the divisor, and subtract",
        )
        .before(Expr::eq(
            Expr::product(vec![
                Expr::group(Expr::term(row.term, "x", row.power as u32)),
                Expr::group(x_poly(&s.divisor)),
            ]),
            x_poly(&row.product),
        ))
        .operation("subtract from the running remainder")
        .after(x_poly(&row.remainder))
        .reasoning("Each pass cancels the current leading term")
    });

    let result = Step::new(Concept::DivisionResult, "Write dividend = divisor·quotient + remainder")
        .after(division_identity(
            &s.dividend,
            &s.divisor,
            &s.division.quotient,
            &s.division.remainder,
        ))
        .reasoning("The remainder has lower degree than the divisor")
        .rule("Division Algorithm")
        .final_answer();

    std::iter::once(setup)
        .chain(rows)
        .chain(std::iter::once(result))
        .collect()
}

pub(super) fn synthetic_division(s: &SyntheticDivisionSolution) -> Vec<Step> {
    let divisor = Expr::binomial(1.0, -s.root, "x");
    let row = |values: &[f64]| values.iter().map(|&v| Expr::num(v)).collect();
    let result = if is_zero(s.remainder) {
        x_poly(&s.quotient)
    } else {
        Expr::sum(vec![
            x_poly(&s.quotient),
            Expr::div(Expr::num(s.remainder), divisor.clone()),
        ])
    };

    vec![
        Step::new(
            Concept::DivisionSetup,
            "Write the coefficients and the value c from the divisor (x - c)",
        )
        .before(Expr::div(Expr::group(x_poly(&s.coefficients)), divisor.clone()))
        .after(Expr::List(vec![
            Expr::assign("c", s.root),
            Expr::Tuple(row(&s.coefficients)),
        ]))
        .reasoning("Only the coefficients are needed, with zeros for missing powers"),
        Step::new(
            Concept::SyntheticTableau,
            "Bring down, multiply by c, and add, column by column",
        )
        .operation("bring down, multiply, add")
        .after(Expr::Matrix(vec![
            row(&s.coefficients),
            row(&s.products),
            row(&s.sums),
        ]))
        .reasoning("The bottom row holds the quotient coefficients and, last, the remainder")
        .rule("Synthetic division"),
        Step::new(Concept::DivisionResult, "Read the quotient and remainder from the bottom row")
            .before(Expr::assign("R", s.remainder))
            .after(Expr::eq(
                Expr::div(Expr::group(x_poly(&s.coefficients)), divisor),
                result,
            ))
            .reasoning("The remainder equals the polynomial's value at c")
            .rule("Remainder Theorem")
            .final_answer(),
    ]
}

pub(super) fn rational_roots(s: &RationalRootSolution) -> Vec<Step> {
    vec![
        standard_form(&s.coefficients),
        candidates_step(&s.rational.candidates),
        Step::new(Concept::TestCandidates, "Evaluate the polynomial at each candidate")
            .after(Expr::List(
                s.tests
                    .iter()
                    .map(|&[x, value]| {
                        Expr::eq(Expr::call("P", vec![Expr::num(x)]), Expr::num(value))
                    })
                    .collect(),
            ))
            .reasoning("A candidate is a root exactly when the value is zero"),
        Step::new(Concept::Solutions, "List the candidates that are roots")
            .after(values("x", &s.roots))
            .reasoning(if s.roots.is_empty() {
                "No candidate is a root, so the polynomial has no rational roots"
            } else {
                "These are every rational root of the polynomial"
            })
            .rule("Rational Root Theorem")
            .final_answer(),
    ]
}

pub(super) fn factorization(s: &FactorizationSolution) -> Vec<Step> {
    let found: Vec<f64> = s.factors.iter().map(|f| f.root).collect();
    vec![
        Step::new(Concept::StandardForm, "Write the polynomial in standard form")
            .after(p_of_x(&s.coefficients))
            .reasoning("Coefficients are read leading term first"),
        Step::new(Concept::TestCandidates, "Find the rational roots")
            .after(values("x", &found))
            .reasoning("Each rational root gives a linear factor")
            .rule("Rational Root Theorem"),
        Step::new(Concept::Factorization, "Write the linear factors and what remains")
            .after(Expr::eq(
                Expr::call("P", vec![Expr::var("x")]),
                factored(&s.factors, &s.remaining),
            ))
            .reasoning(if degree(&s.remaining) == 0 {
                "The polynomial factors completely over the rationals"
            } else {
                "The remaining factor has no rational roots"
            })
            .rule("Factor Theorem")
            .final_answer(),
    ]
}

pub(super) fn all_roots(s: &AllRootsSolution) -> Vec<Step> {
    let mut steps = root_search(s);
    steps.push(
        Step::new(Concept::Solutions, "Collect every root")
            .after(roots(&s.roots))
            .reasoning(if s.complete {
                "Every root counted by the degree has been found"
            } else {
                "Only the real roots of the remaining factor could be located"
            })
            .rule("Fundamental Theorem of Algebra")
            .final_answer(),
    );
    steps
}

pub(super) fn inequality(s: &InequalitySolution) -> Vec<Step> {
    vec![
        Step::new(Concept::StandardForm, "Compare the polynomial with zero")
            .after(Expr::rel(s.relation, x_poly(&s.coefficients), Expr::num(0.0)))
            .reasoning("With zero on one side, only the sign of the polynomial matters"),
        Step::new(Concept::CriticalPoints, "Solve P(x) = 0 for the critical points")
            .before(equation(&s.coefficients))
            .after(values("x", &s.zeros))
            .reasoning("The polynomial can change sign only at its zeros"),
        Step::new(Concept::TestIntervals, "Test one point in each interval")
            .after(Expr::List(
                s.tests
                    .iter()
                    .map(|t| {
                        Expr::eq(
                            Expr::call("P", vec![Expr::num(t.test_point)]),
                            Expr::num(t.value),
                        )
                    })
                    .collect(),
            ))
            .reasoning("The sign at one point is the sign on the whole interval"),
        Step::new(Concept::SolutionSet, "Join the intervals that satisfy the inequality")
            .after(solution_set(&s.solution_set))
            .reasoning(if s.relation.includes_equality() {
                "Zeros are included because equality is allowed"
            } else {
                "Zeros are excluded because the inequality is strict"
            })
            .rule("Interval notation")
            .final_answer(),
    ]
}

pub(super) fn graph(s: &GraphAnalysis) -> Vec<Step> {
    let behavior = match s.end_behavior {
        EndBehavior::UpUp => "The graph rises on both ends",
        EndBehavior::DownDown => "The graph falls on both ends",
        EndBehavior::DownUp => "The graph falls on the left and rises on the right",
        EndBehavior::UpDown => "The graph rises on the left and falls on the right",
    };
    vec![
        Step::new(Concept::StandardForm, "Write the function to be graphed")
            .after(Expr::eq(Expr::var("y"), x_poly(&s.coefficients)))
            .reasoning("The degree and leading coefficient come straight from standard form"),
        Step::new(Concept::EndBehavior, behavior)
            .after(Expr::List(vec![
                Expr::assign("degree", s.degree as f64),
                Expr::assign("leading coefficient", s.leading_coefficient),
            ]))
            .reasoning("For large |x| the leading term dominates"),
        Step::new(Concept::Intercepts, "Find the x- and y-intercepts")
            .after(Expr::List(vec![
                values("x", &s.zeros),
                Expr::eq(
                    Expr::call("P", vec![Expr::num(0.0)]),
                    Expr::num(s.y_intercept),
                ),
            ]))
            .reasoning("x-intercepts are real zeros; the y-intercept is the constant term"),
        Step::new(Concept::TurningPoints, "Locate the turning points where P'(x) = 0")
            .before(Expr::assign("maximum turning points", s.max_turning_points as f64))
            .after(if s.turning_points.is_empty() {
                Expr::Empty
            } else {
                Expr::List(s.turning_points.iter().map(|&p| point(p)).collect())
            })
            .reasoning("A polynomial of degree n turns at most n - 1 times")
            .rule("Derivative test")
            .final_answer(),
    ]
}

pub(super) fn remainder(s: &RemainderSolution) -> Vec<Step> {
    let at = Expr::call("P", vec![Expr::num(s.point)]);
    let conclusion = Step::new(Concept::FactorTheorem, "Decide whether (x - c) is a factor")
        .rule("Factor Theorem")
        .final_answer();
    let conclusion = if s.is_factor {
        conclusion
            .after(Expr::eq(
                x_poly(&s.coefficients),
                Expr::product(vec![
                    Expr::binomial(1.0, -s.point, "x"),
                    Expr::group(x_poly(&s.quotient)),
                ]),
            ))
            .reasoning("The remainder is zero, so (x - c) divides the polynomial")
    } else {
        conclusion
            .after(Expr::assign("R", s.value))
            .reasoning("The remainder is not zero, so (x - c) is not a factor")
    };

    vec![
        Step::new(Concept::StandardForm, "Write the polynomial and the point")
            .after(Expr::List(vec![
                p_of_x(&s.coefficients),
                Expr::assign("c", s.point),
            ])),
        Step::new(Concept::EvaluateRemainder, "Substitute c into the polynomial")
            .before(Expr::eq(
                at.clone(),
                Expr::substituted(&s.coefficients, &Expr::num(s.point)),
            ))
            .operation("evaluate")
            .after(Expr::eq(at, Expr::num(s.value)))
            .reasoning("The remainder on division by (x - c) equals P(c)")
            .rule("Remainder Theorem"),
        conclusion,
    ]
}

pub(super) fn application(s: &ApplicationSolution) -> Vec<Step> {
    let mut steps = root_search(&s.roots);
    let context = match &s.unit {
        Some(unit) => format!("Keep the roots that are meaningful values of {} ({unit})", s.quantity),
        None => format!("Keep the roots that are meaningful values of {}", s.quantity),
    };
    steps.push(
        Step::new(Concept::Interpret, context)
            .before(roots(&s.roots.roots))
            .after(values(&s.quantity, &s.meaningful))
            .reasoning("Negative and complex values have no meaning for this quantity")
            .final_answer(),
    );
    steps
}

/// Everything before the final answer of a full root search.
fn root_search(s: &AllRootsSolution) -> Vec<Step> {
    let mut steps = vec![
        standard_form(&s.coefficients),
        Step::new(Concept::TestCandidates, "Find the rational roots")
            .after(values("x", &s.rational))
            .reasoning(if s.rational.is_empty() {
                "No rational candidate is a root"
            } else {
                "Rational roots are listed with multiplicity"
            })
            .rule("Rational Root Theorem"),
    ];
    if !s.rational.is_empty() {
        steps.push(deflated(&s.coefficients, &s.rational, &s.remaining));
    }
    if !s.numerical.is_empty() {
        steps.push(
            Step::new(Concept::NumericalRoots, "Locate the remaining real roots numerically")
                .before(Expr::eq(x_poly(&s.remaining), Expr::num(0.0)))
                .after(values("x", &s.numerical))
                .reasoning("Sign changes bracket each real root, which bisection then narrows")
                .rule("Intermediate Value Theorem"),
        );
    }
    steps
}

fn standard_form(coeffs: &[f64]) -> Step {
    let names = ["a", "b", "c", "d", "e"];
    let assignments = coeffs
        .iter()
        .zip(names)
        .map(|(&value, name)| Expr::assign(name, value))
        .collect();
    Step::new(Concept::StandardForm, "Identify the equation in standard form")
        .before(equation(coeffs))
        .operation("read the coefficients")
        .after(Expr::List(assignments))
        .reasoning("Every solving method works from the coefficients in standard form")
        .rule("Standard form")
}

pub(super) fn discriminant(s: &QuadraticSolution) -> Step {
    let symbolic = Expr::sub(
        Expr::pow(Expr::var("b"), 2),
        Expr::Mul(vec![Expr::num(4.0), Expr::var("a"), Expr::var("c")]),
    );
    let substituted = Expr::sub(
        Expr::pow(Expr::group(Expr::num(s.b)), 2),
        Expr::Mul(vec![
            Expr::num(4.0),
            Expr::group(Expr::num(s.a)),
            Expr::group(Expr::num(s.c)),
        ]),
    );
    Step::new(
        Concept::Discriminant,
        "Compute Δ = b² - 4ac to determine the nature of the roots",
    )
    .before(Expr::eq(Expr::var("Δ"), symbolic))
    .operation("substitute a, b, and c")
    .after(Expr::eq(
        Expr::var("Δ"),
        Expr::eq(substituted, Expr::num(s.discriminant)),
    ))
    .reasoning(match s.root_type {
        RootType::RealDistinct => "Δ > 0, so there are two distinct real roots",
        RootType::RealRepeated => "Δ = 0, so there is one repeated real root",
        RootType::Complex => "Δ < 0, so the roots are a complex conjugate pair",
    })
    .rule("Discriminant formula")
}

fn formula(s: &QuadraticSolution) -> Step {
    let symbolic = Expr::eq(
        Expr::var("x"),
        Expr::div(
            Expr::plus_minus(Expr::neg(Expr::var("b")), Expr::sqrt(Expr::var("Δ"))),
            Expr::Mul(vec![Expr::num(2.0), Expr::var("a")]),
        ),
    );
    let substituted = Expr::eq(
        Expr::var("x"),
        Expr::div(
            Expr::plus_minus(Expr::num(-s.b), signed_sqrt(s.discriminant)),
            Expr::num(2.0 * s.a),
        ),
    );
    let step = Step::new(
        Concept::QuadraticFormula,
        "Substitute into x = (-b ± √Δ)/(2a)",
    )
    .before(symbolic)
    .operation("substitute and simplify")
    .after(substituted)
    .rule("Quadratic formula");

    match s.root_type {
        RootType::Complex => step
            .titled("Apply quadratic formula with complex numbers")
            .reasoning("A negative discriminant is handled with i, where i² = -1"),
        RootType::RealRepeated => {
            step.reasoning("With Δ = 0 both signs give the same value")
        }
        RootType::RealDistinct => {
            step.reasoning("The quadratic formula gives exact solutions for any quadratic")
        }
    }
}

fn answer(all_roots: &[Root], root_type: RootType) -> Step {
    let reasoning = match root_type {
        RootType::RealDistinct => "One root uses +, the other uses -",
        RootType::RealRepeated => "The parabola touches the x-axis at its vertex",
        RootType::Complex => "Complex roots of a real quadratic come in conjugate pairs",
    };
    Step::new(Concept::Solutions, "Evaluate both values from the ± operation")
        .after(roots(all_roots))
        .reasoning(reasoning)
        .final_answer()
}

fn candidates_step(candidates: &[f64]) -> Step {
    Step::new(
        Concept::RationalCandidates,
        "List every ±p/q with p dividing the constant term and q dividing the leading coefficient",
    )
    .after(Expr::List(candidates.iter().map(|&c| Expr::num(c)).collect()))
    .reasoning(if candidates.is_empty() {
        "The coefficients do not scale to small integers, so there are no candidates to list"
    } else {
        "Any rational root must appear in this list"
    })
    .rule("Rational Root Theorem")
}

fn found_root(coeffs: &[f64], root: f64) -> Step {
    let at = Expr::call("P", vec![Expr::num(root)]);
    Step::new(Concept::TestCandidates, "Evaluate the polynomial at the candidates")
        .before(Expr::eq(at.clone(), Expr::substituted(coeffs, &Expr::num(root))))
        .operation("evaluate")
        .after(Expr::eq(at, Expr::num(0.0)))
        .reasoning("This candidate makes the polynomial zero, so it is a root")
        .rule("Factor Theorem")
}

fn deflated(coeffs: &[f64], found: &[f64], quotient: &[f64]) -> Step {
    let factors = found
        .iter()
        .map(|&r| LinearFactor {
            root: r,
            multiplicity: 1,
        })
        .collect::<Vec<_>>();
    Step::new(Concept::Deflate, "Divide out each root found")
        .before(equation(coeffs))
        .operation("synthetic division by each root")
        .after(Expr::eq(factored(&factors, quotient), Expr::num(0.0)))
        .reasoning("Each division lowers the degree by one")
        .rule("Factor Theorem")
}

/// `a·(x - r₁)^m₁…·R(x)`, with a constant remainder folded in as the
/// leading coefficient.
fn factored(factors: &[LinearFactor], remaining: &[f64]) -> Expr {
    let mut parts = Vec::with_capacity(factors.len() + 1);
    let remaining_degree = degree(remaining);
    if remaining_degree == 0 {
        let lead = remaining.iter().copied().find(|c| !is_zero(*c)).unwrap_or(1.0);
        if !is_zero(lead - 1.0) {
            parts.push(Expr::num(lead));
        }
    }
    parts.extend(
        factors
            .iter()
            .map(|f| Expr::power_term(1.0, Expr::binomial(1.0, -f.root, "x"), f.multiplicity as u32)),
    );
    if remaining_degree > 0 {
        parts.push(Expr::group(x_poly(remaining)));
    }
    Expr::product(parts)
}

fn division_identity(dividend: &[f64], divisor: &[f64], quotient: &[f64], rest: &[f64]) -> Expr {
    let product = Expr::product(vec![
        Expr::group(x_poly(divisor)),
        Expr::group(x_poly(quotient)),
    ]);
    let rhs = if rest.iter().all(|c| is_zero(*c)) {
        product
    } else {
        Expr::sum(vec![product, x_poly(rest)])
    };
    Expr::eq(x_poly(dividend), rhs)
}

/// `√k`, or `i√|k|` when `k` is negative.
fn signed_sqrt(k: f64) -> Expr {
    if k < 0.0 && !is_zero(k) {
        Expr::Mul(vec![Expr::var("i"), Expr::sqrt(Expr::num(-k))])
    } else {
        Expr::sqrt(Expr::num(k.max(0.0)))
    }
}

/// `m·n = ac`, `m + n = b`.
fn pair_conditions(product: f64, b: f64) -> Expr {
    Expr::List(vec![
        Expr::eq(
            Expr::Mul(vec![Expr::var("m"), Expr::var("n")]),
            Expr::num(product),
        ),
        Expr::eq(
            Expr::Add(vec![Expr::var("m"), Expr::var("n")]),
            Expr::num(b),
        ),
    ])
}

fn recommend(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::QuadraticFormula => {
            "Use the quadratic formula, which works for every quadratic"
        }
        Recommendation::NumericalMethods => {
            "Use Cardano's formula or a numerical method for the remaining roots"
        }
    }
}

#[cfg(test)]
mod tests {
    use stepwise_core::{Problem, ProblemSpec, Solution};
    use stepwise_solvers::solve;

    use super::*;
    use crate::render;

    fn solved(spec: ProblemSpec) -> Solution {
        solve(&Problem::new(spec)).expect("should solve")
    }

    fn rendered_after(steps: &[Step], concept: Concept) -> String {
        let step = steps
            .iter()
            .find(|s| s.concept == concept)
            .expect("step present");
        render::expr(step.after.as_ref().expect("result shown"))
    }

    #[test]
    fn complex_quadratic_uses_i() {
        let Solution::Quadratic(solution) = solved(ProblemSpec::Quadratic {
            a: 1.0,
            b: 2.0,
            c: 5.0,
        }) else {
            panic!("expected a quadratic solution");
        };
        let steps = quadratic(&solution);
        assert_eq!(steps[2].title, "Apply quadratic formula with complex numbers");
        assert_eq!(
            rendered_after(&steps, Concept::QuadraticFormula),
            "x = (-2 ± i√16)/2"
        );
        assert_eq!(
            rendered_after(&steps, Concept::Solutions),
            "x = -1 - 2i, x = -1 + 2i"
        );
    }

    #[test]
    fn factoring_shows_binomials() {
        let Solution::Factoring(solution) = solved(ProblemSpec::QuadraticFactoring {
            a: 1.0,
            b: -5.0,
            c: 6.0,
        }) else {
            panic!("expected a factoring solution");
        };
        let steps = factoring(&solution);
        assert_eq!(
            rendered_after(&steps, Concept::FactoredForm),
            "(x - 3)(x - 2) = 0"
        );
        assert_eq!(rendered_after(&steps, Concept::Solutions), "x = 2, x = 3");
    }

    #[test]
    fn completing_the_square_shows_the_square() {
        let Solution::CompletingSquare(solution) = solved(ProblemSpec::CompletingSquare {
            a: 1.0,
            b: 6.0,
            c: 5.0,
        }) else {
            panic!("expected a completing-the-square solution");
        };
        let steps = completing_square(&solution);
        assert_eq!(rendered_after(&steps, Concept::Normalize), "x² + 6x = -5");
        assert_eq!(rendered_after(&steps, Concept::CompleteSquare), "(x + 3)² = 4");
        assert_eq!(rendered_after(&steps, Concept::SquareRoot), "x = -3 ± √4");
        assert_eq!(rendered_after(&steps, Concept::Vertex), "vertex = (-3, -4)");
    }

    #[test]
    fn cubic_deflates_to_a_quadratic() {
        let Solution::Cubic(solution) = solved(ProblemSpec::Cubic {
            coefficients: [1.0, -6.0, 11.0, -6.0],
        }) else {
            panic!("expected a cubic solution");
        };
        let steps = cubic(&solution);
        assert_eq!(
            rendered_after(&steps, Concept::Deflate),
            "(x - 1)(x² - 5x + 6) = 0"
        );
        assert_eq!(
            rendered_after(&steps, Concept::Solutions),
            "x = 1, x = 2, x = 3"
        );
    }

    #[test]
    fn cubic_with_long_decimals_lists_no_candidates() {
        let Solution::Cubic(solution) = solved(ProblemSpec::Cubic {
            coefficients: [0.123, 0.0, -1.0, 0.3],
        }) else {
            panic!("expected a cubic solution");
        };
        let steps = cubic(&solution);
        let listed = steps
            .iter()
            .find(|s| s.concept == Concept::RationalCandidates)
            .expect("candidates step present");
        assert_eq!(listed.after, Some(Expr::List(Vec::new())));
        assert!(listed.reasoning.contains("no candidates"));
    }

    #[test]
    fn factored_form_folds_a_constant_into_the_lead() {
        let factors = [
            LinearFactor {
                root: 1.0,
                multiplicity: 2,
            },
            LinearFactor {
                root: -3.0,
                multiplicity: 1,
            },
        ];
        assert_eq!(render::expr(&factored(&factors, &[2.0])), "2(x - 1)²(x + 3)");
        assert_eq!(
            render::expr(&factored(&factors[1..], &[1.0, 0.0, 1.0])),
            "(x + 3)(x² + 1)"
        );
    }
}
