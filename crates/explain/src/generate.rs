//! Base step generation.
//!
//! One generator per [`Solution`] variant turns solver output into an ordered
//! list of algebraic steps. Generators read only the solution; the problem
//! text, options, and enhancement passes play no part here.

mod polynomial;
mod system;

use stepwise_core::{
    Expr, LinearEquation, LinearEquation3, LinearInequality, Line, Point, ProblemSpec, Root,
    Solution, SolutionInterval,
};
use stepwise_solvers::verify::{Confidence, VerificationResult};

use crate::step::{Concept, Step, numbered};

/// Steps for a solution, numbered from 1.
///
/// With `verification`, a closing step substitutes the answers back into the
/// original equations; a verification without checks adds nothing.
#[must_use]
pub fn base_steps(solution: &Solution, verification: Option<&VerificationResult>) -> Vec<Step> {
    let mut steps = match solution {
        Solution::Quadratic(s) => polynomial::quadratic(s),
        Solution::Factoring(s) => polynomial::factoring(s),
        Solution::CompletingSquare(s) => polynomial::completing_square(s),
        Solution::Cubic(s) => polynomial::cubic(s),
        Solution::Quartic(s) => polynomial::quartic(s),
        Solution::Division(s) => polynomial::division(s),
        Solution::SyntheticDivision(s) => polynomial::synthetic_division(s),
        Solution::RationalRoots(s) => polynomial::rational_roots(s),
        Solution::Factorization(s) => polynomial::factorization(s),
        Solution::AllRoots(s) => polynomial::all_roots(s),
        Solution::Inequality(s) => polynomial::inequality(s),
        Solution::Graph(s) => polynomial::graph(s),
        Solution::Remainder(s) => polynomial::remainder(s),
        Solution::Application(s) => polynomial::application(s),
        Solution::LinearSystem(s) => system::two_by_two(s),
        Solution::System3(s) => system::three_by_three(s),
        Solution::WordProblem(s) => system::word_problem(s),
        Solution::InequalitySystem(s) => system::inequalities(s),
        Solution::Nonlinear(s) => system::nonlinear(s),
    };

    if let Some(verification) = verification.filter(|v| !v.checks.is_empty()) {
        steps.push(verification_step(verification));
    }
    numbered(steps)
}

fn verification_step(verification: &VerificationResult) -> Step {
    let reasoning = match verification.confidence {
        Confidence::High => "Every substitution gives a true statement.",
        Confidence::Medium if verification.all_valid() => {
            "Every substitution holds, but some roots were not found."
        }
        Confidence::Medium => "Some substitutions do not balance; recheck the arithmetic.",
        Confidence::Low => "No substitution balances; the answer should be reworked.",
        Confidence::Confirmed => "There is nothing to substitute.",
    };
    Step::new(
        Concept::Verify,
        "Substitute each answer back into the original equation",
    )
    .before(Expr::List(
        verification.checks.iter().map(|c| c.subject.clone()).collect(),
    ))
    .operation("substitute and evaluate")
    .after(Expr::List(
        verification
            .checks
            .iter()
            .map(|c| Expr::eq(c.substitution.clone(), Expr::num(c.computed)))
            .collect(),
    ))
    .reasoning(reasoning)
    .rule("Substitution check")
}

/// The problem as it would be written on the page.
#[must_use]
pub fn statement(spec: &ProblemSpec) -> Expr {
    match spec {
        ProblemSpec::Quadratic { a, b, c }
        | ProblemSpec::QuadraticFactoring { a, b, c }
        | ProblemSpec::CompletingSquare { a, b, c } => equation(&[*a, *b, *c]),
        ProblemSpec::Cubic { coefficients } => equation(coefficients),
        ProblemSpec::Quartic { coefficients } => equation(coefficients),
        ProblemSpec::RationalRoots { coefficients }
        | ProblemSpec::AllRoots { coefficients }
        | ProblemSpec::Application { coefficients, .. } => equation(coefficients),
        ProblemSpec::PolynomialDivision { dividend, divisor } => Expr::div(
            Expr::group(x_poly(dividend)),
            Expr::group(x_poly(divisor)),
        ),
        ProblemSpec::SyntheticDivision { coefficients, root } => Expr::div(
            Expr::group(x_poly(coefficients)),
            Expr::binomial(1.0, -root, "x"),
        ),
        ProblemSpec::Factoring { coefficients } => p_of_x(coefficients),
        ProblemSpec::Inequality {
            coefficients,
            relation,
        } => Expr::rel(*relation, x_poly(coefficients), Expr::num(0.0)),
        ProblemSpec::Graphing { coefficients } => Expr::eq(Expr::var("y"), x_poly(coefficients)),
        ProblemSpec::RemainderTheorem {
            coefficients,
            point,
        } => Expr::List(vec![p_of_x(coefficients), Expr::assign("c", *point)]),
        ProblemSpec::System2 { equations, .. } | ProblemSpec::WordProblem { equations, .. } => {
            Expr::List(equations.iter().map(linear_equation).collect())
        }
        ProblemSpec::System3 { equations } => {
            Expr::List(equations.iter().map(linear_equation3).collect())
        }
        ProblemSpec::InequalitySystem { inequalities } => {
            Expr::List(inequalities.iter().map(linear_inequality).collect())
        }
        ProblemSpec::Nonlinear { line, parabola } => {
            Expr::List(vec![linear_equation(line), parabola_equation(parabola)])
        }
    }
}

pub(crate) fn x_poly(coeffs: &[f64]) -> Expr {
    Expr::polynomial(coeffs, "x")
}

/// `P(x) = 0`.
pub(crate) fn equation(coeffs: &[f64]) -> Expr {
    Expr::eq(x_poly(coeffs), Expr::num(0.0))
}

/// `P(x) = …`, naming the polynomial.
pub(crate) fn p_of_x(coeffs: &[f64]) -> Expr {
    Expr::eq(Expr::call("P", vec![Expr::var("x")]), x_poly(coeffs))
}

pub(crate) fn linear_equation(eq: &LinearEquation) -> Expr {
    Expr::eq(Expr::linear(&[(eq.a, "x"), (eq.b, "y")]), Expr::num(eq.c))
}

pub(crate) fn linear_equation3(eq: &LinearEquation3) -> Expr {
    Expr::eq(
        Expr::linear(&[(eq.a, "x"), (eq.b, "y"), (eq.c, "z")]),
        Expr::num(eq.d),
    )
}

pub(crate) fn linear_inequality(ineq: &LinearInequality) -> Expr {
    Expr::rel(
        ineq.relation,
        Expr::linear(&[(ineq.a, "x"), (ineq.b, "y")]),
        Expr::num(ineq.c),
    )
}

/// `y = p₀x² + p₁x + p₂`.
pub(crate) fn parabola_equation(parabola: &[f64; 3]) -> Expr {
    Expr::eq(Expr::var("y"), x_poly(parabola))
}

pub(crate) fn line(line: &Line) -> Expr {
    match *line {
        Line::SlopeIntercept { slope, intercept } => {
            Expr::eq(Expr::var("y"), x_poly(&[slope, intercept]))
        }
        Line::Vertical { x } => Expr::assign("x", x),
        Line::Degenerate => Expr::Empty,
    }
}

pub(crate) fn point(p: Point) -> Expr {
    Expr::Tuple(vec![Expr::num(p.x), Expr::num(p.y)])
}

/// `x = r` for each root, or `∅`.
pub(crate) fn roots(roots: &[Root]) -> Expr {
    if roots.is_empty() {
        return Expr::Empty;
    }
    Expr::List(
        roots
            .iter()
            .map(|&r| Expr::eq(Expr::var("x"), Expr::Root(r)))
            .collect(),
    )
}

/// `name = v` for each value, or `∅`.
pub(crate) fn values(name: &str, values: &[f64]) -> Expr {
    if values.is_empty() {
        return Expr::Empty;
    }
    Expr::List(values.iter().map(|&v| Expr::assign(name, v)).collect())
}

pub(crate) fn solution_set(set: &[SolutionInterval]) -> Expr {
    let mut parts: Vec<Expr> = set
        .iter()
        .map(|piece| Expr::Interval {
            start: piece.start,
            end: piece.end,
            start_closed: piece.start_closed,
            end_closed: piece.end_closed,
        })
        .collect();
    match parts.len() {
        0 => Expr::Empty,
        1 => parts.remove(0),
        _ => Expr::Union(parts),
    }
}
