//! Re-substitution checks for solver output.
//!
//! Every numeric answer in a [`Solution`] is substituted back into the
//! equation or inequality it came from. Confidence is derived from the checks
//! and the shape of the solution, and is never set by a solver.

use nalgebra::{Complex, ComplexField};
use serde::Serialize;
use stepwise_core::{
    AllRootsSolution, CubicSolution, Expr, FactoringSolution, LinearEquation, LinearInequality,
    LinearSystemSolution, Point, QuarticStatus, Relation, Root, Solution,
    arith::rational_root_candidates,
    poly::{evaluate, evaluate_complex},
    tolerance::{is_zero, snap},
};

/// How much the checks support the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Every check passed.
    High,
    /// Some checks passed.
    Medium,
    /// No check passed, or there was nothing to check.
    Low,
    /// Nothing to substitute because the outcome is structural, such as
    /// parallel lines, a singular matrix, or a quadratic with no integer
    /// factoring.
    Confirmed,
}

impl Confidence {
    /// Confidence implied by a set of checks alone.
    ///
    /// An empty set supports nothing and is [`Confidence::Low`]; only
    /// [`verify`] can tell a structural outcome apart and report
    /// [`Confidence::Confirmed`].
    #[must_use]
    pub fn from_checks(checks: &[Check]) -> Self {
        let passed = checks.iter().filter(|check| check.is_valid).count();
        match passed {
            0 => Self::Low,
            n if n == checks.len() => Self::High,
            _ => Self::Medium,
        }
    }
}

/// One substitution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    /// The value being checked, e.g. `x = 2` or `(x, y) = (3, 2)`.
    pub subject: Expr,
    /// Left-hand side with the value substituted in.
    pub substitution: Expr,
    pub computed: f64,
    pub relation: Relation,
    pub expected: f64,
    /// `computed ⋈ expected` within tolerance; for `=` this is
    /// `|computed - expected| < ε`.
    pub is_valid: bool,
}

impl Check {
    fn new(
        subject: Expr,
        substitution: Expr,
        computed: f64,
        relation: Relation,
        expected: f64,
    ) -> Self {
        Self {
            subject,
            substitution,
            computed: snap(computed),
            relation,
            expected,
            is_valid: relation.holds(computed, expected),
        }
    }
}

/// Checks for one solution and the confidence they support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationResult {
    pub checks: Vec<Check>,
    pub confidence: Confidence,
    /// Why the confidence is not simply read off the checks.
    pub note: Option<&'static str>,
}

impl VerificationResult {
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.checks.iter().all(|check| check.is_valid)
    }
}

/// Substitutes every numeric answer in `solution` back into its source.
#[must_use]
pub fn verify(solution: &Solution) -> VerificationResult {
    let checks = match solution {
        Solution::Quadratic(s) => root_checks(&[s.a, s.b, s.c], &s.roots),
        Solution::CompletingSquare(s) => root_checks(&[s.a, s.b, s.c], &s.roots),
        Solution::Factoring(FactoringSolution::Factored { a, b, c, roots, .. }) => {
            real_root_checks(&[*a, *b, *c], roots)
        }
        Solution::Factoring(FactoringSolution::NotFactorable { .. }) => Vec::new(),
        Solution::Cubic(cubic) => {
            let coefficients = match cubic {
                CubicSolution::Reduced { coefficients, .. }
                | CubicSolution::NoRationalRoot { coefficients, .. } => coefficients,
            };
            root_checks(coefficients, &cubic.roots())
        }
        Solution::Quartic(s) => root_checks(&s.coefficients, &s.roots),
        Solution::Division(s) => division_checks(
            &s.dividend,
            &s.divisor,
            &s.division.quotient,
            &s.division.remainder,
        ),
        Solution::SyntheticDivision(s) => {
            let at = Expr::num(s.root);
            vec![Check::new(
                Expr::call("P", vec![at.clone()]),
                Expr::substituted(&s.coefficients, &at),
                evaluate(&s.coefficients, s.root),
                Relation::Eq,
                s.remainder,
            )]
        }
        Solution::RationalRoots(s) => real_root_checks(&s.coefficients, &s.roots),
        Solution::Factorization(s) => {
            let roots: Vec<f64> = s.factors.iter().map(|f| f.root).collect();
            real_root_checks(&s.coefficients, &roots)
        }
        Solution::AllRoots(s) => all_roots_checks(s),
        Solution::Inequality(s) => real_root_checks(&s.coefficients, &s.zeros),
        Solution::Graph(s) => {
            let mut checks = real_root_checks(&s.coefficients, &s.zeros);
            let at = Expr::num(0.0);
            checks.push(Check::new(
                Expr::call("P", vec![at.clone()]),
                Expr::substituted(&s.coefficients, &at),
                evaluate(&s.coefficients, 0.0),
                Relation::Eq,
                s.y_intercept,
            ));
            checks
        }
        Solution::Remainder(s) => {
            let at = Expr::num(s.point);
            vec![Check::new(
                Expr::call("P", vec![at.clone()]),
                Expr::substituted(&s.coefficients, &at),
                evaluate(&s.coefficients, s.point),
                Relation::Eq,
                s.value,
            )]
        }
        Solution::Application(s) => all_roots_checks(&s.roots),
        Solution::LinearSystem(s) => linear_system_checks(s),
        Solution::WordProblem(s) => linear_system_checks(&s.system),
        Solution::System3(s) => match s.values {
            Some([x, y, z]) => s
                .equations
                .iter()
                .map(|eq| {
                    Check::new(
                        Expr::Tuple(vec![Expr::num(x), Expr::num(y), Expr::num(z)]),
                        linear_at(&[(eq.a, x), (eq.b, y), (eq.c, z)]),
                        eq.lhs(x, y, z),
                        Relation::Eq,
                        eq.d,
                    )
                })
                .collect(),
            None => Vec::new(),
        },
        Solution::InequalitySystem(s) => s
            .vertices
            .iter()
            .flat_map(|&p| s.inequalities.iter().map(move |i| inequality_check(i, p)))
            .collect(),
        Solution::Nonlinear(s) => s
            .points
            .iter()
            .flat_map(|&p| {
                let on_line = line_check(&s.line, p);
                let at = Expr::num(p.x);
                let on_parabola = Check::new(
                    point_expr(p),
                    Expr::substituted(&s.parabola, &at),
                    evaluate(&s.parabola, p.x),
                    Relation::Eq,
                    p.y,
                );
                [on_line, on_parabola]
            })
            .collect(),
    };

    let (confidence, note) = assess(solution, &checks);
    tracing::debug!(?confidence, checks = checks.len(), "verified solution");
    VerificationResult {
        checks,
        confidence,
        note,
    }
}

/// Confidence for `solution`, with a note when the checks do not tell the
/// whole story.
///
/// A result that leaves roots unfound is at most [`Confidence::Medium`].
/// With no checks, only outcomes detected from the structure of the problem
/// are [`Confidence::Confirmed`].
fn assess(solution: &Solution, checks: &[Check]) -> (Confidence, Option<&'static str>) {
    if let Some(note) = incomplete(solution) {
        let confidence = match Confidence::from_checks(checks) {
            Confidence::High => Confidence::Medium,
            other => other,
        };
        return (confidence, Some(note));
    }
    if !checks.is_empty() {
        return (Confidence::from_checks(checks), None);
    }
    match structural(solution) {
        Some(note) => (Confidence::Confirmed, Some(note)),
        None => (Confidence::Low, Some("No answer was produced to substitute")),
    }
}

fn incomplete(solution: &Solution) -> Option<&'static str> {
    let unsolved = match solution {
        Solution::Quartic(s) => s.status == QuarticStatus::Partial,
        Solution::AllRoots(s) => !s.complete,
        Solution::Application(s) => !s.roots.complete,
        _ => false,
    };
    unsolved.then_some(
        "Some roots lie in a factor that could not be split, so they were not checked",
    )
}

fn structural(solution: &Solution) -> Option<&'static str> {
    match solution {
        Solution::Factoring(FactoringSolution::NotFactorable { .. }) => {
            Some("No integer pair splits the middle term, so the quadratic does not factor")
        }
        Solution::LinearSystem(_) | Solution::WordProblem(_) => {
            Some("The lines are parallel or coincident, so there is no single point to check")
        }
        Solution::System3(_) => {
            Some("The coefficient matrix is singular, so there is no single point to check")
        }
        Solution::Nonlinear(_) => Some("The line misses the parabola, so there is no point to check"),
        Solution::InequalitySystem(_) => {
            Some("The boundary lines meet at no feasible vertex, so there is no point to check")
        }
        Solution::Inequality(_) => {
            Some("The polynomial has no real zeros, so its sign is the same everywhere")
        }
        Solution::RationalRoots(s) if !s.rational.candidates.is_empty() => {
            Some("Every candidate was tested and none is a root")
        }
        Solution::Factorization(s) if !rational_root_candidates(&s.coefficients).is_empty() => {
            Some("Every candidate was tested and none is a root")
        }
        _ => None,
    }
}

fn root_checks(coeffs: &[f64], roots: &[Root]) -> Vec<Check> {
    roots
        .iter()
        .map(|root| {
            let at = Expr::Root(*root);
            let computed = match root.as_real() {
                Some(x) => evaluate(coeffs, x),
                None => {
                    let z: Complex<f64> = root.to_complex();
                    evaluate_complex(coeffs, z).modulus()
                }
            };
            Check::new(
                Expr::eq(Expr::var("x"), at.clone()),
                Expr::substituted(coeffs, &at),
                computed,
                Relation::Eq,
                0.0,
            )
        })
        .collect()
}

fn real_root_checks(coeffs: &[f64], roots: &[f64]) -> Vec<Check> {
    let roots: Vec<Root> = roots.iter().map(|&x| Root::real(x)).collect();
    root_checks(coeffs, &roots)
}

fn all_roots_checks(solution: &AllRootsSolution) -> Vec<Check> {
    root_checks(&solution.coefficients, &solution.roots)
}

/// Checks `P(x) = D(x)·Q(x) + R(x)` at a few sample points.
fn division_checks(
    dividend: &[f64],
    divisor: &[f64],
    quotient: &[f64],
    remainder: &[f64],
) -> Vec<Check> {
    [-1.0, 0.0, 1.0, 2.0]
        .into_iter()
        .map(|x| {
            let at = Expr::num(x);
            let rebuilt = evaluate(divisor, x) * evaluate(quotient, x) + evaluate(remainder, x);
            Check::new(
                Expr::eq(Expr::var("x"), at.clone()),
                Expr::sum(vec![
                    Expr::product(vec![
                        Expr::group(Expr::substituted(divisor, &at)),
                        Expr::group(Expr::substituted(quotient, &at)),
                    ]),
                    Expr::group(Expr::substituted(remainder, &at)),
                ]),
                rebuilt,
                Relation::Eq,
                evaluate(dividend, x),
            )
        })
        .collect()
}

fn linear_system_checks(solution: &LinearSystemSolution) -> Vec<Check> {
    match solution.values {
        Some(p) => solution.equations.iter().map(|eq| line_check(eq, p)).collect(),
        None => Vec::new(),
    }
}

fn line_check(eq: &LinearEquation, p: Point) -> Check {
    Check::new(
        point_expr(p),
        linear_at(&[(eq.a, p.x), (eq.b, p.y)]),
        eq.lhs(p.x, p.y),
        Relation::Eq,
        eq.c,
    )
}

/// A vertex may lie on a strict boundary, so the closure of each relation is
/// checked.
fn inequality_check(inequality: &LinearInequality, p: Point) -> Check {
    let relation = match inequality.relation {
        Relation::Lt => Relation::Le,
        Relation::Gt => Relation::Ge,
        other => other,
    };
    Check::new(
        point_expr(p),
        linear_at(&[(inequality.a, p.x), (inequality.b, p.y)]),
        inequality.a * p.x + inequality.b * p.y,
        relation,
        inequality.c,
    )
}

fn point_expr(p: Point) -> Expr {
    Expr::Tuple(vec![Expr::num(p.x), Expr::num(p.y)])
}

/// `a(x) + b(y) + …` with each value in parentheses.
fn linear_at(terms: &[(f64, f64)]) -> Expr {
    Expr::sum(
        terms
            .iter()
            .filter(|&&(coeff, _)| !is_zero(coeff))
            .map(|&(coeff, value)| Expr::power_term(coeff, Expr::group(Expr::num(value)), 1))
            .collect(),
    )
}
