//! Problem descriptions accepted by the solvers.

use serde::{Deserialize, Serialize};

use crate::{SolveOptions, expr::Relation};

/// The solving routine a problem is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    QuadraticStandard,
    QuadraticFactoring,
    CompletingSquare,
    CubicEquation,
    QuarticEquation,
    PolynomialDivision,
    SyntheticDivision,
    RationalRoot,
    PolynomialFactoring,
    PolynomialRoots,
    PolynomialInequality,
    PolynomialGraphing,
    RemainderTheorem,
    PolynomialApplications,
    System2x2Substitution,
    System2x2Elimination,
    System2x2Graphical,
    System2x2Matrix,
    System3x3,
    SystemWordProblem,
    SystemInequalities,
    SystemNonlinear,
}

impl ProblemType {
    /// Returns true for the polynomial family.
    #[must_use]
    pub fn is_polynomial(self) -> bool {
        !self.is_system()
    }

    /// Returns true for the linear-system family.
    #[must_use]
    pub fn is_system(self) -> bool {
        matches!(
            self,
            Self::System2x2Substitution
                | Self::System2x2Elimination
                | Self::System2x2Graphical
                | Self::System2x2Matrix
                | Self::System3x3
                | Self::SystemWordProblem
                | Self::SystemInequalities
                | Self::SystemNonlinear
        )
    }
}

/// `a·x + b·y = c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LinearEquation {
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Left-hand side evaluated at `(x, y)`.
    #[must_use]
    pub fn lhs(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y
    }

    /// Equation with every coefficient multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.a * factor, self.b * factor, self.c * factor)
    }
}

/// `a·x + b·y + c·z = d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearEquation3 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl LinearEquation3 {
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    #[must_use]
    pub fn lhs(&self, x: f64, y: f64, z: f64) -> f64 {
        self.a * x + self.b * y + self.c * z
    }
}

/// `a·x + b·y ⋈ c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearInequality {
    pub a: f64,
    pub b: f64,
    pub relation: Relation,
    pub c: f64,
}

impl LinearInequality {
    #[must_use]
    pub fn new(a: f64, b: f64, relation: Relation, c: f64) -> Self {
        Self { a, b, relation, c }
    }

    /// Boundary line `a·x + b·y = c`.
    #[must_use]
    pub fn boundary(&self) -> LinearEquation {
        LinearEquation::new(self.a, self.b, self.c)
    }

    /// Returns true if `(x, y)` satisfies the inequality.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.relation.holds(self.a * x + self.b * y, self.c)
    }
}

/// Method used for a 2×2 linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemMethod {
    Substitution,
    #[default]
    Elimination,
    Graphical,
    /// Cramer's Rule.
    Matrix,
}

/// A fully specified problem.
///
/// This is the primary input to the solvers. Free-form text is turned into a
/// `ProblemSpec` by the best-effort classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProblemSpec {
    /// `ax² + bx + c = 0` by the quadratic formula.
    Quadratic { a: f64, b: f64, c: f64 },
    /// `ax² + bx + c = 0` by integer factoring.
    QuadraticFactoring { a: f64, b: f64, c: f64 },
    /// `ax² + bx + c = 0` by completing the square.
    CompletingSquare { a: f64, b: f64, c: f64 },
    /// `ax³ + bx² + cx + d = 0`.
    Cubic { coefficients: [f64; 4] },
    /// `ax⁴ + bx³ + cx² + dx + e = 0`.
    Quartic { coefficients: [f64; 5] },
    /// `dividend ÷ divisor` by long division.
    PolynomialDivision { dividend: Vec<f64>, divisor: Vec<f64> },
    /// `coefficients ÷ (x - root)`.
    SyntheticDivision { coefficients: Vec<f64>, root: f64 },
    RationalRoots { coefficients: Vec<f64> },
    Factoring { coefficients: Vec<f64> },
    AllRoots { coefficients: Vec<f64> },
    /// `P(x) ⋈ 0`.
    Inequality {
        coefficients: Vec<f64>,
        relation: Relation,
    },
    Graphing { coefficients: Vec<f64> },
    /// `P(point)` and whether `(x - point)` is a factor.
    RemainderTheorem { coefficients: Vec<f64>, point: f64 },
    /// A polynomial model whose non-negative real roots are meaningful.
    Application {
        coefficients: Vec<f64>,
        quantity: String,
        #[serde(default)]
        unit: Option<String>,
    },
    /// Two linear equations in `x` and `y`.
    System2 {
        #[serde(default)]
        method: SystemMethod,
        equations: [LinearEquation; 2],
    },
    /// Three linear equations in `x`, `y`, and `z`.
    System3 { equations: [LinearEquation3; 3] },
    /// A 2×2 system whose unknowns carry real-world labels.
    WordProblem {
        equations: [LinearEquation; 2],
        labels: [String; 2],
    },
    /// Linear inequalities in `x` and `y`.
    InequalitySystem { inequalities: Vec<LinearInequality> },
    /// A line `a·x + b·y = c` against a parabola `y = p₀x² + p₁x + p₂`.
    Nonlinear {
        line: LinearEquation,
        parabola: [f64; 3],
    },
}

impl ProblemSpec {
    /// The solver this spec is dispatched to.
    #[must_use]
    pub fn problem_type(&self) -> ProblemType {
        match self {
            Self::Quadratic { .. } => ProblemType::QuadraticStandard,
            Self::QuadraticFactoring { .. } => ProblemType::QuadraticFactoring,
            Self::CompletingSquare { .. } => ProblemType::CompletingSquare,
            Self::Cubic { .. } => ProblemType::CubicEquation,
            Self::Quartic { .. } => ProblemType::QuarticEquation,
            Self::PolynomialDivision { .. } => ProblemType::PolynomialDivision,
            Self::SyntheticDivision { .. } => ProblemType::SyntheticDivision,
            Self::RationalRoots { .. } => ProblemType::RationalRoot,
            Self::Factoring { .. } => ProblemType::PolynomialFactoring,
            Self::AllRoots { .. } => ProblemType::PolynomialRoots,
            Self::Inequality { .. } => ProblemType::PolynomialInequality,
            Self::Graphing { .. } => ProblemType::PolynomialGraphing,
            Self::RemainderTheorem { .. } => ProblemType::RemainderTheorem,
            Self::Application { .. } => ProblemType::PolynomialApplications,
            Self::System2 { method, .. } => match method {
                SystemMethod::Substitution => ProblemType::System2x2Substitution,
                SystemMethod::Elimination => ProblemType::System2x2Elimination,
                SystemMethod::Graphical => ProblemType::System2x2Graphical,
                SystemMethod::Matrix => ProblemType::System2x2Matrix,
            },
            Self::System3 { .. } => ProblemType::System3x3,
            Self::WordProblem { .. } => ProblemType::SystemWordProblem,
            Self::InequalitySystem { .. } => ProblemType::SystemInequalities,
            Self::Nonlinear { .. } => ProblemType::SystemNonlinear,
        }
    }

    /// The polynomial being solved, leading coefficient first, if this spec
    /// is a single-polynomial problem.
    #[must_use]
    pub fn polynomial(&self) -> Option<Vec<f64>> {
        match self {
            Self::Quadratic { a, b, c }
            | Self::QuadraticFactoring { a, b, c }
            | Self::CompletingSquare { a, b, c } => Some(vec![*a, *b, *c]),
            Self::Cubic { coefficients } => Some(coefficients.to_vec()),
            Self::Quartic { coefficients } => Some(coefficients.to_vec()),
            Self::PolynomialDivision { dividend, .. } => Some(dividend.clone()),
            Self::SyntheticDivision { coefficients, .. }
            | Self::RationalRoots { coefficients }
            | Self::Factoring { coefficients }
            | Self::AllRoots { coefficients }
            | Self::Inequality { coefficients, .. }
            | Self::Graphing { coefficients }
            | Self::RemainderTheorem { coefficients, .. }
            | Self::Application { coefficients, .. } => Some(coefficients.clone()),
            Self::System2 { .. }
            | Self::System3 { .. }
            | Self::WordProblem { .. }
            | Self::InequalitySystem { .. }
            | Self::Nonlinear { .. } => None,
        }
    }
}

/// A classified problem, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    pub spec: ProblemSpec,
    /// Text the problem was read from, or a generated description.
    pub raw_input: String,
    /// Free-form context such as a word-problem scenario.
    pub scenario: Option<String>,
    pub options: SolveOptions,
}

impl Problem {
    /// Wraps a spec with default options and no source text.
    #[must_use]
    pub fn new(spec: ProblemSpec) -> Self {
        Self {
            spec,
            raw_input: String::new(),
            scenario: None,
            options: SolveOptions::default(),
        }
    }

    #[must_use]
    pub fn with_raw_input(mut self, raw_input: impl Into<String>) -> Self {
        self.raw_input = raw_input.into();
        self
    }

    #[must_use]
    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn problem_type(&self) -> ProblemType {
        self.spec.problem_type()
    }
}
