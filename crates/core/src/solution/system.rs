use serde::Serialize;

use crate::{
    linalg::{LuSolve, determinant_2x2},
    problem::{LinearEquation, LinearEquation3, LinearInequality, SystemMethod},
    tolerance::{is_zero, snap},
};

use super::{Point, QuadraticSolution};

/// Half-width of the window used for graph endpoints.
const GRAPH_EXTENT: f64 = 10.0;

/// Unknown of a two-variable system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    X,
    Y,
}

impl Variable {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Coefficient of this variable in `eq`.
    #[must_use]
    pub fn coefficient(self, eq: &LinearEquation) -> f64 {
        match self {
            Self::X => eq.a,
            Self::Y => eq.b,
        }
    }
}

/// Number of solutions of a 2×2 linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionType {
    /// Lines cross at one point.
    Unique,
    /// Parallel, distinct lines: no solution.
    Inconsistent,
    /// Coincident lines: infinitely many solutions.
    Dependent,
}

impl SolutionType {
    /// Classifies a 2×2 system.
    ///
    /// A nonzero determinant means a unique solution. Otherwise the
    /// coefficient ratios `a₁:a₂`, `b₁:b₂`, `c₁:c₂` are compared through cross
    /// products, which avoids dividing by a zero coefficient: all equal means
    /// dependent, otherwise inconsistent.
    #[must_use]
    pub fn classify(eq1: &LinearEquation, eq2: &LinearEquation) -> Self {
        let det = determinant_2x2(eq1.a, eq1.b, eq2.a, eq2.b);
        if !is_zero(det) {
            return Self::Unique;
        }

        let contradiction = |eq: &LinearEquation| is_zero(eq.a) && is_zero(eq.b) && !is_zero(eq.c);
        if contradiction(eq1) || contradiction(eq2) {
            return Self::Inconsistent;
        }

        let a_c = eq1.a * eq2.c - eq2.a * eq1.c;
        let b_c = eq1.b * eq2.c - eq2.b * eq1.c;
        if is_zero(a_c) && is_zero(b_c) {
            Self::Dependent
        } else {
            Self::Inconsistent
        }
    }
}

/// A linear equation drawn as a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Line {
    /// `y = slope·x + intercept`.
    SlopeIntercept { slope: f64, intercept: f64 },
    /// `x = x`.
    Vertical { x: f64 },
    /// `0·x + 0·y = c`, which is not a line.
    Degenerate,
}

impl Line {
    #[must_use]
    pub fn of(eq: &LinearEquation) -> Self {
        if !is_zero(eq.b) {
            Self::SlopeIntercept {
                slope: snap(-eq.a / eq.b),
                intercept: snap(eq.c / eq.b),
            }
        } else if !is_zero(eq.a) {
            Self::Vertical {
                x: snap(eq.c / eq.a),
            }
        } else {
            Self::Degenerate
        }
    }

    /// Endpoints of the visible segment on `[-10, 10]`.
    #[must_use]
    pub fn endpoints(&self) -> Vec<Point> {
        match *self {
            Self::SlopeIntercept { slope, intercept } => [-GRAPH_EXTENT, GRAPH_EXTENT]
                .into_iter()
                .map(|x| Point::new(x, snap(slope * x + intercept)))
                .collect(),
            Self::Vertical { x } => vec![Point::new(x, -GRAPH_EXTENT), Point::new(x, GRAPH_EXTENT)],
            Self::Degenerate => Vec::new(),
        }
    }
}

/// Substitution: `isolated = constant + coefficient·other`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubstitutionDetail {
    pub isolated: Variable,
    pub constant: f64,
    pub coefficient: f64,
    /// Second equation after substitution: `reduced_coefficient·other = reduced_rhs`.
    pub reduced_coefficient: f64,
    pub reduced_rhs: f64,
    pub other_value: f64,
    pub isolated_value: f64,
}

/// Elimination: scale, add, solve, back-substitute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EliminationDetail {
    pub eliminated: Variable,
    pub multipliers: [f64; 2],
    pub scaled: [LinearEquation; 2],
    /// Sum of the scaled equations; the eliminated coefficient is zero.
    pub combined: LinearEquation,
    pub remaining_value: f64,
    /// Index (0 or 1) of the equation used for back-substitution.
    pub back_equation: usize,
    pub eliminated_value: f64,
}

/// Method-specific working for a unique 2×2 solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MethodDetail {
    Substitution(SubstitutionDetail),
    Elimination(EliminationDetail),
    /// `D`, `Dx`, `Dy` of Cramer's Rule, also used for the graphical intersection.
    Determinants { d: f64, dx: f64, dy: f64 },
}

/// A 2×2 linear system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearSystemSolution {
    pub method: SystemMethod,
    pub equations: [LinearEquation; 2],
    pub determinant: f64,
    pub solution_type: SolutionType,
    /// The intersection, present only for [`SolutionType::Unique`].
    pub values: Option<Point>,
    pub detail: Option<MethodDetail>,
    pub lines: [Line; 2],
}

/// A 3×3 linear system solved by LU decomposition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct System3Solution {
    pub equations: [LinearEquation3; 3],
    pub lu: LuSolve,
    /// `(x, y, z)`, absent when the matrix is singular. Singular systems are
    /// not split into inconsistent and dependent.
    pub values: Option<[f64; 3]>,
}

/// A labeled 2×2 system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordProblemSolution {
    pub labels: [String; 2],
    pub system: LinearSystemSolution,
}

/// Feasible region of a system of linear inequalities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InequalitySystemSolution {
    pub inequalities: Vec<LinearInequality>,
    pub boundaries: Vec<Line>,
    /// Pairwise intersections of boundary lines.
    pub intersections: Vec<Point>,
    /// Intersections satisfying every inequality.
    pub vertices: Vec<Point>,
    /// Whether the origin satisfies each inequality, for shading.
    pub origin_tests: Vec<bool>,
}

/// Line against parabola.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NonlinearSystemSolution {
    pub line: LinearEquation,
    pub parabola: [f64; 3],
    /// Quadratic in `x` after substituting the line into the parabola.
    pub reduced: [f64; 3],
    /// Absent when the line is vertical and no quadratic arises.
    pub quadratic: Option<QuadraticSolution>,
    pub points: Vec<Point>,
}
