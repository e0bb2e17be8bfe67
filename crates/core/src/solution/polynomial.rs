use serde::Serialize;

use crate::{
    Root, RootType,
    expr::Relation,
    interval::{Interval, ValueSign},
    poly::LongDivision,
    zeros::RationalRoots,
};

use super::Point;

/// Alternative route suggested when a method reaches its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// The quadratic formula always applies.
    QuadraticFormula,
    /// Cardano's formula or a numerical root finder.
    NumericalMethods,
}

/// `ax² + bx + c = 0` by the quadratic formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadraticSolution {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub discriminant: f64,
    pub root_type: RootType,
    /// Reals ascending, or a conjugate pair with negative imaginary part first.
    pub roots: Vec<Root>,
}

/// `ax² + bx + c = 0` by the AC method.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FactoringSolution {
    Factored {
        a: f64,
        b: f64,
        c: f64,
        /// The product `a·c`.
        product: f64,
        /// Integers `m, n` with `m·n = a·c` and `m + n = b`.
        pair: [f64; 2],
        /// Binomials `(p·x + q)` whose product is the quadratic.
        factors: [[f64; 2]; 2],
        /// Distinct roots, ascending.
        roots: Vec<f64>,
    },
    NotFactorable {
        a: f64,
        b: f64,
        c: f64,
        product: f64,
        recommendation: Recommendation,
    },
}

/// `ax² + bx + c = 0` by completing the square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletingSquareSolution {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// `b / 2a`, the number inside the squared binomial.
    pub half_coefficient: f64,
    /// `(b / 2a)²`, added to both sides.
    pub square_term: f64,
    /// `(x + b/2a)² = right_side`.
    pub right_side: f64,
    /// Vertex `(h, k)` of `y = ax² + bx + c`.
    pub vertex: Point,
    pub discriminant: f64,
    pub root_type: RootType,
    pub roots: Vec<Root>,
}

/// `ax³ + bx² + cx + d = 0` via the Rational Root Theorem.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CubicSolution {
    /// A rational root reduced the cubic to a quadratic.
    Reduced {
        coefficients: [f64; 4],
        candidates: Vec<f64>,
        rational_root: f64,
        remaining_quadratic: QuadraticSolution,
        roots: Vec<Root>,
    },
    /// No candidate is a root; real roots are estimated numerically.
    NoRationalRoot {
        coefficients: [f64; 4],
        candidates: Vec<f64>,
        estimates: Vec<f64>,
        recommendation: Recommendation,
    },
}

impl CubicSolution {
    /// Roots known exactly, or the numerical estimates.
    #[must_use]
    pub fn roots(&self) -> Vec<Root> {
        match self {
            Self::Reduced { roots, .. } => roots.clone(),
            Self::NoRationalRoot { estimates, .. } => {
                estimates.iter().map(|&x| Root::real(x)).collect()
            }
        }
    }
}

/// Whether every root of a quartic was recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuarticStatus {
    Complete,
    /// Some roots remain in `remaining`, a factor no method here can split.
    Partial,
}

/// How a quartic was attacked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum QuarticMethod {
    /// `u = x²` turns `ax⁴ + cx² + e` into `au² + cu + e`.
    Biquadratic {
        substitution: QuadraticSolution,
        u_roots: Vec<Root>,
    },
    RationalRoots {
        rational: RationalRoots,
        remaining_quadratic: Option<QuadraticSolution>,
    },
}

/// `ax⁴ + bx³ + cx² + dx + e = 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarticSolution {
    pub coefficients: [f64; 5],
    pub method: QuarticMethod,
    pub status: QuarticStatus,
    pub roots: Vec<Root>,
    /// Unsolved factor for a partial result; `[a]` when complete.
    pub remaining: Vec<f64>,
}

/// `dividend = divisor·quotient + remainder`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionSolution {
    pub dividend: Vec<f64>,
    pub divisor: Vec<f64>,
    pub division: LongDivision,
}

/// Synthetic division by `(x - root)`, with its tableau.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticDivisionSolution {
    pub coefficients: Vec<f64>,
    pub root: f64,
    /// Middle row: `root` times the previous running sum, `0` under the lead.
    pub products: Vec<f64>,
    /// Bottom row: quotient coefficients followed by the remainder.
    pub sums: Vec<f64>,
    pub quotient: Vec<f64>,
    pub remainder: f64,
}

/// Rational Root Theorem applied to a polynomial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RationalRootSolution {
    pub coefficients: Vec<f64>,
    pub rational: RationalRoots,
    /// Each candidate with the polynomial's value there.
    pub tests: Vec<[f64; 2]>,
    /// Distinct rational roots, ascending.
    pub roots: Vec<f64>,
}

/// `(x - root)^multiplicity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFactor {
    pub root: f64,
    pub multiplicity: usize,
}

/// `P(x) = remaining(x)·Π(x - rᵢ)^mᵢ` over the rationals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorizationSolution {
    pub coefficients: Vec<f64>,
    pub factors: Vec<LinearFactor>,
    /// Factor with no rational roots, carrying the leading coefficient.
    pub remaining: Vec<f64>,
}

/// Every root that can be found for a polynomial of degree at most four.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllRootsSolution {
    pub coefficients: Vec<f64>,
    /// Rational roots with multiplicity.
    pub rational: Vec<f64>,
    /// Real roots of the deflated factor located by bisection.
    pub numerical: Vec<f64>,
    pub roots: Vec<Root>,
    /// Factor left after removing rational roots.
    pub remaining: Vec<f64>,
    /// True if `roots` accounts for every root counted by the degree.
    pub complete: bool,
}

/// Sign of the polynomial on one interval of the partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalTest {
    pub interval: Interval,
    pub test_point: f64,
    pub value: f64,
    pub sign: ValueSign,
    pub satisfies: bool,
}

/// One connected piece of an inequality's solution set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolutionInterval {
    pub start: f64,
    pub end: f64,
    pub start_closed: bool,
    pub end_closed: bool,
}

impl SolutionInterval {
    /// Returns true for a single point `[c, c]`.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start_closed && self.end_closed && crate::tolerance::approx_eq(self.start, self.end)
    }
}

/// `P(x) ⋈ 0` by sign analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InequalitySolution {
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    /// Critical points, ascending.
    pub zeros: Vec<f64>,
    pub tests: Vec<IntervalTest>,
    /// Disjoint pieces, ascending; empty when nothing satisfies.
    pub solution_set: Vec<SolutionInterval>,
}

/// Behavior of `P(x)` as `x → -∞` and `x → +∞`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndBehavior {
    /// Even degree, positive leading coefficient.
    UpUp,
    /// Even degree, negative leading coefficient.
    DownDown,
    /// Odd degree, positive leading coefficient.
    DownUp,
    /// Odd degree, negative leading coefficient.
    UpDown,
}

impl EndBehavior {
    #[must_use]
    pub fn of(degree: usize, leading: f64) -> Self {
        match (degree % 2 == 0, leading > 0.0) {
            (true, true) => Self::UpUp,
            (true, false) => Self::DownDown,
            (false, true) => Self::DownUp,
            (false, false) => Self::UpDown,
        }
    }
}

/// Features of `y = P(x)` used to sketch its graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphAnalysis {
    pub coefficients: Vec<f64>,
    pub degree: usize,
    pub leading_coefficient: f64,
    pub end_behavior: EndBehavior,
    pub zeros: Vec<f64>,
    pub y_intercept: f64,
    pub max_turning_points: usize,
    pub turning_points: Vec<Point>,
    pub sample_points: Vec<Point>,
}

/// Remainder and Factor Theorems at `x = point`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemainderSolution {
    pub coefficients: Vec<f64>,
    pub point: f64,
    /// `P(point)`, which equals the remainder on division by `(x - point)`.
    pub value: f64,
    pub is_factor: bool,
    pub quotient: Vec<f64>,
}

/// A polynomial model with a physical interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationSolution {
    pub quantity: String,
    pub unit: Option<String>,
    pub roots: AllRootsSolution,
    /// Non-negative real roots, the only ones meaningful in context.
    pub meaningful: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_behavior_cases() {
        assert_eq!(EndBehavior::of(2, 1.0), EndBehavior::UpUp);
        assert_eq!(EndBehavior::of(4, -2.0), EndBehavior::DownDown);
        assert_eq!(EndBehavior::of(3, 1.0), EndBehavior::DownUp);
        assert_eq!(EndBehavior::of(1, -1.0), EndBehavior::UpDown);
    }

    #[test]
    fn point_intervals() {
        let point = SolutionInterval {
            start: 2.0,
            end: 2.0,
            start_closed: true,
            end_closed: true,
        };
        assert!(point.is_point());
    }
}
