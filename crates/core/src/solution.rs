//! Solver outputs.
//!
//! A [`Solution`] is a tagged union over every problem family. Outcomes that
//! are not failures, such as a quadratic that does not factor over the
//! integers or a singular system, are variants here rather than errors.

mod polynomial;
mod system;

use serde::Serialize;

pub use polynomial::{
    AllRootsSolution, ApplicationSolution, CompletingSquareSolution, CubicSolution,
    DivisionSolution, EndBehavior, FactoringSolution, FactorizationSolution, GraphAnalysis,
    InequalitySolution, IntervalTest, LinearFactor, QuadraticSolution, QuarticMethod,
    QuarticSolution, QuarticStatus, RationalRootSolution, Recommendation, RemainderSolution,
    SolutionInterval, SyntheticDivisionSolution,
};
pub use system::{
    EliminationDetail, InequalitySystemSolution, Line, LinearSystemSolution, MethodDetail,
    NonlinearSystemSolution, SolutionType, SubstitutionDetail, System3Solution, Variable,
    WordProblemSolution,
};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The result of solving one problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Solution {
    Quadratic(QuadraticSolution),
    Factoring(FactoringSolution),
    CompletingSquare(CompletingSquareSolution),
    Cubic(CubicSolution),
    Quartic(QuarticSolution),
    Division(DivisionSolution),
    SyntheticDivision(SyntheticDivisionSolution),
    RationalRoots(RationalRootSolution),
    Factorization(FactorizationSolution),
    AllRoots(AllRootsSolution),
    Inequality(InequalitySolution),
    Graph(GraphAnalysis),
    Remainder(RemainderSolution),
    Application(ApplicationSolution),
    LinearSystem(LinearSystemSolution),
    System3(System3Solution),
    WordProblem(WordProblemSolution),
    InequalitySystem(InequalitySystemSolution),
    Nonlinear(NonlinearSystemSolution),
}
