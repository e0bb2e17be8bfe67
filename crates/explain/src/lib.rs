//! Worked solutions for the Stepwise equation engine.
//!
//! A solve runs as a straight pipeline with no shared state:
//!
//! 1. [`stepwise_solvers::solve`] turns a [`Problem`] into a [`Solution`]
//! 2. [`stepwise_solvers::verify::verify`] substitutes the answers back
//! 3. [`generate::base_steps`] writes one [`Step`] per algebraic move
//! 4. [`passes::enhance`] applies the option-gated enhancement passes
//! 5. [`workbook::assemble`] groups everything into titled sections
//!
//! [`solve_polynomial`] and [`solve_simultaneous_system`] add classification
//! of a request in front of this pipeline.

pub mod generate;
pub mod passes;
pub mod render;
pub mod step;
pub mod tables;
pub mod workbook;

use serde::Serialize;
use stepwise_core::{Error, Problem, Solution};
use stepwise_solvers::{
    classify::{classify_polynomial, classify_system},
    verify::{VerificationResult, verify},
};

pub use stepwise_solvers::classify::{PolynomialConfig, PolynomialParameters, SystemConfig};
pub use step::{Concept, Step, StepKind};
pub use workbook::{Cell, Section, Workbook};

/// Everything produced by one solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResult {
    pub problem: Problem,
    pub solution: Solution,
    pub verification: VerificationResult,
    pub steps: Vec<Step>,
    pub workbook: Workbook,
}

/// Solves a classified problem and explains the solution.
///
/// The result depends only on `problem`; repeating a call gives an equal
/// result.
///
/// # Errors
///
/// Returns the solver's error, such as [`Error::InvalidCoefficient`] for a
/// vanishing leading coefficient.
pub fn solve(problem: &Problem) -> Result<SolveResult, Error> {
    let solution = stepwise_solvers::solve(problem)?;
    let verification = verify(&solution);

    let options = &problem.options;
    let shown = options
        .include_verification_in_steps
        .then_some(&verification);
    let steps = passes::enhance(generate::base_steps(&solution, shown), options);
    let workbook = workbook::assemble(problem, &solution, &verification, &steps);

    Ok(SolveResult {
        problem: problem.clone(),
        solution,
        verification,
        steps,
        workbook,
    })
}

/// Classifies and solves a single-polynomial request.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedProblemType`] when the request cannot be
/// classified, [`Error::MissingParameter`] or [`Error::InvalidInput`] when it
/// is incomplete, and any error from [`solve`].
pub fn solve_polynomial(config: &PolynomialConfig) -> Result<SolveResult, Error> {
    let problem = classify_polynomial(config)?;
    solve(&problem)
}

/// Classifies and solves a system of equations or inequalities.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when the request has no equations,
/// [`Error::InvalidInput`] when the equations do not fit the requested type,
/// and any error from [`solve`].
pub fn solve_simultaneous_system(config: &SystemConfig) -> Result<SolveResult, Error> {
    let problem = classify_system(config)?;
    solve(&problem)
}
