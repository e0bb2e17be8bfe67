//! Classification, solving, and verification for the Stepwise engine.
//!
//! - [`classify`]: requests to [`Problem`]s, explicit or best-effort
//! - [`polynomial`]: one solver per single-polynomial problem type
//! - [`system`]: one solver per system problem type
//! - [`verify`]: re-substitution of answers into their source equations
//!
//! [`solve`] dispatches a [`Problem`] to its solver. It holds no state, so
//! concurrent calls need no coordination.

pub mod classify;
pub mod polynomial;
pub mod system;
pub mod verify;

use stepwise_core::{Error, Problem, ProblemSpec, Solution};

/// Runs the solver selected by the problem's spec.
///
/// # Errors
///
/// Propagates the solver's error: [`Error::InvalidCoefficient`] for a vanishing
/// leading coefficient, [`Error::MissingParameter`] or [`Error::InvalidInput`]
/// for malformed coefficients.
pub fn solve(problem: &Problem) -> Result<Solution, Error> {
    tracing::debug!(problem_type = ?problem.problem_type(), "dispatching to solver");

    Ok(match &problem.spec {
        &ProblemSpec::Quadratic { a, b, c } => {
            Solution::Quadratic(polynomial::quadratic::solve(a, b, c)?)
        }
        &ProblemSpec::QuadraticFactoring { a, b, c } => {
            Solution::Factoring(polynomial::factoring::solve(a, b, c)?)
        }
        &ProblemSpec::CompletingSquare { a, b, c } => {
            Solution::CompletingSquare(polynomial::completing_square::solve(a, b, c)?)
        }
        &ProblemSpec::Cubic { coefficients } => {
            Solution::Cubic(polynomial::cubic::solve(coefficients)?)
        }
        &ProblemSpec::Quartic { coefficients } => {
            Solution::Quartic(polynomial::quartic::solve(coefficients)?)
        }
        ProblemSpec::PolynomialDivision { dividend, divisor } => {
            Solution::Division(polynomial::division::long(dividend, divisor)?)
        }
        ProblemSpec::SyntheticDivision { coefficients, root } => {
            Solution::SyntheticDivision(polynomial::division::synthetic(coefficients, *root)?)
        }
        ProblemSpec::RationalRoots { coefficients } => {
            Solution::RationalRoots(polynomial::rational::roots(coefficients)?)
        }
        ProblemSpec::Factoring { coefficients } => {
            Solution::Factorization(polynomial::rational::factor(coefficients)?)
        }
        ProblemSpec::AllRoots { coefficients } => {
            Solution::AllRoots(polynomial::roots::solve(coefficients)?)
        }
        ProblemSpec::Inequality {
            coefficients,
            relation,
        } => Solution::Inequality(polynomial::inequality::solve(coefficients, *relation)?),
        ProblemSpec::Graphing { coefficients } => {
            Solution::Graph(polynomial::graphing::analyze(coefficients)?)
        }
        ProblemSpec::RemainderTheorem {
            coefficients,
            point,
        } => Solution::Remainder(polynomial::remainder::solve(coefficients, *point)?),
        ProblemSpec::Application {
            coefficients,
            quantity,
            unit,
        } => Solution::Application(polynomial::application::solve(
            coefficients,
            quantity,
            unit.as_deref(),
        )?),
        &ProblemSpec::System2 { method, equations } => {
            Solution::LinearSystem(system::two_by_two::solve(equations, method)?)
        }
        &ProblemSpec::System3 { equations } => {
            Solution::System3(system::three_by_three::solve(equations)?)
        }
        ProblemSpec::WordProblem { equations, labels } => Solution::WordProblem(
            system::word_problem::solve(*equations, labels.clone())?,
        ),
        ProblemSpec::InequalitySystem { inequalities } => {
            Solution::InequalitySystem(system::inequalities::solve(inequalities)?)
        }
        &ProblemSpec::Nonlinear { line, parabola } => {
            Solution::Nonlinear(system::nonlinear::solve(line, parabola)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use stepwise_core::{LinearEquation, Root, SolutionType, SystemMethod};

    #[test]
    fn dispatches_quadratic() {
        let problem = Problem::new(ProblemSpec::Quadratic {
            a: 1.0,
            b: -5.0,
            c: 6.0,
        });
        let Solution::Quadratic(solution) = solve(&problem).expect("should solve") else {
            panic!("expected a quadratic solution");
        };
        assert_eq!(solution.roots, vec![Root::real(2.0), Root::real(3.0)]);
    }

    #[test]
    fn dispatches_system() {
        let problem = Problem::new(ProblemSpec::System2 {
            method: SystemMethod::Substitution,
            equations: [
                LinearEquation::new(2.0, 1.0, 5.0),
                LinearEquation::new(2.0, 1.0, 3.0),
            ],
        });
        let Solution::LinearSystem(solution) = solve(&problem).expect("should solve") else {
            panic!("expected a linear system solution");
        };
        assert_eq!(solution.solution_type, SolutionType::Inconsistent);
    }

    #[test]
    fn invalid_coefficient_propagates() {
        let problem = Problem::new(ProblemSpec::Quadratic {
            a: 0.0,
            b: 2.0,
            c: 1.0,
        });
        assert!(matches!(
            solve(&problem),
            Err(Error::InvalidCoefficient { name: "a", .. })
        ));
    }
}
