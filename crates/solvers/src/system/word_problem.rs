use stepwise_core::{Error, LinearEquation, SystemMethod, WordProblemSolution};

use super::two_by_two;

/// Solves a 2×2 system whose unknowns stand for named quantities.
///
/// `labels[0]` names `x` and `labels[1]` names `y`. The system is solved by
/// elimination.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] if a label is blank, and propagates
/// errors from [`two_by_two::solve`].
pub fn solve(
    equations: [LinearEquation; 2],
    labels: [String; 2],
) -> Result<WordProblemSolution, Error> {
    if labels.iter().any(|label| label.trim().is_empty()) {
        return Err(Error::MissingParameter { name: "labels" });
    }
    let system = two_by_two::solve(equations, SystemMethod::Elimination)?;
    Ok(WordProblemSolution {
        labels: labels.map(|label| label.trim().to_owned()),
        system,
    })
}
