use stepwise_core::{ApplicationSolution, Error, Root, tolerance::EPSILON};

use super::roots;

/// Solves a polynomial model and keeps the roots that make physical sense.
///
/// Only real, non-negative roots are meaningful for quantities such as
/// time, length, or price.
///
/// # Errors
///
/// Returns an error if the coefficients are empty, non-finite, or outside
/// degree `1..=4`, or if `quantity` is blank.
pub fn solve(
    coefficients: &[f64],
    quantity: &str,
    unit: Option<&str>,
) -> Result<ApplicationSolution, Error> {
    if quantity.trim().is_empty() {
        return Err(Error::MissingParameter { name: "quantity" });
    }

    let roots = roots::solve(coefficients)?;
    let mut meaningful: Vec<f64> = roots
        .roots
        .iter()
        .filter_map(Root::as_real)
        .filter(|&x| x > -EPSILON)
        .map(|x| x.max(0.0))
        .collect();
    meaningful.dedup();

    Ok(ApplicationSolution {
        quantity: quantity.to_owned(),
        unit: unit.map(str::to_owned),
        roots,
        meaningful,
    })
}
