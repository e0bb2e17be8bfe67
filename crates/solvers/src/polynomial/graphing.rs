use stepwise_core::{
    EndBehavior, Error, GraphAnalysis, Point,
    poly::{derivative, evaluate},
    tolerance::snap,
    zeros::real_zeros,
};

use super::checked_coefficients;

/// Sample window and spacing for plotted points.
const SAMPLE_START: f64 = -10.0;
const SAMPLE_STEP: f64 = 0.5;
const SAMPLE_COUNT: usize = 41;

/// Offset used to test whether the derivative changes sign at a critical point.
const TURN_PROBE: f64 = 1e-5;

/// Collects the features needed to sketch `y = P(x)`.
///
/// Turning points are critical points where the derivative changes sign, so a
/// stationary inflection such as the origin of `x³` is excluded.
///
/// # Errors
///
/// Returns an error if the coefficients are empty, non-finite, or outside
/// degree `1..=4`.
pub fn analyze(coefficients: &[f64]) -> Result<GraphAnalysis, Error> {
    let coefficients = checked_coefficients(coefficients, 1)?;
    let degree = coefficients.len() - 1;
    let leading_coefficient = coefficients[0];
    let slope = derivative(&coefficients);

    let turning_points = real_zeros(&slope)
        .into_iter()
        .filter(|&x| {
            let before = evaluate(&slope, x - TURN_PROBE);
            let after = evaluate(&slope, x + TURN_PROBE);
            before * after < 0.0
        })
        .map(|x| Point::new(x, snap(evaluate(&coefficients, x))))
        .collect();

    let sample_points = (0..SAMPLE_COUNT)
        .map(|i| {
            let x = SAMPLE_START + SAMPLE_STEP * i as f64;
            Point::new(x, snap(evaluate(&coefficients, x)))
        })
        .collect();

    Ok(GraphAnalysis {
        end_behavior: EndBehavior::of(degree, leading_coefficient),
        zeros: real_zeros(&coefficients),
        y_intercept: coefficients[degree],
        max_turning_points: degree - 1,
        turning_points,
        sample_points,
        degree,
        leading_coefficient,
        coefficients,
    })
}
