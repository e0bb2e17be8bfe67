/// Whether refinement met its tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    /// Reached the iteration limit; the best point seen is reported.
    MaxIters,
}

/// A refined root estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Polynomial value at `x`.
    pub residual: f64,
    /// Iterations performed.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(x: f64, residual: f64, status: Status, iters: usize) -> Self {
        Self {
            status,
            x,
            residual,
            iters,
        }
    }
}
