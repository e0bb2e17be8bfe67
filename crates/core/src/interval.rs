//! Partitioning of the real line by polynomial zeros and sign testing.

use serde::Serialize;

use crate::tolerance::is_zero;

/// An open interval of the real line. Either end may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// An interior point at which to test the sign of a polynomial.
    ///
    /// Unbounded intervals step one unit past their finite end; the whole line
    /// is tested at the origin.
    #[must_use]
    pub fn test_point(&self) -> f64 {
        match (self.start.is_finite(), self.end.is_finite()) {
            (false, false) => 0.0,
            (false, true) => self.end - 1.0,
            (true, false) => self.start + 1.0,
            (true, true) => 0.5 * (self.start + self.end),
        }
    }
}

/// Splits the real line into open intervals bounded by sorted `zeros`.
///
/// `n` zeros produce `n + 1` intervals. Unsorted input is sorted first.
#[must_use]
pub fn partition(zeros: &[f64]) -> Vec<Interval> {
    let mut bounds = Vec::with_capacity(zeros.len() + 2);
    bounds.push(f64::NEG_INFINITY);
    bounds.extend_from_slice(zeros);
    bounds.push(f64::INFINITY);
    bounds[1..=zeros.len()].sort_by(f64::total_cmp);

    bounds
        .windows(2)
        .map(|pair| Interval {
            start: pair[0],
            end: pair[1],
        })
        .collect()
}

/// Three-way sign of a value, with ≈ 0 treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSign {
    Positive,
    Negative,
    Zero,
}

impl ValueSign {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if is_zero(value) {
            Self::Zero
        } else if value > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}
