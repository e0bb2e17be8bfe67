use thiserror::Error;

/// Reasons two points cannot bracket a root.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,
    #[error("bracket endpoints coincide")]
    ZeroWidth,
    #[error("the polynomial has the same sign at both endpoints")]
    NoSignChange,
}

/// Endpoints `left < right` across which the polynomial changes sign.
///
/// A zero value counts as positive, so a bracket never loses its sign
/// change when a midpoint lands exactly on the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    /// Whether the polynomial is negative at `left`.
    rising: bool,
}

impl Bracket {
    /// Checks and orders a pair of endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] or [`BracketError::ZeroWidth`].
    pub(super) fn ordered([a, b]: [f64; 2]) -> Result<[f64; 2], BracketError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }
        match a.total_cmp(&b) {
            std::cmp::Ordering::Less => Ok([a, b]),
            std::cmp::Ordering::Greater => Ok([b, a]),
            std::cmp::Ordering::Equal => Err(BracketError::ZeroWidth),
        }
    }

    /// Builds a bracket from ordered endpoints and the values there.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NoSignChange`] if the values share a sign.
    pub(super) fn new(
        [left, right]: [f64; 2],
        left_value: f64,
        right_value: f64,
    ) -> Result<Self, BracketError> {
        let rising = left_value < 0.0;
        if rising == (right_value < 0.0) {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self {
            left,
            right,
            rising,
        })
    }

    #[must_use]
    pub fn ends(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// True once the width is at most `abs_tol + rel_tol·|midpoint|`.
    #[must_use]
    pub fn is_narrow(&self, abs_tol: f64, rel_tol: f64) -> bool {
        self.width() <= abs_tol + rel_tol * self.midpoint().abs()
    }

    /// Moves whichever endpoint shares the sign of `value` to `x`.
    pub(super) fn keep(&mut self, x: f64, value: f64) {
        if (value < 0.0) == self.rising {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_ordered() {
        assert_eq!(Bracket::ordered([3.0, 1.0]), Ok([1.0, 3.0]));
        assert_eq!(Bracket::ordered([2.0, 2.0]), Err(BracketError::ZeroWidth));
        assert_eq!(
            Bracket::ordered([f64::INFINITY, 2.0]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn falling_bracket_keeps_its_sign_change() {
        // P(x) = 1 - x on [0, 2]
        let mut bracket = Bracket::new([0.0, 2.0], 1.0, -1.0).expect("valid bracket");

        bracket.keep(1.5, -0.5);
        assert_eq!(bracket.ends(), [0.0, 1.5]);

        bracket.keep(0.75, 0.25);
        assert_eq!(bracket.ends(), [0.75, 1.5]);
        assert_relative_eq!(bracket.width(), 0.75);
    }

    #[test]
    fn same_signs_do_not_bracket() {
        assert_eq!(
            Bracket::new([0.0, 1.0], 2.0, 0.0),
            Err(BracketError::NoSignChange)
        );
    }
}
