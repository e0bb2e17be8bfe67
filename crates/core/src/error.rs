use thiserror::Error;

/// Failures that a solve request propagates to its caller.
///
/// Structural outcomes such as a singular system, a polynomial without
/// rational roots, or a quadratic that does not factor over the integers are
/// not errors. They are ordinary [`Solution`](crate::Solution) variants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A coefficient that must be nonzero (typically the leading one) is ≈ 0.
    #[error("invalid coefficient: {name} must be nonzero (got {value})")]
    InvalidCoefficient { name: &'static str, value: f64 },

    /// No problem type matched the input and no fallback applied.
    #[error("unrecognized problem type for input `{input}`")]
    UnrecognizedProblemType { input: String },

    /// A required parameter was not supplied.
    #[error("missing parameter: {name}")]
    MissingParameter { name: &'static str },

    /// Input could not be interpreted as the requested problem.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl Error {
    /// Builds an [`Error::InvalidInput`] from any displayable reason.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
