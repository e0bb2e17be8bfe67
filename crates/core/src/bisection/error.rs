use thiserror::Error;

use super::bracket::BracketError;

/// Errors that can occur while refining a root.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("non-finite polynomial value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}
