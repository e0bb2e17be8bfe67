//! Readers for simple equation text such as `2x^2 - 3x + 1 = 0` or
//! `x + 2y = 7`.
//!
//! Both sides may carry terms. Coefficients may be omitted (`x`, `-y`) or
//! written as decimals, and powers as `^2` or `²`.

use std::sync::LazyLock;

use regex::Regex;
use stepwise_core::{Error, Relation, tolerance::is_zero};

use crate::polynomial::MAX_DEGREE;

static POLY_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)(\d+(?:\.\d*)?|\.\d+)?\*?(x(?:\^(\d+))?)?$").expect("valid regex literal")
});

static LINEAR_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)(\d+(?:\.\d*)?|\.\d+)?\*?([xyz])?$").expect("valid regex literal")
});

static MATH_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+0-9.xyz^²³⁴*()\s<>=≤≥÷/]+").expect("valid regex literal")
});

/// Why a piece of text could not be read as an equation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no equation found in `{0}`")]
    Empty(String),
    #[error("unrecognized term `{0}`")]
    Term(String),
    #[error("x^{0} exceeds the supported degree")]
    Degree(u32),
    #[error("more than one relation in `{0}`")]
    ChainedRelation(String),
    #[error("expected `y = <quadratic in x>`, got `{0}`")]
    NotParabola(String),
    #[error("expected `dividend ÷ divisor`, got `{0}`")]
    NotDivision(String),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::invalid_input(err.to_string())
    }
}

/// A polynomial equation or inequality moved to the form `P(x) ⋈ 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialText {
    /// Leading coefficient first, without leading zeros.
    pub coefficients: Vec<f64>,
    /// `Eq` when the text had no relation at all.
    pub relation: Relation,
}

impl PolynomialText {
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// A linear equation or inequality moved to the form `ax + by + cz ⋈ d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearText {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub relation: Relation,
    /// One side is a bare `x` or `y`, as in `y = 2x + 1`.
    pub isolated: bool,
}

/// The longest run of equation-like characters containing a variable.
///
/// Lets prose such as `Solve x^2 - 5x + 6 = 0 for x` reach the parsers.
#[must_use]
pub fn extract_math(text: &str) -> Option<&str> {
    MATH_RUN
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|run| run.contains(['x', 'y', 'z']))
        .max_by_key(|run| run.len())
}

/// Reads a polynomial in `x`, with or without a relation.
///
/// # Errors
///
/// Returns a [`ParseError`] for empty text, unknown terms, powers above four,
/// or more than one relation.
pub fn parse_polynomial(text: &str) -> Result<PolynomialText, ParseError> {
    let normalized = normalize(text);
    let (lhs, relation, rhs) = split_relation(&normalized)?;

    let mut by_power = [0.0; MAX_DEGREE + 1];
    accumulate_polynomial(lhs, 1.0, &mut by_power)?;
    accumulate_polynomial(rhs, -1.0, &mut by_power)?;

    let mut coefficients: Vec<f64> = by_power.iter().rev().copied().collect();
    let leading_zeros = coefficients.iter().take_while(|c| is_zero(**c)).count();
    coefficients.drain(..leading_zeros.min(coefficients.len() - 1));
    Ok(PolynomialText {
        coefficients,
        relation,
    })
}

/// Reads `y = p₀x² + p₁x + p₂` (or with the sides swapped).
///
/// # Errors
///
/// Returns [`ParseError::NotParabola`] unless one side is exactly `y` and
/// the other a polynomial in `x` of degree at most two.
pub fn parse_parabola(text: &str) -> Result<[f64; 3], ParseError> {
    let normalized = normalize(text);
    let not_parabola = || ParseError::NotParabola(text.trim().to_owned());
    let (lhs, relation, rhs) = split_relation(&normalized)?;
    let curve = match (lhs, rhs) {
        ("y", curve) | (curve, "y") if relation == Relation::Eq => curve,
        _ => return Err(not_parabola()),
    };
    let parsed = parse_polynomial(curve)?;
    if parsed.degree() > 2 {
        return Err(not_parabola());
    }
    let mut parabola = [0.0; 3];
    let offset = 3 - parsed.coefficients.len();
    parabola[offset..].copy_from_slice(&parsed.coefficients);
    Ok(parabola)
}

/// Reads `(dividend) ÷ (divisor)`; `/` also separates the two.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text has no division sign or either side
/// is not a polynomial.
pub fn parse_division(text: &str) -> Result<(Vec<f64>, Vec<f64>), ParseError> {
    let normalized = normalize(text);
    let (dividend, divisor) = normalized
        .split_once(['÷', '/'])
        .ok_or_else(|| ParseError::NotDivision(text.trim().to_owned()))?;
    let strip = |side: &str| {
        side.strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .map(str::to_owned)
            .unwrap_or_else(|| side.to_owned())
    };
    Ok((
        parse_polynomial(&strip(dividend))?.coefficients,
        parse_polynomial(&strip(divisor))?.coefficients,
    ))
}

/// Reads a linear equation or inequality in `x`, `y`, and optionally `z`.
///
/// # Errors
///
/// Returns a [`ParseError`] for empty text, non-linear terms, or more than one
/// relation.
pub fn parse_linear(text: &str) -> Result<LinearText, ParseError> {
    let normalized = normalize(text);
    let (lhs, relation, rhs) = split_relation(&normalized)?;

    let mut sums = [0.0; 4];
    accumulate_linear(lhs, 1.0, &mut sums)?;
    accumulate_linear(rhs, -1.0, &mut sums)?;

    let bare = |side: &str| matches!(side.trim_start_matches('+'), "x" | "y");
    Ok(LinearText {
        a: sums[0],
        b: sums[1],
        c: sums[2],
        d: -sums[3],
        relation,
        isolated: bare(lhs) || bare(rhs),
    })
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| {
            let replacement: &[char] = match c {
                '²' => &['^', '2'],
                '³' => &['^', '3'],
                '⁴' => &['^', '4'],
                '≤' => &['<', '='],
                '≥' => &['>', '='],
                '−' => &['-'],
                '·' | '×' => &['*'],
                'X' => &['x'],
                'Y' => &['y'],
                'Z' => &['z'],
                _ => return vec![c],
            };
            replacement.to_vec()
        })
        .collect()
}

/// Splits at the single relation, if any.
fn split_relation(text: &str) -> Result<(&str, Relation, &str), ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty(text.to_owned()));
    }
    let Some(at) = text.find(['<', '>', '=']) else {
        return Ok((text, Relation::Eq, ""));
    };

    let rest = &text[at..];
    let (relation, width) = if rest.starts_with("<=") {
        (Relation::Le, 2)
    } else if rest.starts_with(">=") {
        (Relation::Ge, 2)
    } else if rest.starts_with('<') {
        (Relation::Lt, 1)
    } else if rest.starts_with('>') {
        (Relation::Gt, 1)
    } else {
        (Relation::Eq, 1)
    };

    let (lhs, rhs) = (&text[..at], &text[at + width..]);
    if rhs.contains(['<', '>', '=']) {
        return Err(ParseError::ChainedRelation(text.to_owned()));
    }
    if lhs.is_empty() || rhs.is_empty() {
        return Err(ParseError::Empty(text.to_owned()));
    }
    Ok((lhs, relation, rhs))
}

/// Splits a side into signed terms, keeping a sign that follows `^` or `*`
/// with its term.
fn terms(side: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = 0;
    let mut prev = None;
    for (i, c) in side.char_indices() {
        if (c == '+' || c == '-') && i > start && !matches!(prev, Some('^' | '*')) {
            terms.push(&side[start..i]);
            start = i;
        }
        prev = Some(c);
    }
    if start < side.len() {
        terms.push(&side[start..]);
    }
    terms
}

fn signed_coefficient(sign: &str, digits: Option<&str>, term: &str) -> Result<f64, ParseError> {
    let magnitude = match digits {
        Some(digits) => digits
            .parse::<f64>()
            .map_err(|_| ParseError::Term(term.to_owned()))?,
        None => 1.0,
    };
    Ok(if sign == "-" { -magnitude } else { magnitude })
}

fn accumulate_polynomial(side: &str, scale: f64, by_power: &mut [f64]) -> Result<(), ParseError> {
    let side = side.trim_start_matches('(').trim_end_matches(')');
    for term in terms(side) {
        let caps = POLY_TERM
            .captures(term)
            .filter(|caps| caps.get(2).is_some() || caps.get(3).is_some())
            .ok_or_else(|| ParseError::Term(term.to_owned()))?;

        let coefficient = signed_coefficient(&caps[1], caps.get(2).map(|m| m.as_str()), term)?;
        let power = match (caps.get(3), caps.get(4)) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(exp)) => exp
                .as_str()
                .parse::<u32>()
                .map_err(|_| ParseError::Term(term.to_owned()))?,
        };
        let slot = by_power
            .get_mut(power as usize)
            .ok_or(ParseError::Degree(power))?;
        *slot += scale * coefficient;
    }
    Ok(())
}

/// Adds `scale·(x, y, z, constant)` of each term into `sums`.
fn accumulate_linear(side: &str, scale: f64, sums: &mut [f64; 4]) -> Result<(), ParseError> {
    for term in terms(side) {
        let caps = LINEAR_TERM
            .captures(term)
            .filter(|caps| caps.get(2).is_some() || caps.get(3).is_some())
            .ok_or_else(|| ParseError::Term(term.to_owned()))?;

        let coefficient = signed_coefficient(&caps[1], caps.get(2).map(|m| m.as_str()), term)?;
        let slot = match caps.get(3).map(|m| m.as_str()) {
            Some("x") => 0,
            Some("y") => 1,
            Some("z") => 2,
            _ => 3,
        };
        sums[slot] += scale * coefficient;
    }
    Ok(())
}
