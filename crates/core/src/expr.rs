//! A small expression tree for the algebra shown in solution steps.
//!
//! Solvers and step generators build [`Expr`] values; only the presentation
//! layer turns them into text.

use serde::{Deserialize, Serialize};

use crate::{Root, interval::ValueSign, tolerance::is_zero};

/// Comparison between two sides of an equation or inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
}

impl Relation {
    /// Returns true for `=`, `≤`, and `≥`.
    #[must_use]
    pub fn includes_equality(self) -> bool {
        matches!(self, Self::Eq | Self::Le | Self::Ge)
    }

    /// Returns true if a value with the given sign satisfies `value ⋈ 0`.
    #[must_use]
    pub fn accepts(self, sign: ValueSign) -> bool {
        match (self, sign) {
            (_, ValueSign::Zero) => self.includes_equality(),
            (Self::Gt | Self::Ge, ValueSign::Positive) | (Self::Lt | Self::Le, ValueSign::Negative) => {
                true
            }
            _ => false,
        }
    }

    /// Returns true if `lhs ⋈ rhs` holds within tolerance.
    #[must_use]
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        self.accepts(ValueSign::of(lhs - rhs))
    }

    /// Relation obtained by multiplying both sides by a negative number.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Eq => Self::Eq,
            Self::Lt => Self::Gt,
            Self::Gt => Self::Lt,
            Self::Le => Self::Ge,
            Self::Ge => Self::Le,
        }
    }
}

/// An algebraic expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", content = "args", rename_all = "snake_case")]
pub enum Expr {
    Num(f64),
    /// A named quantity: a variable (`x`), a parameter (`a`), or a symbol (`Δ`).
    Var(String),
    Neg(Box<Expr>),
    Add(Vec<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Vec<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, u32),
    Sqrt(Box<Expr>),
    /// `lhs ± rhs`.
    PlusMinus(Box<Expr>, Box<Expr>),
    /// Explicit parentheses.
    Group(Box<Expr>),
    /// Function application such as `P(2)`.
    Call(String, Vec<Expr>),
    Rel(Relation, Box<Expr>, Box<Expr>),
    Root(Root),
    /// Several expressions listed together, e.g. the two roots of a quadratic.
    List(Vec<Expr>),
    /// An ordered pair or triple.
    Tuple(Vec<Expr>),
    Matrix(Vec<Vec<Expr>>),
    /// Interval with optional closed ends; infinite ends are always open.
    Interval {
        start: f64,
        end: f64,
        start_closed: bool,
        end_closed: bool,
    },
    Union(Vec<Expr>),
    /// The empty set.
    Empty,
}

impl Expr {
    #[must_use]
    pub fn num(value: f64) -> Self {
        Self::Num(value)
    }

    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    #[must_use]
    pub fn neg(expr: Expr) -> Self {
        Self::Neg(Box::new(expr))
    }

    #[must_use]
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::Sub(Box::new(lhs), Box::new(rhs))
    }

    #[must_use]
    pub fn div(num: Expr, den: Expr) -> Self {
        Self::Div(Box::new(num), Box::new(den))
    }

    #[must_use]
    pub fn pow(base: Expr, exp: u32) -> Self {
        Self::Pow(Box::new(base), exp)
    }

    #[must_use]
    pub fn sqrt(inner: Expr) -> Self {
        Self::Sqrt(Box::new(inner))
    }

    #[must_use]
    pub fn plus_minus(lhs: Expr, rhs: Expr) -> Self {
        Self::PlusMinus(Box::new(lhs), Box::new(rhs))
    }

    #[must_use]
    pub fn group(inner: Expr) -> Self {
        Self::Group(Box::new(inner))
    }

    #[must_use]
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call(name.into(), args)
    }

    #[must_use]
    pub fn rel(relation: Relation, lhs: Expr, rhs: Expr) -> Self {
        Self::Rel(relation, Box::new(lhs), Box::new(rhs))
    }

    #[must_use]
    pub fn eq(lhs: Expr, rhs: Expr) -> Self {
        Self::rel(Relation::Eq, lhs, rhs)
    }

    /// `name = value`.
    #[must_use]
    pub fn assign(name: &str, value: f64) -> Self {
        Self::eq(Self::var(name), Self::num(value))
    }

    /// A single term `coeff·var^power`, with a unit coefficient left implicit.
    #[must_use]
    pub fn term(coeff: f64, var: &str, power: u32) -> Self {
        Self::power_term(coeff, Self::var(var), power)
    }

    /// `coeff·base^power`, with a unit coefficient left implicit.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn power_term(coeff: f64, base: Expr, power: u32) -> Self {
        let base = match power {
            0 => return Self::Num(coeff),
            1 => base,
            _ => Self::pow(base, power),
        };
        if coeff == 1.0 {
            base
        } else if coeff == -1.0 {
            Self::neg(base)
        } else {
            Self::Mul(vec![Self::Num(coeff), base])
        }
    }

    /// The polynomial with its variable replaced by `(at)`, as written when
    /// substituting a value: `2(3)² - 5(3) + 1`.
    #[must_use]
    pub fn substituted(coeffs: &[f64], at: &Expr) -> Self {
        let n = coeffs.len().saturating_sub(1);
        Self::sum(
            coeffs
                .iter()
                .enumerate()
                .filter(|&(_, &c)| !is_zero(c))
                .map(|(i, &c)| Self::power_term(c, Self::group(at.clone()), (n - i) as u32))
                .collect(),
        )
    }

    /// Polynomial from coefficients ordered leading term first.
    ///
    /// Zero coefficients are skipped; the zero polynomial is `0`.
    #[must_use]
    pub fn polynomial(coeffs: &[f64], var: &str) -> Self {
        let n = coeffs.len().saturating_sub(1);
        let terms: Vec<Expr> = coeffs
            .iter()
            .enumerate()
            .filter(|&(_, &c)| !is_zero(c))
            .map(|(i, &c)| Self::term(c, var, (n - i) as u32))
            .collect();
        Self::sum(terms)
    }

    /// Linear combination `Σ coeff·var`, skipping zero coefficients.
    #[must_use]
    pub fn linear(terms: &[(f64, &str)]) -> Self {
        Self::sum(
            terms
                .iter()
                .filter(|&&(c, _)| !is_zero(c))
                .map(|&(c, var)| Self::term(c, var, 1))
                .collect(),
        )
    }

    /// Sum of terms, collapsing the empty and single-term cases.
    #[must_use]
    pub fn sum(mut terms: Vec<Expr>) -> Self {
        match terms.len() {
            0 => Self::Num(0.0),
            1 => terms.remove(0),
            _ => Self::Add(terms),
        }
    }

    /// Product of factors, collapsing the single-factor case.
    #[must_use]
    pub fn product(mut factors: Vec<Expr>) -> Self {
        match factors.len() {
            0 => Self::Num(1.0),
            1 => factors.remove(0),
            _ => Self::Mul(factors),
        }
    }

    /// Binomial factor `(p·var + q)`.
    #[must_use]
    pub fn binomial(p: f64, q: f64, var: &str) -> Self {
        Self::group(Self::polynomial(&[p, q], var))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_skips_zero_terms() {
        let expr = Expr::polynomial(&[1.0, 0.0, -4.0], "x");
        assert_eq!(
            expr,
            Expr::Add(vec![Expr::pow(Expr::var("x"), 2), Expr::Num(-4.0)])
        );
        assert_eq!(Expr::polynomial(&[0.0, 0.0], "x"), Expr::Num(0.0));
    }

    #[test]
    fn unit_coefficients_are_implicit() {
        assert_eq!(Expr::term(-1.0, "y", 1), Expr::neg(Expr::var("y")));
        assert_eq!(
            Expr::term(3.0, "x", 2),
            Expr::Mul(vec![Expr::Num(3.0), Expr::pow(Expr::var("x"), 2)])
        );
    }

    #[test]
    fn substitution_wraps_value_in_parentheses() {
        let expr = Expr::substituted(&[2.0, 0.0, -1.0], &Expr::num(3.0));
        assert_eq!(
            expr,
            Expr::Add(vec![
                Expr::Mul(vec![
                    Expr::Num(2.0),
                    Expr::pow(Expr::group(Expr::num(3.0)), 2)
                ]),
                Expr::Num(-1.0),
            ])
        );
    }

    #[test]
    fn relation_acceptance() {
        assert!(Relation::Gt.accepts(ValueSign::Positive));
        assert!(!Relation::Gt.accepts(ValueSign::Zero));
        assert!(Relation::Ge.accepts(ValueSign::Zero));
        assert!(Relation::Le.accepts(ValueSign::Negative));
        assert!(!Relation::Eq.accepts(ValueSign::Negative));
        assert!(Relation::Lt.holds(1.0, 2.0));
        assert_eq!(Relation::Le.flipped(), Relation::Ge);
    }
}
