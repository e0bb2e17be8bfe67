//! Text rendering of expressions and numbers.
//!
//! This is the only place numbers become strings. Numbers are shown with at
//! most four decimal places, near-integers as integers, and infinities as `∞`.

use stepwise_core::{Expr, Relation, Root, tolerance::snap};

/// Renders a number for display.
#[must_use]
pub fn number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let value = snap(value);
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_owned() } else { text.to_owned() }
}

/// Symbol for a relation.
#[must_use]
pub fn relation(relation: Relation) -> &'static str {
    match relation {
        Relation::Eq => "=",
        Relation::Lt => "<",
        Relation::Gt => ">",
        Relation::Le => "≤",
        Relation::Ge => "≥",
    }
}

/// Renders a root, writing complex roots as `a + bi`.
#[must_use]
pub fn root(root: &Root) -> String {
    match *root {
        Root::Real { value } => number(value),
        Root::Complex { re, im } => {
            let imaginary = match snap(im.abs()) {
                m if m == 1.0 => "i".to_owned(),
                m => format!("{}i", number(m)),
            };
            match (snap(re) == 0.0, im < 0.0) {
                (true, false) => imaginary,
                (true, true) => format!("-{imaginary}"),
                (false, false) => format!("{} + {imaginary}", number(re)),
                (false, true) => format!("{} - {imaginary}", number(re)),
            }
        }
    }
}

/// Renders an expression.
#[must_use]
pub fn expr(expr: &Expr) -> String {
    match expr {
        Expr::Num(value) => number(*value),
        Expr::Var(name) => name.clone(),
        Expr::Neg(inner) => format!("-{}", wrap_unless(inner, is_factor)),
        Expr::Add(terms) => sum(terms),
        Expr::Sub(lhs, rhs) => format!("{} - {}", self::expr(lhs), wrap_unless(rhs, is_term)),
        Expr::Mul(factors) => product(factors),
        Expr::Div(num, den) => {
            format!("{}/{}", wrap_unless(num, is_atom), wrap_unless(den, is_atom))
        }
        Expr::Pow(base, exp) => format!("{}{}", wrap_unless(base, is_atom), superscript(*exp)),
        Expr::Sqrt(inner) => format!("√{}", wrap_unless(inner, is_atom)),
        Expr::PlusMinus(lhs, rhs) => {
            format!("{} ± {}", self::expr(lhs), wrap_unless(rhs, is_term))
        }
        Expr::Group(inner) => format!("({})", self::expr(inner)),
        Expr::Call(name, args) => format!("{name}({})", list(args)),
        Expr::Rel(rel, lhs, rhs) => {
            format!("{} {} {}", self::expr(lhs), relation(*rel), self::expr(rhs))
        }
        Expr::Root(r) => root(r),
        Expr::List(items) => list(items),
        Expr::Tuple(items) => format!("({})", list(items)),
        Expr::Matrix(rows) => {
            let rows: Vec<String> = rows
                .iter()
                .map(|row| row.iter().map(self::expr).collect::<Vec<_>>().join(" "))
                .collect();
            format!("[{}]", rows.join("; "))
        }
        Expr::Interval {
            start,
            end,
            start_closed,
            end_closed,
        } => {
            if *start_closed && *end_closed && start == end {
                return format!("{{{}}}", number(*start));
            }
            let open = if *start_closed && start.is_finite() { '[' } else { '(' };
            let close = if *end_closed && end.is_finite() { ']' } else { ')' };
            format!("{open}{}, {}{close}", number(*start), number(*end))
        }
        Expr::Union(parts) => parts.iter().map(self::expr).collect::<Vec<_>>().join(" ∪ "),
        Expr::Empty => "∅".to_owned(),
    }
}

fn list(items: &[Expr]) -> String {
    items.iter().map(expr).collect::<Vec<_>>().join(", ")
}

fn sum(terms: &[Expr]) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        match (i, negated(term)) {
            (0, _) => out.push_str(&wrap_unless(term, is_term)),
            (_, Some(magnitude)) => {
                out.push_str(" - ");
                out.push_str(&wrap_unless(&magnitude, is_term));
            }
            (_, None) => {
                out.push_str(" + ");
                out.push_str(&wrap_unless(term, is_term));
            }
        }
    }
    out
}

/// Factors are written side by side when the result stays readable (`3x²`,
/// `4(2)(3)`), and joined with `·` otherwise.
fn product(factors: &[Expr]) -> String {
    let mut out = String::new();
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 && !juxtaposes(&factors[i - 1], factor) {
            out.push('·');
        }
        match factor {
            Expr::Num(v) if i == 0 => out.push_str(&number(*v)),
            _ => out.push_str(&wrap_unless(factor, is_factor)),
        }
    }
    out
}

fn juxtaposes(prev: &Expr, next: &Expr) -> bool {
    let leads_with_symbol = match next {
        Expr::Var(_) | Expr::Group(_) | Expr::Sqrt(_) | Expr::Call(..) => true,
        Expr::Pow(base, _) => matches!(**base, Expr::Var(_) | Expr::Group(_)),
        _ => false,
    };
    leads_with_symbol && !matches!(prev, Expr::Sqrt(_))
        || matches!((prev, next), (Expr::Group(_), Expr::Group(_)))
}

/// The magnitude of a term that reads as negative, for writing `a - b`
/// instead of `a + -b`.
fn negated(term: &Expr) -> Option<Expr> {
    match term {
        Expr::Num(v) if *v < 0.0 => Some(Expr::Num(-v)),
        Expr::Neg(inner) => Some((**inner).clone()),
        Expr::Mul(factors) => match factors.split_first() {
            Some((Expr::Num(v), rest)) if *v < 0.0 => {
                let magnitude = -v;
                let mut rest = rest.to_vec();
                if magnitude != 1.0 || rest.is_empty() {
                    rest.insert(0, Expr::Num(magnitude));
                }
                Some(Expr::product(rest))
            }
            _ => None,
        },
        Expr::Root(Root::Real { value }) if *value < 0.0 => Some(Expr::Num(-value)),
        _ => None,
    }
}

fn wrap_unless(expr: &Expr, keep: fn(&Expr) -> bool) -> String {
    if keep(expr) {
        self::expr(expr)
    } else {
        format!("({})", self::expr(expr))
    }
}

/// Expressions that never need parentheses.
fn is_atom(expr: &Expr) -> bool {
    match expr {
        Expr::Num(v) => *v >= 0.0 || !v.is_finite(),
        Expr::Root(Root::Real { value }) => *value >= 0.0,
        Expr::Var(_)
        | Expr::Group(_)
        | Expr::Call(..)
        | Expr::Pow(..)
        | Expr::Sqrt(_)
        | Expr::Tuple(_)
        | Expr::Matrix(_)
        | Expr::Interval { .. }
        | Expr::Empty => true,
        _ => false,
    }
}

/// Expressions that can appear as a factor of a product without parentheses.
fn is_factor(expr: &Expr) -> bool {
    is_atom(expr) || matches!(expr, Expr::Mul(_))
}

/// Expressions that can appear as a term of a sum without parentheses.
fn is_term(expr: &Expr) -> bool {
    !matches!(expr, Expr::Rel(..) | Expr::List(_) | Expr::Union(_))
}

fn superscript(exp: u32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    exp.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_keep_at_most_four_decimals() {
        assert_eq!(number(3.0), "3");
        assert_eq!(number(-2.000_000_000_01), "-2");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(1.0 / 3.0), "0.3333");
        assert_eq!(number(-0.000_01), "0");
        assert_eq!(number(f64::INFINITY), "∞");
        assert_eq!(number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn polynomials_read_naturally() {
        let poly = Expr::polynomial(&[2.0, -3.0, 1.0], "x");
        assert_eq!(expr(&poly), "2x² - 3x + 1");

        let poly = Expr::polynomial(&[-1.0, 0.0, 0.0, 4.0], "x");
        assert_eq!(expr(&poly), "-x³ + 4");

        let equation = Expr::eq(Expr::polynomial(&[1.0, 0.0, -4.0], "x"), Expr::num(0.0));
        assert_eq!(expr(&equation), "x² - 4 = 0");
    }

    #[test]
    fn quadratic_formula() {
        let formula = Expr::eq(
            Expr::var("x"),
            Expr::div(
                Expr::plus_minus(Expr::neg(Expr::var("b")), Expr::sqrt(Expr::var("Δ"))),
                Expr::Mul(vec![Expr::num(2.0), Expr::var("a")]),
            ),
        );
        assert_eq!(expr(&formula), "x = (-b ± √Δ)/(2a)");
    }

    #[test]
    fn substituted_values_are_parenthesized() {
        let discriminant = Expr::sub(
            Expr::pow(Expr::group(Expr::num(-3.0)), 2),
            Expr::Mul(vec![
                Expr::num(4.0),
                Expr::group(Expr::num(1.0)),
                Expr::group(Expr::num(2.0)),
            ]),
        );
        assert_eq!(expr(&discriminant), "(-3)² - 4(1)(2)");

        let value = Expr::substituted(&[1.0, -6.0, 11.0, -6.0], &Expr::num(2.0));
        assert_eq!(expr(&value), "(2)³ - 6(2)² + 11(2) - 6");
    }

    #[test]
    fn complex_roots() {
        assert_eq!(root(&Root::Complex { re: 1.0, im: 2.0 }), "1 + 2i");
        assert_eq!(root(&Root::Complex { re: 1.0, im: -0.5 }), "1 - 0.5i");
        assert_eq!(root(&Root::Complex { re: 0.0, im: -1.0 }), "-i");
    }

    #[test]
    fn intervals_and_unions() {
        let set = Expr::Union(vec![
            Expr::Interval {
                start: f64::NEG_INFINITY,
                end: -2.0,
                start_closed: false,
                end_closed: false,
            },
            Expr::Interval {
                start: 2.0,
                end: f64::INFINITY,
                start_closed: true,
                end_closed: true,
            },
        ]);
        assert_eq!(expr(&set), "(-∞, -2) ∪ [2, ∞)");
        assert_eq!(expr(&Expr::Empty), "∅");
    }

    #[test]
    fn relations_tuples_and_matrices() {
        let ineq = Expr::rel(Relation::Le, Expr::linear(&[(1.0, "x"), (-1.0, "y")]), Expr::num(4.0));
        assert_eq!(expr(&ineq), "x - y ≤ 4");

        let point = Expr::Tuple(vec![Expr::num(3.0), Expr::num(2.0)]);
        assert_eq!(expr(&point), "(3, 2)");

        let matrix = Expr::Matrix(vec![
            vec![Expr::num(1.0), Expr::num(2.0)],
            vec![Expr::num(3.0), Expr::num(4.0)],
        ]);
        assert_eq!(expr(&matrix), "[1 2; 3 4]");
    }
}
