use stepwise_core::{
    Error, InequalitySolution, IntervalTest, Relation, SolutionInterval,
    interval::{ValueSign, partition},
    poly::evaluate,
    tolerance::{approx_eq, snap},
    zeros::real_zeros,
};

use super::checked_coefficients;

/// Solves `P(x) ⋈ 0` by testing the sign of `P` on each interval between
/// consecutive real zeros.
///
/// An endpoint is closed only when the relation includes equality and the
/// endpoint is a zero; infinite ends are always open. Touching pieces with
/// closed ends are merged, and zeros not covered by any piece are added as
/// single points for `≤`, `≥`, and `=`.
///
/// # Errors
///
/// Returns an error if the coefficients are empty, non-finite, or outside
/// degree `1..=4`.
pub fn solve(coefficients: &[f64], relation: Relation) -> Result<InequalitySolution, Error> {
    let coefficients = checked_coefficients(coefficients, 1)?;
    let zeros = real_zeros(&coefficients);

    let tests: Vec<IntervalTest> = partition(&zeros)
        .into_iter()
        .map(|interval| {
            let test_point = interval.test_point();
            let value = snap(evaluate(&coefficients, test_point));
            let sign = ValueSign::of(value);
            IntervalTest {
                interval,
                test_point,
                value,
                sign,
                satisfies: relation.accepts(sign),
            }
        })
        .collect();

    let solution_set = solution_set(&tests, &zeros, relation);
    tracing::debug!(
        ?relation,
        zeros = zeros.len(),
        pieces = solution_set.len(),
        "polynomial inequality solved"
    );

    Ok(InequalitySolution {
        coefficients,
        relation,
        zeros,
        tests,
        solution_set,
    })
}

fn solution_set(tests: &[IntervalTest], zeros: &[f64], relation: Relation) -> Vec<SolutionInterval> {
    let closed = relation.includes_equality();

    let mut pieces: Vec<SolutionInterval> = Vec::new();
    for test in tests.iter().filter(|t| t.satisfies) {
        let piece = SolutionInterval {
            start: test.interval.start,
            end: test.interval.end,
            start_closed: closed && test.interval.start.is_finite(),
            end_closed: closed && test.interval.end.is_finite(),
        };
        match pieces.last_mut() {
            Some(last) if last.end_closed && piece.start_closed && approx_eq(last.end, piece.start) => {
                last.end = piece.end;
                last.end_closed = piece.end_closed;
            }
            _ => pieces.push(piece),
        }
    }

    if closed {
        for &zero in zeros {
            let covered = pieces.iter().any(|p| {
                (p.start < zero && zero < p.end)
                    || (p.start_closed && approx_eq(p.start, zero))
                    || (p.end_closed && approx_eq(p.end, zero))
            });
            if !covered {
                pieces.push(SolutionInterval {
                    start: zero,
                    end: zero,
                    start_closed: true,
                    end_closed: true,
                });
            }
        }
        pieces.sort_by(|a, b| a.start.total_cmp(&b.start));
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(start: f64, end: f64) -> SolutionInterval {
        SolutionInterval {
            start,
            end,
            start_closed: false,
            end_closed: false,
        }
    }

    #[test]
    fn outside_the_roots() {
        let solution = solve(&[1.0, 0.0, -4.0], Relation::Gt).expect("should solve");
        assert_eq!(solution.zeros, vec![-2.0, 2.0]);
        assert_eq!(
            solution.solution_set,
            vec![open(f64::NEG_INFINITY, -2.0), open(2.0, f64::INFINITY)]
        );
        let satisfied: Vec<bool> = solution.tests.iter().map(|t| t.satisfies).collect();
        assert_eq!(satisfied, vec![true, false, true]);
    }

    #[test]
    fn between_the_roots_inclusive() {
        let solution = solve(&[1.0, 0.0, -4.0], Relation::Le).expect("should solve");
        assert_eq!(
            solution.solution_set,
            vec![SolutionInterval {
                start: -2.0,
                end: 2.0,
                start_closed: true,
                end_closed: true,
            }]
        );
    }

    #[test]
    fn touching_pieces_merge_for_non_strict() {
        // x² ≥ 0 holds everywhere
        let solution = solve(&[1.0, 0.0, 0.0], Relation::Ge).expect("should solve");
        assert_eq!(solution.solution_set, vec![open(f64::NEG_INFINITY, f64::INFINITY)]);
    }

    #[test]
    fn strict_excludes_double_root() {
        // x² > 0 everywhere except 0
        let solution = solve(&[1.0, 0.0, 0.0], Relation::Gt).expect("should solve");
        assert_eq!(
            solution.solution_set,
            vec![open(f64::NEG_INFINITY, 0.0), open(0.0, f64::INFINITY)]
        );
    }

    #[test]
    fn isolated_zero_for_non_strict() {
        // x² ≤ 0 only at 0
        let solution = solve(&[1.0, 0.0, 0.0], Relation::Le).expect("should solve");
        assert_eq!(solution.solution_set.len(), 1);
        assert!(solution.solution_set[0].is_point());
    }

    #[test]
    fn no_solution() {
        let solution = solve(&[1.0, 0.0, 1.0], Relation::Lt).expect("should solve");
        assert!(solution.solution_set.is_empty());
    }

    #[test]
    fn cubic_sign_pattern() {
        // (x + 1)x(x - 2) < 0 on (-∞, -1) ∪ (0, 2)
        let solution = solve(&[1.0, -1.0, -2.0, 0.0], Relation::Lt).expect("should solve");
        assert_eq!(
            solution.solution_set,
            vec![open(f64::NEG_INFINITY, -1.0), open(0.0, 2.0)]
        );
    }

    #[test]
    fn close_irrational_zeros_bound_a_narrow_piece() {
        // x² - 2x + 0.999999 dips below zero only on (0.999, 1.001)
        let solution = solve(&[1.0, -2.0, 0.999_999], Relation::Lt).expect("should solve");
        assert_eq!(solution.zeros.len(), 2);
        assert_eq!(solution.solution_set.len(), 1);
        let piece = solution.solution_set[0];
        assert!((piece.start - 0.999).abs() < 1e-9);
        assert!((piece.end - 1.001).abs() < 1e-9);
        assert!(!piece.start_closed && !piece.end_closed);
    }
}
