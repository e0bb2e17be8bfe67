use stepwise_core::{
    Error, InequalitySystemSolution, Line, LinearInequality, Point, Relation, SolutionType,
    linalg::determinant_2x2, tolerance::snap,
};

use super::finite;

/// Describes the feasible region of a system of linear inequalities.
///
/// Every pair of boundary lines that meets in a single point contributes an
/// intersection. An intersection is a vertex of the region when it satisfies
/// every inequality with strict relations relaxed to their closures, since a
/// corner of an open region still lies on its boundary.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] for an empty list and
/// [`Error::InvalidInput`] for non-finite coefficients.
pub fn solve(inequalities: &[LinearInequality]) -> Result<InequalitySystemSolution, Error> {
    if inequalities.is_empty() {
        return Err(Error::MissingParameter {
            name: "inequalities",
        });
    }
    let flat: Vec<f64> = inequalities.iter().flat_map(|i| [i.a, i.b, i.c]).collect();
    finite(&flat)?;

    let boundaries = inequalities.iter().map(|i| Line::of(&i.boundary())).collect();

    let mut intersections: Vec<Point> = Vec::new();
    for (n, first) in inequalities.iter().enumerate() {
        for second in &inequalities[n + 1..] {
            let Some(point) = intersection(first, second) else {
                continue;
            };
            if !intersections.iter().any(|p| same_point(*p, point)) {
                intersections.push(point);
            }
        }
    }

    let vertices = intersections
        .iter()
        .copied()
        .filter(|p| inequalities.iter().all(|i| in_closure(i, *p)))
        .collect();
    let origin_tests = inequalities.iter().map(|i| i.contains(0.0, 0.0)).collect();

    Ok(InequalitySystemSolution {
        inequalities: inequalities.to_vec(),
        boundaries,
        intersections,
        vertices,
        origin_tests,
    })
}

fn intersection(first: &LinearInequality, second: &LinearInequality) -> Option<Point> {
    let (e1, e2) = (first.boundary(), second.boundary());
    if SolutionType::classify(&e1, &e2) != SolutionType::Unique {
        return None;
    }
    let d = determinant_2x2(e1.a, e1.b, e2.a, e2.b);
    Some(Point::new(
        snap((e1.c * e2.b - e2.c * e1.b) / d),
        snap((e1.a * e2.c - e2.a * e1.c) / d),
    ))
}

fn in_closure(inequality: &LinearInequality, p: Point) -> bool {
    let relation = match inequality.relation {
        Relation::Lt => Relation::Le,
        Relation::Gt => Relation::Ge,
        other => other,
    };
    relation.holds(inequality.a * p.x + inequality.b * p.y, inequality.c)
}

fn same_point(p: Point, q: Point) -> bool {
    (p.x - q.x).abs() < 1e-9 && (p.y - q.y).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ineq(a: f64, b: f64, relation: Relation, c: f64) -> LinearInequality {
        LinearInequality::new(a, b, relation, c)
    }

    #[test]
    fn triangle_region() {
        // x ≥ 0, y ≥ 0, x + y ≤ 4
        let solution = solve(&[
            ineq(1.0, 0.0, Relation::Ge, 0.0),
            ineq(0.0, 1.0, Relation::Ge, 0.0),
            ineq(1.0, 1.0, Relation::Le, 4.0),
        ])
        .expect("should solve");

        assert_eq!(solution.intersections.len(), 3);
        assert_eq!(
            solution.vertices,
            vec![Point::new(0.0, 0.0), Point::new(0.0, 4.0), Point::new(4.0, 0.0)]
        );
        assert_eq!(solution.origin_tests, vec![true, true, true]);
        assert_eq!(solution.boundaries[0], Line::Vertical { x: 0.0 });
    }

    #[test]
    fn strict_inequalities_keep_corners() {
        // x + y < 4, x - y > 0: corner (2, 2) lies on both boundaries
        let solution = solve(&[
            ineq(1.0, 1.0, Relation::Lt, 4.0),
            ineq(1.0, -1.0, Relation::Gt, 0.0),
        ])
        .expect("should solve");
        assert_eq!(solution.vertices, vec![Point::new(2.0, 2.0)]);
        assert_eq!(solution.origin_tests, vec![true, false]);
    }

    #[test]
    fn infeasible_intersection_is_not_a_vertex() {
        // y ≥ x + 1 (−x + y ≥ 1), y ≤ 0, x ≥ 0
        let solution = solve(&[
            ineq(-1.0, 1.0, Relation::Ge, 1.0),
            ineq(0.0, 1.0, Relation::Le, 0.0),
            ineq(1.0, 0.0, Relation::Ge, 0.0),
        ])
        .expect("should solve");
        assert_eq!(solution.intersections.len(), 3);
        assert!(solution.vertices.is_empty());
    }

    #[test]
    fn parallel_boundaries_do_not_intersect() {
        let solution = solve(&[
            ineq(1.0, 1.0, Relation::Le, 4.0),
            ineq(1.0, 1.0, Relation::Ge, 1.0),
        ])
        .expect("should solve");
        assert!(solution.intersections.is_empty());
    }

    #[test]
    fn empty_system_is_missing() {
        assert!(matches!(
            solve(&[]),
            Err(Error::MissingParameter { .. })
        ));
    }
}
