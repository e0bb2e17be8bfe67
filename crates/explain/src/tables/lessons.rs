use stepwise_core::ProblemType;

/// Background for one problem type.
#[derive(Debug)]
pub struct Lesson {
    /// Display name of the problem type.
    pub name: &'static str,
    pub category: &'static str,
    /// The method the solver uses.
    pub method: &'static str,
    pub title: &'static str,
    pub theory: &'static str,
    pub concepts: &'static [&'static str],
    /// `(name, formula)` pairs.
    pub formulas: &'static [(&'static str, &'static str)],
}

/// Notes for whoever teaches the problem type.
#[derive(Debug)]
pub struct TeachingNotes {
    pub objectives: &'static [&'static str],
    pub prerequisites: &'static [&'static str],
    pub difficulties: &'static [&'static str],
    pub time_estimate: &'static str,
}

/// Another route to the same answer.
#[derive(Debug)]
pub struct Alternative {
    pub name: &'static str,
    pub description: &'static str,
    pub when_to_use: &'static str,
}

const POLYNOMIAL: &str = "Polynomial";
const SYSTEM: &str = "Linear System";

#[must_use]
pub fn lesson(problem_type: ProblemType) -> &'static Lesson {
    use ProblemType as P;
    match problem_type {
        P::QuadraticStandard => &QUADRATIC_STANDARD,
        P::QuadraticFactoring => &QUADRATIC_FACTORING,
        P::CompletingSquare => &COMPLETING_SQUARE,
        P::CubicEquation => &CUBIC,
        P::QuarticEquation => &QUARTIC,
        P::PolynomialDivision => &DIVISION,
        P::SyntheticDivision => &SYNTHETIC,
        P::RationalRoot => &RATIONAL_ROOT,
        P::PolynomialFactoring => &FACTORING,
        P::PolynomialRoots => &ALL_ROOTS,
        P::PolynomialInequality => &INEQUALITY,
        P::PolynomialGraphing => &GRAPHING,
        P::RemainderTheorem => &REMAINDER,
        P::PolynomialApplications => &APPLICATIONS,
        P::System2x2Substitution => &SUBSTITUTION,
        P::System2x2Elimination => &ELIMINATION,
        P::System2x2Graphical => &GRAPHICAL,
        P::System2x2Matrix => &MATRIX,
        P::System3x3 => &THREE_BY_THREE,
        P::SystemWordProblem => &WORD_PROBLEM,
        P::SystemInequalities => &INEQUALITY_SYSTEM,
        P::SystemNonlinear => &NONLINEAR,
    }
}

#[must_use]
pub fn notes(problem_type: ProblemType) -> &'static TeachingNotes {
    use ProblemType as P;
    match problem_type {
        P::QuadraticStandard | P::QuadraticFactoring | P::CompletingSquare => &QUADRATIC_NOTES,
        P::CubicEquation | P::QuarticEquation | P::RationalRoot | P::PolynomialRoots => {
            &HIGHER_DEGREE_NOTES
        }
        P::PolynomialDivision | P::SyntheticDivision | P::RemainderTheorem => &DIVISION_NOTES,
        P::PolynomialFactoring => &FACTORING_NOTES,
        P::PolynomialInequality => &INEQUALITY_NOTES,
        P::PolynomialGraphing => &GRAPHING_NOTES,
        P::PolynomialApplications => &APPLICATION_NOTES,
        P::System2x2Substitution
        | P::System2x2Elimination
        | P::System2x2Graphical
        | P::System2x2Matrix
        | P::SystemWordProblem => &TWO_BY_TWO_NOTES,
        P::System3x3 => &THREE_BY_THREE_NOTES,
        P::SystemInequalities => &INEQUALITY_SYSTEM_NOTES,
        P::SystemNonlinear => &NONLINEAR_NOTES,
    }
}

#[must_use]
pub fn alternatives(problem_type: ProblemType) -> &'static [Alternative] {
    use ProblemType as P;
    match problem_type {
        P::QuadraticStandard => &[FACTOR_QUADRATIC, COMPLETE_THE_SQUARE, GRAPH_INTERCEPTS],
        P::QuadraticFactoring => &[QUADRATIC_FORMULA, COMPLETE_THE_SQUARE],
        P::CompletingSquare => &[QUADRATIC_FORMULA, FACTOR_QUADRATIC],
        P::CubicEquation | P::QuarticEquation | P::PolynomialRoots => {
            &[CARDANO, NUMERICAL, GRAPH_INTERCEPTS]
        }
        P::PolynomialDivision => &[SYNTHETIC_DIVISION, FACTOR_FIRST],
        P::SyntheticDivision => &[LONG_DIVISION, REMAINDER_EVALUATION],
        P::RationalRoot | P::PolynomialFactoring => &[GRAPH_INTERCEPTS, NUMERICAL],
        P::PolynomialInequality => &[GRAPH_INTERCEPTS, SIGN_CHART],
        P::PolynomialGraphing => &[TABLE_OF_VALUES],
        P::RemainderTheorem => &[SYNTHETIC_DIVISION, LONG_DIVISION],
        P::PolynomialApplications => &[GRAPH_INTERCEPTS, NUMERICAL],
        P::System2x2Substitution => &[ELIMINATE, CRAMER, GRAPH_LINES],
        P::System2x2Elimination => &[SUBSTITUTE, CRAMER, GRAPH_LINES],
        P::System2x2Graphical => &[ELIMINATE, SUBSTITUTE, CRAMER],
        P::System2x2Matrix => &[ELIMINATE, SUBSTITUTE, INVERSE_MATRIX],
        P::System3x3 => &[CRAMER, INVERSE_MATRIX],
        P::SystemWordProblem => &[SUBSTITUTE, GRAPH_LINES],
        P::SystemInequalities => &[GRAPH_LINES],
        P::SystemNonlinear => &[GRAPH_LINES, SUBSTITUTE],
    }
}

const QUADRATIC_STANDARD: Lesson = Lesson {
    name: "Quadratic Equation (Standard Form)",
    category: POLYNOMIAL,
    method: "Quadratic Formula",
    title: "Quadratic Equations - Standard Form",
    theory: "Quadratic equations represent parabolic relationships. The coefficient a sets the parabola's direction and width, b shifts the axis of symmetry, and c is the y-intercept.",
    concepts: &[
        "General form: ax² + bx + c = 0 where a ≠ 0",
        "Can have 0, 1, or 2 real solutions",
        "The discriminant determines the nature of the roots",
    ],
    formulas: &[
        ("Quadratic Formula", "x = (-b ± √(b² - 4ac))/(2a)"),
        ("Discriminant", "Δ = b² - 4ac"),
        ("Vertex Form", "a(x - h)² + k"),
    ],
};

const QUADRATIC_FACTORING: Lesson = Lesson {
    name: "Quadratic Equation by Factoring",
    category: POLYNOMIAL,
    method: "Factoring with the Zero Product Property",
    title: "Solving Quadratics by Factoring",
    theory: "Factoring transforms ax² + bx + c into (mx + p)(nx + q) = 0, allowing the Zero Product Property: if AB = 0, then A = 0 or B = 0.",
    concepts: &[
        "Factor the quadratic into two binomials",
        "Most efficient when the factors are integers",
        "Not all quadratics are factorable over the integers",
    ],
    formulas: &[
        ("Factored Form", "(mx + p)(nx + q) = 0"),
        ("Sum-Product Pattern", "m·n = ac and m + n = b"),
    ],
};

const COMPLETING_SQUARE: Lesson = Lesson {
    name: "Completing the Square",
    category: POLYNOMIAL,
    method: "Completing the Square",
    title: "Completing the Square",
    theory: "Completing the square rewrites ax² + bx + c as a(x - h)² + k, making the vertex (h, k) visible and reducing the equation to a square root.",
    concepts: &[
        "Transform to a perfect square trinomial",
        "Reveals the vertex form of the parabola",
        "Works for every quadratic",
    ],
    formulas: &[
        ("Perfect Square", "(x + p)² = x² + 2px + p²"),
        ("Completing Term", "(b/2a)²"),
    ],
};

const CUBIC: Lesson = Lesson {
    name: "Cubic Equation",
    category: POLYNOMIAL,
    method: "Rational Root Theorem with synthetic division",
    title: "Cubic Equations",
    theory: "Every cubic has at least one real root. Finding one rational root reduces the cubic to a quadratic, which the quadratic formula finishes.",
    concepts: &[
        "A cubic has three roots counted with multiplicity",
        "At least one root is real",
        "A known root lowers the degree by one",
    ],
    formulas: &[
        ("Standard Form", "ax³ + bx² + cx + d = 0"),
        ("Rational Roots", "±(divisors of d)/(divisors of a)"),
    ],
};

const QUARTIC: Lesson = Lesson {
    name: "Quartic Equation",
    category: POLYNOMIAL,
    method: "Biquadratic substitution or rational roots",
    title: "Quartic Equations",
    theory: "A quartic with only even powers is a quadratic in x². Otherwise rational roots reduce it toward a quadratic; a factor without rational roots may remain.",
    concepts: &[
        "Four roots counted with multiplicity",
        "Even quartics reduce with u = x²",
        "Rational roots lower the degree",
    ],
    formulas: &[
        ("Biquadratic Form", "ax⁴ + cx² + e = 0"),
        ("Substitution", "u = x²"),
    ],
};

const DIVISION: Lesson = Lesson {
    name: "Polynomial Long Division",
    category: POLYNOMIAL,
    method: "Long division",
    title: "Polynomial Long Division",
    theory: "Dividing polynomials works like dividing numbers: divide leading terms, multiply, subtract, and repeat until the remainder has lower degree than the divisor.",
    concepts: &[
        "Division Algorithm: P = D·Q + R",
        "The remainder has lower degree than the divisor",
        "Placeholder zeros keep columns aligned",
    ],
    formulas: &[("Division Algorithm", "P(x) = D(x)·Q(x) + R(x)")],
};

const SYNTHETIC: Lesson = Lesson {
    name: "Synthetic Division",
    category: POLYNOMIAL,
    method: "Synthetic division",
    title: "Synthetic Division",
    theory: "Synthetic division divides by a linear factor (x - c) using only coefficients. Its running sums evaluate the polynomial at c.",
    concepts: &[
        "Works only for linear divisors x - c",
        "The last sum is the remainder, P(c)",
        "The quotient is one degree lower",
    ],
    formulas: &[("Remainder", "R = P(c)")],
};

const RATIONAL_ROOT: Lesson = Lesson {
    name: "Rational Root Theorem",
    category: POLYNOMIAL,
    method: "Rational Root Theorem",
    title: "Finding Rational Roots",
    theory: "Any rational root p/q of an integer polynomial has p dividing the constant term and q dividing the leading coefficient, so a finite list of candidates covers every rational root.",
    concepts: &[
        "Candidates are ±p/q",
        "Test candidates by evaluation or synthetic division",
        "Not every polynomial has rational roots",
    ],
    formulas: &[("Candidates", "±(factors of a₀)/(factors of aₙ)")],
};

const FACTORING: Lesson = Lesson {
    name: "Polynomial Factoring",
    category: POLYNOMIAL,
    method: "Rational roots and the Factor Theorem",
    title: "Factoring Polynomials",
    theory: "Each rational root r gives a linear factor (x - r). Dividing out every such factor leaves a part with no rational roots.",
    concepts: &[
        "Factor Theorem: P(r) = 0 ⟺ (x - r) is a factor",
        "Repeated roots give repeated factors",
        "An irreducible part may remain",
    ],
    formulas: &[("Factored Form", "a(x - r₁)(x - r₂)…R(x)")],
};

const ALL_ROOTS: Lesson = Lesson {
    name: "Finding All Roots",
    category: POLYNOMIAL,
    method: "Rational roots, quadratic formula, and numerical search",
    title: "Finding Every Root of a Polynomial",
    theory: "Rational roots are divided out first. A remaining quadratic is solved exactly; otherwise real roots are located numerically by sign changes.",
    concepts: &[
        "Fundamental Theorem of Algebra: degree n gives n roots",
        "Deflation lowers the degree",
        "Numerical methods find roots no formula reaches",
    ],
    formulas: &[("Root Count", "n roots with multiplicity for degree n")],
};

const INEQUALITY: Lesson = Lesson {
    name: "Polynomial Inequality",
    category: POLYNOMIAL,
    method: "Sign analysis",
    title: "Polynomial Inequalities",
    theory: "A polynomial changes sign only at its zeros. Testing one point per interval between zeros determines where the inequality holds.",
    concepts: &[
        "Critical points split the number line",
        "Sign is constant on each interval",
        "Endpoints are included only for ≤ or ≥",
    ],
    formulas: &[("Sign Chart", "test P(t) for one t per interval")],
};

const GRAPHING: Lesson = Lesson {
    name: "Polynomial Graphing",
    category: POLYNOMIAL,
    method: "Graph analysis",
    title: "Graphing Polynomials",
    theory: "End behavior, intercepts, and turning points are enough to sketch the graph of a polynomial.",
    concepts: &[
        "End behavior from degree and leading coefficient",
        "Zeros are x-intercepts",
        "At most n - 1 turning points",
    ],
    formulas: &[("y-intercept", "P(0) = a₀")],
};

const REMAINDER: Lesson = Lesson {
    name: "Remainder Theorem",
    category: POLYNOMIAL,
    method: "Remainder and Factor Theorems",
    title: "The Remainder and Factor Theorems",
    theory: "The remainder of dividing P(x) by (x - c) equals P(c); when it is zero, (x - c) is a factor.",
    concepts: &[
        "Remainder Theorem: R = P(c)",
        "Factor Theorem: P(c) = 0 ⟺ (x - c) | P(x)",
    ],
    formulas: &[("Remainder Theorem", "P(x) = (x - c)Q(x) + P(c)")],
};

const APPLICATIONS: Lesson = Lesson {
    name: "Polynomial Application",
    category: POLYNOMIAL,
    method: "Modeling with polynomial roots",
    title: "Polynomial Models",
    theory: "Real situations such as projectile height, area, or revenue lead to polynomial equations; only roots that make sense in context answer the question.",
    concepts: &[
        "Translate the situation into a polynomial",
        "Solve for every root",
        "Keep only meaningful roots",
    ],
    formulas: &[("Projectile Height", "h(t) = -16t² + v₀t + h₀")],
};

const SUBSTITUTION: Lesson = Lesson {
    name: "2×2 System by Substitution",
    category: SYSTEM,
    method: "Substitution",
    title: "Solving Systems by Substitution",
    theory: "Solving one equation for one variable and substituting into the other leaves a single equation in one unknown.",
    concepts: &[
        "Isolate the variable with the simplest coefficient",
        "Substitute into the other equation",
        "Back-substitute for the second variable",
    ],
    formulas: &[("Isolated Form", "y = (c - ax)/b")],
};

const ELIMINATION: Lesson = Lesson {
    name: "2×2 System by Elimination",
    category: SYSTEM,
    method: "Elimination",
    title: "Solving Systems by Elimination",
    theory: "Scaling the equations so one variable has opposite coefficients and adding them eliminates that variable.",
    concepts: &[
        "Scaling an equation preserves its solutions",
        "Adding equations preserves common solutions",
        "Back-substitute for the eliminated variable",
    ],
    formulas: &[("Combination", "m₁E₁ + m₂E₂")],
};

const GRAPHICAL: Lesson = Lesson {
    name: "2×2 System by Graphing",
    category: SYSTEM,
    method: "Graphing",
    title: "Solving Systems by Graphing",
    theory: "Each equation is a line; the solution is where the lines cross. Parallel lines never cross and coincident lines share every point.",
    concepts: &[
        "Slope-intercept form y = mx + b",
        "Different slopes give exactly one intersection",
        "Equal slopes give no solution or infinitely many",
    ],
    formulas: &[("Slope-Intercept Form", "y = mx + b")],
};

const MATRIX: Lesson = Lesson {
    name: "2×2 System by Cramer's Rule",
    category: SYSTEM,
    method: "Cramer's Rule",
    title: "Cramer's Rule",
    theory: "Each unknown equals a ratio of determinants: the denominator is the coefficient determinant and the numerator replaces one column with the constants.",
    concepts: &[
        "D ≠ 0 gives a unique solution",
        "Dx and Dy replace one column each",
    ],
    formulas: &[
        ("Determinant", "D = a₁b₂ - a₂b₁"),
        ("Cramer's Rule", "x = Dx/D, y = Dy/D"),
    ],
};

const THREE_BY_THREE: Lesson = Lesson {
    name: "3×3 Linear System",
    category: SYSTEM,
    method: "Gaussian elimination (LU decomposition)",
    title: "Three Equations in Three Unknowns",
    theory: "Row operations reduce the system to upper-triangular form, after which back substitution gives z, then y, then x.",
    concepts: &[
        "Each equation is a plane in space",
        "Partial pivoting keeps the arithmetic stable",
        "A zero determinant means no unique solution",
    ],
    formulas: &[("Factorization", "P·A = L·U")],
};

const WORD_PROBLEM: Lesson = Lesson {
    name: "System Word Problem",
    category: SYSTEM,
    method: "Elimination",
    title: "Word Problems with Two Unknowns",
    theory: "Naming the two unknowns and translating each fact into an equation turns a word problem into a 2×2 system.",
    concepts: &[
        "Define each variable with its meaning",
        "One equation per independent fact",
        "Check the answer against the story",
    ],
    formulas: &[("Typical Form", "x + y = total, px + qy = value")],
};

const INEQUALITY_SYSTEM: Lesson = Lesson {
    name: "System of Linear Inequalities",
    category: SYSTEM,
    method: "Graphing the feasible region",
    title: "Systems of Linear Inequalities",
    theory: "Each inequality keeps a half-plane; the solution is the region common to all of them, with corners at boundary intersections.",
    concepts: &[
        "Boundary lines are solid for ≤ and ≥",
        "A test point decides the shaded side",
        "Vertices bound the feasible region",
    ],
    formulas: &[("Half-plane", "ax + by ≤ c")],
};

const NONLINEAR: Lesson = Lesson {
    name: "Nonlinear System",
    category: SYSTEM,
    method: "Substitution into a quadratic",
    title: "A Line and a Parabola",
    theory: "Substituting the line into the parabola gives a quadratic whose discriminant counts the intersection points.",
    concepts: &[
        "Zero, one, or two intersections",
        "The reduced quadratic's discriminant decides which",
    ],
    formulas: &[("Parabola", "y = ax² + bx + c")],
};

const QUADRATIC_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Solve quadratic equations by an appropriate method",
        "Understand the discriminant and root types",
        "Verify solutions through substitution",
    ],
    prerequisites: &[
        "Simplifying radicals",
        "Order of operations",
        "Complex numbers (for complex roots)",
    ],
    difficulties: &[
        "Sign errors in the -b term",
        "Forgetting the ± symbol",
        "Division errors with 2a",
    ],
    time_estimate: "15-20 minutes",
};

const HIGHER_DEGREE_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Apply the Rational Root Theorem",
        "Use synthetic division to reduce degree",
        "Recognize when numerical methods are needed",
    ],
    prerequisites: &["Synthetic division", "The quadratic formula", "Factors of integers"],
    difficulties: &[
        "Missing negative candidates",
        "Stopping after the first root",
    ],
    time_estimate: "25-30 minutes",
};

const DIVISION_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Divide polynomials by long and synthetic division",
        "Connect remainders to function values",
    ],
    prerequisites: &["Integer long division", "Combining like terms"],
    difficulties: &[
        "Missing placeholder zeros",
        "Sign errors in subtraction",
    ],
    time_estimate: "15-20 minutes",
};

const FACTORING_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Factor polynomials using their rational roots",
        "Identify irreducible factors",
    ],
    prerequisites: &["Rational Root Theorem", "Synthetic division"],
    difficulties: &["Losing the leading coefficient", "Mishandling repeated roots"],
    time_estimate: "20-25 minutes",
};

const INEQUALITY_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Solve polynomial inequalities with a sign chart",
        "Write solutions in interval notation",
    ],
    prerequisites: &["Finding zeros", "Interval notation"],
    difficulties: &[
        "Including endpoints for strict inequalities",
        "Test points on the critical values",
    ],
    time_estimate: "20-25 minutes",
};

const GRAPHING_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Sketch a polynomial from its key features",
        "Relate degree and leading coefficient to end behavior",
    ],
    prerequisites: &["Finding zeros", "Evaluating polynomials"],
    difficulties: &["Confusing end behavior for odd and even degrees"],
    time_estimate: "20-30 minutes",
};

const APPLICATION_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Model situations with polynomial equations",
        "Interpret roots in context",
    ],
    prerequisites: &["Solving polynomial equations", "Units of measure"],
    difficulties: &["Keeping roots that make no physical sense"],
    time_estimate: "25-30 minutes",
};

const TWO_BY_TWO_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Solve two linear equations in two unknowns",
        "Recognize inconsistent and dependent systems",
        "Choose an efficient method for a given system",
    ],
    prerequisites: &["Solving linear equations", "Graphing lines"],
    difficulties: &[
        "Sign errors when scaling equations",
        "Substituting back into the same equation",
    ],
    time_estimate: "15-20 minutes",
};

const THREE_BY_THREE_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Solve three linear equations in three unknowns",
        "Use row operations systematically",
    ],
    prerequisites: &["2×2 systems", "Row operations"],
    difficulties: &["Arithmetic drift across many row operations"],
    time_estimate: "25-35 minutes",
};

const INEQUALITY_SYSTEM_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Graph systems of linear inequalities",
        "Find the vertices of a feasible region",
    ],
    prerequisites: &["Graphing lines", "Solving 2×2 systems"],
    difficulties: &["Shading the wrong side of a boundary"],
    time_estimate: "20-25 minutes",
};

const NONLINEAR_NOTES: TeachingNotes = TeachingNotes {
    objectives: &[
        "Solve a line-parabola system by substitution",
        "Count intersections with the discriminant",
    ],
    prerequisites: &["Quadratic formula", "Substitution method"],
    difficulties: &["Forgetting to find y for each x"],
    time_estimate: "20-25 minutes",
};

const QUADRATIC_FORMULA: Alternative = Alternative {
    name: "Quadratic Formula",
    description: "x = (-b ± √(b² - 4ac))/(2a)",
    when_to_use: "Always works, including for irrational and complex roots",
};

const FACTOR_QUADRATIC: Alternative = Alternative {
    name: "Factoring",
    description: "Factor into (px + q)(rx + s) = 0 if possible",
    when_to_use: "When the coefficients produce integer factors",
};

const COMPLETE_THE_SQUARE: Alternative = Alternative {
    name: "Completing the Square",
    description: "Transform to vertex form a(x - h)² + k",
    when_to_use: "When the vertex is needed or to derive the formula",
};

const GRAPH_INTERCEPTS: Alternative = Alternative {
    name: "Graphical Method",
    description: "Graph y = P(x) and read the x-intercepts",
    when_to_use: "For visual understanding or approximation",
};

const CARDANO: Alternative = Alternative {
    name: "Cardano's Formula",
    description: "Closed-form solution for cubic equations",
    when_to_use: "For general cubics without rational roots",
};

const NUMERICAL: Alternative = Alternative {
    name: "Numerical Methods",
    description: "Bisection or Newton's method",
    when_to_use: "When exact methods do not apply",
};

const SYNTHETIC_DIVISION: Alternative = Alternative {
    name: "Synthetic Division",
    description: "Divide using coefficients only",
    when_to_use: "When the divisor is linear, x - c",
};

const LONG_DIVISION: Alternative = Alternative {
    name: "Long Division",
    description: "Divide, multiply, subtract, bring down",
    when_to_use: "For divisors of any degree",
};

const FACTOR_FIRST: Alternative = Alternative {
    name: "Factor and Cancel",
    description: "Factor both polynomials and cancel common factors",
    when_to_use: "When the divisor is a known factor",
};

const REMAINDER_EVALUATION: Alternative = Alternative {
    name: "Direct Evaluation",
    description: "Compute P(c) to get the remainder",
    when_to_use: "When only the remainder is needed",
};

const SIGN_CHART: Alternative = Alternative {
    name: "Sign Chart from Factors",
    description: "Track the sign of each factor across the critical points",
    when_to_use: "When the polynomial is already factored",
};

const TABLE_OF_VALUES: Alternative = Alternative {
    name: "Table of Values",
    description: "Evaluate at many points and plot",
    when_to_use: "For a quick sketch without analysis",
};

const SUBSTITUTE: Alternative = Alternative {
    name: "Substitution",
    description: "Solve one equation for a variable and substitute",
    when_to_use: "When a variable has coefficient 1 or -1",
};

const ELIMINATE: Alternative = Alternative {
    name: "Elimination",
    description: "Scale and add equations to cancel a variable",
    when_to_use: "When coefficients line up or share factors",
};

const CRAMER: Alternative = Alternative {
    name: "Cramer's Rule",
    description: "Ratios of determinants",
    when_to_use: "For a direct formula when D ≠ 0",
};

const GRAPH_LINES: Alternative = Alternative {
    name: "Graphing",
    description: "Draw each equation and find the crossing",
    when_to_use: "For a visual check or estimate",
};

const INVERSE_MATRIX: Alternative = Alternative {
    name: "Inverse Matrix",
    description: "v = A⁻¹c",
    when_to_use: "When solving many systems with the same coefficients",
};
