use crate::step::Concept;

use super::ConceptText;

pub(super) fn text(concept: Concept) -> &'static ConceptText {
    use Concept as C;
    match concept {
        C::StandardForm => &STANDARD_FORM,
        C::Discriminant => &DISCRIMINANT,
        C::QuadraticFormula => &QUADRATIC_FORMULA,
        C::Solutions => &SOLUTIONS,
        C::FactorPairs => &FACTOR_PAIRS,
        C::FactoredForm => &FACTORED_FORM,
        C::ZeroProduct => &ZERO_PRODUCT,
        C::NotFactorable => &NOT_FACTORABLE,
        C::Normalize => &NORMALIZE,
        C::CompleteSquare => &COMPLETE_SQUARE,
        C::SquareRoot => &SQUARE_ROOT,
        C::Vertex => &VERTEX,
        C::RationalCandidates => &RATIONAL_CANDIDATES,
        C::TestCandidates => &TEST_CANDIDATES,
        C::Deflate => &DEFLATE,
        C::Biquadratic => &BIQUADRATIC,
        C::ReturnToX => &RETURN_TO_X,
        C::NumericalRoots => &NUMERICAL_ROOTS,
        C::DivisionSetup => &DIVISION_SETUP,
        C::LongDivision => &LONG_DIVISION,
        C::SyntheticTableau => &SYNTHETIC_TABLEAU,
        C::DivisionResult => &DIVISION_RESULT,
        C::CriticalPoints => &CRITICAL_POINTS,
        C::TestIntervals => &TEST_INTERVALS,
        C::SolutionSet => &SOLUTION_SET,
        C::EndBehavior => &END_BEHAVIOR,
        C::Intercepts => &INTERCEPTS,
        C::TurningPoints => &TURNING_POINTS,
        C::EvaluateRemainder => &EVALUATE_REMAINDER,
        C::FactorTheorem => &FACTOR_THEOREM,
        C::Factorization => &FACTORIZATION,
        C::Interpret => &INTERPRET,
        C::WriteSystem => &WRITE_SYSTEM,
        C::Isolate => &ISOLATE,
        C::Substitute => &SUBSTITUTE,
        C::SolveRemaining => &SOLVE_REMAINING,
        C::BackSubstitute => &BACK_SUBSTITUTE,
        C::Scale => &SCALE,
        C::Combine => &COMBINE,
        C::SlopeIntercept => &SLOPE_INTERCEPT,
        C::Intersection => &INTERSECTION,
        C::Determinants => &DETERMINANTS,
        C::CramerRule => &CRAMER_RULE,
        C::Degenerate => &DEGENERATE,
        C::Triangulate => &TRIANGULATE,
        C::Boundaries => &BOUNDARIES,
        C::Shading => &SHADING,
        C::Vertices => &VERTICES,
        C::ReduceToQuadratic => &REDUCE_TO_QUADRATIC,
        C::Verify => &VERIFY,
    }
}

// Polynomial family

const STANDARD_FORM: ConceptText = ConceptText {
    title: "Given equation",
    purpose: "write the problem in standard form so every coefficient can be read off",
    conceptual: "A polynomial equation asks where the graph of the polynomial crosses the x-axis.",
    procedural: "Collect every term on one side, order by decreasing power, and read the coefficients.",
    visual: "The graph of a quadratic is a parabola; a cubic has an S-shape.",
    algebraic: "Standard form is aₙxⁿ + … + a₁x + a₀ = 0 with aₙ ≠ 0.",
    mistakes: &[
        "Dropping the sign of a coefficient when moving terms",
        "Forgetting a zero placeholder for a missing power",
    ],
    self_check: "Is every term on one side, ordered by decreasing power?",
    questions: &[
        "What is the highest power of x?",
        "Which number multiplies each power of x?",
    ],
    hints: &[
        "Look at each term's exponent.",
        "A missing power has coefficient 0.",
    ],
};

const DISCRIMINANT: ConceptText = ConceptText {
    title: "Calculate discriminant",
    purpose: "learn how many roots to expect, and of what kind, before computing them",
    conceptual: "The discriminant is a decoder: its sign tells what kind of roots to expect before calculating them.",
    procedural: "Square b, compute 4ac separately, then subtract.",
    visual: "A positive discriminant means the parabola crosses the x-axis twice, zero means it touches once, negative means it misses.",
    algebraic: "Δ = b² - 4ac is the expression under the radical in the quadratic formula.",
    mistakes: &[
        "Forgetting to square b in b²",
        "Sign error in the -4ac term",
        "Incorrect order of operations",
    ],
    self_check: "Did I correctly compute b² - 4ac?",
    questions: &[
        "What are the values of a, b, and c?",
        "Is b² larger or smaller than 4ac?",
    ],
    hints: &[
        "Square b first, then multiply 4ac separately.",
        "A negative b still gives a positive b².",
    ],
};

const QUADRATIC_FORMULA: ConceptText = ConceptText {
    title: "Apply quadratic formula",
    purpose: "compute the roots exactly using the quadratic formula",
    conceptual: "The quadratic formula solves every quadratic; it is completing the square done once in general.",
    procedural: "Substitute -b, the square root of Δ, and 2a into x = (-b ± √Δ)/(2a).",
    visual: "The two roots sit symmetrically around the axis of symmetry x = -b/(2a).",
    algebraic: "x = (-b ± √(b² - 4ac))/(2a) for ax² + bx + c = 0, a ≠ 0.",
    mistakes: &[
        "Forgetting the ± symbol (missing one solution)",
        "Incorrect sign on -b",
        "Dividing only the numerator or only the √ term by 2a",
    ],
    self_check: "Did I include both the + and - solutions?",
    questions: &[
        "What is -b here?",
        "What does the ± tell you about the number of solutions?",
    ],
    hints: &[
        "The entire numerator is divided by 2a.",
        "Write one root with + and one with -.",
    ],
};

const SOLUTIONS: ConceptText = ConceptText {
    title: "Calculate solutions",
    purpose: "evaluate the roots and state them",
    conceptual: "Each root is a value of x that makes the equation true.",
    procedural: "Evaluate each expression separately and simplify.",
    visual: "Real roots are where the graph meets the x-axis.",
    algebraic: "A polynomial of degree n has exactly n roots counted with multiplicity over the complex numbers.",
    mistakes: &[
        "Not simplifying radicals completely",
        "Arithmetic errors in fraction reduction",
    ],
    self_check: "Does each root make the original equation true?",
    questions: &["How many roots should a polynomial of this degree have?"],
    hints: &[
        "Evaluate the + case and the - case separately.",
        "Complex roots come in conjugate pairs.",
    ],
};

const FACTOR_PAIRS: ConceptText = ConceptText {
    title: "Find factor pairs",
    purpose: "find two integers whose product is ac and whose sum is b",
    conceptual: "Splitting the middle term with the right pair turns the quadratic into a product.",
    procedural: "List the factor pairs of ac, including negative pairs, and pick the one that adds to b.",
    visual: "The pair records where the two linear factors cross zero.",
    algebraic: "If m·n = ac and m + n = b, then ax² + bx + c = ax² + mx + nx + c.",
    mistakes: &[
        "Not considering all factor combinations",
        "Sign errors in factor pairs",
        "Confusing sum and product conditions",
    ],
    self_check: "Do my factors multiply to ac and add to b?",
    questions: &[
        "What is the product ac?",
        "Which pairs of integers multiply to ac?",
    ],
    hints: &[
        "List factor pairs systematically from 1 upward.",
        "If ac is negative, one factor is negative.",
    ],
};

const FACTORED_FORM: ConceptText = ConceptText {
    title: "Write factored form",
    purpose: "rewrite the quadratic as a product of two binomials",
    conceptual: "A product form exposes the roots directly.",
    procedural: "Group the split terms in pairs and factor out the common binomial.",
    visual: "Each binomial factor is a line; the parabola is zero wherever either line is.",
    algebraic: "ax² + bx + c = (px + q)(rx + s) with pr = a, qs = c, ps + qr = b.",
    mistakes: &[
        "Sign error inside a binomial",
        "Losing the leading coefficient",
    ],
    self_check: "Does expanding the factors give back the original quadratic?",
    questions: &["Which binomial appears in both groups?"],
    hints: &["Expand the product to check it."],
};

const ZERO_PRODUCT: ConceptText = ConceptText {
    title: "Set factors equal to zero",
    purpose: "use the Zero Product Property to turn one equation into two simple ones",
    conceptual: "A product is zero only when one of its factors is zero.",
    procedural: "Set each factor equal to zero and solve each linear equation.",
    visual: "Each factor contributes one x-intercept.",
    algebraic: "If AB = 0, then A = 0 or B = 0.",
    mistakes: &[
        "Forgetting the Zero Product Property",
        "Not setting each factor to zero separately",
        "Sign error when solving for x",
    ],
    self_check: "Did I solve every factor for x?",
    questions: &["What value of x makes each factor zero?"],
    hints: &["Solve px + q = 0 as x = -q/p."],
};

const NOT_FACTORABLE: ConceptText = ConceptText {
    title: "Check factorability",
    purpose: "decide whether integer factoring can finish the problem",
    conceptual: "Not every quadratic factors over the integers; that does not mean it has no roots.",
    procedural: "If no factor pair of ac adds to b, switch to the quadratic formula.",
    visual: "The parabola may still cross the x-axis at irrational points, or not at all.",
    algebraic: "An integer quadratic factors over the integers only if its discriminant is a perfect square.",
    mistakes: &[
        "Stopping without trying negative pairs",
        "Concluding that the equation has no solution",
    ],
    self_check: "Did I try every factor pair of ac, including negatives?",
    questions: &["Is the discriminant a perfect square?"],
    hints: &["The quadratic formula always works."],
};

const NORMALIZE: ConceptText = ConceptText {
    title: "Divide by leading coefficient",
    purpose: "make the x² coefficient 1 and move the constant to the right side",
    conceptual: "A perfect square (x + p)² starts with x², so the leading coefficient must be 1.",
    procedural: "Divide every term by a, then subtract the constant from both sides.",
    visual: "Dividing by a rescales the parabola vertically but keeps its roots.",
    algebraic: "ax² + bx + c = 0 ⟺ x² + (b/a)x = -c/a for a ≠ 0.",
    mistakes: &[
        "Forgetting to divide by a first if a ≠ 1",
        "Dividing only some of the terms",
    ],
    self_check: "Is the coefficient of x² now exactly 1?",
    questions: &["What must every term be divided by?"],
    hints: &["Divide the constant too, then move it across."],
};

const COMPLETE_SQUARE: ConceptText = ConceptText {
    title: "Complete the square",
    purpose: "turn the left side into a perfect square trinomial",
    conceptual: "Adding (b/2a)² completes a square whose side is x + b/2a.",
    procedural: "Halve the x coefficient, square it, and add the result to both sides.",
    visual: "Picture x² + kx as a square with two rectangles; the missing corner has area (k/2)².",
    algebraic: "x² + kx + (k/2)² = (x + k/2)².",
    mistakes: &[
        "Incorrect calculation of (b/2)²",
        "Not adding the same value to both sides",
    ],
    self_check: "Is my left side now a perfect square trinomial?",
    questions: &[
        "What is half of the x coefficient?",
        "What number completes the square?",
    ],
    hints: &[
        "Half of k, squared.",
        "Add it to the right side as well.",
    ],
};

const SQUARE_ROOT: ConceptText = ConceptText {
    title: "Apply square root",
    purpose: "take square roots of both sides to undo the square",
    conceptual: "A square equal to a number has two square roots, one positive and one negative.",
    procedural: "Take the square root of both sides, keep the ±, then isolate x.",
    visual: "The two roots are equally spaced on either side of the vertex.",
    algebraic: "If u² = k then u = ±√k; for k < 0 the roots are imaginary.",
    mistakes: &[
        "Forgetting ± when taking the square root",
        "Sign errors in final steps",
        "Not isolating x completely",
    ],
    self_check: "Did I keep both signs of the square root?",
    questions: &["What happens if the right side is negative?"],
    hints: &["√(-k) = i√k for k > 0."],
};

const VERTEX: ConceptText = ConceptText {
    title: "Read the vertex",
    purpose: "read the parabola's turning point from the completed square",
    conceptual: "The completed square is the vertex form of the parabola.",
    procedural: "The vertex is at x = -b/(2a), with y found by evaluating the quadratic there.",
    visual: "The vertex is the lowest point of an upward parabola or the highest of a downward one.",
    algebraic: "a(x - h)² + k has vertex (h, k).",
    mistakes: &["Reversing the sign of h"],
    self_check: "Does the vertex lie halfway between the real roots?",
    questions: &["Which value of x makes the squared term zero?"],
    hints: &["h = -b/(2a)."],
};

const RATIONAL_CANDIDATES: ConceptText = ConceptText {
    title: "List candidates",
    purpose: "narrow the search for roots to a finite list of fractions",
    conceptual: "The Rational Root Theorem limits the rational roots to a short list.",
    procedural: "List the divisors p of the constant term and q of the leading coefficient, and form every ±p/q.",
    visual: "Candidates are the only rational places the graph can cross the x-axis.",
    algebraic: "A rational root p/q in lowest terms has p | a₀ and q | aₙ.",
    mistakes: &[
        "Missing negative candidates",
        "Not including ±1",
        "Forgetting to reduce fractions",
    ],
    self_check: "Did I include both signs of every candidate?",
    questions: &[
        "What are the divisors of the constant term?",
        "What are the divisors of the leading coefficient?",
    ],
    hints: &["Start with ±1, the candidates every polynomial has."],
};

const TEST_CANDIDATES: ConceptText = ConceptText {
    title: "Test candidates",
    purpose: "find which candidates are actually roots",
    conceptual: "A candidate is a root exactly when the polynomial evaluates to zero there.",
    procedural: "Evaluate the polynomial at each candidate, or divide synthetically and check the remainder.",
    visual: "A root is a point where the graph touches the x-axis.",
    algebraic: "P(r) = 0 ⟺ (x - r) divides P(x).",
    mistakes: &[
        "Arithmetic errors in evaluation",
        "Stopping after finding one root",
        "Not factoring out found roots",
    ],
    self_check: "Did P(r) come out to exactly zero?",
    questions: &["Which candidate is easiest to test first?"],
    hints: &["Try ±1 first; they are the quickest to evaluate."],
};

const DEFLATE: ConceptText = ConceptText {
    title: "Divide out the root",
    purpose: "divide out the roots found to lower the degree",
    conceptual: "Each root found removes one linear factor and lowers the degree by one.",
    procedural: "Divide synthetically by (x - r) and keep the quotient.",
    visual: "The remaining factor has the same graph crossings, minus the one just found.",
    algebraic: "P(x) = (x - r)·Q(x) when P(r) = 0.",
    mistakes: &[
        "Using -r instead of r in synthetic division",
        "Dropping the last coefficient",
    ],
    self_check: "Is the remainder zero?",
    questions: &["What degree is the quotient?"],
    hints: &["The quotient has one fewer coefficient."],
};

const BIQUADRATIC: ConceptText = ConceptText {
    title: "Substitute u = x²",
    purpose: "recognise a quadratic in disguise by substituting u = x²",
    conceptual: "A quartic with only even powers is a quadratic in x².",
    procedural: "Replace x⁴ by u² and x² by u, then solve the quadratic in u.",
    visual: "The graph of an even quartic is symmetric about the y-axis.",
    algebraic: "ax⁴ + cx² + e = au² + cu + e with u = x².",
    mistakes: &["Forgetting to substitute back for x"],
    self_check: "Does the new equation contain only u² and u?",
    questions: &["Which powers of x appear?"],
    hints: &["x⁴ = (x²)²."],
};

const RETURN_TO_X: ConceptText = ConceptText {
    title: "Return to x",
    purpose: "undo the substitution to recover the roots in x",
    conceptual: "Each value of u = x² gives up to two values of x.",
    procedural: "Solve x² = u for each root u, keeping both signs.",
    visual: "Positive u gives two symmetric real roots; negative u gives imaginary ones.",
    algebraic: "x = ±√u.",
    mistakes: &[
        "Forgetting the negative square root",
        "Discarding negative u instead of taking imaginary roots",
    ],
    self_check: "Did every u produce two values of x?",
    questions: &["What are the square roots of each u?"],
    hints: &["√(-k) = i√k."],
};

const NUMERICAL_ROOTS: ConceptText = ConceptText {
    title: "Approximate real roots",
    purpose: "estimate the real roots numerically where exact methods stop",
    conceptual: "When no exact method applies, sign changes still pin down every real root.",
    procedural: "Find intervals where the polynomial changes sign and halve them until the root is located.",
    visual: "The graph crosses the x-axis between a positive and a negative value.",
    algebraic: "By the Intermediate Value Theorem, P(a)·P(b) < 0 implies a root in (a, b).",
    mistakes: &["Reporting an estimate as exact"],
    self_check: "Does the polynomial change sign across each estimate?",
    questions: &["Where does the polynomial change sign?"],
    hints: &["Evaluate at integers first to find sign changes."],
};

const DIVISION_SETUP: ConceptText = ConceptText {
    title: "Set up the division",
    purpose: "arrange dividend and divisor by decreasing power",
    conceptual: "Polynomial division mirrors long division of numbers.",
    procedural: "Write both polynomials in decreasing powers with zero placeholders.",
    visual: "Aligning terms by power keeps the columns straight.",
    algebraic: "Dividend = Divisor·Quotient + Remainder, with deg R < deg D.",
    mistakes: &["Forgetting placeholder zeros for missing terms"],
    self_check: "Does every power appear in the dividend, even with coefficient 0?",
    questions: &["What is the degree of the quotient?"],
    hints: &["deg Q = deg dividend - deg divisor."],
};

const LONG_DIVISION: ConceptText = ConceptText {
    title: "Long division steps",
    purpose: "divide, multiply, and subtract to remove the leading term",
    conceptual: "Each pass removes the current leading term of the dividend.",
    procedural: "Divide leading terms, multiply the divisor by the result, subtract, and bring down.",
    visual: "The columns shift right as the degree drops.",
    algebraic: "Each quotient term is lead(R)/lead(D)·x^(deg R - deg D).",
    mistakes: &[
        "Misaligning terms by degree",
        "Sign errors in subtraction",
    ],
    self_check: "Did the leading term cancel exactly?",
    questions: &["What times the divisor's leading term gives the current leading term?"],
    hints: &["Subtract every term, not just the first."],
};

const SYNTHETIC_TABLEAU: ConceptText = ConceptText {
    title: "Synthetic division",
    purpose: "divide by a linear factor using coefficients only",
    conceptual: "Synthetic division is long division by (x - c) with the variables stripped away.",
    procedural: "Bring down the first coefficient, multiply by c, add to the next coefficient, and repeat.",
    visual: "Three rows: coefficients, products, and sums.",
    algebraic: "The running sums are Horner's evaluation of P(c); the last is the remainder.",
    mistakes: &[
        "Using the wrong value for the divisor",
        "Arithmetic errors in multiplication and addition",
        "Misinterpreting the remainder",
    ],
    self_check: "Does the last sum equal P(c)?",
    questions: &["For (x - c), which value goes in the box?"],
    hints: &["For (x + 2) the value is -2."],
};

const DIVISION_RESULT: ConceptText = ConceptText {
    title: "Write the result",
    purpose: "state the quotient and remainder",
    conceptual: "Every division ends as quotient plus remainder over divisor.",
    procedural: "Read the quotient coefficients and remainder from the last row.",
    visual: "The quotient has one column fewer per degree of the divisor.",
    algebraic: "P(x) = D(x)·Q(x) + R(x).",
    mistakes: &["Misreading the remainder as a quotient term"],
    self_check: "Does D·Q + R give back the dividend?",
    questions: &["Is the remainder zero?"],
    hints: &["A zero remainder means the divisor is a factor."],
};

const CRITICAL_POINTS: ConceptText = ConceptText {
    title: "Find critical points",
    purpose: "find the zeros that split the number line into test intervals",
    conceptual: "A polynomial can change sign only at its zeros.",
    procedural: "Solve P(x) = 0 and order the zeros.",
    visual: "The zeros are the x-intercepts that bound regions above and below the axis.",
    algebraic: "Between consecutive zeros a polynomial has constant sign.",
    mistakes: &[
        "Missing some zeros",
        "Not including equality points for ≤ or ≥",
        "Incorrect factorization",
    ],
    self_check: "Did I find every real zero?",
    questions: &["Where is the polynomial zero?"],
    hints: &["Factor first if you can."],
};

const TEST_INTERVALS: ConceptText = ConceptText {
    title: "Test intervals",
    purpose: "determine the polynomial's sign on each interval",
    conceptual: "One test point decides the sign of the whole interval.",
    procedural: "Pick a point inside each interval, evaluate, and record the sign.",
    visual: "The graph is above the axis on positive intervals and below on negative ones.",
    algebraic: "sign P(t) = sign P(x) for all x in the interval containing t.",
    mistakes: &[
        "Choosing test points at critical values",
        "Sign errors in evaluation",
    ],
    self_check: "Is each test point strictly inside its interval?",
    questions: &["Which point is easiest to evaluate in each interval?"],
    hints: &["Zero is a convenient test point when it lies inside an interval."],
};

const SOLUTION_SET: ConceptText = ConceptText {
    title: "Write solution set",
    purpose: "combine the satisfying intervals into the solution set",
    conceptual: "The answer to an inequality is a set of intervals, not single numbers.",
    procedural: "Join the satisfying intervals, closing endpoints for ≤ or ≥.",
    visual: "Shade the satisfying intervals on a number line.",
    algebraic: "Use ∪ to join intervals; brackets include endpoints, parentheses exclude them.",
    mistakes: &["Incorrect interval notation", "Including zeros for a strict inequality"],
    self_check: "Are the endpoints included exactly when equality is allowed?",
    questions: &["Does the inequality allow equality?"],
    hints: &["∞ always takes a parenthesis."],
};

const END_BEHAVIOR: ConceptText = ConceptText {
    title: "Determine end behavior",
    purpose: "describe what the graph does far to the left and right",
    conceptual: "For large |x| the leading term dominates every other term.",
    procedural: "Check whether the degree is even or odd and the sign of the leading coefficient.",
    visual: "Even degree: both ends point the same way. Odd degree: the ends point opposite ways.",
    algebraic: "P(x) ~ aₙxⁿ as x → ±∞.",
    mistakes: &["Ignoring the sign of the leading coefficient"],
    self_check: "Does the description match the leading term alone?",
    questions: &["Is the degree even or odd?"],
    hints: &["Think of x² and x³."],
};

const INTERCEPTS: ConceptText = ConceptText {
    title: "Find intercepts",
    purpose: "locate where the graph meets the axes",
    conceptual: "Intercepts anchor the sketch of the graph.",
    procedural: "The y-intercept is P(0); x-intercepts are the real zeros.",
    visual: "The y-intercept is where the graph crosses the vertical axis.",
    algebraic: "P(0) equals the constant term.",
    mistakes: &["Confusing x- and y-intercepts"],
    self_check: "Is the y-intercept equal to the constant term?",
    questions: &["What is P(0)?"],
    hints: &["Only the constant term survives at x = 0."],
};

const TURNING_POINTS: ConceptText = ConceptText {
    title: "Locate turning points",
    purpose: "find where the graph changes direction",
    conceptual: "A turning point is a local peak or valley.",
    procedural: "Solve P'(x) = 0 and evaluate P there.",
    visual: "Turning points are the tops of hills and bottoms of valleys.",
    algebraic: "A degree-n polynomial has at most n - 1 turning points.",
    mistakes: &["Counting more than n - 1 turning points"],
    self_check: "Are there at most n - 1 turning points?",
    questions: &["Where is the slope zero?"],
    hints: &["Differentiate term by term."],
};

const EVALUATE_REMAINDER: ConceptText = ConceptText {
    title: "Evaluate P(c)",
    purpose: "evaluate the polynomial at the given point",
    conceptual: "The Remainder Theorem replaces a division by a single evaluation.",
    procedural: "Substitute c for x and simplify.",
    visual: "P(c) is the height of the graph at x = c.",
    algebraic: "The remainder of P(x) ÷ (x - c) is P(c).",
    mistakes: &["Substituting -c instead of c"],
    self_check: "Did I substitute the right sign of c?",
    questions: &["For the divisor (x - c), what is c?"],
    hints: &["Evaluate powers before multiplying."],
};

const FACTOR_THEOREM: ConceptText = ConceptText {
    title: "Apply the Factor Theorem",
    purpose: "decide whether (x - c) is a factor",
    conceptual: "A zero remainder means the divisor goes in evenly.",
    procedural: "If P(c) = 0, write P(x) = (x - c)·Q(x).",
    visual: "(x - c) is a factor exactly when the graph passes through (c, 0).",
    algebraic: "(x - c) | P(x) ⟺ P(c) = 0.",
    mistakes: &["Treating a small nonzero remainder as zero"],
    self_check: "Is the remainder exactly zero?",
    questions: &["What is the remainder?"],
    hints: &["Zero remainder means factor."],
};

const FACTORIZATION: ConceptText = ConceptText {
    title: "Write the factorization",
    purpose: "assemble the linear factors and what remains",
    conceptual: "The roots found become linear factors of the polynomial.",
    procedural: "Write (x - r) for each root, repeated by multiplicity, times the remaining factor.",
    visual: "Each factor corresponds to one x-intercept.",
    algebraic: "P(x) = a·Π(x - rᵢ)^mᵢ·R(x).",
    mistakes: &["Losing the leading coefficient", "Writing (x + r) for root r"],
    self_check: "Does expanding the product give back P(x)?",
    questions: &["How many times does each root repeat?"],
    hints: &["Root r gives factor (x - r)."],
};

const INTERPRET: ConceptText = ConceptText {
    title: "Interpret in context",
    purpose: "translate the algebraic answer back into the situation",
    conceptual: "Only answers that make sense in the situation are kept.",
    procedural: "Discard negative or complex values for quantities that cannot be negative.",
    visual: "Only the part of the graph in the meaningful region counts.",
    algebraic: "Restrict the solution set to the model's domain.",
    mistakes: &["Reporting a negative time or length"],
    self_check: "Does the answer make sense with its units?",
    questions: &["Can this quantity be negative?"],
    hints: &["Check the units."],
};

// Linear system family

const WRITE_SYSTEM: ConceptText = ConceptText {
    title: "Write the system",
    purpose: "line up the equations with like variables in columns",
    conceptual: "A solution of a system satisfies every equation at once.",
    procedural: "Write each equation in the form ax + by = c.",
    visual: "Each linear equation in two variables is a line in the plane.",
    algebraic: "The system is A·v = c with coefficient matrix A.",
    mistakes: &["Misaligning variables between equations"],
    self_check: "Is every equation in ax + by = c form?",
    questions: &["What does each variable represent?"],
    hints: &["Missing variables have coefficient 0."],
};

const ISOLATE: ConceptText = ConceptText {
    title: "Isolate a variable",
    purpose: "solve one equation for one variable",
    conceptual: "Expressing one variable in terms of the other makes room for substitution.",
    procedural: "Choose the variable with the simplest coefficient and solve for it.",
    visual: "This is the line written as a function of the other variable.",
    algebraic: "From ax + by = c, y = (c - ax)/b when b ≠ 0.",
    mistakes: &["Dividing only part of the equation"],
    self_check: "Is the isolated variable alone on one side?",
    questions: &["Which variable has a coefficient of 1 or -1?"],
    hints: &["Pick the smallest coefficient."],
};

const SUBSTITUTE: ConceptText = ConceptText {
    title: "Substitute into the other equation",
    purpose: "replace the isolated variable to leave one unknown",
    conceptual: "Substitution removes one variable, leaving a single equation.",
    procedural: "Replace the isolated variable everywhere it appears in the other equation.",
    visual: "This finds where one line meets the other along a single coordinate.",
    algebraic: "Substitution is composition: the second equation is evaluated on the first line.",
    mistakes: &["Substituting back into the same equation", "Dropping parentheses"],
    self_check: "Is there only one variable left?",
    questions: &["Which equation was not used to isolate the variable?"],
    hints: &["Wrap the substituted expression in parentheses."],
};

const SOLVE_REMAINING: ConceptText = ConceptText {
    title: "Solve for the remaining variable",
    purpose: "solve the single-variable equation",
    conceptual: "With one variable left, the system becomes an ordinary linear equation.",
    procedural: "Combine like terms and divide by the coefficient.",
    visual: "This is one coordinate of the intersection point.",
    algebraic: "kx = m gives x = m/k for k ≠ 0.",
    mistakes: &["Sign error when combining like terms"],
    self_check: "Does the value satisfy the reduced equation?",
    questions: &["What is the coefficient of the remaining variable?"],
    hints: &["Divide both sides by the coefficient."],
};

const BACK_SUBSTITUTE: ConceptText = ConceptText {
    title: "Back-substitute",
    purpose: "use the known value to find the other unknowns",
    conceptual: "Once one value is known, the rest follow from any equation.",
    procedural: "Substitute the known value into an equation and solve for the other variable.",
    visual: "Moving along a line to the known coordinate gives the other one.",
    algebraic: "Back substitution solves a triangular system from the last equation up.",
    mistakes: &["Substituting into an equation with a zero coefficient"],
    self_check: "Do the values satisfy the equation used?",
    questions: &["Which equation is easiest to substitute into?"],
    hints: &["Pick an equation with small coefficients."],
};

const SCALE: ConceptText = ConceptText {
    title: "Scale the equations",
    purpose: "make one variable's coefficients opposites",
    conceptual: "Multiplying an equation by a nonzero number does not change its solutions.",
    procedural: "Multiply each equation so one variable has opposite coefficients.",
    visual: "Scaling an equation leaves its line unchanged.",
    algebraic: "k(ax + by) = kc has the same solution set as ax + by = c for k ≠ 0.",
    mistakes: &["Multiplying only the left side", "Sign error in a multiplier"],
    self_check: "Are the target coefficients now opposites?",
    questions: &["What is the least common multiple of the coefficients?"],
    hints: &["Use the least common multiple to keep numbers small."],
};

const COMBINE: ConceptText = ConceptText {
    title: "Add the equations",
    purpose: "add the scaled equations to eliminate a variable",
    conceptual: "Adding equations with opposite coefficients cancels that variable.",
    procedural: "Add left sides and right sides term by term.",
    visual: "The combined equation is a line through the same intersection point.",
    algebraic: "Linear combinations of equations preserve common solutions.",
    mistakes: &["Adding when the coefficients are equal rather than opposite"],
    self_check: "Did one variable disappear?",
    questions: &["Which variable cancels?"],
    hints: &["Line up the columns before adding."],
};

const SLOPE_INTERCEPT: ConceptText = ConceptText {
    title: "Write in slope-intercept form",
    purpose: "rewrite each equation as a line y = mx + b",
    conceptual: "Slope and intercept describe a line completely.",
    procedural: "Solve each equation for y.",
    visual: "The slope is the tilt of the line and b is where it crosses the y-axis.",
    algebraic: "ax + by = c gives y = (-a/b)x + c/b for b ≠ 0.",
    mistakes: &["Forgetting to divide the constant by b"],
    self_check: "Is y alone on the left?",
    questions: &["Do the lines have different slopes?"],
    hints: &["Different slopes mean one intersection."],
};

const INTERSECTION: ConceptText = ConceptText {
    title: "Find the intersection",
    purpose: "read off the point where the graphs meet",
    conceptual: "The intersection is the point on every graph at once.",
    procedural: "Set the expressions for y equal, or read the crossing from the graph.",
    visual: "The answer is where the graphs cross.",
    algebraic: "Equal y-values at equal x-values.",
    mistakes: &["Reading the intersection inaccurately from a sketch"],
    self_check: "Does the point lie on every graph?",
    questions: &["Where do the graphs cross?"],
    hints: &["Check the point in both equations."],
};

const DETERMINANTS: ConceptText = ConceptText {
    title: "Compute the determinants",
    purpose: "compute D, Dx, and Dy from the coefficients",
    conceptual: "The determinant measures whether the equations are independent.",
    procedural: "D = a₁b₂ - a₂b₁; replace a column by the constants for Dx and Dy.",
    visual: "D is zero exactly when the lines are parallel or coincide.",
    algebraic: "Dx = c₁b₂ - c₂b₁ and Dy = a₁c₂ - a₂c₁.",
    mistakes: &["Replacing the wrong column", "Reversing the subtraction"],
    self_check: "Is D nonzero?",
    questions: &["Which column does the constant vector replace for Dx?"],
    hints: &["Main diagonal minus off diagonal."],
};

const CRAMER_RULE: ConceptText = ConceptText {
    title: "Apply Cramer's Rule",
    purpose: "divide each determinant by D",
    conceptual: "Each unknown is a ratio of two determinants.",
    procedural: "x = Dx/D and y = Dy/D.",
    visual: "The ratios locate the intersection of the two lines.",
    algebraic: "For a nonsingular A, vᵢ = det(Aᵢ)/det(A).",
    mistakes: &["Dividing D by Dx instead of Dx by D"],
    self_check: "Did I divide by D, not into it?",
    questions: &["What happens if D = 0?"],
    hints: &["D is always the denominator."],
};

const DEGENERATE: ConceptText = ConceptText {
    title: "Classify the system",
    purpose: "recognise a system without a unique solution",
    conceptual: "A zero determinant means the equations do not pin down one point.",
    procedural: "Compare the coefficient ratios: equal ratios throughout mean the same line.",
    visual: "Parallel lines never meet; coincident lines meet everywhere.",
    algebraic: "det A = 0 gives either no solution or infinitely many.",
    mistakes: &["Reporting a single point for a dependent system"],
    self_check: "Are the lines parallel or the same line?",
    questions: &["Are the coefficients proportional?"],
    hints: &["Compare the constants too."],
};

const TRIANGULATE: ConceptText = ConceptText {
    title: "Eliminate to upper-triangular form",
    purpose: "reduce the system to a triangle of equations",
    conceptual: "Row operations remove variables one column at a time.",
    procedural: "Use the pivot row to zero out the entries below it, swapping rows for the largest pivot.",
    visual: "The augmented matrix becomes zero below the diagonal.",
    algebraic: "P·A = L·U with U upper triangular.",
    mistakes: &["Applying a row operation to only part of a row"],
    self_check: "Is everything below the diagonal zero?",
    questions: &["Which entry is the pivot?"],
    hints: &["Work column by column."],
};

const BOUNDARIES: ConceptText = ConceptText {
    title: "Draw boundary lines",
    purpose: "draw the boundary line of each inequality",
    conceptual: "Each inequality is bounded by the line where it becomes an equality.",
    procedural: "Replace the inequality sign with = and draw the line.",
    visual: "Solid lines for ≤ or ≥, dashed for < or >.",
    algebraic: "The boundary of ax + by ≤ c is ax + by = c.",
    mistakes: &["Drawing a solid line for a strict inequality"],
    self_check: "Is each line solid or dashed as required?",
    questions: &["Is the boundary included?"],
    hints: &["Find two points on each line."],
};

const SHADING: ConceptText = ConceptText {
    title: "Test the origin",
    purpose: "decide which side of each boundary to shade",
    conceptual: "One test point decides the whole half-plane.",
    procedural: "Substitute (0, 0); if the inequality holds, shade the side containing the origin.",
    visual: "Shade the half-plane that contains the test point when it satisfies the inequality.",
    algebraic: "A line divides the plane into two convex half-planes.",
    mistakes: &["Testing a point on the boundary line"],
    self_check: "Is the test point off the line?",
    questions: &["Does the origin satisfy the inequality?"],
    hints: &["Use (0, 0) unless the line passes through it."],
};

const VERTICES: ConceptText = ConceptText {
    title: "Find corner points",
    purpose: "find the vertices of the feasible region",
    conceptual: "The corners of the feasible region are boundary intersections that satisfy every inequality.",
    procedural: "Intersect each pair of boundaries and keep the points satisfying all inequalities.",
    visual: "Corners are where the shaded region's edges meet.",
    algebraic: "Vertices solve two boundary equations and satisfy the rest.",
    mistakes: &["Keeping an intersection outside the region"],
    self_check: "Does each vertex satisfy every inequality?",
    questions: &["Which intersections lie in the shaded region?"],
    hints: &["Check each intersection against every inequality."],
};

const REDUCE_TO_QUADRATIC: ConceptText = ConceptText {
    title: "Substitute the line into the parabola",
    purpose: "reduce the system to one quadratic in x",
    conceptual: "Substituting the line into the parabola leaves a single quadratic equation.",
    procedural: "Solve the line for y and set it equal to the parabola.",
    visual: "A line can meet a parabola in zero, one, or two points.",
    algebraic: "The discriminant of the reduced quadratic counts the intersections.",
    mistakes: &["Forgetting to move every term to one side"],
    self_check: "Is the result a quadratic set equal to zero?",
    questions: &["How many times can a line meet a parabola?"],
    hints: &["Set the two expressions for y equal."],
};

const VERIFY: ConceptText = ConceptText {
    title: "Verify the solution",
    purpose: "confirm the answer by substitution",
    conceptual: "Substituting back is the surest check of an answer.",
    procedural: "Substitute each answer into the original equations and compare both sides.",
    visual: "Each answer should lie exactly on its graph.",
    algebraic: "A value is a solution exactly when it makes the equation true.",
    mistakes: &["Checking against a rewritten equation instead of the original"],
    self_check: "Does each substitution give a true statement?",
    questions: &["Does every answer make the original equation true?"],
    hints: &["Use the original equation, not a rearranged one."],
};
