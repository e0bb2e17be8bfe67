//! Static teaching content.
//!
//! Everything here is data: per-concept text used by the enhancement passes
//! and per-problem-type lessons, notes, and alternatives used by the
//! workbook.

mod concepts;
mod lessons;

use crate::step::{Concept, Reminder};

pub use lessons::{Alternative, Lesson, TeachingNotes, alternatives, lesson, notes};

/// Text attached to every step of one concept.
#[derive(Debug)]
pub struct ConceptText {
    pub title: &'static str,
    /// Why a solver takes this step, phrased as the goal a bridge announces.
    pub purpose: &'static str,
    pub conceptual: &'static str,
    pub procedural: &'static str,
    pub visual: &'static str,
    pub algebraic: &'static str,
    pub mistakes: &'static [&'static str],
    pub self_check: &'static str,
    pub questions: &'static [&'static str],
    pub hints: &'static [&'static str],
}

/// Looks up the text for a concept.
#[must_use]
pub fn concept(concept: Concept) -> &'static ConceptText {
    concepts::text(concept)
}

const DISCRIMINANT_CHECKING: Reminder = Reminder {
    reminder: "Always calculate the discriminant carefully: b² - 4ac",
    method: "Write out each component separately before combining",
};

const PLUS_MINUS: Reminder = Reminder {
    reminder: "Don't forget ± in the quadratic formula and square roots",
    method: "Circle or highlight the ± symbol in your work",
};

const ZERO_PRODUCT: Reminder = Reminder {
    reminder: "Zero Product Property: if AB = 0, then A = 0 or B = 0",
    method: "Set each factor equal to zero separately",
};

const SIGN_TRACKING: Reminder = Reminder {
    reminder: "Track signs carefully in polynomial operations",
    method: "Use parentheses and show all subtraction steps",
};

const BOTH_SIDES: Reminder = Reminder {
    reminder: "Whatever is done to one side of an equation must be done to the other",
    method: "Write the operation beside both sides before simplifying",
};

const SUBSTITUTE_BACK: Reminder = Reminder {
    reminder: "A solution of a system must satisfy every equation, not just one",
    method: "Substitute the final values into each original equation",
};

/// The standing reminder for a concept, if it has one.
#[must_use]
pub fn reminder(concept: Concept) -> Option<Reminder> {
    use Concept as C;
    match concept {
        C::Discriminant => Some(DISCRIMINANT_CHECKING),
        C::QuadraticFormula | C::SquareRoot | C::ReturnToX => Some(PLUS_MINUS),
        C::ZeroProduct | C::FactoredForm => Some(ZERO_PRODUCT),
        C::LongDivision
        | C::SyntheticTableau
        | C::Deflate
        | C::Combine
        | C::Triangulate
        | C::EvaluateRemainder => Some(SIGN_TRACKING),
        C::Normalize | C::CompleteSquare | C::Scale => Some(BOTH_SIDES),
        C::BackSubstitute | C::Verify => Some(SUBSTITUTE_BACK),
        C::StandardForm
        | C::Solutions
        | C::FactorPairs
        | C::NotFactorable
        | C::Vertex
        | C::RationalCandidates
        | C::TestCandidates
        | C::Biquadratic
        | C::NumericalRoots
        | C::DivisionSetup
        | C::DivisionResult
        | C::CriticalPoints
        | C::TestIntervals
        | C::SolutionSet
        | C::EndBehavior
        | C::Intercepts
        | C::TurningPoints
        | C::FactorTheorem
        | C::Factorization
        | C::Interpret
        | C::WriteSystem
        | C::Isolate
        | C::Substitute
        | C::SolveRemaining
        | C::SlopeIntercept
        | C::Intersection
        | C::Determinants
        | C::CramerRule
        | C::Degenerate
        | C::Boundaries
        | C::Shading
        | C::Vertices
        | C::ReduceToQuadratic => None,
    }
}
