//! The step model shared by the generators, the passes, and the workbook.

use serde::Serialize;
use stepwise_core::Expr;

use crate::tables;

/// Whether a step does algebra or connects two steps that do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// One algebraic transformation.
    Base,
    /// A connector inserted between two base steps.
    Bridge,
}

/// What a step does, independent of the numbers involved.
///
/// Every piece of table-driven text (titles, explanations, common mistakes,
/// guiding questions) is looked up by concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    StandardForm,
    Discriminant,
    QuadraticFormula,
    Solutions,
    FactorPairs,
    FactoredForm,
    ZeroProduct,
    NotFactorable,
    Normalize,
    CompleteSquare,
    SquareRoot,
    Vertex,
    RationalCandidates,
    TestCandidates,
    Deflate,
    Biquadratic,
    ReturnToX,
    NumericalRoots,
    DivisionSetup,
    LongDivision,
    SyntheticTableau,
    DivisionResult,
    CriticalPoints,
    TestIntervals,
    SolutionSet,
    EndBehavior,
    Intercepts,
    TurningPoints,
    EvaluateRemainder,
    FactorTheorem,
    Factorization,
    Interpret,
    WriteSystem,
    Isolate,
    Substitute,
    SolveRemaining,
    BackSubstitute,
    Scale,
    Combine,
    SlopeIntercept,
    Intersection,
    Determinants,
    CramerRule,
    Degenerate,
    Triangulate,
    Boundaries,
    Shading,
    Vertices,
    ReduceToQuadratic,
    Verify,
}

/// Explanations of one step from four angles.
///
/// The visual and algebraic angles are only filled in at the more verbose
/// explanation levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanations {
    pub conceptual: &'static str,
    pub procedural: &'static str,
    pub visual: Option<&'static str>,
    pub algebraic: Option<&'static str>,
}

/// A reminder paired with a method for avoiding the mistake it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub reminder: &'static str,
    pub method: &'static str,
}

/// Mistakes commonly made at a step and how to catch them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPrevention {
    pub common_mistakes: &'static [&'static str],
    pub reminder: Option<Reminder>,
    pub self_check: &'static str,
}

/// Guided-discovery support for one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scaffolding {
    pub guiding_questions: &'static [&'static str],
    pub sub_steps: Vec<String>,
    /// Ordered from gentlest to most direct.
    pub hints: &'static [&'static str],
}

/// One entry in a worked solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// 1-based position among base steps; a bridge shares the index of the
    /// step it follows.
    pub index: usize,
    pub kind: StepKind,
    pub concept: Concept,
    pub title: String,
    pub description: String,
    pub before: Option<Expr>,
    pub operation: Option<String>,
    pub after: Option<Expr>,
    pub reasoning: String,
    pub rule: Option<String>,
    pub is_final: bool,
    pub explanations: Option<Explanations>,
    pub error_prevention: Option<ErrorPrevention>,
    pub scaffolding: Option<Scaffolding>,
}

impl Step {
    /// A base step titled after its concept.
    #[must_use]
    pub fn new(concept: Concept, description: impl Into<String>) -> Self {
        Self {
            index: 0,
            kind: StepKind::Base,
            concept,
            title: tables::concept(concept).title.to_owned(),
            description: description.into(),
            before: None,
            operation: None,
            after: None,
            reasoning: String::new(),
            rule: None,
            is_final: false,
            explanations: None,
            error_prevention: None,
            scaffolding: None,
        }
    }

    /// A connector between `from` and `to`.
    ///
    /// It carries the state reached by `from` and describes the purpose of
    /// `to`, so its content depends only on the two steps it joins.
    #[must_use]
    pub fn bridge(from: &Step, to: &Step) -> Self {
        Self {
            index: from.index,
            kind: StepKind::Bridge,
            concept: to.concept,
            title: "Connecting to Next Step".to_owned(),
            description: tables::concept(to.concept).purpose.to_owned(),
            before: from.after.clone().or_else(|| from.before.clone()),
            operation: None,
            after: None,
            reasoning: format!("After \"{}\", the next move is \"{}\".", from.title, to.title),
            rule: None,
            is_final: false,
            explanations: None,
            error_prevention: None,
            scaffolding: None,
        }
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn before(mut self, expr: Expr) -> Self {
        self.before = Some(expr);
        self
    }

    #[must_use]
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    #[must_use]
    pub fn after(mut self, expr: Expr) -> Self {
        self.after = Some(expr);
        self
    }

    #[must_use]
    pub fn reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Marks the step that states the answer.
    #[must_use]
    pub fn final_answer(mut self) -> Self {
        self.is_final = true;
        self
    }

    #[must_use]
    pub fn is_bridge(&self) -> bool {
        self.kind == StepKind::Bridge
    }
}

/// Assigns 1-based indices in order.
#[must_use]
pub fn numbered(steps: Vec<Step>) -> Vec<Step> {
    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| Step { index: i + 1, ..step })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_steps_take_their_title_from_the_concept() {
        let step = Step::new(Concept::Discriminant, "Compute Δ");
        assert_eq!(step.title, "Calculate discriminant");
        assert_eq!(step.kind, StepKind::Base);
        assert!(!step.is_final);
    }

    #[test]
    fn bridges_carry_the_previous_result() {
        let from = Step::new(Concept::StandardForm, "Identify").after(Expr::num(1.0));
        let to = Step::new(Concept::Discriminant, "Compute");
        let from = Step { index: 3, ..from };

        let bridge = Step::bridge(&from, &to);
        assert!(bridge.is_bridge());
        assert_eq!(bridge.index, 3);
        assert_eq!(bridge.before, Some(Expr::num(1.0)));
        assert_eq!(bridge.concept, Concept::Discriminant);
    }

    #[test]
    fn numbering_starts_at_one() {
        let steps = numbered(vec![
            Step::new(Concept::WriteSystem, "a"),
            Step::new(Concept::Combine, "b"),
        ]);
        assert_eq!(steps[0].index, 1);
        assert_eq!(steps[1].index, 2);
    }
}
