//! Option-gated enhancement passes over a base step list.
//!
//! Each pass is a pure `Vec<Step> -> Vec<Step>` transform. Passes only touch
//! base steps and never read what another pass wrote, so any subset of them
//! can run in any order with the same result. Applying a pass twice is the
//! same as applying it once.

use serde::Serialize;
use stepwise_core::{ExplanationLevel, SolveOptions};

use crate::{
    step::{ErrorPrevention, Explanations, Scaffolding, Step},
    tables,
};

/// One enhancement over the step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "pass", content = "level", rename_all = "snake_case")]
pub enum Pass {
    /// Conceptual and procedural text, plus visual and algebraic text at
    /// `Detailed` and above.
    Explain(ExplanationLevel),
    /// A connector between every pair of adjacent base steps.
    Bridge,
    /// Common mistakes, a standing reminder, and a self-check.
    ErrorPrevention,
    /// Guiding questions, sub-steps, and progressive hints.
    Scaffold,
}

impl Pass {
    /// Applies this pass.
    #[must_use]
    pub fn apply(self, steps: Vec<Step>) -> Vec<Step> {
        match self {
            Self::Explain(level) => each_base(steps, |step| explain(step, level)),
            Self::Bridge => bridge(steps),
            Self::ErrorPrevention => each_base(steps, prevent_errors),
            Self::Scaffold => each_base(steps, scaffold),
        }
    }
}

/// The passes enabled by `options`.
#[must_use]
pub fn pipeline(options: &SolveOptions) -> Vec<Pass> {
    let level = options.explanation_level;
    let mut passes = Vec::with_capacity(4);
    if level > ExplanationLevel::Basic {
        passes.push(Pass::Explain(level));
    }
    if options.include_conceptual_connections {
        passes.push(Pass::Bridge);
    }
    if options.include_error_prevention {
        passes.push(Pass::ErrorPrevention);
    }
    if level == ExplanationLevel::Scaffolded {
        passes.push(Pass::Scaffold);
    }
    passes
}

/// Runs every pass enabled by `options`.
#[must_use]
pub fn enhance(steps: Vec<Step>, options: &SolveOptions) -> Vec<Step> {
    pipeline(options).into_iter().fold(steps, |steps, pass| {
        let steps = pass.apply(steps);
        tracing::debug!(?pass, steps = steps.len(), "applied enhancement pass");
        steps
    })
}

fn each_base(steps: Vec<Step>, f: impl Fn(Step) -> Step) -> Vec<Step> {
    steps
        .into_iter()
        .map(|step| if step.is_bridge() { step } else { f(step) })
        .collect()
}

fn explain(step: Step, level: ExplanationLevel) -> Step {
    if level == ExplanationLevel::Basic {
        return step;
    }
    let text = tables::concept(step.concept);
    let verbose = level >= ExplanationLevel::Detailed;
    Step {
        explanations: Some(Explanations {
            conceptual: text.conceptual,
            procedural: text.procedural,
            visual: verbose.then_some(text.visual),
            algebraic: verbose.then_some(text.algebraic),
        }),
        ..step
    }
}

/// Inserts a bridge between base steps that are not already joined by one.
fn bridge(steps: Vec<Step>) -> Vec<Step> {
    let mut out: Vec<Step> = Vec::with_capacity(steps.len() * 2);
    for step in steps {
        if let Some(prev) = out.last() {
            if !prev.is_bridge() && !step.is_bridge() {
                let connector = Step::bridge(prev, &step);
                out.push(connector);
            }
        }
        out.push(step);
    }
    out
}

fn prevent_errors(step: Step) -> Step {
    let text = tables::concept(step.concept);
    Step {
        error_prevention: Some(ErrorPrevention {
            common_mistakes: text.mistakes,
            reminder: tables::reminder(step.concept),
            self_check: text.self_check,
        }),
        ..step
    }
}

fn scaffold(step: Step) -> Step {
    let text = tables::concept(step.concept);
    let sub_steps = sub_steps(&step);
    Step {
        scaffolding: Some(Scaffolding {
            guiding_questions: text.questions,
            sub_steps,
            hints: text.hints,
        }),
        ..step
    }
}

/// Breaks a step into the smaller moves a learner would make.
fn sub_steps(step: &Step) -> Vec<String> {
    let mut sub_steps = Vec::new();
    if step.before.is_some() {
        sub_steps.push("Write down the starting expression".to_owned());
    }
    if let Some(operation) = &step.operation {
        sub_steps.push(format!("Identify the operation: {operation}"));
    }
    if step.after.is_some() {
        sub_steps.push("Carry out the operation and simplify".to_owned());
    }
    if let Some(rule) = &step.rule {
        sub_steps.push(format!("Justify the move with the {rule}"));
    }
    if step.is_final {
        sub_steps.push("Check that the answer makes sense in the original problem".to_owned());
    }
    sub_steps
}

#[cfg(test)]
mod tests {
    use stepwise_core::{Problem, ProblemSpec, VerificationDetail};
    use stepwise_solvers::{solve, verify::verify};

    use super::*;
    use crate::{generate::base_steps, step::StepKind};

    fn base() -> Vec<Step> {
        let solution = solve(&Problem::new(ProblemSpec::Quadratic {
            a: 2.0,
            b: -3.0,
            c: 1.0,
        }))
        .expect("should solve");
        base_steps(&solution, Some(&verify(&solution)))
    }

    fn all_passes() -> Vec<Pass> {
        vec![
            Pass::Explain(ExplanationLevel::Scaffolded),
            Pass::Bridge,
            Pass::ErrorPrevention,
            Pass::Scaffold,
        ]
    }

    fn run(passes: &[Pass]) -> Vec<Step> {
        passes.iter().fold(base(), |steps, pass| pass.apply(steps))
    }

    #[test]
    fn passes_commute() {
        let forward = run(&all_passes());
        let mut reversed = all_passes();
        reversed.reverse();
        assert_eq!(forward, run(&reversed));

        let shuffled = [
            Pass::ErrorPrevention,
            Pass::Scaffold,
            Pass::Bridge,
            Pass::Explain(ExplanationLevel::Scaffolded),
        ];
        assert_eq!(forward, run(&shuffled));
    }

    #[test]
    fn passes_are_idempotent() {
        for pass in all_passes() {
            let once = pass.apply(base());
            let twice = pass.apply(once.clone());
            assert_eq!(once, twice, "{pass:?}");
        }
    }

    #[test]
    fn disabling_a_pass_leaves_the_others_unchanged() {
        let with_bridges = run(&[Pass::Explain(ExplanationLevel::Detailed), Pass::Bridge]);
        let without = run(&[Pass::Explain(ExplanationLevel::Detailed)]);

        let base_only: Vec<Step> = with_bridges
            .into_iter()
            .filter(|s| s.kind == StepKind::Base)
            .collect();
        assert_eq!(base_only, without);
    }

    #[test]
    fn bridges_join_each_adjacent_pair() {
        let steps = Pass::Bridge.apply(base());
        let bases = steps.iter().filter(|s| !s.is_bridge()).count();
        let bridges = steps.iter().filter(|s| s.is_bridge()).count();
        assert_eq!(bridges, bases - 1);
        assert!(!steps[0].is_bridge());
        assert!(steps[1].is_bridge());
        assert_eq!(steps[1].index, steps[0].index);
    }

    #[test]
    fn explanation_depth_follows_the_level() {
        let intermediate = Pass::Explain(ExplanationLevel::Intermediate).apply(base());
        let explanations = intermediate[0].explanations.as_ref().expect("explained");
        assert!(explanations.visual.is_none());
        assert!(explanations.algebraic.is_none());

        let detailed = Pass::Explain(ExplanationLevel::Detailed).apply(base());
        let explanations = detailed[0].explanations.as_ref().expect("explained");
        assert!(explanations.visual.is_some());
        assert!(explanations.algebraic.is_some());
    }

    #[test]
    fn pipeline_follows_options() {
        assert!(pipeline(&SolveOptions::minimal()).is_empty());

        let scaffolded = SolveOptions {
            explanation_level: ExplanationLevel::Scaffolded,
            verification_detail: VerificationDetail::Basic,
            ..SolveOptions::default()
        };
        assert_eq!(
            pipeline(&scaffolded),
            vec![
                Pass::Explain(ExplanationLevel::Scaffolded),
                Pass::Bridge,
                Pass::ErrorPrevention,
                Pass::Scaffold,
            ]
        );

        let basic = SolveOptions {
            explanation_level: ExplanationLevel::Basic,
            ..SolveOptions::default()
        };
        assert_eq!(pipeline(&basic), vec![Pass::Bridge, Pass::ErrorPrevention]);
    }

    #[test]
    fn scaffolding_breaks_down_the_operation() {
        let steps = Pass::Scaffold.apply(base());
        let discriminant = steps
            .iter()
            .find(|s| s.operation.is_some())
            .and_then(|s| s.scaffolding.as_ref())
            .expect("scaffolded");
        assert!(
            discriminant
                .sub_steps
                .iter()
                .any(|s| s.starts_with("Identify the operation"))
        );
        assert!(!discriminant.guiding_questions.is_empty());
    }
}
