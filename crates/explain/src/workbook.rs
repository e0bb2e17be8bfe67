//! Workbook assembly.
//!
//! A [`Workbook`] is an ordered list of titled sections whose rows are flat
//! tuples of text and numbers. It is the only output a document exporter or
//! UI needs to read, and the only place expressions become text.

mod answer;

use serde::Serialize;
use stepwise_core::{
    ExplanationLevel, Expr, Line, Problem, Solution, VerificationDetail, poly::degree,
};
use stepwise_solvers::verify::{Confidence, VerificationResult};

use crate::{
    generate::{line, statement},
    render,
    step::Step,
    tables,
};

/// One value in a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for Cell {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::from(if value { "Yes" } else { "No" })
    }
}

/// A titled block of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Appends a `label | value` row.
    fn row(&mut self, label: impl Into<Cell>, value: impl Into<Cell>) {
        self.rows.push(vec![label.into(), value.into()]);
    }

    fn spacer(&mut self) {
        self.row("", "");
    }
}

/// Every section produced for one solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workbook {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Workbook {
    /// The section with the given title, if present.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Builds the workbook for a solved problem.
///
/// Optional sections follow `problem.options`: verification notes at
/// `Detailed` verification detail, teaching notes, and alternative methods.
/// Graphical analysis is produced for 2×2 linear systems.
#[must_use]
pub fn assemble(
    problem: &Problem,
    solution: &Solution,
    verification: &VerificationResult,
    steps: &[Step],
) -> Workbook {
    let problem_type = problem.problem_type();
    let lesson = tables::lesson(problem_type);
    let options = &problem.options;

    let mut sections = vec![
        problem_statement(problem),
        solution_method(problem, steps),
        lesson_section(lesson),
        step_by_step(steps),
        final_solution(solution, steps),
        analysis(problem, solution, steps),
        verification_section(verification, options.verification_detail),
    ];
    if let Some(graph) = graphical_analysis(solution) {
        sections.push(graph);
    }
    if options.include_pedagogical_notes {
        sections.push(teaching_notes(tables::notes(problem_type)));
    }
    if options.include_alternative_methods {
        sections.push(alternative_methods(lesson.method, tables::alternatives(problem_type)));
    }
    tracing::debug!(sections = sections.len(), "assembled workbook");

    Workbook {
        title: format!("{} Workbook", lesson.category),
        sections,
    }
}

fn problem_statement(problem: &Problem) -> Section {
    let lesson = tables::lesson(problem.problem_type());
    let mut section = Section::new("Problem Statement");
    section.row("Problem Type", lesson.name);
    section.row("Category", lesson.category);
    if !problem.raw_input.trim().is_empty() {
        section.row("Input", problem.raw_input.as_str());
    }
    section.row("Equation", render::expr(&statement(&problem.spec)));
    if let Some(coefficients) = problem.spec.polynomial() {
        let n = coefficients.len().saturating_sub(1);
        for (i, &c) in coefficients.iter().enumerate() {
            section.row(format!("Coefficient of {}", power_name(n - i)), c);
        }
    }
    if let Some(scenario) = &problem.scenario {
        section.row("Description", scenario.as_str());
    }
    section
}

fn solution_method(problem: &Problem, steps: &[Step]) -> Section {
    let lesson = tables::lesson(problem.problem_type());
    let options = &problem.options;
    let mut section = Section::new("Solution Method");
    section.row("Method", lesson.method);
    section.row("Explanation Level", level_name(options.explanation_level));
    section.row("Steps", steps.iter().filter(|s| !s.is_bridge()).count());
    section.row("Conceptual Connections", options.include_conceptual_connections);
    section.row("Error Prevention", options.include_error_prevention);
    section.row("Verification in Steps", options.include_verification_in_steps);
    section
}

fn lesson_section(lesson: &tables::Lesson) -> Section {
    let mut section = Section::new("Lesson");
    section.row("Topic", lesson.title);
    section.row("Theory", lesson.theory);
    section.spacer();
    section.row("Key Concepts", "");
    for concept in lesson.concepts {
        section.row("•", *concept);
    }
    if !lesson.formulas.is_empty() {
        section.spacer();
        section.row("Key Formulas", "");
        for &(name, formula) in lesson.formulas {
            section.row(name, formula);
        }
    }
    section
}

fn step_by_step(steps: &[Step]) -> Section {
    let mut section = Section::new("Step-by-Step Solution");
    for step in steps {
        if step.is_bridge() {
            section.row("→ Connection", step.description.as_str());
            section.row("Why", step.reasoning.as_str());
            section.spacer();
            continue;
        }

        section.row(format!("Step {}", step.index), step.title.as_str());
        section.row("Description", step.description.as_str());
        if let Some(before) = &step.before {
            section.row("Before", render::expr(before));
        }
        if let Some(operation) = &step.operation {
            section.row("Operation", operation.as_str());
        }
        if let Some(after) = &step.after {
            section.row("After", render::expr(after));
        }
        if !step.reasoning.is_empty() {
            section.row("Reasoning", step.reasoning.as_str());
        }
        if let Some(rule) = &step.rule {
            section.row("Algebraic Rule", rule.as_str());
        }

        if let Some(explanations) = &step.explanations {
            section.row("Conceptual", explanations.conceptual);
            section.row("Procedural", explanations.procedural);
            if let Some(visual) = explanations.visual {
                section.row("Visual", visual);
            }
            if let Some(algebraic) = explanations.algebraic {
                section.row("Algebraic", algebraic);
            }
        }

        if let Some(prevention) = &step.error_prevention {
            if !prevention.common_mistakes.is_empty() {
                section.row("⚠ Common Mistakes", prevention.common_mistakes.join("; "));
            }
            if let Some(reminder) = prevention.reminder {
                section.row("💡 Reminder", format!("{} ({})", reminder.reminder, reminder.method));
            }
            section.row("Self-Check", prevention.self_check);
        }

        if let Some(scaffolding) = &step.scaffolding {
            section.row("❓ Guiding Questions", scaffolding.guiding_questions.join(" "));
            for (i, sub_step) in scaffolding.sub_steps.iter().enumerate() {
                section.row(format!("  {}.", i + 1), sub_step.as_str());
            }
            for (i, hint) in scaffolding.hints.iter().enumerate() {
                section.row(format!("Hint {}", i + 1), *hint);
            }
        }

        if step.is_final {
            section.row("✓ Final Answer", "Yes");
        }
        section.spacer();
    }
    section
}

fn final_solution(solution: &Solution, steps: &[Step]) -> Section {
    let mut section = Section::new("Final Solution");
    if let Some(after) = steps.iter().find(|s| s.is_final).and_then(|s| s.after.as_ref()) {
        section.row("Answer", render::expr(after));
    }
    section.rows.extend(answer::final_rows(solution));
    section
}

fn analysis(problem: &Problem, solution: &Solution, steps: &[Step]) -> Section {
    let lesson = tables::lesson(problem.problem_type());
    let mut section = Section::new("Analysis");
    section.row("Problem Type", lesson.name);
    section.row("Solution Method", lesson.method);
    section.row("Number of Steps", steps.iter().filter(|s| !s.is_bridge()).count());
    section.row("Explanation Level", level_name(problem.options.explanation_level));
    if let Some(coefficients) = problem.spec.polynomial() {
        section.row("Polynomial Degree", degree(&coefficients));
    }
    section.spacer();
    section.rows.extend(answer::analysis_rows(solution));
    section
}

fn verification_section(verification: &VerificationResult, detail: VerificationDetail) -> Section {
    let mut section = Section::new("Verification");
    if verification.confidence == Confidence::Confirmed {
        section.row("Structural Check", "No substitution needed");
    } else if verification.checks.is_empty() {
        section.row("Structural Check", "Nothing to substitute");
    } else {
        section.rows.push(vec![
            "Value".into(),
            "Substitution".into(),
            "Computed".into(),
            "Expected".into(),
            "Valid".into(),
        ]);
        for check in &verification.checks {
            section.rows.push(vec![
                render::expr(&check.subject).into(),
                render::expr(&Expr::rel(
                    check.relation,
                    check.substitution.clone(),
                    Expr::num(check.expected),
                ))
                .into(),
                check.computed.into(),
                check.expected.into(),
                (if check.is_valid { "✓" } else { "✗" }).into(),
            ]);
        }
    }

    if detail == VerificationDetail::Detailed {
        section.spacer();
        section.row("Confidence", confidence_name(verification.confidence));
        section.row("Notes", confidence_notes(verification));
    }
    section
}

fn graphical_analysis(solution: &Solution) -> Option<Section> {
    let system = match solution {
        Solution::LinearSystem(s) => s,
        Solution::WordProblem(s) => &s.system,
        _ => return None,
    };

    let mut section = Section::new("Graphical Analysis");
    for (i, l) in system.lines.iter().enumerate() {
        section.row(format!("Line {}", i + 1), render::expr(&line(l)));
        match *l {
            Line::SlopeIntercept { slope, intercept } => {
                section.row("Slope", slope);
                section.row("y-intercept", intercept);
            }
            Line::Vertical { x } => {
                section.row("Slope", "undefined");
                section.row("x-intercept", x);
            }
            Line::Degenerate => section.row("Slope", "not a line"),
        }
        for p in l.endpoints() {
            section.rows.push(vec!["Plot point".into(), p.x.into(), p.y.into()]);
        }
        section.spacer();
    }
    match system.values {
        Some(p) => section.rows.push(vec!["Intersection".into(), p.x.into(), p.y.into()]),
        None => section.row("Intersection", "none (parallel or coincident lines)"),
    }
    Some(section)
}

fn teaching_notes(notes: &tables::TeachingNotes) -> Section {
    let mut section = Section::new("Teaching Notes");
    section.row("Learning Objectives", notes.objectives.join("; "));
    section.row("Prerequisites", notes.prerequisites.join("; "));
    section.row("Common Difficulties", notes.difficulties.join("; "));
    section.row("Time Estimate", notes.time_estimate);
    section
}

fn alternative_methods(primary: &str, alternatives: &[tables::Alternative]) -> Section {
    let mut section = Section::new("Alternative Methods");
    section.row("Primary Method Used", primary);
    for (i, alternative) in alternatives.iter().enumerate() {
        section.spacer();
        section.row(format!("{}. {}", i + 1, alternative.name), alternative.description);
        section.row("  When to use", alternative.when_to_use);
    }
    section
}

fn power_name(power: usize) -> String {
    match power {
        0 => "the constant term".to_owned(),
        1 => "x".to_owned(),
        n => render::expr(&Expr::term(1.0, "x", n as u32)),
    }
}

fn level_name(level: ExplanationLevel) -> &'static str {
    match level {
        ExplanationLevel::Basic => "basic",
        ExplanationLevel::Intermediate => "intermediate",
        ExplanationLevel::Detailed => "detailed",
        ExplanationLevel::Scaffolded => "scaffolded",
    }
}

fn confidence_name(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "High",
        Confidence::Medium => "Medium",
        Confidence::Low => "Low",
        Confidence::Confirmed => "Confirmed",
    }
}

fn confidence_notes(verification: &VerificationResult) -> String {
    let passed = verification.checks.iter().filter(|c| c.is_valid).count();
    let tally = format!(
        "{passed} of {} substitutions hold within tolerance",
        verification.checks.len()
    );
    match (verification.note, verification.checks.is_empty()) {
        (Some(note), true) => note.to_owned(),
        (Some(note), false) => format!("{tally}. {note}"),
        (None, _) => tally,
    }
}

#[cfg(test)]
mod tests {
    use stepwise_core::{LinearEquation, ProblemSpec, SolveOptions, SystemMethod};
    use stepwise_solvers::{solve, verify::verify};

    use super::*;
    use crate::{generate::base_steps, passes::enhance};

    fn workbook(problem: &Problem) -> Workbook {
        let solution = solve(problem).expect("should solve");
        let verification = verify(&solution);
        let steps = enhance(
            base_steps(&solution, Some(&verification)),
            &problem.options,
        );
        assemble(problem, &solution, &verification, &steps)
    }

    fn titles(workbook: &Workbook) -> Vec<&str> {
        workbook.sections.iter().map(|s| s.title.as_str()).collect()
    }

    fn value<'a>(section: &'a Section, label: &str) -> Option<&'a Cell> {
        section
            .rows
            .iter()
            .find(|row| row.first() == Some(&Cell::from(label)))
            .and_then(|row| row.get(1))
    }

    #[test]
    fn default_options_produce_every_polynomial_section() {
        let problem = Problem::new(ProblemSpec::Quadratic {
            a: 1.0,
            b: -5.0,
            c: 6.0,
        });
        let workbook = workbook(&problem);
        assert_eq!(workbook.title, "Polynomial Workbook");
        assert_eq!(
            titles(&workbook),
            vec![
                "Problem Statement",
                "Solution Method",
                "Lesson",
                "Step-by-Step Solution",
                "Final Solution",
                "Analysis",
                "Verification",
                "Teaching Notes",
                "Alternative Methods",
            ]
        );

        let statement = workbook.section("Problem Statement").expect("statement");
        assert_eq!(
            value(statement, "Equation"),
            Some(&Cell::from("x² - 5x + 6 = 0"))
        );
        assert_eq!(value(statement, "Coefficient of x"), Some(&Cell::Number(-5.0)));

        let answer = workbook.section("Final Solution").expect("answer");
        assert_eq!(value(answer, "Answer"), Some(&Cell::from("x = 2, x = 3")));

        let verification = workbook.section("Verification").expect("verification");
        assert_eq!(value(verification, "Confidence"), Some(&Cell::from("High")));
    }

    #[test]
    fn minimal_options_drop_optional_sections() {
        let problem = Problem::new(ProblemSpec::Quadratic {
            a: 1.0,
            b: 0.0,
            c: -4.0,
        })
        .with_options(SolveOptions::minimal());
        let workbook = workbook(&problem);

        assert!(workbook.section("Teaching Notes").is_none());
        assert!(workbook.section("Alternative Methods").is_none());
        let verification = workbook.section("Verification").expect("verification");
        assert!(value(verification, "Confidence").is_none());

        let steps = workbook.section("Step-by-Step Solution").expect("steps");
        assert!(value(steps, "→ Connection").is_none());
        assert!(value(steps, "Conceptual").is_none());
    }

    #[test]
    fn two_by_two_systems_get_a_graph() {
        let problem = Problem::new(ProblemSpec::System2 {
            method: SystemMethod::Graphical,
            equations: [
                LinearEquation::new(1.0, 1.0, 5.0),
                LinearEquation::new(1.0, -1.0, 1.0),
            ],
        });
        let workbook = workbook(&problem);
        assert_eq!(workbook.title, "Linear System Workbook");

        let graph = workbook.section("Graphical Analysis").expect("graph");
        assert_eq!(value(graph, "Line 1"), Some(&Cell::from("y = -x + 5")));
        let intersection = graph
            .rows
            .iter()
            .find(|row| row.first() == Some(&Cell::from("Intersection")))
            .expect("intersection row");
        assert_eq!(intersection[1..], [Cell::Number(3.0), Cell::Number(2.0)]);
    }

    #[test]
    fn structural_outcomes_are_confirmed() {
        let problem = Problem::new(ProblemSpec::System2 {
            method: SystemMethod::Elimination,
            equations: [
                LinearEquation::new(2.0, 1.0, 5.0),
                LinearEquation::new(4.0, 2.0, 10.0),
            ],
        });
        let workbook = workbook(&problem);
        let verification = workbook.section("Verification").expect("verification");
        assert_eq!(
            value(verification, "Structural Check"),
            Some(&Cell::from("No substitution needed"))
        );
        assert_eq!(value(verification, "Confidence"), Some(&Cell::from("Confirmed")));
    }

    #[test]
    fn partial_quartic_is_low_with_a_note() {
        let problem = Problem::new(ProblemSpec::Quartic {
            coefficients: [1.0, 1.0, 0.0, 0.0, 1.0],
        });
        let workbook = workbook(&problem);
        let verification = workbook.section("Verification").expect("verification");
        assert_eq!(
            value(verification, "Structural Check"),
            Some(&Cell::from("Nothing to substitute"))
        );
        assert_eq!(value(verification, "Confidence"), Some(&Cell::from("Low")));
        let Some(Cell::Text(notes)) = value(verification, "Notes") else {
            panic!("expected a notes row");
        };
        assert!(notes.contains("could not be split"));
    }

    #[test]
    fn cells_serialize_untagged() {
        let row = vec![Cell::from("Slope"), Cell::from(2.5)];
        let json = serde_json::to_string(&row).expect("serializes");
        assert_eq!(json, r#"["Slope",2.5]"#);
    }
}
