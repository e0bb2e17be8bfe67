//! Keyword registries for detecting a problem type from prose.
//!
//! Each registry is an ordered list of `(type, patterns)`. Types are tried in
//! order and the first type with any matching pattern wins; there is no
//! scoring, so an earlier entry shadows a later one whenever both match.

use std::sync::LazyLock;

use regex::Regex;
use stepwise_core::ProblemType;

type Registry = Vec<(ProblemType, Vec<Regex>)>;

const POLYNOMIAL: &[(ProblemType, &[&str])] = &[
    (
        ProblemType::QuadraticStandard,
        &[r"quadratic\s+(equation|formula)", r"^\s*quadratic\s*$"],
    ),
    (
        ProblemType::QuadraticFactoring,
        &[r"factor.*quadratic", r"factorable.*quadratic", r"solve.*by.*factoring"],
    ),
    (ProblemType::CompletingSquare, &[r"complet.*square", r"vertex.*form"]),
    (ProblemType::CubicEquation, &[r"cubic"]),
    (
        ProblemType::QuarticEquation,
        &[r"quartic", r"fourth.*degree", r"biquadratic"],
    ),
    (
        ProblemType::PolynomialDivision,
        &[r"divid.*polynomial", r"long.*division"],
    ),
    (ProblemType::SyntheticDivision, &[r"synthetic.*divi"]),
    (ProblemType::RationalRoot, &[r"rational.*root", r"possible.*root"]),
    (
        ProblemType::PolynomialFactoring,
        &[r"factor.*polynomial", r"factori[sz]e", r"complete.*factorization"],
    ),
    (
        ProblemType::PolynomialRoots,
        &[r"find.*root.*polynomial", r"solve.*polynomial", r"root.*polynomial", r"all.*roots"],
    ),
    (
        ProblemType::PolynomialInequality,
        &[r"polynomial.*inequality", r"quadratic.*inequality", r"x(\^2|²).*[<>≤≥]"],
    ),
    (
        ProblemType::PolynomialGraphing,
        &[r"graph.*polynomial", r"sketch.*polynomial", r"plot.*polynomial", r"end.*behavio"],
    ),
    (
        ProblemType::RemainderTheorem,
        &[r"remainder.*theorem", r"factor.*theorem", r"evaluate.*polynomial"],
    ),
    (
        ProblemType::PolynomialApplications,
        &[
            r"polynomial.*application",
            r"polynomial.*word.*problem",
            r"polynomial.*model",
            r"projectile",
            r"revenue",
        ],
    ),
];

const SYSTEM: &[(ProblemType, &[&str])] = &[
    (ProblemType::System2x2Substitution, &[r"substitution"]),
    (
        ProblemType::System2x2Elimination,
        &[r"elimination", r"addition.*method"],
    ),
    (ProblemType::System2x2Graphical, &[r"graph"]),
    (
        ProblemType::System2x2Matrix,
        &[r"matrix", r"cramer", r"determinant.*method"],
    ),
    (
        ProblemType::System3x3,
        &[r"3\s*x\s*3", r"three.*equation", r"three.*variable"],
    ),
    (
        ProblemType::SystemWordProblem,
        &[r"word.*problem", r"application.*simultaneous"],
    ),
    (
        ProblemType::SystemInequalities,
        &[r"inequalit", r"linear.*programming"],
    ),
    (
        ProblemType::SystemNonlinear,
        &[r"nonlinear", r"non-linear", r"quadratic.*linear", r"parabola"],
    ),
];

static POLYNOMIAL_REGISTRY: LazyLock<Registry> = LazyLock::new(|| compile(POLYNOMIAL));
static SYSTEM_REGISTRY: LazyLock<Registry> = LazyLock::new(|| compile(SYSTEM));

fn compile(table: &[(ProblemType, &[&str])]) -> Registry {
    table
        .iter()
        .map(|(problem_type, patterns)| {
            let patterns = patterns
                .iter()
                .map(|pattern| Regex::new(&format!("(?i){pattern}")).expect("valid regex literal"))
                .collect();
            (*problem_type, patterns)
        })
        .collect()
}

fn detect(registry: &Registry, texts: &[&str]) -> Option<ProblemType> {
    registry
        .iter()
        .find(|(_, patterns)| {
            patterns
                .iter()
                .any(|pattern| texts.iter().any(|text| pattern.is_match(text)))
        })
        .map(|(problem_type, _)| *problem_type)
}

/// First polynomial type whose patterns match any of `texts`.
#[must_use]
pub fn detect_polynomial(texts: &[&str]) -> Option<ProblemType> {
    detect(&POLYNOMIAL_REGISTRY, texts)
}

/// First system type whose patterns match any of `texts`.
#[must_use]
pub fn detect_system(texts: &[&str]) -> Option<ProblemType> {
    detect(&SYSTEM_REGISTRY, texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(POLYNOMIAL_REGISTRY.len(), POLYNOMIAL.len());
        assert_eq!(SYSTEM_REGISTRY.len(), SYSTEM.len());
    }

    #[test]
    fn detects_by_keyword_in_either_text() {
        assert_eq!(
            detect_polynomial(&["x^3 - 1 = 0", "Solve this cubic"]),
            Some(ProblemType::CubicEquation)
        );
        assert_eq!(
            detect_polynomial(&["Use synthetic division", ""]),
            Some(ProblemType::SyntheticDivision)
        );
        assert_eq!(
            detect_system(&["Solve using Cramer's rule"]),
            Some(ProblemType::System2x2Matrix)
        );
    }

    #[test]
    fn earlier_entry_wins() {
        // Matches both the factoring and the factor-theorem patterns.
        assert_eq!(
            detect_polynomial(&["factor the quadratic using the factor theorem"]),
            Some(ProblemType::QuadraticFactoring)
        );
        assert_eq!(
            detect_system(&["graph the system of inequalities"]),
            Some(ProblemType::System2x2Graphical)
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            detect_polynomial(&["QUARTIC"]),
            Some(ProblemType::QuarticEquation)
        );
    }

    #[test]
    fn no_match() {
        assert_eq!(detect_polynomial(&["hello"]), None);
        assert_eq!(detect_system(&["2x + y = 4"]), None);
    }
}
