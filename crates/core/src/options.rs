use serde::{Deserialize, Serialize};

/// How much explanation accompanies each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationLevel {
    /// Essential steps only.
    Basic,
    /// Main steps with brief explanations.
    #[default]
    Intermediate,
    /// Full explanations with reasoning.
    Detailed,
    /// Guided discovery with questions and hints.
    Scaffolded,
}

/// How much of the verification is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationDetail {
    Basic,
    #[default]
    Detailed,
}

/// Options controlling step enhancement and workbook content.
///
/// Every field has a default, so a request may name only what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolveOptions {
    pub explanation_level: ExplanationLevel,
    pub include_error_prevention: bool,
    pub include_conceptual_connections: bool,
    pub include_alternative_methods: bool,
    pub include_pedagogical_notes: bool,
    pub include_verification_in_steps: bool,
    pub verification_detail: VerificationDetail,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            explanation_level: ExplanationLevel::Intermediate,
            include_error_prevention: true,
            include_conceptual_connections: true,
            include_alternative_methods: true,
            include_pedagogical_notes: true,
            include_verification_in_steps: true,
            verification_detail: VerificationDetail::Detailed,
        }
    }
}

impl SolveOptions {
    /// Options with every optional enhancement turned off.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            explanation_level: ExplanationLevel::Basic,
            include_error_prevention: false,
            include_conceptual_connections: false,
            include_alternative_methods: false,
            include_pedagogical_notes: false,
            include_verification_in_steps: false,
            verification_detail: VerificationDetail::Basic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let options: SolveOptions = toml::from_str(
            r#"
            explanationLevel = "scaffolded"
            includeErrorPrevention = false
            "#,
        )
        .expect("valid options");

        assert_eq!(options.explanation_level, ExplanationLevel::Scaffolded);
        assert!(!options.include_error_prevention);
        assert!(options.include_alternative_methods);
        assert_eq!(options.verification_detail, VerificationDetail::Detailed);
    }

    #[test]
    fn levels_are_ordered_by_verbosity() {
        assert!(ExplanationLevel::Basic < ExplanationLevel::Intermediate);
        assert!(ExplanationLevel::Detailed < ExplanationLevel::Scaffolded);
    }
}
