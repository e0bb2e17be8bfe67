//! Request files and the command-line flags that build the same requests.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use stepwise_core::{ExplanationLevel, SolveOptions, SystemMethod};
use stepwise_explain::{PolynomialConfig, SolveResult, SystemConfig};

/// One solve request, as read from a TOML or JSON file.
///
/// The `kind` key selects the entry point; every other key belongs to that
/// entry point's config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    Polynomial(PolynomialConfig),
    System(SystemConfig),
}

impl Request {
    /// Reads a request, choosing the format by file extension.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, has an extension other than `toml`
    /// or `json`, or does not describe a request.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let request = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&text)
                .with_context(|| format!("invalid TOML request in {}", path.display()))?,
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON request in {}", path.display()))?,
            _ => bail!(
                "unsupported request file {}: expected a .toml or .json extension",
                path.display()
            ),
        };
        tracing::debug!(path = %path.display(), "loaded request");
        Ok(request)
    }

    /// Replaces the request's options.
    #[must_use]
    pub fn with_options(self, options: SolveOptions) -> Self {
        match self {
            Self::Polynomial(config) => Self::Polynomial(PolynomialConfig { options, ..config }),
            Self::System(config) => Self::System(SystemConfig { options, ..config }),
        }
    }

    #[must_use]
    pub fn options(&self) -> SolveOptions {
        match self {
            Self::Polynomial(config) => config.options,
            Self::System(config) => config.options,
        }
    }

    /// Classifies, solves, and explains the request.
    ///
    /// # Errors
    ///
    /// Fails with the engine's error when the request cannot be classified
    /// or solved.
    pub fn solve(&self) -> Result<SolveResult> {
        let result = match self {
            Self::Polynomial(config) => stepwise_explain::solve_polynomial(config),
            Self::System(config) => stepwise_explain::solve_simultaneous_system(config),
        };
        result.context("could not solve the request")
    }
}

/// Option overrides given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub level: Option<ExplanationLevel>,
    pub minimal: bool,
    pub no_bridges: bool,
    pub no_error_prevention: bool,
    pub no_alternatives: bool,
    pub no_notes: bool,
    pub hide_verification: bool,
}

impl Overrides {
    /// Applies the overrides on top of `options`.
    ///
    /// `minimal` starts from [`SolveOptions::minimal`]; an explicit level
    /// still wins over it.
    #[must_use]
    pub fn apply(self, options: SolveOptions) -> SolveOptions {
        let mut options = if self.minimal {
            SolveOptions::minimal()
        } else {
            options
        };
        if let Some(level) = self.level {
            options.explanation_level = level;
        }
        options.include_conceptual_connections &= !self.no_bridges;
        options.include_error_prevention &= !self.no_error_prevention;
        options.include_alternative_methods &= !self.no_alternatives;
        options.include_pedagogical_notes &= !self.no_notes;
        options.include_verification_in_steps &= !self.hide_verification;
        options
    }
}

/// A polynomial request built from flags.
#[must_use]
pub fn polynomial(equation: String, scenario: Option<String>) -> Request {
    Request::Polynomial(PolynomialConfig {
        equation: Some(equation),
        scenario,
        ..PolynomialConfig::default()
    })
}

/// A system request built from flags.
#[must_use]
pub fn system(
    equations: Vec<String>,
    method: Option<SystemMethod>,
    labels: Option<[String; 2]>,
    scenario: Option<String>,
) -> Request {
    Request::System(SystemConfig {
        equations,
        method,
        labels,
        scenario,
        ..SystemConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use stepwise_core::{ProblemSpec, Solution};

    use super::*;

    #[test]
    fn reads_a_tagged_toml_request() {
        let request: Request = toml::from_str(
            r#"
            kind = "system"
            equations = ["2x + 3y = 12", "x - y = 1"]
            method = "elimination"

            [options]
            explanationLevel = "scaffolded"
            "#,
        )
        .expect("valid request");

        let Request::System(config) = &request else {
            panic!("expected a system request");
        };
        assert_eq!(config.method, Some(SystemMethod::Elimination));
        assert_eq!(request.options().explanation_level, ExplanationLevel::Scaffolded);
        assert!(request.options().include_error_prevention);
    }

    #[test]
    fn reads_a_tagged_json_request_with_an_explicit_spec() {
        let request: Request = serde_json::from_str(
            r#"{
                "kind": "polynomial",
                "spec": {"type": "remainder_theorem", "coefficients": [1.0, 0.0, -4.0], "point": 3.0}
            }"#,
        )
        .expect("valid request");

        let result = request.solve().expect("should solve");
        let Solution::Remainder(remainder) = &result.solution else {
            panic!("expected a remainder theorem solution");
        };
        assert_eq!(
            result.problem.spec,
            ProblemSpec::RemainderTheorem {
                coefficients: vec![1.0, 0.0, -4.0],
                point: 3.0,
            }
        );
        assert!((remainder.value - 5.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_an_unknown_kind() {
        let result: Result<Request, _> = serde_json::from_str(r#"{"kind": "matrix"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        let error = Request::load(Path::new("request.yaml")).expect_err("should fail");
        assert!(error.to_string().contains("request.yaml"));
    }

    #[test]
    fn overrides_only_turn_features_off() {
        let options = Overrides {
            no_bridges: true,
            hide_verification: true,
            ..Overrides::default()
        }
        .apply(SolveOptions::minimal());
        assert_eq!(options, SolveOptions::minimal());

        let options = Overrides {
            no_bridges: true,
            ..Overrides::default()
        }
        .apply(SolveOptions::default());
        assert!(!options.include_conceptual_connections);
        assert!(options.include_error_prevention);
    }

    #[test]
    fn explicit_level_wins_over_minimal() {
        let options = Overrides {
            level: Some(ExplanationLevel::Detailed),
            minimal: true,
            ..Overrides::default()
        }
        .apply(SolveOptions::default());
        assert_eq!(options.explanation_level, ExplanationLevel::Detailed);
        assert!(!options.include_conceptual_connections);
    }

    #[test]
    fn flag_requests_solve() {
        let request = system(
            vec!["x + y = 5".to_owned(), "x - y = 1".to_owned()],
            Some(SystemMethod::Substitution),
            None,
            None,
        );
        let result = request.solve().expect("should solve");
        assert!(result.verification.all_valid());

        let request = polynomial("x^2 - 5x + 6 = 0".to_owned(), None);
        assert!(request.solve().is_ok());
    }
}
