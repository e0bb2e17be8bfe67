//! Turning requests into [`Problem`]s.
//!
//! A request carrying an explicit [`ProblemSpec`] is used as given; this is
//! the primary path. Everything else goes through a best-effort adapter:
//!
//! 1. an explicit problem type (or system method) selects the solver and the
//!    coefficients come from parameters or equation text;
//! 2. otherwise keyword registries are tried against the equation and the
//!    scenario, first match wins;
//! 3. otherwise the shape of the equation decides (degree, relation, number of
//!    equations);
//! 4. a polynomial request with bare `a`/`b`/`c` parameters falls back to the
//!    quadratic formula.

mod parse;
mod patterns;

use serde::Deserialize;
use stepwise_core::{
    Error, LinearEquation, LinearEquation3, LinearInequality, Problem, ProblemSpec, ProblemType,
    Relation, SolveOptions, SystemMethod, tolerance::is_zero,
};

pub use parse::{
    LinearText, ParseError, PolynomialText, extract_math, parse_division, parse_linear,
    parse_parabola, parse_polynomial,
};
pub use patterns::{detect_polynomial, detect_system};

/// Named values that fill in or override what the equation text provides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolynomialParameters {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    /// Leading coefficient first.
    pub coefficients: Option<Vec<f64>>,
    pub divisor: Option<Vec<f64>>,
    /// `c` of a synthetic division by `(x - c)`.
    pub root: Option<f64>,
    /// Where the Remainder Theorem evaluates.
    pub point: Option<f64>,
    pub relation: Option<Relation>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

impl PolynomialParameters {
    fn has_abc(&self) -> bool {
        self.a.is_some() || self.b.is_some() || self.c.is_some()
    }

    fn abc(&self) -> Vec<f64> {
        vec![
            self.a.unwrap_or(1.0),
            self.b.unwrap_or(0.0),
            self.c.unwrap_or(0.0),
        ]
    }
}

/// A request to solve a single-polynomial problem.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolynomialConfig {
    /// Bypasses detection entirely.
    pub spec: Option<ProblemSpec>,
    pub equation: Option<String>,
    pub scenario: Option<String>,
    pub parameters: PolynomialParameters,
    pub problem_type: Option<ProblemType>,
    pub options: SolveOptions,
}

/// A request to solve a system of equations or inequalities.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemConfig {
    /// Bypasses detection entirely.
    pub spec: Option<ProblemSpec>,
    pub equations: Vec<String>,
    pub scenario: Option<String>,
    pub method: Option<SystemMethod>,
    pub problem_type: Option<ProblemType>,
    /// Names of `x` and `y` in a word problem.
    pub labels: Option<[String; 2]>,
    pub options: SolveOptions,
}

/// Classifies a polynomial request.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedProblemType`] when nothing identifies the
/// problem, [`Error::MissingParameter`] when the chosen type needs a value the
/// request lacks, and [`Error::InvalidInput`] for unreadable equation text or
/// a system type.
pub fn classify_polynomial(config: &PolynomialConfig) -> Result<Problem, Error> {
    let equation = config.equation.as_deref().unwrap_or_default();
    let scenario = config.scenario.as_deref().unwrap_or_default();

    let spec = match (&config.spec, config.problem_type) {
        (Some(spec), _) => spec.clone(),
        (None, Some(problem_type)) => polynomial_spec(problem_type, config)?,
        (None, None) => {
            let problem_type = detect_polynomial(&[equation, scenario])
                .or_else(|| polynomial_shape(equation))
                .or_else(|| {
                    config
                        .parameters
                        .has_abc()
                        .then_some(ProblemType::QuadraticStandard)
                })
                .ok_or_else(|| Error::UnrecognizedProblemType {
                    input: first_nonempty(equation, scenario).to_owned(),
                })?;
            polynomial_spec(problem_type, config)?
        }
    };
    if !spec.problem_type().is_polynomial() {
        return Err(Error::invalid_input(format!(
            "{:?} is not a polynomial problem",
            spec.problem_type()
        )));
    }
    tracing::debug!(problem_type = ?spec.problem_type(), "classified polynomial problem");

    Ok(build(
        spec,
        first_nonempty(equation, scenario),
        config.scenario.as_deref(),
        config.options,
    ))
}

/// Classifies a system request.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when there are no equations or a word
/// problem has no labels, and [`Error::InvalidInput`] when the equations do
/// not fit the chosen type or a polynomial type is requested.
pub fn classify_system(config: &SystemConfig) -> Result<Problem, Error> {
    let scenario = config.scenario.as_deref().unwrap_or_default();

    let spec = match (&config.spec, config.problem_type, config.method) {
        (Some(spec), ..) => spec.clone(),
        (None, Some(problem_type), _) => system_spec(problem_type, config)?,
        (None, None, Some(method)) => system_spec(method_type(method), config)?,
        (None, None, None) => {
            let problem_type = match detect_system(&[scenario]) {
                Some(problem_type) => problem_type,
                None => system_shape(&config.equations)?,
            };
            system_spec(problem_type, config)?
        }
    };
    if !spec.problem_type().is_system() {
        return Err(Error::invalid_input(format!(
            "{:?} is not a system problem",
            spec.problem_type()
        )));
    }
    tracing::debug!(problem_type = ?spec.problem_type(), "classified system");

    let raw_input = config.equations.join("; ");
    Ok(build(
        spec,
        &raw_input,
        config.scenario.as_deref(),
        config.options,
    ))
}

fn build(
    spec: ProblemSpec,
    raw_input: &str,
    scenario: Option<&str>,
    options: SolveOptions,
) -> Problem {
    let problem = Problem::new(spec)
        .with_raw_input(raw_input)
        .with_options(options);
    match scenario.map(str::trim) {
        Some(scenario) if !scenario.is_empty() => problem.with_scenario(scenario),
        _ => problem,
    }
}

fn first_nonempty<'a>(first: &'a str, second: &'a str) -> &'a str {
    if first.trim().is_empty() { second } else { first }
}

/// Problem type implied by the form of the equation alone.
fn polynomial_shape(equation: &str) -> Option<ProblemType> {
    let math = extract_math(equation)?;
    if math.contains('÷') {
        return Some(ProblemType::PolynomialDivision);
    }
    let parsed = parse_polynomial(math).ok()?;
    match (parsed.relation, parsed.degree()) {
        (Relation::Eq, 2) => Some(ProblemType::QuadraticStandard),
        (Relation::Eq, 3) => Some(ProblemType::CubicEquation),
        (Relation::Eq, 4) => Some(ProblemType::QuarticEquation),
        (Relation::Eq, _) | (_, 0) => None,
        _ => Some(ProblemType::PolynomialInequality),
    }
}

fn polynomial_spec(
    problem_type: ProblemType,
    config: &PolynomialConfig,
) -> Result<ProblemSpec, Error> {
    let params = &config.parameters;
    let text = config.equation.as_deref().and_then(extract_math);

    let parsed = || -> Result<Option<PolynomialText>, Error> {
        match text {
            Some(text) if !text.contains(['÷', '/']) => Ok(Some(parse_polynomial(text)?)),
            _ => Ok(None),
        }
    };
    let coefficients = || -> Result<Vec<f64>, Error> {
        if let Some(coefficients) = &params.coefficients {
            return Ok(coefficients.clone());
        }
        if let Some(parsed) = parsed()? {
            return Ok(parsed.coefficients);
        }
        if params.has_abc() {
            return Ok(params.abc());
        }
        Err(Error::MissingParameter {
            name: "coefficients",
        })
    };
    let quadratic = || -> Result<[f64; 3], Error> {
        if params.has_abc() && params.coefficients.is_none() {
            return fixed(params.abc());
        }
        fixed(coefficients()?)
    };

    Ok(match problem_type {
        ProblemType::QuadraticStandard => {
            let [a, b, c] = quadratic()?;
            ProblemSpec::Quadratic { a, b, c }
        }
        ProblemType::QuadraticFactoring => {
            let [a, b, c] = quadratic()?;
            ProblemSpec::QuadraticFactoring { a, b, c }
        }
        ProblemType::CompletingSquare => {
            let [a, b, c] = quadratic()?;
            ProblemSpec::CompletingSquare { a, b, c }
        }
        ProblemType::CubicEquation => ProblemSpec::Cubic {
            coefficients: fixed(coefficients()?)?,
        },
        ProblemType::QuarticEquation => ProblemSpec::Quartic {
            coefficients: fixed(coefficients()?)?,
        },
        ProblemType::PolynomialDivision => {
            let from_text = match text {
                Some(text) if text.contains(['÷', '/']) => Some(parse_division(text)?),
                _ => None,
            };
            let dividend = match (&params.coefficients, &from_text) {
                (Some(coefficients), _) => coefficients.clone(),
                (None, Some((dividend, _))) => dividend.clone(),
                (None, None) => {
                    return Err(Error::MissingParameter {
                        name: "coefficients",
                    });
                }
            };
            let divisor = match (&params.divisor, from_text) {
                (Some(divisor), _) => divisor.clone(),
                (None, Some((_, divisor))) => divisor,
                (None, None) => return Err(Error::MissingParameter { name: "divisor" }),
            };
            ProblemSpec::PolynomialDivision { dividend, divisor }
        }
        ProblemType::SyntheticDivision => {
            let root = match (params.root, params.divisor.as_deref()) {
                (Some(root), _) => root,
                (None, Some(&[lead, constant])) if !is_zero(lead) => -constant / lead,
                _ => return Err(Error::MissingParameter { name: "root" }),
            };
            ProblemSpec::SyntheticDivision {
                coefficients: coefficients()?,
                root,
            }
        }
        ProblemType::RationalRoot => ProblemSpec::RationalRoots {
            coefficients: coefficients()?,
        },
        ProblemType::PolynomialFactoring => ProblemSpec::Factoring {
            coefficients: coefficients()?,
        },
        ProblemType::PolynomialRoots => ProblemSpec::AllRoots {
            coefficients: coefficients()?,
        },
        ProblemType::PolynomialInequality => {
            let from_text = parsed()?.map(|parsed| parsed.relation);
            let relation = params
                .relation
                .or(from_text.filter(|r| *r != Relation::Eq))
                .ok_or(Error::MissingParameter { name: "relation" })?;
            ProblemSpec::Inequality {
                coefficients: coefficients()?,
                relation,
            }
        }
        ProblemType::PolynomialGraphing => ProblemSpec::Graphing {
            coefficients: coefficients()?,
        },
        ProblemType::RemainderTheorem => ProblemSpec::RemainderTheorem {
            coefficients: coefficients()?,
            point: params.point.ok_or(Error::MissingParameter { name: "point" })?,
        },
        ProblemType::PolynomialApplications => ProblemSpec::Application {
            coefficients: coefficients()?,
            quantity: params.quantity.clone().unwrap_or_else(|| "x".to_owned()),
            unit: params.unit.clone(),
        },
        ProblemType::System2x2Substitution
        | ProblemType::System2x2Elimination
        | ProblemType::System2x2Graphical
        | ProblemType::System2x2Matrix
        | ProblemType::System3x3
        | ProblemType::SystemWordProblem
        | ProblemType::SystemInequalities
        | ProblemType::SystemNonlinear => {
            return Err(Error::invalid_input(format!(
                "{problem_type:?} is not a polynomial problem"
            )));
        }
    })
}

/// Left-pads with zeros to exactly `N` coefficients.
fn fixed<const N: usize>(coefficients: Vec<f64>) -> Result<[f64; N], Error> {
    if coefficients.len() > N {
        return Err(Error::invalid_input(format!(
            "expected at most {N} coefficients, got {}",
            coefficients.len()
        )));
    }
    let mut padded = [0.0; N];
    padded[N - coefficients.len()..].copy_from_slice(&coefficients);
    Ok(padded)
}

fn method_type(method: SystemMethod) -> ProblemType {
    match method {
        SystemMethod::Substitution => ProblemType::System2x2Substitution,
        SystemMethod::Elimination => ProblemType::System2x2Elimination,
        SystemMethod::Graphical => ProblemType::System2x2Graphical,
        SystemMethod::Matrix => ProblemType::System2x2Matrix,
    }
}

/// Problem type implied by the equations: any inequality makes an inequality
/// system, any power of `x` a nonlinear system, three equations a 3×3 system;
/// otherwise substitution when a variable is already isolated and
/// elimination when not.
fn system_shape(equations: &[String]) -> Result<ProblemType, Error> {
    if equations.is_empty() {
        return Err(Error::MissingParameter { name: "equations" });
    }
    if equations.iter().any(|eq| eq.contains(['^', '²'])) {
        return Ok(ProblemType::SystemNonlinear);
    }
    let parsed = equations
        .iter()
        .map(|eq| parse_linear(eq))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(if parsed.iter().any(|eq| eq.relation != Relation::Eq) {
        ProblemType::SystemInequalities
    } else if parsed.len() == 3 {
        ProblemType::System3x3
    } else if parsed.iter().any(|eq| eq.isolated) {
        ProblemType::System2x2Substitution
    } else {
        ProblemType::System2x2Elimination
    })
}

fn system_spec(problem_type: ProblemType, config: &SystemConfig) -> Result<ProblemSpec, Error> {
    let equations = &config.equations;
    if equations.is_empty() {
        return Err(Error::MissingParameter { name: "equations" });
    }

    Ok(match problem_type {
        ProblemType::System2x2Substitution => ProblemSpec::System2 {
            method: SystemMethod::Substitution,
            equations: two_equations(equations)?,
        },
        ProblemType::System2x2Elimination => ProblemSpec::System2 {
            method: SystemMethod::Elimination,
            equations: two_equations(equations)?,
        },
        ProblemType::System2x2Graphical => ProblemSpec::System2 {
            method: SystemMethod::Graphical,
            equations: two_equations(equations)?,
        },
        ProblemType::System2x2Matrix => ProblemSpec::System2 {
            method: SystemMethod::Matrix,
            equations: two_equations(equations)?,
        },
        ProblemType::System3x3 => ProblemSpec::System3 {
            equations: three_equations(equations)?,
        },
        ProblemType::SystemWordProblem => ProblemSpec::WordProblem {
            equations: two_equations(equations)?,
            labels: config
                .labels
                .clone()
                .ok_or(Error::MissingParameter { name: "labels" })?,
        },
        ProblemType::SystemInequalities => ProblemSpec::InequalitySystem {
            inequalities: equations
                .iter()
                .map(|text| {
                    let parsed = planar(text)?;
                    Ok(LinearInequality::new(
                        parsed.a,
                        parsed.b,
                        parsed.relation,
                        parsed.d,
                    ))
                })
                .collect::<Result<_, Error>>()?,
        },
        ProblemType::SystemNonlinear => {
            let [first, second] = exactly::<2>(equations)?;
            let (line, parabola) = match (parse_parabola(first), parse_parabola(second)) {
                (Ok(parabola), _) if !is_zero(parabola[0]) => (second, parabola),
                (_, Ok(parabola)) if !is_zero(parabola[0]) => (first, parabola),
                _ => {
                    return Err(Error::invalid_input(
                        "a nonlinear system needs one equation of the form y = ax² + bx + c",
                    ));
                }
            };
            let line = linear_equation(line)?;
            ProblemSpec::Nonlinear { line, parabola }
        }
        ProblemType::QuadraticStandard
        | ProblemType::QuadraticFactoring
        | ProblemType::CompletingSquare
        | ProblemType::CubicEquation
        | ProblemType::QuarticEquation
        | ProblemType::PolynomialDivision
        | ProblemType::SyntheticDivision
        | ProblemType::RationalRoot
        | ProblemType::PolynomialFactoring
        | ProblemType::PolynomialRoots
        | ProblemType::PolynomialInequality
        | ProblemType::PolynomialGraphing
        | ProblemType::RemainderTheorem
        | ProblemType::PolynomialApplications => {
            return Err(Error::invalid_input(format!(
                "{problem_type:?} is not a system problem"
            )));
        }
    })
}

fn exactly<const N: usize>(equations: &[String]) -> Result<[&str; N], Error> {
    if equations.len() != N {
        return Err(Error::invalid_input(format!(
            "expected {N} equations, got {}",
            equations.len()
        )));
    }
    Ok(std::array::from_fn(|i| equations[i].as_str()))
}

/// A linear relation in `x` and `y` only.
fn planar(text: &str) -> Result<LinearText, Error> {
    let parsed = parse_linear(text)?;
    if !is_zero(parsed.c) {
        return Err(Error::invalid_input(format!(
            "`{}` uses z in a two-variable system",
            text.trim()
        )));
    }
    Ok(parsed)
}

fn linear_equation(text: &str) -> Result<LinearEquation, Error> {
    let parsed = planar(text)?;
    if parsed.relation != Relation::Eq {
        return Err(Error::invalid_input(format!(
            "`{}` is not an equation",
            text.trim()
        )));
    }
    Ok(LinearEquation::new(parsed.a, parsed.b, parsed.d))
}

fn two_equations(equations: &[String]) -> Result<[LinearEquation; 2], Error> {
    let [first, second] = exactly::<2>(equations)?;
    Ok([linear_equation(first)?, linear_equation(second)?])
}

fn three_equations(equations: &[String]) -> Result<[LinearEquation3; 3], Error> {
    let texts = exactly::<3>(equations)?;
    let mut parsed = [LinearEquation3::new(0.0, 0.0, 0.0, 0.0); 3];
    for (slot, text) in parsed.iter_mut().zip(texts) {
        let eq = parse_linear(text)?;
        if eq.relation != Relation::Eq {
            return Err(Error::invalid_input(format!(
                "`{}` is not an equation",
                text.trim()
            )));
        }
        *slot = LinearEquation3::new(eq.a, eq.b, eq.c, eq.d);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polynomial(equation: &str) -> PolynomialConfig {
        PolynomialConfig {
            equation: Some(equation.to_owned()),
            ..PolynomialConfig::default()
        }
    }

    fn system(equations: &[&str]) -> SystemConfig {
        SystemConfig {
            equations: equations.iter().map(|eq| (*eq).to_owned()).collect(),
            ..SystemConfig::default()
        }
    }

    #[test]
    fn explicit_spec_bypasses_detection() {
        let spec = ProblemSpec::Cubic {
            coefficients: [1.0, -6.0, 11.0, -6.0],
        };
        let config = PolynomialConfig {
            spec: Some(spec.clone()),
            equation: Some("quartic nonsense".to_owned()),
            ..PolynomialConfig::default()
        };
        let problem = classify_polynomial(&config).expect("should classify");
        assert_eq!(problem.spec, spec);
    }

    #[test]
    fn quadratic_from_text_shape() {
        let problem =
            classify_polynomial(&polynomial("Solve 2x^2 - 3x + 1 = 0")).expect("should classify");
        assert_eq!(
            problem.spec,
            ProblemSpec::Quadratic {
                a: 2.0,
                b: -3.0,
                c: 1.0
            }
        );
        assert_eq!(problem.raw_input, "Solve 2x^2 - 3x + 1 = 0");
    }

    #[test]
    fn keyword_in_scenario_selects_type() {
        let config = PolynomialConfig {
            scenario: Some("Find the rational roots".to_owned()),
            ..polynomial("x^3 - 6x^2 + 11x - 6 = 0")
        };
        let problem = classify_polynomial(&config).expect("should classify");
        assert_eq!(problem.problem_type(), ProblemType::RationalRoot);
        assert_eq!(problem.scenario.as_deref(), Some("Find the rational roots"));
    }

    #[test]
    fn inequality_from_shape() {
        let problem = classify_polynomial(&polynomial("x^3 - x > 0")).expect("should classify");
        assert_eq!(
            problem.spec,
            ProblemSpec::Inequality {
                coefficients: vec![1.0, 0.0, -1.0, 0.0],
                relation: Relation::Gt
            }
        );
    }

    #[test]
    fn quadratic_inequality_keyword() {
        let problem = classify_polynomial(&polynomial("x^2 - 4 > 0")).expect("should classify");
        assert_eq!(problem.problem_type(), ProblemType::PolynomialInequality);
    }

    #[test]
    fn division_from_text() {
        let config = PolynomialConfig {
            problem_type: Some(ProblemType::PolynomialDivision),
            ..polynomial("(x^3 - 1) ÷ (x - 1)")
        };
        let problem = classify_polynomial(&config).expect("should classify");
        assert_eq!(
            problem.spec,
            ProblemSpec::PolynomialDivision {
                dividend: vec![1.0, 0.0, 0.0, -1.0],
                divisor: vec![1.0, -1.0]
            }
        );
    }

    #[test]
    fn parameters_fall_back_to_quadratic() {
        let config = PolynomialConfig {
            parameters: PolynomialParameters {
                a: Some(1.0),
                c: Some(-9.0),
                ..PolynomialParameters::default()
            },
            ..PolynomialConfig::default()
        };
        let problem = classify_polynomial(&config).expect("should classify");
        assert_eq!(
            problem.spec,
            ProblemSpec::Quadratic {
                a: 1.0,
                b: 0.0,
                c: -9.0
            }
        );
    }

    #[test]
    fn unrecognized_input() {
        assert_eq!(
            classify_polynomial(&polynomial("what is love")),
            Err(Error::UnrecognizedProblemType {
                input: "what is love".to_owned()
            })
        );
    }

    #[test]
    fn missing_point_for_remainder_theorem() {
        let config = PolynomialConfig {
            problem_type: Some(ProblemType::RemainderTheorem),
            ..polynomial("x^3 - 2 = 0")
        };
        assert_eq!(
            classify_polynomial(&config),
            Err(Error::MissingParameter { name: "point" })
        );
    }

    #[test]
    fn system_type_rejected_for_polynomial() {
        let config = PolynomialConfig {
            problem_type: Some(ProblemType::System3x3),
            ..polynomial("x^2 = 4")
        };
        assert!(matches!(
            classify_polynomial(&config),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn system_auto_detection() {
        fn detect(equations: &[&str]) -> ProblemType {
            classify_system(&system(equations))
                .expect("should classify")
                .problem_type()
        }

        assert_eq!(
            detect(&["2x + 3y = 7", "x - y = 1"]),
            ProblemType::System2x2Elimination
        );
        assert_eq!(
            detect(&["y = 2x + 1", "3x + y = 11"]),
            ProblemType::System2x2Substitution
        );
        assert_eq!(
            detect(&["x + y + z = 6", "2x - y + z = 3", "x + 2y - z = 2"]),
            ProblemType::System3x3
        );
        assert_eq!(
            detect(&["x + y <= 4", "x >= 0", "y >= 0"]),
            ProblemType::SystemInequalities
        );

        let nonlinear =
            classify_system(&system(&["y = x^2", "y = x + 2"])).expect("should classify");
        assert_eq!(
            nonlinear.spec,
            ProblemSpec::Nonlinear {
                line: LinearEquation::new(-1.0, 1.0, 2.0),
                parabola: [1.0, 0.0, 0.0]
            }
        );
    }

    #[test]
    fn method_selects_solver() {
        let config = SystemConfig {
            method: Some(SystemMethod::Matrix),
            ..system(&["x + y = 5", "x - y = 1"])
        };
        let problem = classify_system(&config).expect("should classify");
        assert_eq!(
            problem.spec,
            ProblemSpec::System2 {
                method: SystemMethod::Matrix,
                equations: [
                    LinearEquation::new(1.0, 1.0, 5.0),
                    LinearEquation::new(1.0, -1.0, 1.0)
                ]
            }
        );
        assert_eq!(problem.raw_input, "x + y = 5; x - y = 1");
    }

    #[test]
    fn word_problem_needs_labels() {
        let config = SystemConfig {
            scenario: Some("A word problem about tickets".to_owned()),
            ..system(&["a + c = 100", "12a + 8c = 1040"])
        };
        // `a` and `c` are not variables the linear reader knows.
        assert!(classify_system(&config).is_err());

        let config = SystemConfig {
            scenario: Some("A word problem about tickets".to_owned()),
            ..system(&["x + y = 100", "12x + 8y = 1040"])
        };
        assert_eq!(
            classify_system(&config),
            Err(Error::MissingParameter { name: "labels" })
        );
    }

    #[test]
    fn wrong_equation_count() {
        let config = SystemConfig {
            method: Some(SystemMethod::Elimination),
            ..system(&["x + y = 5"])
        };
        assert!(matches!(
            classify_system(&config),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn config_from_toml() {
        let config: SystemConfig = toml::from_str(
            r#"
            equations = ["x + y = 5", "x - y = 1"]
            method = "substitution"

            [options]
            explanationLevel = "basic"
            "#,
        )
        .expect("valid toml");
        let problem = classify_system(&config).expect("should classify");
        assert_eq!(problem.problem_type(), ProblemType::System2x2Substitution);
        assert_eq!(
            problem.options.explanation_level,
            stepwise_core::ExplanationLevel::Basic
        );
    }
}
