//! `stepwise`: solve an algebra problem and print the worked solution as JSON.

mod request;

use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use stepwise_core::{ExplanationLevel, SystemMethod};
use tracing_subscriber::EnvFilter;

use crate::request::{Overrides, Request};

#[derive(Parser, Debug)]
#[command(name = "stepwise", version, about = "Step-by-step equation solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    options: OptionArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a single polynomial equation, inequality, or task.
    Polynomial {
        /// Equation text, e.g. "2x^2 - 3x + 1 = 0".
        equation: String,
        /// Prose describing the task, used to pick the problem type.
        #[arg(long)]
        scenario: Option<String>,
    },
    /// Solve a system of equations or inequalities.
    System {
        /// One equation per argument, e.g. "x + y = 5" "x - y = 1".
        #[arg(required = true)]
        equations: Vec<String>,
        /// Method for a 2×2 system.
        #[arg(long, value_enum)]
        method: Option<Method>,
        /// Names of x and y in a word problem.
        #[arg(long, num_args = 2, value_names = ["X", "Y"])]
        labels: Option<Vec<String>>,
        /// Prose describing the task, used to pick the problem type.
        #[arg(long)]
        scenario: Option<String>,
    },
    /// Solve a request read from a `.toml` or `.json` file.
    File {
        /// Path to the request file.
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print only the workbook instead of the full result.
    #[arg(long, global = true)]
    workbook: bool,
    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct OptionArgs {
    /// Explanation level.
    #[arg(long, value_enum, global = true)]
    level: Option<Level>,
    /// Start from options with every enhancement turned off.
    #[arg(long, global = true)]
    minimal: bool,
    /// Leave out the connectors between steps.
    #[arg(long, global = true)]
    no_bridges: bool,
    /// Leave out common mistakes and self-checks.
    #[arg(long, global = true)]
    no_error_prevention: bool,
    /// Leave out the alternative methods section.
    #[arg(long, global = true)]
    no_alternatives: bool,
    /// Leave out the teaching notes section.
    #[arg(long, global = true)]
    no_notes: bool,
    /// Keep the verification out of the step list.
    #[arg(long, global = true)]
    hide_verification: bool,
}

impl OptionArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            level: self.level.map(ExplanationLevel::from),
            minimal: self.minimal,
            no_bridges: self.no_bridges,
            no_error_prevention: self.no_error_prevention,
            no_alternatives: self.no_alternatives,
            no_notes: self.no_notes,
            hide_verification: self.hide_verification,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Basic,
    Intermediate,
    Detailed,
    Scaffolded,
}

impl From<Level> for ExplanationLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Basic => Self::Basic,
            Level::Intermediate => Self::Intermediate,
            Level::Detailed => Self::Detailed,
            Level::Scaffolded => Self::Scaffolded,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    Substitution,
    Elimination,
    Graphical,
    Matrix,
}

impl From<Method> for SystemMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Substitution => Self::Substitution,
            Method::Elimination => Self::Elimination,
            Method::Graphical => Self::Graphical,
            Method::Matrix => Self::Matrix,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.output.verbose);

    let request = build_request(cli.command)?;
    let options = cli.options.overrides().apply(request.options());
    let request = request.with_options(options);
    tracing::info!(level = ?options.explanation_level, "solving request");

    let result = request.solve()?;
    tracing::info!(
        problem_type = ?result.problem.problem_type(),
        steps = result.steps.len(),
        confidence = ?result.verification.confidence,
        "solved"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match (cli.output.workbook, cli.output.pretty) {
        (true, true) => serde_json::to_writer_pretty(&mut out, &result.workbook),
        (true, false) => serde_json::to_writer(&mut out, &result.workbook),
        (false, true) => serde_json::to_writer_pretty(&mut out, &result),
        (false, false) => serde_json::to_writer(&mut out, &result),
    }
    .context("failed to write the result")?;
    writeln!(out).context("failed to write the result")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_request(command: Command) -> Result<Request> {
    Ok(match command {
        Command::Polynomial { equation, scenario } => request::polynomial(equation, scenario),
        Command::System {
            equations,
            method,
            labels,
            scenario,
        } => {
            let labels = labels
                .map(|labels| {
                    <[String; 2]>::try_from(labels)
                        .map_err(|_| anyhow::anyhow!("--labels takes exactly two names"))
                })
                .transpose()?;
            request::system(equations, method.map(SystemMethod::from), labels, scenario)
        }
        Command::File { path } => Request::load(&path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_system_command() {
        let cli = Cli::try_parse_from([
            "stepwise",
            "system",
            "x + y = 200",
            "10x + 6y = 1600",
            "--labels",
            "adults",
            "children",
            "--level",
            "basic",
            "--pretty",
        ])
        .expect("valid arguments");
        assert!(cli.output.pretty);
        assert!(matches!(cli.options.level, Some(Level::Basic)));

        let request = build_request(cli.command).expect("valid request");
        let Request::System(config) = &request else {
            panic!("expected a system request");
        };
        assert_eq!(
            config.labels,
            Some(["adults".to_owned(), "children".to_owned()])
        );
        assert_eq!(config.equations.len(), 2);
    }

    #[test]
    fn system_needs_equations() {
        assert!(Cli::try_parse_from(["stepwise", "system"]).is_err());
    }

    #[test]
    fn parses_a_polynomial_command_with_options() {
        let cli = Cli::try_parse_from([
            "stepwise",
            "--minimal",
            "polynomial",
            "x^3 - 6x^2 + 11x - 6 = 0",
            "--scenario",
            "Solve this cubic",
        ])
        .expect("valid arguments");
        let overrides = cli.options.overrides();
        assert!(overrides.minimal);

        let request = build_request(cli.command).expect("valid request");
        let Request::Polynomial(config) = request else {
            panic!("expected a polynomial request");
        };
        assert_eq!(config.scenario.as_deref(), Some("Solve this cubic"));
    }
}
