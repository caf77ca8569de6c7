//! Naming convention checker entrypoint.

mod convention;
mod paths;
mod report;
mod transcript;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::process::ExitCode;

use crate::convention::NamingConvention;
use crate::paths::PathComponents;
use crate::report::{Report, ValidationResult};
use crate::transcript::Transcript;

/// Exit status when any file or folder name breaks the convention.
const EXIT_VIOLATIONS: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// CLI arguments for the path checker.
#[derive(Parser, Debug)]
#[command(
    name = "file_path_validator",
    version,
    about = "Check file and folder names in a path against a naming convention"
)]
struct Args {
    /// Naming convention to enforce
    #[arg(long, value_enum, value_name = "CONVENTION")]
    naming_convention: NamingConvention,

    /// File path whose names are checked (never read from disk)
    #[arg(long, value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
    path_to_validate: String,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print decomposition and check steps to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    run(args)
}

/// Decompose the path once, check every name, and report violations.
fn run(args: Args) -> Result<ExitCode> {
    let mut transcript = Transcript::new(args.verbose);
    let path = args.path_to_validate.as_str();
    let convention = args.naming_convention;

    transcript.note(format!("path: {path}"));
    transcript.note(format!("convention: {convention}"));

    let components = PathComponents::from_path(path);
    transcript.components(&components);

    let result = ValidationResult::evaluate(&components, convention);
    for violation in result.violations() {
        transcript.violation(violation, convention);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => result
            .write_text(path, &mut out)
            .context("write text report")?,
        OutputFormat::Json => {
            let report = Report::new(path, convention, &result);
            serde_json::to_writer_pretty(&mut out, &report).context("serialize json report")?;
            writeln!(out).context("write json report")?;
        }
    }
    out.flush().context("flush stdout")?;

    if result.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_VIOLATIONS))
    }
}
