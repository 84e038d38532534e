//! The reporter Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions: extraction, classification, and rendering are
//! pure; all file I/O lives here.

use std::path::Path;
use std::{fs, process};

use clap::Parser;
use miette::NamedSource;
use serde::Serialize;

use crate::cli::args::{Command, ReportArgs};
use crate::errors::ReportError;
use crate::sequence::{classify, extract, render, Classification, Outcome, OutcomeStatus, Step};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = ReportArgs::parse();

    let result = match args.command {
        Command::Report {
            reference,
            actual,
            status,
            name,
            json,
        } => handle_report(&reference, &actual, status, name, json),
        Command::Steps { file } => handle_steps(&file),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

/// Machine-readable view of one classified run, for `report --json`.
#[derive(Debug, Serialize)]
struct ReportView {
    name: String,
    status: OutcomeStatus,
    #[serde(flatten)]
    partitions: Classification,
}

/// Handles the `report` subcommand.
fn handle_report(
    reference: &Path,
    actual: &Path,
    status: OutcomeStatus,
    name: Option<String>,
    json: bool,
) -> Result<(), ReportError> {
    let reference_steps = load_steps(reference, true)?;
    let actual_steps = load_steps(actual, false)?;
    let name = name.unwrap_or_else(|| file_stem(reference));

    if json {
        let view = ReportView {
            name,
            status,
            partitions: classify(&reference_steps, &actual_steps, status),
        };
        output::print_json(&serde_json::to_string_pretty(&view)?);
    } else {
        let outcome = Outcome::new(status, name);
        let report = render(&reference_steps, &actual_steps, &outcome);
        output::print_report(&report);
    }
    Ok(())
}

/// Handles the `steps` subcommand.
fn handle_steps(file: &Path) -> Result<(), ReportError> {
    let steps = load_steps(file, true)?;
    output::print_json(&serde_json::to_string_pretty(&steps)?);
    Ok(())
}

/// Read a document and extract its steps. The reference document must
/// contain at least one step; an actual-run document may legitimately be
/// empty (nothing executed).
fn load_steps(path: &Path, require_steps: bool) -> Result<Vec<Step>, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let steps = extract(&text);
    if require_steps && steps.is_empty() {
        return Err(ReportError::EmptySequence {
            name: file_stem(path),
            src: NamedSource::new(path.display().to_string(), text),
        });
    }
    Ok(steps)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
