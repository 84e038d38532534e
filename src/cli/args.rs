//! Defines the command-line arguments and subcommands for the reporter CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::sequence::OutcomeStatus;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "sequencer-report",
    version,
    about = "Render annotated progress reports for sequencer test runs."
)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the progress report for one test run.
    Report {
        /// The canonical sequence document (markdown).
        #[arg(required = true)]
        reference: PathBuf,
        /// The steps actually executed, as captured from the run (markdown).
        #[arg(required = true)]
        actual: PathBuf,
        /// Terminal status of the run.
        #[arg(long, value_enum)]
        status: OutcomeStatus,
        /// Test name; defaults to the reference file stem.
        #[arg(long)]
        name: Option<String>,
        /// Emit the classified partitions as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },
    /// Show the steps extracted from a sequence document, as JSON.
    Steps {
        /// The sequence document to extract from.
        #[arg(required = true)]
        file: PathBuf,
    },
}
