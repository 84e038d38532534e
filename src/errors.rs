//! Error handling for the report pipeline.
//!
//! The core stages are pure and total - every edge case (empty lists, extra
//! observed steps, unicode content) is well-defined rather than fallible.
//! Errors only arise at the CLI boundary: unreadable input files and sequence
//! documents that contain no steps at all. Both are surfaced as miette
//! diagnostics so the offending document is shown alongside the message.

use miette::{Diagnostic, NamedSource};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("failed to read {path}")]
    #[diagnostic(code(sequencer_report::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no numbered steps found in {name}")]
    #[diagnostic(
        code(sequencer_report::empty_sequence),
        help("a sequence document lists its steps as `1. ` numbered markdown items")
    )]
    EmptySequence {
        name: String,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("could not serialize report")]
    #[diagnostic(code(sequencer_report::json))]
    Json(#[from] serde_json::Error),
}
