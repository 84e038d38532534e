//! Sequence Model - Steps of a Numbered Test Procedure
//!
//! A sequence document describes a certification test as a markdown numbered
//! list. Each numbered item, together with the indented detail lines beneath
//! it, is one [`Step`]. This module owns the `Step` value type; the pipeline
//! stages live in the submodules: [`extract`] splits a document into steps,
//! [`classify`] compares an observed run against the canonical list, and
//! [`render`] produces the annotated progress report.

use serde::{Deserialize, Serialize};

pub mod classify;
pub mod extract;
pub mod render;

pub use classify::{classify, failing_step, Classification, Outcome, OutcomeStatus};
pub use extract::extract;
pub use render::{indent, longest_line_length, render};

/// One numbered step of a sequence, as it appeared in the source document.
///
/// Line 0 is always the numbered header line (`1. Do the thing`); any further
/// lines are continuation content (bulleted substeps, indented detail) kept
/// verbatim, indentation and inline markup included. Steps are immutable once
/// extracted, identity is positional, and equality is structural over the
/// full line list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    lines: Vec<String>,
}

impl Step {
    pub(crate) fn new(header: impl Into<String>) -> Self {
        Self {
            lines: vec![header.into()],
        }
    }

    /// Build a step from raw lines. Returns `None` for an empty list, since a
    /// step always has at least its header line.
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub(crate) fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn trim_trailing_blanks(&mut self) {
        while self.lines.len() > 1 && self.lines.last().is_some_and(|l| l.trim().is_empty()) {
            self.lines.pop();
        }
    }

    /// All lines of the step, header first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The numbered header line, exactly as authored.
    pub fn header(&self) -> &str {
        &self.lines[0]
    }

    /// The continuation lines beneath the header (possibly empty).
    pub fn continuation(&self) -> &[String] {
        &self.lines[1..]
    }

    /// The header with its numbered-list marker stripped, e.g. `1. Step text`
    /// becomes `Step text`. Source documents conventionally reuse `1.` for
    /// every item, so the literal numeral carries no meaning.
    pub fn header_text(&self) -> &str {
        let header = self.header();
        match extract::STEP_HEADER.find(header) {
            Some(marker) => &header[marker.end()..],
            None => header,
        }
    }
}
