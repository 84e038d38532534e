//! Report Renderer - Annotated Progress Output
//!
//! Turns a reference step list, the observed run, and the test outcome into
//! the final progress report: completed steps carry a success marker, the
//! failing step (if the run failed) is boxed between dash rules, and the
//! remaining steps follow unmarked. Step text is reproduced verbatim;
//! displayed numbers are resequenced from 1 regardless of the literal
//! numerals in the source document.

use unicode_width::UnicodeWidthStr;

use super::classify::{divergence, failing_step, Outcome, OutcomeStatus};
use super::Step;

/// Marker for a successfully completed step.
pub const DONE_MARKER: &str = "✓";
/// Marker for the failing step, shown on both sides of its header.
pub const FAIL_MARKER: &str = "✕";

// Column where step text begins; wide enough for any marker plus breathing
// room, so marked and unmarked headers line up.
const MARKER_COLUMN: usize = 4;

// The dash rule extends this far past the longest content line.
const RULE_OVERHANG: usize = 2;

/// Pad `marker` with spaces to `width` display columns, then append `text`.
///
/// All step text begins at the same column whatever the marker, including the
/// blank marker used for pending steps.
pub fn indent(text: &str, width: usize, marker: &str) -> String {
    let padding = width.saturating_sub(marker.width());
    format!("{}{}{}", marker, " ".repeat(padding), text)
}

/// Display width of the widest line, in terminal columns.
pub fn longest_line_length<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().map(|l| l.as_ref().width()).max().unwrap_or(0)
}

/// Render the annotated progress report.
///
/// The report opens with a blank line and lists every reference step in
/// order: completed steps first with the success marker, then (for failed
/// runs) the failing step boxed between dash rules sized to the longest
/// content line, then the steps never reached. Continuation lines are
/// indented to the text column and otherwise untouched.
pub fn render(reference: &[Step], actual: &[Step], outcome: &Outcome) -> String {
    let content: Vec<&str> = reference
        .iter()
        .flat_map(|step| step.lines().iter().map(String::as_str))
        .collect();
    let rule = "-".repeat(longest_line_length(&content) + RULE_OVERHANG);

    let boxed = boxed_index(reference, actual, outcome.status);
    let done_end = match boxed {
        Some(index) => index,
        None => failing_step(reference, actual).map_or(0, |boundary| boundary + 1),
    };

    let mut lines = vec![String::new()];
    for (index, step) in reference.iter().enumerate() {
        let header = format!("{}. {}", index + 1, step.header_text());
        if boxed == Some(index) {
            lines.push(String::new());
            lines.push(rule.clone());
            lines.push(format!(
                "{} {}",
                indent(&header, MARKER_COLUMN, FAIL_MARKER),
                FAIL_MARKER
            ));
            push_continuation(&mut lines, step);
            lines.push(rule.clone());
            lines.push(String::new());
        } else if index < done_end {
            lines.push(indent(&header, MARKER_COLUMN, DONE_MARKER));
            push_continuation(&mut lines, step);
        } else {
            lines.push(indent(&header, MARKER_COLUMN, " "));
            push_continuation(&mut lines, step);
        }
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Which reference step gets the failure box, if any.
///
/// A failed run that diverged from the reference failed at the first
/// divergent step. A failed run that stopped partway through a clean prefix
/// failed at the first step it never reached; when nothing executed that is
/// step 0, and when every step matched it is the final step.
fn boxed_index(reference: &[Step], actual: &[Step], status: OutcomeStatus) -> Option<usize> {
    if status != OutcomeStatus::Fail || reference.is_empty() {
        return None;
    }
    Some(divergence(reference, actual).unwrap_or_else(|| actual.len().min(reference.len() - 1)))
}

fn push_continuation(lines: &mut Vec<String>, step: &Step) {
    for line in step.continuation() {
        lines.push(indent(line, MARKER_COLUMN, " "));
    }
}
