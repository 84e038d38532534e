//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for printing rendered reports, colorizing
//! status markers, and emitting JSON. By centralizing output logic here, the
//! rendered report string itself stays free of escape codes and identical
//! whether it goes to a terminal, a file, or a CI artifact.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::sequence::render::{DONE_MARKER, FAIL_MARKER};

/// Prints a rendered report to stdout, colorizing the status markers when
/// attached to a terminal.
pub fn print_report(report: &str) {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for line in report.lines() {
        if line.starts_with(DONE_MARKER) {
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
        } else if line.starts_with(FAIL_MARKER) {
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        }
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.reset();
    }
}

/// Prints a serialized JSON document to stdout.
pub fn print_json(json: &str) {
    println!("{}", json);
}
