//! Step Extractor - Markdown to Step Lists
//!
//! Splits the body of a sequence section into discrete steps. This is purely
//! lexical: the only markdown construct recognized is the numbered-list item
//! boundary. Everything else - bullets, indentation, inline code spans,
//! unicode - passes through untouched, so the report can show steps exactly
//! as they were authored.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Step;

/// A numbered-list marker at the start of a line, no leading whitespace.
pub(crate) static STEP_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\. ").unwrap()); // literal pattern, cannot fail

/// Split one sequence section into its ordered list of steps.
///
/// A line matching `<number>. ` opens a new step and becomes its header;
/// every following line up to the next header is appended verbatim as
/// continuation content. Lines before the first header (section heading,
/// description paragraph) belong to no step and are skipped. Blank lines are
/// kept only when a later step header follows them; trailing blanks after the
/// final header are dropped. A body with no numbered items yields an empty
/// list - callers decide whether that is meaningful.
pub fn extract(markdown: &str) -> Vec<Step> {
    let mut steps: Vec<Step> = Vec::new();

    for line in markdown.lines() {
        if STEP_HEADER.is_match(line) {
            steps.push(Step::new(line));
        } else if let Some(current) = steps.last_mut() {
            current.push_line(line);
        }
    }

    if let Some(last) = steps.last_mut() {
        last.trim_trailing_blanks();
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SEQUENCE: &str = "
## extra_config (BETA)

Check that the device correctly handles an extra out-of-schema field

1. Step 1:
    * Substep 1
    * Substep 2
1. Step 2
1. Step `3`
";

    #[test]
    fn numbered_items_become_steps_with_continuations() {
        let steps = extract(SAMPLE_SEQUENCE);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].lines()[1], "    * Substep 1");
        assert_eq!(steps[2].lines()[0], "1. Step `3`");
    }

    #[test]
    fn heading_and_description_are_not_steps() {
        let steps = extract(SAMPLE_SEQUENCE);
        assert_eq!(steps[0].header(), "1. Step 1:");
    }

    #[test]
    fn indented_numbered_line_is_continuation_not_header() {
        let steps = extract("1. Outer\n    1. Inner detail\n");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].continuation(), ["    1. Inner detail"]);
    }

    #[test]
    fn header_text_strips_only_the_marker() {
        let steps = extract("1. Step `3`\n");
        assert_eq!(steps[0].header_text(), "Step `3`");
    }
}
