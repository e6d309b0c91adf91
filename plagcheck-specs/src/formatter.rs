//! Readable reports for failed expectations.

use crate::fixture::ComparisonFixture;
use crate::runner::{ExpectationCheck, ExpectationOutcome};
use std::fmt::Write;

const EXCERPT_CHARS: usize = 60;

/// Format a failed expectation with the fixture's texts for context.
pub fn format_failure(
    fixture_name: &str,
    fixture: &ComparisonFixture,
    check: &ExpectationCheck,
) -> String {
    let mut output = String::new();

    match &fixture.title {
        Some(title) => writeln!(output, "\nFAIL: {} ({})", fixture_name, title).unwrap(),
        None => writeln!(output, "\nFAIL: {}", fixture_name).unwrap(),
    }
    writeln!(output).unwrap();
    writeln!(output, "  text1: {}", excerpt(&fixture.text1)).unwrap();
    writeln!(output, "  text2: {}", excerpt(&fixture.text2)).unwrap();
    writeln!(output).unwrap();

    match &check.outcome {
        ExpectationOutcome::Failed { expected, actual } => {
            writeln!(output, "  expectation `{}` failed", check.field).unwrap();
            writeln!(output, "    \u{2717} expected `{}`", expected).unwrap();
            writeln!(output, "      found    `{}`", actual).unwrap();
        }
        ExpectationOutcome::Passed => {
            writeln!(output, "  (passed)").unwrap();
        }
    }

    if let Some(hint) = generate_hint(check.field) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format the per-fixture summary line.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

/// First line of `text`, shortened to a fixed number of characters.
fn excerpt(text: &str) -> String {
    let first = text.split('\n').next().unwrap_or_default();
    let more_lines = text.contains('\n');
    let mut out: String = first.chars().take(EXCERPT_CHARS).collect();
    if more_lines || first.chars().count() > EXCERPT_CHARS {
        out.push_str(" ...");
    }
    format!("{:?}", out)
}

fn generate_hint(field: &str) -> Option<&'static str> {
    match field {
        "highlighted_text1" | "highlighted_text2" => Some(
            "highlighting searches each line left to right, so a repeated word \
             is marked at its first occurrence",
        ),
        "score" => Some("scores are rounded to one decimal place"),
        "runs" => Some("runs shorter than config.min_run_length are not reported"),
        _ => None,
    }
}
