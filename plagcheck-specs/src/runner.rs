//! Running fixtures through the analyzer and checking their expectations.

use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{ComparisonFixture, Expectations};
use crate::formatter::{format_failure, format_summary};
use crate::loader::load_all_fixtures;
use crate::{SpecError, SpecResult};
use plagcheck::{AnalysisResult, Analyzer};
use std::fmt::Debug;
use std::path::Path;

/// Outcome of one expectation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectationOutcome {
    Passed,
    Failed { expected: String, actual: String },
}

/// One checked `expect` field.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectationCheck {
    /// Field name as written in the fixture.
    pub field: &'static str,
    pub outcome: ExpectationOutcome,
}

impl ExpectationCheck {
    pub fn passed(&self) -> bool {
        self.outcome == ExpectationOutcome::Passed
    }
}

/// The analysis of a fixture and every expectation checked against it.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub result: AnalysisResult,
    pub checks: Vec<ExpectationCheck>,
}

impl FixtureReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(ExpectationCheck::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExpectationCheck> {
        self.checks.iter().filter(|c| !c.passed())
    }

    /// The analysis result, or an error naming the failed fields.
    pub fn into_result(self, fixture_name: &str) -> SpecResult<AnalysisResult> {
        if self.all_passed() {
            return Ok(self.result);
        }
        let fields: Vec<_> = self.failures().map(|c| c.field).collect();
        Err(SpecError::Expectation {
            message: format!("{}: {}", fixture_name, fields.join(", ")),
        })
    }
}

/// Analyze the fixture's texts with its configuration and check every
/// expectation it declares.
pub fn run_fixture(fixture: &ComparisonFixture) -> FixtureReport {
    let analyzer = Analyzer::new(fixture.config.clone());
    let result = analyzer.analyze(&fixture.text1, &fixture.text2);
    let checks = check_expectations(&fixture.expect, &result);
    FixtureReport { result, checks }
}

/// Compare `result` against each expectation that is set.
pub fn check_expectations(expect: &Expectations, result: &AnalysisResult) -> Vec<ExpectationCheck> {
    let details = &result.details;
    let mut checks = Vec::new();

    check(&mut checks, "score", &expect.score, result.score);
    check(&mut checks, "message", &expect.message, result.message.clone());
    check(
        &mut checks,
        "total_words",
        &expect.total_words,
        [details.total_words1, details.total_words2],
    );
    check(&mut checks, "matched_words", &expect.matched_words, details.matched_words);
    check(
        &mut checks,
        "unique_matched_words",
        &expect.unique_matched_words,
        details.unique_matched_words,
    );
    check(
        &mut checks,
        "runs",
        &expect.runs,
        details
            .consecutive_sequences
            .iter()
            .map(|run| run.iter().map(|m| m.word.clone()).collect())
            .collect(),
    );
    check(
        &mut checks,
        "line_pairs",
        &expect.line_pairs,
        details
            .matched_lines
            .iter()
            .map(|group| [group.text1_line, group.text2_line])
            .collect(),
    );
    check(
        &mut checks,
        "highlighted_text1",
        &expect.highlighted_text1,
        details.highlighted_text1.clone(),
    );
    check(
        &mut checks,
        "highlighted_text2",
        &expect.highlighted_text2,
        details.highlighted_text2.clone(),
    );

    checks
}

fn check<T: PartialEq + Debug>(
    checks: &mut Vec<ExpectationCheck>,
    field: &'static str,
    expected: &Option<T>,
    actual: T,
) {
    if let Some(expected) = expected {
        let outcome = if *expected == actual {
            ExpectationOutcome::Passed
        } else {
            ExpectationOutcome::Failed {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            }
        };
        checks.push(ExpectationCheck { field, outcome });
    }
}

/// Run every fixture under `dir`, classifying failures with `expected`.
///
/// Each failure is logged at `warn` (regressions) or `info` (known/pending).
pub fn run_all(dir: &Path, expected: &ExpectedFailures) -> SpecResult<HarnessResult> {
    let mut harness = HarnessResult::new();

    for (name, fixture) in load_all_fixtures(dir)? {
        let report = run_fixture(&fixture);
        let (mut passed, mut failed, mut known, mut regressions) = (0, 0, 0, 0);

        for check in &report.checks {
            if check.passed() {
                harness.record_pass();
                passed += 1;
                continue;
            }

            failed += 1;
            let state = expected.is_expected(&name, check.field);
            harness.record_failure(state);
            let text = format_failure(&name, &fixture, check);
            match state {
                FailureState::Regression => {
                    regressions += 1;
                    log::warn!("{}", text);
                }
                FailureState::Known | FailureState::Pending => {
                    known += 1;
                    log::info!("{}", text);
                }
            }
        }

        log::debug!("{}", format_summary(&name, passed, failed, known, regressions));
    }

    Ok(harness)
}
