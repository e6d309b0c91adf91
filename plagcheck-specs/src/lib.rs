//! Fixture-driven testing for plagcheck.
//!
//! Each fixture is a TOML file holding a pair of texts, an optional
//! analyzer configuration and the values the analysis should report.
//! Failures can be marked as known or pending in an
//! `expected_failures.toml` so they don't fail the run.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture schema and parsing
//! - [`loader`] - Loading fixture files from disk
//! - [`runner`] - Running fixtures and checking expectations
//! - [`failures`] - Expected failures tracking via TOML
//! - [`formatter`] - Failure and summary reports
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{ComparisonFixture, Expectations};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{
    check_expectations, run_all, run_fixture, ExpectationCheck, ExpectationOutcome, FixtureReport,
};
