//! Comparison fixtures: a text pair plus what the analysis should report.
//!
//! ```toml
//! title = "Shared middle phrase"
//! text1 = "the quick brown fox jumps"
//! text2 = "a quick brown fox runs"
//!
//! [expect]
//! score = 60.0
//! runs = [["quick", "brown", "fox"]]
//! ```
//!
//! Every `expect` field is optional; only the ones present are checked.

use crate::{SpecError, SpecResult};
use plagcheck::AnalysisConfig;
use serde::{Deserialize, Serialize};

/// A parsed fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonFixture {
    #[serde(default)]
    pub title: Option<String>,
    pub text1: String,
    pub text2: String,
    /// Analyzer configuration; defaults when the table is absent.
    #[serde(default)]
    pub config: AnalysisConfig,
    #[serde(default)]
    pub expect: Expectations,
}

/// Expected values, each compared against the matching result field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expectations {
    pub score: Option<f64>,
    pub message: Option<String>,
    /// `[total_words1, total_words2]`
    pub total_words: Option<[usize; 2]>,
    pub matched_words: Option<usize>,
    pub unique_matched_words: Option<usize>,
    /// Words of each consecutive run, in order.
    pub runs: Option<Vec<Vec<String>>>,
    /// `[text1_line, text2_line]` of each line group, in order.
    pub line_pairs: Option<Vec<[usize; 2]>>,
    pub highlighted_text1: Option<String>,
    pub highlighted_text2: Option<String>,
}

impl ComparisonFixture {
    /// Parse fixture content. `path` is only used in error messages.
    pub fn parse(content: &str, path: &str) -> SpecResult<Self> {
        toml::from_str(content).map_err(|e| SpecError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
