//! Scoring and result assembly.
//!
//! The score is the LCS length over the average token count of both texts, in
//! percent, rounded to one decimal place. The detailed path ([`Analyzer`]) and
//! the score-only path ([`similarity_verdict`]) both go through
//! [`Verdict::from_counts`], so they always agree.

use crate::backtrack::backtrack;
use crate::config::AnalysisConfig;
use crate::grouping::{consecutive_runs, group_by_line, ConsecutiveRun, LineMatchGroup};
use crate::highlight::highlight;
use crate::table::{lcs_length, AlignmentTable};
use crate::token::{tokenize, tokenize_words};
use serde::{Deserialize, Serialize};

/// Message returned when either text has no words.
pub const EMPTY_TEXT_MESSAGE: &str = "One or both texts are empty";

/// Similarity band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityTier {
    /// Above 70.
    High,
    /// Above 40, up to 70.
    Moderate,
    /// Above 15, up to 40.
    Low,
    /// 15 or below.
    VeryLow,
}

impl SimilarityTier {
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            SimilarityTier::High
        } else if score > 40.0 {
            SimilarityTier::Moderate
        } else if score > 15.0 {
            SimilarityTier::Low
        } else {
            SimilarityTier::VeryLow
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SimilarityTier::High => "High similarity detected! Significant portions of text match.",
            SimilarityTier::Moderate => "Moderate similarity found. Some sections may need review.",
            SimilarityTier::Low => "Low similarity detected. Minor overlapping content found.",
            SimilarityTier::VeryLow => {
                "Very low similarity. Content appears to be largely original."
            }
        }
    }

    /// Colour name used when displaying a score in this tier.
    pub fn colour(self) -> &'static str {
        match self {
            SimilarityTier::High => "red",
            SimilarityTier::Moderate => "yellow",
            SimilarityTier::Low | SimilarityTier::VeryLow => "green",
        }
    }
}

/// Score and message, without positional detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub score: f64,
    pub message: String,
}

impl Verdict {
    /// Verdict for a comparison where one side has no words.
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            message: EMPTY_TEXT_MESSAGE.to_string(),
        }
    }

    /// Score an LCS of `lcs` words between texts of `len1` and `len2` words.
    ///
    /// The message tier is picked from the unrounded score.
    pub fn from_counts(lcs: usize, len1: usize, len2: usize) -> Self {
        if len1 == 0 || len2 == 0 {
            return Self::empty();
        }

        let avg_length = (len1 + len2) as f64 / 2.0;
        let raw = (lcs as f64 / avg_length) * 100.0;
        Self {
            score: round_to_tenth(raw),
            message: SimilarityTier::from_score(raw).message().to_string(),
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Full comparison result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: f64,
    pub message: String,
    pub details: AnalysisDetails,
}

/// Word counts, alignments and highlighted texts behind a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    pub total_words1: usize,
    pub total_words2: usize,
    /// LCS length.
    pub matched_words: usize,
    /// Distinct words among the matches.
    pub unique_matched_words: usize,
    pub matched_lines: Vec<LineMatchGroup>,
    pub consecutive_sequences: Vec<ConsecutiveRun>,
    pub highlighted_text1: String,
    pub highlighted_text2: String,
}

impl AnalysisResult {
    /// Result for texts where one side has no words; the texts are returned
    /// unhighlighted.
    pub fn empty(text1: &str, text2: &str) -> Self {
        let verdict = Verdict::empty();
        Self {
            score: verdict.score,
            message: verdict.message,
            details: AnalysisDetails {
                total_words1: 0,
                total_words2: 0,
                matched_words: 0,
                unique_matched_words: 0,
                matched_lines: Vec::new(),
                consecutive_sequences: Vec::new(),
                highlighted_text1: text1.to_string(),
                highlighted_text2: text2.to_string(),
            },
        }
    }

    /// The score and message alone.
    pub fn verdict(&self) -> Verdict {
        Verdict {
            score: self.score,
            message: self.message.clone(),
        }
    }

    /// Tier named by `message`, `None` for the empty-text result.
    ///
    /// Picked from the unrounded score, so it can differ from
    /// `SimilarityTier::from_score(self.score)` right at a threshold.
    pub fn tier(&self) -> Option<SimilarityTier> {
        [
            SimilarityTier::High,
            SimilarityTier::Moderate,
            SimilarityTier::Low,
            SimilarityTier::VeryLow,
        ]
        .into_iter()
        .find(|tier| tier.message() == self.message)
    }
}

/// Runs comparisons with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Compare two texts.
    pub fn analyze(&self, text1: &str, text2: &str) -> AnalysisResult {
        let tokens1 = tokenize(text1);
        let tokens2 = tokenize(text2);

        if tokens1.is_empty() || tokens2.is_empty() {
            log::debug!("empty comparison: {} vs {} words", tokens1.len(), tokens2.len());
            return AnalysisResult::empty(text1, text2);
        }

        let table = AlignmentTable::build(&tokens1, &tokens2);
        let alignment = backtrack(&table, &tokens1, &tokens2);
        let verdict = Verdict::from_counts(alignment.length, tokens1.len(), tokens2.len());
        log::debug!(
            "matched {} of {}/{} words, score {}",
            alignment.length,
            tokens1.len(),
            tokens2.len(),
            verdict.score
        );

        let markup = &self.config.markup;
        AnalysisResult {
            score: verdict.score,
            message: verdict.message,
            details: AnalysisDetails {
                total_words1: tokens1.len(),
                total_words2: tokens2.len(),
                matched_words: alignment.length,
                unique_matched_words: alignment.unique_words(),
                matched_lines: group_by_line(&alignment.matches),
                consecutive_sequences: consecutive_runs(
                    &alignment.matches,
                    self.config.min_run_length,
                ),
                highlighted_text1: highlight(text1, &tokens1, &alignment.matched1, markup),
                highlighted_text2: highlight(text2, &tokens2, &alignment.matched2, markup),
            },
        }
    }
}

/// Compare two texts with the default configuration.
pub fn analyze(text1: &str, text2: &str) -> AnalysisResult {
    Analyzer::default().analyze(text1, text2)
}

/// Score-only comparison.
///
/// Works on plain word lists and a two-row LCS, so memory stays linear in the
/// shorter text. Same score and message as [`analyze`].
pub fn similarity_verdict(text1: &str, text2: &str) -> Verdict {
    let words1 = tokenize_words(text1);
    let words2 = tokenize_words(text2);
    Verdict::from_counts(lcs_length(&words1, &words2), words1.len(), words2.len())
}

/// Similarity score in percent, rounded to one decimal.
pub fn plagiarism_score(text1: &str, text2: &str) -> f64 {
    similarity_verdict(text1, text2).score
}
