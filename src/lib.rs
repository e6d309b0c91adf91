#![doc(issue_tracker_base_url = "https://github.com/storyscript/plagcheck/issues/")]

//! Word-level similarity between two texts, with the evidence behind the score.
//!
//! A comparison tokenizes both texts (keeping line and position of every word),
//! computes one longest common subsequence of words, and derives from it:
//!
//! - a score: LCS length over the average word count, in percent
//! - runs of three or more words that match consecutively in both texts
//! - the pairs of lines that share matched words
//! - a copy of each text with matched words wrapped in `<mark class="highlight">`
//!
//! ```
//! let result = plagcheck::analyze(
//!     "the quick brown fox jumps",
//!     "a quick brown fox runs",
//! );
//! assert_eq!(result.score, 60.0);
//! assert_eq!(result.details.matched_words, 3);
//! assert_eq!(result.details.consecutive_sequences.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`token`] - Tokenization with line/position tracking
//! - [`table`] - LCS length table
//! - [`backtrack`] - Deterministic LCS reconstruction
//! - [`grouping`] - Consecutive runs and line groups
//! - [`highlight`] - Markup insertion into the original text
//! - [`analysis`] - Scoring and result assembly
//! - [`request`] - Validation of incoming requests

pub mod analysis;
pub mod backtrack;
mod config;
mod display;
pub mod grouping;
pub mod highlight;
pub mod request;
pub mod table;
pub mod token;

pub use analysis::{
    analyze, plagiarism_score, similarity_verdict, AnalysisDetails, AnalysisResult, Analyzer,
    SimilarityTier, Verdict, EMPTY_TEXT_MESSAGE,
};
pub use backtrack::{align, backtrack, LcsAlignment, Match, TextSide};
pub use config::{AnalysisConfig, Markup};
pub use display::AlignmentDisplay;
pub use grouping::{consecutive_runs, group_by_line, ConsecutiveRun, LineMatchGroup};
pub use highlight::{highlight, strip_highlights};
pub use request::{CompareRequest, RequestError, RequestLimits};
pub use table::{lcs_length, AlignmentTable};
pub use token::{normalize_line, tokenize, tokenize_words, Token, Word};
