//! Validation of comparison requests arriving from outside the engine.
//!
//! The engine itself accepts any pair of strings. Callers that take input from
//! users run it through [`CompareRequest::validate`] first.

use crate::analysis::{similarity_verdict, AnalysisResult, Analyzer, Verdict};
use crate::backtrack::TextSide;
use crate::token::tokenize_words;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a request is rejected before comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// One of the texts is absent or the empty string.
    #[error("Both texts are required")]
    MissingText,

    /// A text has more words than [`RequestLimits::max_words`] allows.
    #[error("{side} has {words} words, more than the limit of {limit}")]
    TooManyWords {
        side: TextSide,
        words: usize,
        limit: usize,
    },
}

/// Bounds applied to incoming texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestLimits {
    /// Maximum words per text. The alignment table grows with the product of
    /// both word counts. `None` means unbounded.
    pub max_words: Option<usize>,
}

/// The two texts to compare, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub text1: Option<String>,
    #[serde(default)]
    pub text2: Option<String>,
}

impl CompareRequest {
    pub fn new(text1: impl Into<String>, text2: impl Into<String>) -> Self {
        Self {
            text1: Some(text1.into()),
            text2: Some(text2.into()),
        }
    }

    /// Check the request and return both texts.
    ///
    /// A whitespace-only text is accepted; it simply scores 0.
    pub fn validate(&self, limits: &RequestLimits) -> Result<(&str, &str), RequestError> {
        let text1 = non_empty(&self.text1)?;
        let text2 = non_empty(&self.text2)?;

        if let Some(limit) = limits.max_words {
            for (side, text) in [(TextSide::Text1, text1), (TextSide::Text2, text2)] {
                let words = tokenize_words(text).len();
                if words > limit {
                    return Err(RequestError::TooManyWords { side, words, limit });
                }
            }
        }

        Ok((text1, text2))
    }

    /// Validate, then run a full analysis.
    pub fn analyze(
        &self,
        analyzer: &Analyzer,
        limits: &RequestLimits,
    ) -> Result<AnalysisResult, RequestError> {
        let (text1, text2) = self.validate(limits)?;
        Ok(analyzer.analyze(text1, text2))
    }

    /// Validate, then compute the score and message only.
    pub fn verdict(&self, limits: &RequestLimits) -> Result<Verdict, RequestError> {
        let (text1, text2) = self.validate(limits)?;
        Ok(similarity_verdict(text1, text2))
    }
}

fn non_empty(text: &Option<String>) -> Result<&str, RequestError> {
    match text.as_deref() {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(RequestError::MissingText),
    }
}
