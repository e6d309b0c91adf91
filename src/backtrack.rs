//! Deterministic reconstruction of one LCS alignment.

use crate::table::AlignmentTable;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which of the two compared texts something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSide {
    Text1,
    Text2,
}

impl TextSide {
    pub fn other(self) -> Self {
        match self {
            TextSide::Text1 => TextSide::Text2,
            TextSide::Text2 => TextSide::Text1,
        }
    }
}

impl std::fmt::Display for TextSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextSide::Text1 => f.write_str("text1"),
            TextSide::Text2 => f.write_str("text2"),
        }
    }
}

/// One aligned pair of identical tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// The shared normalized word.
    pub word: String,
    /// Global token index in the first text.
    #[serde(rename = "text1Position")]
    pub idx1: usize,
    /// Global token index in the second text.
    #[serde(rename = "text2Position")]
    pub idx2: usize,
    #[serde(rename = "text1Line")]
    pub line1: usize,
    #[serde(rename = "text2Line")]
    pub line2: usize,
    #[serde(rename = "text1OriginalLine")]
    pub original_line1: String,
    #[serde(rename = "text2OriginalLine")]
    pub original_line2: String,
}

impl Match {
    fn new(idx1: usize, left: &Token, idx2: usize, right: &Token) -> Self {
        Self {
            word: left.word.clone(),
            idx1,
            idx2,
            line1: left.line,
            line2: right.line,
            original_line1: left.original_line.clone(),
            original_line2: right.original_line.clone(),
        }
    }

    /// Global token index on `side`.
    pub fn index_on(&self, side: TextSide) -> usize {
        match side {
            TextSide::Text1 => self.idx1,
            TextSide::Text2 => self.idx2,
        }
    }

    /// Whether `self` directly follows `prev` in both texts.
    pub fn follows(&self, prev: &Match) -> bool {
        self.idx1 == prev.idx1 + 1 && self.idx2 == prev.idx2 + 1
    }
}

/// A single reconstructed LCS alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LcsAlignment {
    /// LCS length, `dp[m][n]`.
    pub length: usize,
    /// Matches in increasing `idx1`/`idx2` order.
    pub matches: Vec<Match>,
    /// Global indices of matched tokens in the first text.
    pub matched1: BTreeSet<usize>,
    /// Global indices of matched tokens in the second text.
    pub matched2: BTreeSet<usize>,
}

impl LcsAlignment {
    /// Number of distinct words among the matches.
    pub fn unique_words(&self) -> usize {
        self.matches
            .iter()
            .map(|m| m.word.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Walk `table` back from `(m, n)` and collect one LCS.
///
/// On unequal words the walk moves up (`i - 1`) only when that cell is strictly
/// larger than the one to the left; ties move left (`j - 1`). Output is
/// therefore reproducible even when several optimal alignments exist.
pub fn backtrack(table: &AlignmentTable, left: &[Token], right: &[Token]) -> LcsAlignment {
    debug_assert_eq!(table.left_len(), left.len());
    debug_assert_eq!(table.right_len(), right.len());

    let mut matches = Vec::with_capacity(table.lcs_len());
    let mut matched1 = BTreeSet::new();
    let mut matched2 = BTreeSet::new();

    let mut i = left.len();
    let mut j = right.len();
    while i > 0 && j > 0 {
        if left[i - 1].word == right[j - 1].word {
            matches.push(Match::new(i - 1, &left[i - 1], j - 1, &right[j - 1]));
            matched1.insert(i - 1);
            matched2.insert(j - 1);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) > table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // Collected back to front.
    matches.reverse();

    LcsAlignment {
        length: table.lcs_len(),
        matches,
        matched1,
        matched2,
    }
}

/// Build the table for `left` × `right` and backtrack it.
pub fn align(left: &[Token], right: &[Token]) -> LcsAlignment {
    let table = AlignmentTable::build(left, right);
    backtrack(&table, left, right)
}
