//! Consecutive runs and line-to-line groupings derived from a match list.

use crate::backtrack::Match;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Matches that are contiguous in both texts at once.
pub type ConsecutiveRun = Vec<Match>;

/// All matches falling on one `(line1, line2)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatchGroup {
    pub text1_line: usize,
    pub text2_line: usize,
    /// Trimmed original text of `text1_line`.
    pub text1_content: String,
    /// Trimmed original text of `text2_line`.
    pub text2_content: String,
    /// Matched words in match order, duplicates kept.
    pub matched_words: Vec<String>,
}

/// Split `matches` into maximal runs where each match directly follows the
/// previous one in both texts, keeping runs of at least `min_len` matches.
pub fn consecutive_runs(matches: &[Match], min_len: usize) -> Vec<ConsecutiveRun> {
    let mut runs = Vec::new();
    let mut current: ConsecutiveRun = Vec::new();

    for m in matches {
        let extends = current.last().map_or(true, |prev| m.follows(prev));
        if !extends {
            let finished = std::mem::take(&mut current);
            if finished.len() >= min_len {
                runs.push(finished);
            }
        }
        current.push(m.clone());
    }

    if current.len() >= min_len {
        runs.push(current);
    }

    runs
}

/// Group matches by `(line1, line2)` in order of first occurrence.
pub fn group_by_line(matches: &[Match]) -> Vec<LineMatchGroup> {
    let mut groups: Vec<LineMatchGroup> = Vec::new();
    let mut index: HashMap<(usize, usize), usize> = HashMap::new();

    for m in matches {
        let slot = *index.entry((m.line1, m.line2)).or_insert_with(|| {
            groups.push(LineMatchGroup {
                text1_line: m.line1,
                text2_line: m.line2,
                text1_content: m.original_line1.clone(),
                text2_content: m.original_line2.clone(),
                matched_words: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].matched_words.push(m.word.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(word: &str, idx1: usize, idx2: usize, line1: usize, line2: usize) -> Match {
        Match {
            word: word.to_string(),
            idx1,
            idx2,
            line1,
            line2,
            original_line1: format!("left {}", line1),
            original_line2: format!("right {}", line2),
        }
    }

    fn run_words(run: &ConsecutiveRun) -> Vec<&str> {
        run.iter().map(|m| m.word.as_str()).collect()
    }

    #[test]
    fn test_single_run_of_three() {
        let matches = vec![m("a", 0, 4, 1, 1), m("b", 1, 5, 1, 1), m("c", 2, 6, 1, 1)];
        let runs = consecutive_runs(&matches, 3);
        assert_eq!(runs.len(), 1);
        assert_eq!(run_words(&runs[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_short_runs_are_dropped() {
        let matches = vec![m("a", 0, 0, 1, 1), m("b", 1, 1, 1, 1), m("c", 5, 2, 1, 1)];
        assert!(consecutive_runs(&matches, 3).is_empty());
    }

    #[test]
    fn test_gap_on_one_side_breaks_run() {
        // idx1 is contiguous but idx2 skips one
        let matches = vec![
            m("a", 0, 0, 1, 1),
            m("b", 1, 1, 1, 1),
            m("c", 2, 3, 1, 1),
            m("d", 3, 4, 1, 1),
            m("e", 4, 5, 1, 1),
        ];
        let runs = consecutive_runs(&matches, 3);
        assert_eq!(runs.len(), 1);
        assert_eq!(run_words(&runs[0]), vec!["c", "d", "e"]);
    }

    #[test]
    fn test_multiple_runs_and_final_flush() {
        let matches = vec![
            m("a", 0, 0, 1, 1),
            m("b", 1, 1, 1, 1),
            m("c", 2, 2, 1, 1),
            m("x", 7, 3, 2, 1),
            m("d", 9, 8, 2, 2),
            m("e", 10, 9, 2, 2),
            m("f", 11, 10, 2, 2),
            m("g", 12, 11, 2, 2),
        ];
        let runs = consecutive_runs(&matches, 3);
        assert_eq!(runs.len(), 2);
        assert_eq!(run_words(&runs[0]), vec!["a", "b", "c"]);
        assert_eq!(run_words(&runs[1]), vec!["d", "e", "f", "g"]);
        for run in &runs {
            for pair in run.windows(2) {
                assert!(pair[1].follows(&pair[0]));
            }
        }
    }

    #[test]
    fn test_min_len_is_respected() {
        let matches = vec![m("a", 0, 0, 1, 1), m("b", 1, 1, 1, 1)];
        assert_eq!(consecutive_runs(&matches, 2).len(), 1);
        assert!(consecutive_runs(&matches, 3).is_empty());
        assert!(consecutive_runs(&[], 3).is_empty());
    }

    #[test]
    fn test_group_by_line_first_occurrence_order() {
        let matches = vec![
            m("a", 0, 0, 1, 2),
            m("b", 1, 1, 1, 2),
            m("c", 2, 5, 2, 3),
            m("d", 3, 6, 1, 3),
            m("b", 4, 7, 2, 3),
        ];
        let groups = group_by_line(&matches);
        let keys: Vec<_> = groups.iter().map(|g| (g.text1_line, g.text2_line)).collect();
        assert_eq!(keys, vec![(1, 2), (2, 3), (1, 3)]);
        assert_eq!(groups[0].matched_words, vec!["a", "b"]);
        assert_eq!(groups[1].matched_words, vec!["c", "b"]);
        assert_eq!(groups[2].matched_words, vec!["d"]);
        assert_eq!(groups[1].text1_content, "left 2");
        assert_eq!(groups[1].text2_content, "right 3");
    }

    #[test]
    fn test_group_serializes_camel_case() {
        let groups = group_by_line(&[m("a", 0, 0, 1, 1)]);
        let json = serde_json::to_value(&groups[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text1Line": 1,
                "text2Line": 1,
                "text1Content": "left 1",
                "text2Content": "right 1",
                "matchedWords": ["a"],
            })
        );
    }
}
