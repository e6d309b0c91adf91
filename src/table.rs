//! LCS length table over two word sequences.

use crate::token::Word;

/// `(m+1) × (n+1)` table where `get(i, j)` is the LCS length of the first `i`
/// words of the left sequence and the first `j` words of the right one.
///
/// Cells are stored row-major in a single vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl AlignmentTable {
    /// Fill the table for `left` × `right`.
    ///
    /// O(m·n) in both time and memory; this is the dominant cost of a
    /// comparison.
    pub fn build<A: Word, B: Word>(left: &[A], right: &[B]) -> Self {
        let rows = left.len() + 1;
        let cols = right.len() + 1;
        log::debug!("building {}x{} alignment table", rows, cols);

        let mut cells = vec![0usize; rows * cols];
        for i in 1..rows {
            let word = left[i - 1].as_word();
            let row = i * cols;
            let prev_row = (i - 1) * cols;
            for j in 1..cols {
                cells[row + j] = if word == right[j - 1].as_word() {
                    cells[prev_row + j - 1] + 1
                } else {
                    cells[prev_row + j].max(cells[row + j - 1])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Value of `dp[i][j]`.
    ///
    /// Panics if `i > m` or `j > n`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({}, {}) out of bounds", i, j);
        self.cells[i * self.cols + j]
    }

    /// Length of the left sequence (`m`).
    pub fn left_len(&self) -> usize {
        self.rows - 1
    }

    /// Length of the right sequence (`n`).
    pub fn right_len(&self) -> usize {
        self.cols - 1
    }

    /// Total LCS length, `dp[m][n]`.
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

/// LCS length only, keeping two rows instead of the full table.
///
/// Always equal to `AlignmentTable::build(left, right).lcs_len()`.
pub fn lcs_length<A: Word, B: Word>(left: &[A], right: &[B]) -> usize {
    // Iterate over the longer side so the rows span the shorter one.
    if right.len() > left.len() {
        return lcs_length(right, left);
    }

    let cols = right.len() + 1;
    let mut prev = vec![0usize; cols];
    let mut curr = vec![0usize; cols];

    for item in left {
        let word = item.as_word();
        for j in 1..cols {
            curr[j] = if word == right[j - 1].as_word() {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_borders_are_zero() {
        let table = AlignmentTable::build(&words("a b c"), &words("b c d e"));
        for i in 0..=3 {
            assert_eq!(table.get(i, 0), 0);
        }
        for j in 0..=4 {
            assert_eq!(table.get(0, j), 0);
        }
    }

    #[test]
    fn test_monotone_along_both_axes() {
        let left = words("x a b y c a");
        let right = words("a y b c x a b");
        let table = AlignmentTable::build(&left, &right);
        for i in 0..=left.len() {
            for j in 0..=right.len() {
                if i > 0 {
                    assert!(table.get(i, j) >= table.get(i - 1, j));
                }
                if j > 0 {
                    assert!(table.get(i, j) >= table.get(i, j - 1));
                }
            }
        }
    }

    #[test]
    fn test_known_lcs_lengths() {
        let cases = [
            ("a b c", "a b c", 3),
            ("a b c", "d e f", 0),
            ("the quick brown fox jumps", "a quick brown fox runs", 3),
            ("a b c b d a b", "b d c a b a", 4),
            ("hello world", "goodbye world", 1),
        ];
        for (left, right, expected) in cases {
            let table = AlignmentTable::build(&words(left), &words(right));
            assert_eq!(table.lcs_len(), expected, "{:?} vs {:?}", left, right);
        }
    }

    #[test]
    fn test_empty_sides() {
        let empty: Vec<&str> = vec![];
        let table = AlignmentTable::build(&empty, &words("a b"));
        assert_eq!(table.left_len(), 0);
        assert_eq!(table.right_len(), 2);
        assert_eq!(table.lcs_len(), 0);
        assert_eq!(lcs_length(&empty, &words("a b")), 0);
        assert_eq!(lcs_length(&words("a b"), &empty), 0);
    }

    #[test]
    fn test_rolling_length_agrees_with_table() {
        let pairs = [
            ("a b c b d a b", "b d c a b a"),
            ("one two three", "three two one"),
            ("same same same", "same"),
            ("p q r s t u v", "q s u w"),
        ];
        for (left, right) in pairs {
            let (left, right) = (words(left), words(right));
            let expected = AlignmentTable::build(&left, &right).lcs_len();
            assert_eq!(lcs_length(&left, &right), expected);
            assert_eq!(lcs_length(&right, &left), expected);
        }
    }

    #[test]
    fn test_mixed_word_types() {
        let owned: Vec<String> = vec!["a".into(), "b".into()];
        let borrowed = words("b a b");
        assert_eq!(AlignmentTable::build(&owned, &borrowed).lcs_len(), 2);
    }
}
