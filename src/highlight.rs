//! Re-inserting markup around matched words in the original text.
//!
//! Words are located by searching each line for their normalized text,
//! case-insensitively, starting after the last inserted tag. This keeps every
//! other character of the input intact, but it is a heuristic: when the same
//! word occurs several times on a line, or a word also appears inside an
//! earlier, unmatched word, the first occurrence after the offset is the one
//! that gets marked.

use crate::config::Markup;
use crate::token::{is_space, normalize_line, Token};
use std::collections::{BTreeSet, HashMap};

/// Return a copy of `text` with the tokens in `matched` wrapped in `markup`.
///
/// `tokens` must be the result of [`tokenize`](crate::tokenize) on `text` and
/// `matched` holds global indices into it.
pub fn highlight(
    text: &str,
    tokens: &[Token],
    matched: &BTreeSet<usize>,
    markup: &Markup,
) -> String {
    let by_position: HashMap<(usize, usize), usize> = tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| ((token.line, token.position), idx))
        .collect();

    let mut lines = Vec::new();
    for (line_idx, line) in text.split('\n').enumerate() {
        if line.trim_matches(is_space).is_empty() {
            lines.push(line.to_string());
            continue;
        }

        let mut current = line.to_string();
        let mut offset = 0;
        for (word_idx, word) in normalize_line(line).iter().enumerate() {
            let global = match by_position.get(&(line_idx + 1, word_idx + 1)) {
                Some(&idx) if tokens[idx].word == *word => idx,
                _ => continue,
            };
            if !matched.contains(&global) {
                continue;
            }

            match find_ignore_case(&current, word, offset) {
                Some((start, end)) => {
                    let wrapped = markup.wrap(&current[start..end]);
                    current.replace_range(start..end, &wrapped);
                    offset = start + wrapped.len();
                }
                None => {
                    log::trace!(
                        "matched word {:?} not found on line {} after byte {}",
                        word,
                        line_idx + 1,
                        offset
                    );
                }
            }
        }
        lines.push(current);
    }

    lines.join("\n")
}

/// Remove every tag inserted by [`highlight`].
///
/// Inverse of `highlight` as long as the original text does not itself
/// contain the markup strings.
pub fn strip_highlights(text: &str, markup: &Markup) -> String {
    text.replace(&markup.open, "").replace(&markup.close, "")
}

/// Find `needle` (already lower-case) in `haystack` at or after byte `from`,
/// comparing against the lower-cased haystack. Returns the byte range in
/// `haystack`.
fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let tail = haystack.get(from..)?;
    tail.char_indices().find_map(|(start, _)| {
        let len = prefix_len_ignore_case(&tail[start..], needle)?;
        Some((from + start, from + start + len))
    })
}

/// Byte length of the prefix of `text` whose lower-case form equals `needle`.
fn prefix_len_ignore_case(text: &str, needle: &str) -> Option<usize> {
    let mut expected = needle.chars().peekable();
    for (offset, c) in text.char_indices() {
        if expected.peek().is_none() {
            return Some(offset);
        }
        for lower in c.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
    }
    if expected.peek().is_none() {
        Some(text.len())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn mark(word: &str) -> String {
        Markup::highlight().wrap(word)
    }

    fn run(text: &str, matched: &[usize]) -> String {
        let tokens = tokenize(text);
        let matched: BTreeSet<usize> = matched.iter().copied().collect();
        highlight(text, &tokens, &matched, &Markup::highlight())
    }

    #[test]
    fn test_marks_single_word() {
        assert_eq!(run("The cat sat.", &[1]), format!("The {} sat.", mark("cat")));
    }

    #[test]
    fn test_keeps_original_case() {
        assert_eq!(
            run("Hello WORLD", &[0, 1]),
            format!("{} {}", mark("Hello"), mark("WORLD"))
        );
    }

    #[test]
    fn test_nothing_matched_is_identity() {
        let text = "Some text,\n\n  with lines.";
        assert_eq!(run(text, &[]), text);
    }

    #[test]
    fn test_blank_lines_are_copied() {
        assert_eq!(
            run("a\n\n  \nb", &[0, 1]),
            format!("{}\n\n  \n{}", mark("a"), mark("b"))
        );
    }

    #[test]
    fn test_leading_whitespace_and_crlf() {
        assert_eq!(
            run("  Hello world\r\nnext", &[0, 2]),
            format!("  {} world\r\n{}", mark("Hello"), mark("next"))
        );
    }

    #[test]
    fn test_second_line_indices() {
        // "dog" is global index 2, on line 2
        assert_eq!(
            run("cat bird\ndog fish", &[2]),
            format!("cat bird\n{} fish", mark("dog"))
        );
    }

    #[test]
    fn test_word_with_inner_punctuation_is_left_alone() {
        // normalized "dont" does not occur verbatim in "don't"
        assert_eq!(run("don't stop", &[0, 1]), format!("don't {}", mark("stop")));
    }

    #[test]
    fn test_non_ascii_letters_stay_outside_markup() {
        // "ÉCOLE" normalizes to "cole"; only the ASCII part is wrapped
        assert_eq!(run("ÉCOLE ouverte", &[0]), format!("É{} ouverte", mark("COLE")));
        assert_eq!(
            run("Café society", &[0, 1]),
            format!("{}é {}", mark("Caf"), mark("society"))
        );
    }

    #[test]
    fn test_repeated_word_marks_first_occurrence() {
        // Only the second "the" is matched, but the search from offset 0
        // finds the first one.
        assert_eq!(
            run("the cat the dog", &[2]),
            format!("{} cat the dog", mark("the"))
        );
    }

    #[test]
    fn test_word_inside_earlier_word() {
        assert_eq!(
            run("scatter cat", &[1]),
            format!("s{}ter cat", mark("cat"))
        );
    }

    #[test]
    fn test_offset_skips_inserted_markup() {
        // "mark" and "class" appear inside the tags; they must not be re-matched
        assert_eq!(
            run("mark class mark", &[0, 1, 2]),
            format!("{} {} {}", mark("mark"), mark("class"), mark("mark"))
        );
    }

    #[test]
    fn test_strip_restores_input() {
        let samples = [
            "The cat sat.",
            "  Hello world\r\nnext",
            "the cat the dog\n\nscatter cat",
            "ÉCOLE, école; Ecole!",
        ];
        for text in samples {
            let tokens = tokenize(text);
            let all: BTreeSet<usize> = (0..tokens.len()).collect();
            let highlighted = highlight(text, &tokens, &all, &Markup::highlight());
            assert_eq!(strip_highlights(&highlighted, &Markup::highlight()), text);
        }
    }

    #[test]
    fn test_find_ignore_case_ranges() {
        assert_eq!(find_ignore_case("Hello World", "world", 0), Some((6, 11)));
        assert_eq!(find_ignore_case("Hello World", "hello", 1), None);
        assert_eq!(find_ignore_case("ab", "abc", 0), None);
        assert_eq!(find_ignore_case("ab", "b", 5), None);
        assert_eq!(find_ignore_case("ÀB àb", "àb", 0), Some((0, 3)));
        assert_eq!(find_ignore_case("ÀB àb", "àb", 2), Some((4, 7)));
        // not a char boundary
        assert_eq!(find_ignore_case("ÀB àb", "àb", 1), None);
    }
}
