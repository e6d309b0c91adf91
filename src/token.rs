//! Word tokenization with line/position tracking.
//!
//! Every text is split on `'\n'` and each line is normalized the same way:
//! lower-cased, stripped of everything that is not an ASCII letter, ASCII
//! digit, underscore or whitespace, then split on whitespace runs. Accented
//! and other non-ASCII letters are dropped, so `"Café"` becomes `"caf"`.
//! Blank lines produce no tokens but still consume a line number, so line
//! numbers always refer back to the raw input.
//!
//! ```
//! use plagcheck::tokenize;
//!
//! let tokens = tokenize("Hello, World!\n\nBye");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].word, "bye");
//! assert_eq!(tokens[2].line, 3);
//! ```

use serde::{Deserialize, Serialize};

/// A normalized word occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Normalized (lower-cased, punctuation-free) word text.
    pub word: String,
    /// 1-based line number in the raw text.
    pub line: usize,
    /// 1-based word position within the line.
    pub position: usize,
    /// The raw line, trimmed but otherwise untouched.
    pub original_line: String,
}

/// Anything that can be compared word-for-word by the alignment table.
pub trait Word {
    fn as_word(&self) -> &str;
}

impl Word for Token {
    fn as_word(&self) -> &str {
        &self.word
    }
}

impl Word for String {
    fn as_word(&self) -> &str {
        self
    }
}

impl Word for &str {
    fn as_word(&self) -> &str {
        self
    }
}

/// The ECMAScript `\s` class. Unlike [`char::is_whitespace`] it includes
/// U+FEFF and excludes U+0085.
pub(crate) fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_space(c)
}

/// Normalize a single line into its word list.
///
/// Shared by [`tokenize`] and the highlighter, which must agree on positions.
pub fn normalize_line(line: &str) -> Vec<String> {
    let cleaned: String = line
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c))
        .collect();

    cleaned
        .split(is_space)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize `text` into position-tagged words.
///
/// The index of a token in the returned vector is its *global index*.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (line_idx, line) in text.split('\n').enumerate() {
        let original_line = line.trim_matches(is_space);
        for (word_idx, word) in normalize_line(line).into_iter().enumerate() {
            tokens.push(Token {
                word,
                line: line_idx + 1,
                position: word_idx + 1,
                original_line: original_line.to_string(),
            });
        }
    }

    tokens
}

/// Whole-text tokenization without positions.
///
/// Yields exactly the words of [`tokenize`], in order. A newline is whitespace,
/// so normalizing per line or over the whole text gives the same word list.
pub fn tokenize_words(text: &str) -> Vec<String> {
    normalize_line(text)
}
