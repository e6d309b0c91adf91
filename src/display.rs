use crate::backtrack::{LcsAlignment, TextSide};
use crate::grouping::consecutive_runs;
use crate::token::Token;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Internal representation of an included annotation.
struct IncludedSpan {
    /// First and last token index, inclusive.
    range: (usize, usize),
    label: String,
}

/// Terminal rendering of one side of an alignment.
///
/// The first row lists the side's tokens; every included annotation gets its
/// own row underneath, with `╰─╯` spanning the tokens it covers.
pub struct AlignmentDisplay<'a> {
    tokens: &'a [Token],
    alignment: &'a LcsAlignment,
    side: TextSide,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> AlignmentDisplay<'a> {
    pub fn new(tokens: &'a [Token], alignment: &'a LcsAlignment, side: TextSide) -> Self {
        AlignmentDisplay {
            tokens,
            alignment,
            side,
            include_spans: Vec::new(),
        }
    }

    /// One `Match(→k)` row per matched token, `k` being the index of the
    /// paired token in the other text.
    pub fn include_matches(&mut self) -> &mut Self {
        for m in &self.alignment.matches {
            let idx = m.index_on(self.side);
            self.include_spans.push(IncludedSpan {
                range: (idx, idx),
                label: format!("Match(→{})", m.index_on(self.side.other())),
            });
        }
        self
    }

    /// One `Run(n)` row per consecutive run of at least `min_len` matches.
    pub fn include_runs(&mut self, min_len: usize) -> &mut Self {
        for run in consecutive_runs(&self.alignment.matches, min_len) {
            if let (Some(first), Some(last)) = (run.first(), run.last()) {
                self.include_spans.push(IncludedSpan {
                    range: (first.index_on(self.side), last.index_on(self.side)),
                    label: format!("Run({})", run.len()),
                });
            }
        }
        self
    }
}

// the  quick  brown  fox  jumps
//      ╰───╯Match(→1)
//                     ╰─╯Match(→3)
//      ╰───────────────╯Run(3)
impl<'a> std::fmt::Display for AlignmentDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::with_capacity(self.tokens.len());
        let mut token_idx_to_end_display_char_idx = Vec::with_capacity(self.tokens.len());

        let mut opening_line = String::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.word);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for span in self.include_spans.iter() {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[span.range.0];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[span.range.1];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&span.label)?;
        }

        Ok(())
    }
}
