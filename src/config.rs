//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Opening and closing tags wrapped around highlighted words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup {
    pub open: String,
    pub close: String,
}

impl Markup {
    /// `<mark class="highlight">…</mark>`, the format downstream consumers expect.
    pub fn highlight() -> Self {
        Self::with_class("highlight")
    }

    /// `<mark class="{class}">…</mark>`.
    pub fn with_class(class: &str) -> Self {
        Self {
            open: format!("<mark class=\"{}\">", class),
            close: "</mark>".to_string(),
        }
    }

    /// Wrap `text` in the open/close tags.
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.open.len() + text.len() + self.close.len());
        out.push_str(&self.open);
        out.push_str(text);
        out.push_str(&self.close);
        out
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::highlight()
    }
}

/// Configuration for [`Analyzer`](crate::Analyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Shortest run of consecutive matches reported in `consecutive_sequences`.
    pub min_run_length: usize,
    /// Tags used for the highlighted texts.
    pub markup: Markup,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_run_length: 3,
            markup: Markup::default(),
        }
    }
}
