use serde::{Deserialize, Serialize};

/// Shown by callers in place of an empty summary.
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "No content to summarize.";

/// Internal: a sentence after scoring, before selection.
/// `text` is the raw sentence as produced by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub idx: usize,
    pub text: String,
    pub score: f64,
}

/// A sentence kept in the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    pub index: usize,
    /// Trimmed sentence text.
    pub text: String,
    pub score: f64,
}

/// Counters describing one summarization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Ratio the selector applied; always finite.
    pub ratio: f64,
    /// Whitespace-delimited words of the raw input (display statistic).
    pub input_words: usize,
    pub sentences_considered: usize,
    pub sentences_selected: usize,
}

/// The final result of a summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined by a single space.
    pub text: String,
    /// Selected sentences in reading order.
    pub sentences: Vec<SelectedSentence>,
    pub stats: SummaryStats,
    /// Content hash of the source document, when summarizing a `Document`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Summary text, or [`EMPTY_SUMMARY_PLACEHOLDER`] when nothing was selected.
    pub fn display_text(&self) -> &str {
        if self.is_empty() {
            EMPTY_SUMMARY_PLACEHOLDER
        } else {
            &self.text
        }
    }
}
