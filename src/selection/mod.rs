pub mod scoring;
pub mod selector;

use crate::config::SummarizerConfig;
use crate::document::Document;
use crate::frequency::build_frequencies;
use crate::text::{count_words, normalize};
use crate::types::{CompressionRatio, SelectedSentence, Summary, SummaryStats};
pub use scoring::{
    base_score, positional_boost, score_sentences, PositionalFrequencyScorer, SentenceScorer,
    POSITIONAL_DECAY,
};
pub use selector::{
    choose, effective_ratio, join_sentences, rank, select, target_sentence_count,
};

pub struct Summarizer<S> {
    scorer: S,
    config: SummarizerConfig,
}

impl Default for Summarizer<PositionalFrequencyScorer> {
    fn default() -> Self {
        Self {
            scorer: PositionalFrequencyScorer,
            config: SummarizerConfig::v0(),
        }
    }
}

impl<S> Summarizer<S>
where
    S: SentenceScorer,
{
    pub fn new(scorer: S, config: SummarizerConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize with the configured default ratio.
    pub fn summarize_text(&self, text: &str) -> Summary {
        self.summarize_with_ratio(text, self.config.ratio().get())
    }

    /// Summarize an ingested document; the result carries its content hash.
    pub fn summarize_document(&self, document: &Document, ratio: CompressionRatio) -> Summary {
        let mut summary = self.summarize_with_ratio(&document.content, ratio.get());
        summary.document_version = Some(document.version.as_str().to_string());
        tracing::debug!(
            source = %document.source,
            version = document.version.short(),
            selected = summary.stats.sentences_selected,
            "summarized document"
        );
        summary
    }

    /// Run the full pipeline. `ratio` is used as given; validate it with
    /// [`CompressionRatio`] at the call site if it comes from a user.
    /// Non-finite ratios are recorded in the stats as their finite
    /// equivalent (see [`effective_ratio`]).
    pub fn summarize_with_ratio(&self, text: &str, ratio: f64) -> Summary {
        let ratio = effective_ratio(ratio);
        let input_words = count_words(text);

        // 1. Normalization
        let normalized = normalize(text);
        if normalized.is_empty() {
            tracing::debug!("nothing to summarize");
            return Summary {
                text: String::new(),
                sentences: Vec::new(),
                stats: SummaryStats {
                    ratio,
                    input_words,
                    sentences_considered: 0,
                    sentences_selected: 0,
                },
                document_version: None,
            };
        }
        let sentence_count = normalized.sentences.len();

        // 2. Frequency model
        let freq = build_frequencies(&normalized.words);

        // 3. Scoring
        let scored = self.scorer.score_sentences(&normalized.sentences, &freq);

        // 4. Selection
        let kept = choose(scored, sentence_count, ratio);
        let text = join_sentences(&kept);

        let sentences: Vec<SelectedSentence> = kept
            .into_iter()
            .map(|s| SelectedSentence {
                index: s.idx,
                text: s.text.trim().to_string(),
                score: s.score,
            })
            .collect();

        tracing::debug!(
            sentence_count,
            content_words = freq.len(),
            selected = sentences.len(),
            "summarized text"
        );

        Summary {
            text,
            stats: SummaryStats {
                ratio,
                input_words,
                sentences_considered: sentence_count,
                sentences_selected: sentences.len(),
            },
            sentences,
            document_version: None,
        }
    }
}

/// Summarize `text`, keeping about `ratio` of its sentences.
///
/// Returns an empty string when the text has no content. Callers without a
/// preference should pass [`crate::types::DEFAULT_RATIO`].
pub fn summarize(text: &str, ratio: f64) -> String {
    Summarizer::default().summarize_with_ratio(text, ratio).text
}
