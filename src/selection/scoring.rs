use crate::frequency::FrequencyMap;
use crate::text::extract_words;
use crate::types::ScoredSentence;

/// How much of its base score the last sentence of a document loses.
pub const POSITIONAL_DECAY: f64 = 0.15;

pub trait SentenceScorer {
    /// Score one sentence given its extracted words and position.
    fn score(&self, idx: usize, sentence_count: usize, words: &[String], freq: &FrequencyMap) -> f64;

    /// Score every sentence, one entry per input sentence in input order.
    fn score_sentences(&self, sentences: &[String], freq: &FrequencyMap) -> Vec<ScoredSentence> {
        let sentence_count = sentences.len();
        sentences
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let words = extract_words(text);
                let score = self.score(idx, sentence_count, &words, freq);
                tracing::trace!(idx, score, words = words.len(), "scored sentence");
                ScoredSentence {
                    idx,
                    text: text.clone(),
                    score,
                }
            })
            .collect()
    }
}

/// v0: mean word importance, scaled down linearly with position.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalFrequencyScorer;

impl SentenceScorer for PositionalFrequencyScorer {
    fn score(&self, idx: usize, sentence_count: usize, words: &[String], freq: &FrequencyMap) -> f64 {
        base_score(words, freq) * positional_boost(idx, sentence_count)
    }
}

/// Mean importance of `words`; a sentence without words scores 0.0.
pub fn base_score(words: &[String], freq: &FrequencyMap) -> f64 {
    let total: f64 = words.iter().map(|w| freq.get(w)).sum();
    total / words.len().max(1) as f64
}

/// `1 - (idx / sentence_count) * 0.15`: 1.0 for the first sentence, falling
/// towards 0.85 for the last.
pub fn positional_boost(idx: usize, sentence_count: usize) -> f64 {
    if sentence_count == 0 {
        return 1.0;
    }
    1.0 - (idx as f64 / sentence_count as f64) * POSITIONAL_DECAY
}

/// Score `sentences` with the default [`PositionalFrequencyScorer`].
pub fn score_sentences(sentences: &[String], freq: &FrequencyMap) -> Vec<ScoredSentence> {
    PositionalFrequencyScorer.score_sentences(sentences, freq)
}
