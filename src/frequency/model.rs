use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stopwords::is_stop_word;

/// Normalized importance of every content word in one document.
///
/// Values lie in `(0.0, 1.0]` and the most frequent word scores exactly 1.0.
/// A document without content words produces an empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    inner: BTreeMap<String, f64>,
}

impl FrequencyMap {
    /// Importance of `word`, 0.0 when the word is unknown or a stop word.
    pub fn get(&self, word: &str) -> f64 {
        self.inner.get(word).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.inner.iter()
    }
}

/// Count content words and scale the counts by the largest one.
pub fn build_frequencies(words: &[String]) -> FrequencyMap {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for word in words {
        if is_stop_word(word) {
            continue;
        }
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }

    let Some(max_count) = counts.values().copied().max() else {
        return FrequencyMap::default();
    };

    let max_count = max_count as f64;
    let inner = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count as f64 / max_count))
        .collect();

    let map = FrequencyMap { inner };
    debug_assert!(map.iter().all(|(_, v)| *v > 0.0 && *v <= 1.0));
    tracing::trace!(content_words = map.len(), "built frequency map");
    map
}
