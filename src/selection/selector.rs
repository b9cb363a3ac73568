use crate::types::ScoredSentence;

/// Number of sentences to keep: `max(1, round(sentence_count * ratio))`,
/// never more than `sentence_count`.
///
/// Total over `ratio`: NaN and non-positive values keep one sentence,
/// `ratio >= 1` (including infinity) keeps everything. An empty document
/// keeps nothing.
pub fn target_sentence_count(sentence_count: usize, ratio: f64) -> usize {
    if sentence_count == 0 {
        return 0;
    }

    let raw = (sentence_count as f64 * ratio).round();
    if raw.is_nan() || raw < 1.0 {
        1
    } else if raw >= sentence_count as f64 {
        sentence_count
    } else {
        raw as usize
    }
}

/// Ratio with the same selection behaviour as `ratio`, but always finite:
/// NaN and `-inf` become 0.0 (keep one), `+inf` becomes 1.0 (keep all).
pub fn effective_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() || ratio == f64::NEG_INFINITY {
        0.0
    } else if ratio == f64::INFINITY {
        1.0
    } else {
        ratio
    }
}

/// Ranking key: NaN sorts below every real score, and -0.0 ties with 0.0.
fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else if score == 0.0 {
        0.0
    } else {
        score
    }
}

/// Sort by (score desc, idx asc). Total for any score a scorer returns.
pub fn rank(mut scored: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| {
        // Descending score, then ascending position
        rank_key(b.score)
            .total_cmp(&rank_key(a.score))
            .then_with(|| a.idx.cmp(&b.idx))
    });

    debug_assert!(scored.windows(2).all(|w| {
        let (a, b) = (rank_key(w[0].score), rank_key(w[1].score));
        a > b || (a == b && w[0].idx <= w[1].idx)
    }));

    scored
}

/// Keep the best `target_sentence_count` sentences, back in reading order.
pub fn choose(scored: Vec<ScoredSentence>, sentence_count: usize, ratio: f64) -> Vec<ScoredSentence> {
    let keep = target_sentence_count(sentence_count, ratio);

    let mut kept = rank(scored);
    kept.truncate(keep);
    kept.sort_by_key(|s| s.idx);

    tracing::debug!(sentence_count, ratio, keep, "selected sentences");
    kept
}

/// Trim each sentence and join with single spaces.
pub fn join_sentences(sentences: &[ScoredSentence]) -> String {
    sentences
        .iter()
        .map(|s| s.text.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pick the summary sentences and render them as one string.
pub fn select(scored: Vec<ScoredSentence>, sentence_count: usize, ratio: f64) -> String {
    join_sentences(&choose(scored, sentence_count, ratio))
}
