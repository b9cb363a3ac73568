use notes_digest::frequency::FrequencyMap;
use notes_digest::selection::{
    choose, rank, select, target_sentence_count, PositionalFrequencyScorer, SentenceScorer,
    Summarizer,
};
use notes_digest::text::normalize;
use notes_digest::types::{ScoredSentence, Summary};
use notes_digest::SummarizerConfig;

const CORPUS: [&str; 5] = [
    "Cats are mammals. Cats like fish. Dogs are mammals too. Dogs like walks.",
    "Photosynthesis converts light into chemical energy! Chlorophyll absorbs light. \
     Plants store energy as glucose? Glucose fuels growth. Light matters most.",
    "One. Two. Three. Four. Five. Six. Seven. Eight. Nine. Ten.",
    "It is the. And to a. Or we you.",
    "no punctuation at all in this note",
];

fn ratios() -> Vec<f64> {
    (0..=20).map(|i| i as f64 * 0.05).collect()
}

fn scored(idx: usize, text: &str, score: f64) -> ScoredSentence {
    ScoredSentence {
        idx,
        text: text.to_string(),
        score,
    }
}

#[test]
fn invariant_output_is_subsequence_of_sentences() {
    let summarizer = Summarizer::default();

    for text in CORPUS {
        let all_sentences = normalize(text).sentences;
        for ratio in ratios() {
            let summary = summarizer.summarize_with_ratio(text, ratio);

            assert!(
                summary.sentences.windows(2).all(|w| w[0].index < w[1].index),
                "order must be preserved and sentences unique"
            );
            for selected in &summary.sentences {
                assert_eq!(selected.text, all_sentences[selected.index].trim());
            }

            let joined: Vec<&str> = summary.sentences.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(summary.text, joined.join(" "));
            assert_eq!(summary.stats.sentences_considered, all_sentences.len());
            assert_eq!(summary.stats.sentences_selected, summary.sentences.len());
        }
    }
}

#[test]
fn invariant_compression_is_monotonic_in_ratio() {
    let summarizer = Summarizer::default();

    for text in CORPUS {
        let counts: Vec<usize> = ratios()
            .into_iter()
            .map(|r| summarizer.summarize_with_ratio(text, r).stats.sentences_selected)
            .collect();

        assert!(
            counts.windows(2).all(|w| w[0] <= w[1]),
            "kept sentence count must not shrink as ratio grows: {counts:?}"
        );
    }
}

#[test]
fn invariant_keep_is_floored_and_capped() {
    for n in 1..=12 {
        for ratio in ratios() {
            let keep = target_sentence_count(n, ratio);
            assert!(keep >= 1 && keep <= n, "n={n} ratio={ratio} keep={keep}");
        }
        assert_eq!(target_sentence_count(n, 1.0), n);
        assert_eq!(target_sentence_count(n, 0.0), 1);
    }
}

#[test]
fn invariant_ties_prefer_earlier_sentence() {
    let candidates = vec![
        scored(0, "Low.", 0.1),
        scored(1, " Tie one.", 0.5),
        scored(2, " Tie two.", 0.5),
        scored(3, " Also low.", 0.2),
    ];

    let ranked = rank(candidates.clone());
    let order: Vec<usize> = ranked.iter().map(|s| s.idx).collect();
    assert_eq!(order, vec![1, 2, 3, 0]);

    // keep = round(4 * 0.25) = 1
    assert_eq!(select(candidates, 4, 0.25), "Tie one.");
}

#[test]
fn invariant_selection_restores_reading_order() {
    let candidates = vec![
        scored(0, "First.", 0.1),
        scored(1, " Second.", 0.9),
        scored(2, " Third.", 0.3),
        scored(3, " Fourth.", 0.8),
    ];

    let kept = choose(candidates, 4, 0.5);
    let order: Vec<usize> = kept.iter().map(|s| s.idx).collect();
    assert_eq!(order, vec![1, 3]);
}

#[test]
fn invariant_out_of_range_ratios_never_fault() {
    let text = CORPUS[1];
    let summarizer = Summarizer::default();

    for ratio in [-1.0, 0.0, f64::NAN, f64::NEG_INFINITY] {
        assert_eq!(summarizer.summarize_with_ratio(text, ratio).stats.sentences_selected, 1);
    }
    for ratio in [1.0, 3.5, f64::INFINITY] {
        let summary = summarizer.summarize_with_ratio(text, ratio);
        assert_eq!(summary.stats.sentences_selected, 5);
    }
}

/// Positional scoring, except every third sentence comes back as NaN.
struct GappyScorer;

impl SentenceScorer for GappyScorer {
    fn score(&self, idx: usize, count: usize, words: &[String], freq: &FrequencyMap) -> f64 {
        if idx % 3 == 0 {
            f64::NAN
        } else {
            PositionalFrequencyScorer.score(idx, count, words, freq)
        }
    }
}

#[test]
fn invariant_nan_scores_rank_last_without_faulting() {
    let text: String = (0..40)
        .map(|i| format!("Sentence number {i} talks about topic {}. ", i % 7))
        .collect();

    let summarizer = Summarizer::new(GappyScorer, SummarizerConfig::v0());
    let summary = summarizer.summarize_with_ratio(&text, 0.5);

    assert_eq!(summary.stats.sentences_considered, 40);
    assert_eq!(summary.stats.sentences_selected, 20);
    // 26 sentences have real scores, so none of the NaN ones make the cut.
    assert!(summary.sentences.iter().all(|s| s.index % 3 != 0));
    assert!(summary.sentences.windows(2).all(|w| w[0].index < w[1].index));

    // Asking for everything still returns every sentence, in order.
    let everything = summarizer.summarize_with_ratio(&text, 1.0);
    let indices: Vec<usize> = everything.sentences.iter().map(|s| s.index).collect();
    assert_eq!(indices, (0..40).collect::<Vec<_>>());
}

#[test]
fn invariant_rank_is_total_over_special_scores() {
    let candidates = vec![
        scored(0, "Nan.", f64::NAN),
        scored(1, " Negative zero.", -0.0),
        scored(2, " Zero.", 0.0),
        scored(3, " High.", 0.9),
        scored(4, " Infinite.", f64::INFINITY),
        scored(5, " Another nan.", f64::NAN),
    ];

    let order: Vec<usize> = rank(candidates).iter().map(|s| s.idx).collect();
    assert_eq!(order, vec![4, 3, 1, 2, 0, 5]);
}

#[test]
fn invariant_non_finite_ratio_stats_round_trip() {
    let summarizer = Summarizer::default();

    for (ratio, recorded) in [(f64::NAN, 0.0), (f64::NEG_INFINITY, 0.0), (f64::INFINITY, 1.0)] {
        let summary = summarizer.summarize_with_ratio(CORPUS[0], ratio);
        assert_eq!(summary.stats.ratio, recorded);

        let json = serde_json::to_string(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).expect("stats must deserialize");
        assert_eq!(back, summary);
    }
}
