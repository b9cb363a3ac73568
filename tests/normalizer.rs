use notes_digest::text::{collapse_whitespace, extract_words, normalize, split_sentences};

#[test]
fn invariant_empty_and_whitespace_input_normalize_to_nothing() {
    for input in ["", "   ", "\n\t \r\n"] {
        let normalized = normalize(input);
        assert!(normalized.sentences.is_empty(), "sentences for {input:?}");
        assert!(normalized.words.is_empty(), "words for {input:?}");
    }
}

#[test]
fn invariant_whitespace_runs_collapse_before_splitting() {
    let normalized = normalize("  First   line.\n\nSecond\tline!  ");

    assert_eq!(normalized.sentences, vec!["First line.", " Second line!"]);
    assert_eq!(normalized.words, vec!["first", "line", "second", "line"]);
}

#[test]
fn invariant_no_terminator_yields_single_sentence() {
    let normalized = normalize("alpha beta gamma delta epsilon");

    assert_eq!(normalized.sentences, vec!["alpha beta gamma delta epsilon"]);
    assert_eq!(normalized.words.len(), 5);
}

#[test]
fn invariant_document_and_sentence_words_agree() {
    let text = "It's 3 o'clock; the 'quick' fox-trot ends. Numbers like 42 vanish!";
    let normalized = normalize(text);

    let per_sentence: Vec<String> = normalized
        .sentences
        .iter()
        .flat_map(|s| extract_words(s))
        .collect();

    assert_eq!(per_sentence, normalized.words);
    assert_eq!(
        normalized.words,
        vec!["it's", "o'clock", "the", "quick", "fox", "trot", "ends", "numbers", "like", "vanish"]
    );
}

#[test]
fn split_handles_mixed_terminators() {
    let clean = collapse_whitespace("Is it?  Yes!! It is. Done");
    assert_eq!(
        split_sentences(&clean),
        vec!["Is it?", " Yes!!", " It is.", " Done"]
    );
}
