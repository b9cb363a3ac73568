/// Extract word tokens from `text`.
///
/// A token is a maximal run of ASCII letters and apostrophes, lowercased.
/// Every other character separates tokens. Apostrophes at either edge of a run
/// act as quote marks and are dropped, so `'hello'` yields `hello` while
/// `don't` is kept whole; a run made only of apostrophes yields nothing.
pub fn extract_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if is_word_char(ch) {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            push_word(&mut words, &current);
            current.clear();
        }
    }
    if !current.is_empty() {
        push_word(&mut words, &current);
    }

    words
}

/// Whitespace-delimited word count of raw input, as shown to the user.
/// Simpler than [`extract_words`] and not used for scoring.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '\''
}

fn push_word(words: &mut Vec<String>, run: &str) {
    let word = run.trim_matches('\'');
    if !word.is_empty() {
        words.push(word.to_string());
    }
}
