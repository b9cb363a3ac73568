/// Version of the built-in stop-word table. Bump when the list changes, since
/// it changes every score the engine produces.
pub const STOP_WORDS_VERSION: u32 = 1;

/// Function words excluded from importance scoring. Lowercase, exact match.
pub const STOP_WORDS: [&str; 24] = [
    "the", "is", "in", "at", "of", "a", "to", "and", "for", "on", "with", "as", "by", "an", "be",
    "are", "this", "that", "it", "from", "or", "we", "you", "your",
];

/// Membership test against [`STOP_WORDS`].
///
/// Callers pass tokens that are already lowercased; anything else is
/// lowercased first.
pub fn is_stop_word(word: &str) -> bool {
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        let lower = word.to_ascii_lowercase();
        STOP_WORDS.contains(&lower.as_str())
    } else {
        STOP_WORDS.contains(&word)
    }
}
