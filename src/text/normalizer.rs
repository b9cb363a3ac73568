use super::tokens::extract_words;

const TERMINATORS: [u8; 3] = [b'.', b'!', b'?'];

/// Output of the normalization stage.
///
/// `sentences` keep their raw text (including the leading space left by
/// whitespace collapsing); their position in the vector is their index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub sentences: Vec<String>,
    pub words: Vec<String>,
}

impl NormalizedText {
    /// True when there is nothing to summarize.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Collapse whitespace, then split into sentences and document-wide words.
pub fn normalize(text: &str) -> NormalizedText {
    let clean = collapse_whitespace(text);
    if clean.is_empty() {
        return NormalizedText::default();
    }

    let sentences = split_sentences(&clean);
    let words = extract_words(&clean);

    NormalizedText { sentences, words }
}

/// Replace every whitespace run with a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split already-collapsed text into sentences.
///
/// A sentence is a run of body characters followed by a run of terminators,
/// or the trailing body when no terminator follows. Terminators with no body
/// in front of them are skipped. Text made only of terminators comes back as
/// a single sentence.
pub fn split_sentences(clean: &str) -> Vec<String> {
    // Terminators are ASCII, so every index we slice at is a char boundary.
    let bytes = clean.as_bytes();
    let len = bytes.len();
    let mut sentences = Vec::new();
    let mut start = 0;

    while start < len {
        let body_end = scan(bytes, start, |b| !is_terminator(b));
        if body_end == start {
            start = scan(bytes, start, is_terminator);
            continue;
        }

        let end = scan(bytes, body_end, is_terminator);
        sentences.push(clean[start..end].to_string());
        start = end;
    }

    if sentences.is_empty() && !clean.is_empty() {
        sentences.push(clean.to_string());
    }

    sentences
}

fn is_terminator(b: u8) -> bool {
    TERMINATORS.contains(&b)
}

fn scan(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(bytes.len(), |offset| from + offset)
}
