pub mod normalizer;
pub mod tokens;

pub use normalizer::{collapse_whitespace, normalize, split_sentences, NormalizedText};
pub use tokens::{count_words, extract_words};
