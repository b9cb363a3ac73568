pub mod model;
pub mod stopwords;

pub use model::{build_frequencies, FrequencyMap};
pub use stopwords::{is_stop_word, STOP_WORDS, STOP_WORDS_VERSION};
