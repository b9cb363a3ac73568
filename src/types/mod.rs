pub mod identifiers;
pub mod ratio;
pub mod summary;

pub use identifiers::{DocumentVersion, DocumentVersionError};
pub use ratio::{CompressionRatio, RatioError, DEFAULT_RATIO, MAX_RATIO, MIN_RATIO};
pub use summary::{
    ScoredSentence, SelectedSentence, Summary, SummaryStats, EMPTY_SUMMARY_PLACEHOLDER,
};
