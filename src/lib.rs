//! Deterministic extractive summarization for study notes and documents.
//!
//! `notes-digest` picks the sentences of a document that best represent it:
//! words are weighted by normalized frequency (stop words excluded), sentences
//! by the mean weight of their words with a mild bias towards the start of the
//! document, and the best ones are returned in reading order. Identical inputs
//! always produce identical outputs, byte-for-byte.
//!
//! ```
//! let summary = notes_digest::summarize(
//!     "Cats are mammals. Cats like fish. Dogs are mammals too. Dogs like walks.",
//!     0.5,
//! );
//! assert_eq!(summary, "Cats like fish. Dogs like walks.");
//! ```

pub mod config;
pub mod document;
pub mod frequency;
pub mod selection;
pub mod text;
pub mod types;

pub use config::{ConfigError, SummarizerConfig};
pub use selection::{summarize, Summarizer};
pub use types::{CompressionRatio, Summary, DEFAULT_RATIO};
