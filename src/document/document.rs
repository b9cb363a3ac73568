use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ingest::{flatten_pages, IngestError, MediaKind, PageTextSource};
use super::metadata::{Metadata, BYTE_SIZE, FILE_NAME, MEDIA_TYPE, PAGE_COUNT};
use crate::text::count_words;
use crate::types::identifiers::DocumentVersion;

/// Text to summarize, plus where it came from.
///
/// Lives for one session only; nothing here is written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: DocumentVersion,
    pub source: String,
    pub content: String,
    pub metadata: Metadata,
}

impl Document {
    /// Typed or pasted text. Content is kept verbatim.
    pub fn from_text(source: impl Into<String>, content: impl Into<String>, metadata: Metadata) -> Self {
        let content = content.into();
        let version = DocumentVersion::from_content(&content);

        Document {
            version,
            source: source.into(),
            content,
            metadata,
        }
    }

    /// A plain-text upload. Bytes must be valid UTF-8.
    pub fn from_text_bytes(
        source: impl Into<String>,
        raw_content: Vec<u8>,
        metadata: Metadata,
    ) -> Result<Self, IngestError> {
        let byte_size = raw_content.len();
        let content = String::from_utf8(raw_content)?;

        let mut defaults = Metadata::new();
        defaults.insert_string(MEDIA_TYPE, MediaKind::PlainText.mime());
        defaults.insert_number(BYTE_SIZE, byte_size as i64);

        let doc = Self::from_text(source, content, metadata.with_defaults(defaults));
        tracing::info!(source = %doc.source, bytes = byte_size, "ingested text document");
        Ok(doc)
    }

    /// A page-oriented upload, flattened into one string.
    pub fn from_pages<P: PageTextSource>(
        source: impl Into<String>,
        pages: &P,
        metadata: Metadata,
    ) -> Result<Self, IngestError> {
        let content = flatten_pages(pages)?;

        let mut defaults = Metadata::new();
        defaults.insert_string(MEDIA_TYPE, MediaKind::Paged.mime());
        defaults.insert_number(PAGE_COUNT, pages.page_count() as i64);

        let doc = Self::from_text(source, content, metadata.with_defaults(defaults));
        tracing::info!(source = %doc.source, pages = pages.page_count(), "ingested paged document");
        Ok(doc)
    }

    /// Read a plain-text file. Paged formats need [`Document::from_pages`].
    pub fn read_text_file(path: &Path) -> Result<Self, IngestError> {
        match MediaKind::from_path(path)? {
            MediaKind::PlainText => {}
            MediaKind::Paged => {
                return Err(IngestError::UnsupportedType(format!(
                    "{} (needs a page text extractor)",
                    path.display()
                )))
            }
        }

        let raw = std::fs::read(path)?;

        let mut metadata = Metadata::new();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            metadata.insert_string(FILE_NAME, name);
        }

        Self::from_text_bytes(path.display().to_string(), raw, metadata)
    }

    /// Whitespace-delimited word count of the content, for display.
    pub fn word_count(&self) -> usize {
        count_words(&self.content)
    }
}
