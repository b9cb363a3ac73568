use std::path::Path;

use thiserror::Error;

/// Errors from turning an upload into document text.
///
/// These stop at the ingestion layer: the summarizer only ever sees a
/// successfully built `Document`.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract text for page {page_index}: {source}")]
    PageText {
        page_index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// How an upload's text is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Decoded verbatim (`text/*`).
    PlainText,
    /// Text comes page by page from an extractor (`application/pdf`).
    Paged,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Result<Self, IngestError> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/pdf" {
            Ok(MediaKind::Paged)
        } else if essence.starts_with("text/") {
            Ok(MediaKind::PlainText)
        } else {
            Err(IngestError::UnsupportedType(mime.to_string()))
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(MediaKind::Paged),
            "txt" | "text" | "md" | "markdown" | "csv" | "html" | "htm" => Ok(MediaKind::PlainText),
            _ => Err(IngestError::UnsupportedType(path.display().to_string())),
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            MediaKind::PlainText => "text/plain",
            MediaKind::Paged => "application/pdf",
        }
    }
}

/// A page-oriented text extractor (a PDF library, for instance).
///
/// Each page yields its text items in reading order; layout is not preserved.
pub trait PageTextSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn page_count(&self) -> usize;

    fn page_items(&self, page_index: usize) -> Result<Vec<String>, Self::Error>;
}

/// Pages that were extracted ahead of time.
impl PageTextSource for Vec<Vec<String>> {
    type Error = std::convert::Infallible;

    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_items(&self, page_index: usize) -> Result<Vec<String>, Self::Error> {
        Ok(self.get(page_index).cloned().unwrap_or_default())
    }
}

/// Join each page's items with a space, then the pages with a space, in page
/// order. The result is trimmed.
pub fn flatten_pages<P: PageTextSource>(pages: &P) -> Result<String, IngestError> {
    let mut text = String::new();
    for page_index in 0..pages.page_count() {
        let items = pages
            .page_items(page_index)
            .map_err(|e| IngestError::PageText {
                page_index,
                source: Box::new(e),
            })?;
        text.push(' ');
        text.push_str(&items.join(" "));
    }
    Ok(text.trim().to_string())
}
