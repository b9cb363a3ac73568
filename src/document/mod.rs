pub mod document;
pub mod ingest;
pub mod metadata;

pub use crate::types::identifiers::DocumentVersion;
pub use document::Document;
pub use ingest::{flatten_pages, IngestError, MediaKind, PageTextSource};
pub use metadata::{Metadata, MetadataValue};
