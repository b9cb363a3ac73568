use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

const VERSION_PREFIX: &str = "sha256:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentVersionError {
    #[error("Document version must start with \"sha256:\": {0}")]
    MissingPrefix(String),
    #[error("Document version digest is not 64 lowercase hex characters: {0}")]
    InvalidDigest(String),
}

/// Content hash of a document's text, `sha256:<hex>`.
///
/// Two inputs with the same version always summarize identically for the
/// same ratio, so callers can key session-local results by it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &str) -> Self {
        let digest = Sha256::digest(content.as_bytes());
        DocumentVersion(format!("{VERSION_PREFIX}{}", hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters of the digest, for log lines.
    pub fn short(&self) -> &str {
        let digest = self.0.strip_prefix(VERSION_PREFIX).unwrap_or(&self.0);
        digest.get(..12).unwrap_or(digest)
    }
}

impl FromStr for DocumentVersion {
    type Err = DocumentVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digest = s
            .strip_prefix(VERSION_PREFIX)
            .ok_or_else(|| DocumentVersionError::MissingPrefix(s.to_string()))?;

        let valid = digest.len() == 64
            && digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(DocumentVersionError::InvalidDigest(s.to_string()));
        }

        Ok(DocumentVersion(s.to_string()))
    }
}

impl fmt::Display for DocumentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
