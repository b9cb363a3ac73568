use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frequency::STOP_WORDS_VERSION;
use crate::types::{CompressionRatio, RatioError, DEFAULT_RATIO};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid default ratio: {0}")]
    InvalidRatio(#[from] RatioError),
    #[error("Unsupported stop-word table version {found}, this build ships version {supported}")]
    UnsupportedStopWords { found: u32, supported: u32 },
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    pub version: String,
    pub default_ratio: f64,
    pub stop_words_version: u32,
}

impl SummarizerConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            default_ratio: DEFAULT_RATIO,
            stop_words_version: STOP_WORDS_VERSION,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SummarizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), ratio = config.default_ratio, "loaded summarizer config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        CompressionRatio::new(self.default_ratio)?;
        if self.stop_words_version != STOP_WORDS_VERSION {
            return Err(ConfigError::UnsupportedStopWords {
                found: self.stop_words_version,
                supported: STOP_WORDS_VERSION,
            });
        }
        Ok(())
    }

    /// The configured ratio; a config that skipped validation is clamped.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.default_ratio)
            .unwrap_or_else(|_| CompressionRatio::clamped(self.default_ratio))
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::v0()
    }
}
