use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest compression ratio the UI offers.
pub const MIN_RATIO: f64 = 0.1;
/// Largest compression ratio the UI offers.
pub const MAX_RATIO: f64 = 0.6;
/// Ratio used when the caller does not pick one.
pub const DEFAULT_RATIO: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatioError {
    #[error("Compression ratio must be a finite number, got {0}")]
    NotFinite(f64),

    #[error("Compression ratio {0} is outside [0.1, 0.6]")]
    OutOfRange(f64),
}

/// Fraction of sentences to keep, validated at the API boundary.
///
/// The selector itself accepts any `f64`; this type is how callers (config,
/// request handlers) make sure what they pass in is sane.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CompressionRatio(f64);

impl CompressionRatio {
    pub fn new(value: f64) -> Result<Self, RatioError> {
        if !value.is_finite() {
            return Err(RatioError::NotFinite(value));
        }
        if !(MIN_RATIO..=MAX_RATIO).contains(&value) {
            return Err(RatioError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Saturate `value` into the supported range. NaN falls back to the default.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            tracing::warn!("compression ratio is NaN, using default {DEFAULT_RATIO}");
            return Self(DEFAULT_RATIO);
        }
        let clamped = value.clamp(MIN_RATIO, MAX_RATIO);
        if clamped != value {
            tracing::warn!(requested = value, used = clamped, "compression ratio clamped");
        }
        Self(clamped)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Whole percent, as shown next to the slider.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for CompressionRatio {
    fn default() -> Self {
        Self(DEFAULT_RATIO)
    }
}

impl TryFrom<f64> for CompressionRatio {
    type Error = RatioError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompressionRatio> for f64 {
    fn from(ratio: CompressionRatio) -> Self {
        ratio.0
    }
}

impl fmt::Display for CompressionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
