use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MEDIA_TYPE: &str = "media_type";
pub const BYTE_SIZE: &str = "byte_size";
pub const PAGE_COUNT: &str = "page_count";
pub const FILE_NAME: &str = "file_name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Number(i64),
}

/// Descriptive facts about an ingested document. Never read by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    inner: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), MetadataValue::String(value.into()));
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: i64) {
        self.inner.insert(key.into(), MetadataValue::Number(value));
    }

    /// Keys already present in `self` win; `defaults` only fills gaps.
    pub fn with_defaults(mut self, defaults: Metadata) -> Self {
        for (k, v) in defaults.inner {
            self.inner.entry(k).or_insert(v);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.inner.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.inner.get(key) {
            Some(MetadataValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_number(&self, key: &str) -> Option<i64> {
        match self.inner.get(key) {
            Some(MetadataValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.inner.iter()
    }
}
