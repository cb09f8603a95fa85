//! Wire-level data model shared with the backend

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Response of the document processing endpoint
///
/// Only `embedding` is interpreted. Everything else the backend returns is
/// kept untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentBatch {
    /// One `[x, y]` coordinate per uploaded document; null reads as empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub embedding: Vec<[f64; 2]>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DocumentBatch {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.embedding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embedding.is_empty()
    }
}

/// Placeholder cluster label for one embedding point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterLabel {
    /// Position of the point in the embedding
    pub id: usize,
    pub cluster: u32,
}

/// One label per embedding point, in embedding order
///
/// Serializes as a bare JSON array of `{id, cluster}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterAssignment(Vec<ClusterLabel>);

impl ClusterAssignment {
    pub fn labels(&self) -> &[ClusterLabel] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClusterLabel> {
        self.0.iter()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Vec<ClusterLabel>> for ClusterAssignment {
    fn from(labels: Vec<ClusterLabel>) -> Self {
        Self(labels)
    }
}

/// One matched document returned by the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    /// Absent or null tags render as no badges
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the search endpoint response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
