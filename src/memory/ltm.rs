use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::MemoryError;

/// Persistent store of learned chunks.
///
/// Maps each chunk key (its atomic tokens joined by single spaces) to a
/// processing time in simulated time units; lower means faster retrieval.
/// The store only ever grows: entries are never removed, and an existing
/// entry's processing time is only changed by the speed-adjustment rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongTermMemory {
    chunks: IndexMap<String, f64>,
}

impl LongTermMemory {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `chunk` with processing time `pt` only if it is not already
    /// known. Returns whether an insert happened; a familiar chunk is left
    /// untouched.
    pub fn learn_element(&mut self, chunk: &str, pt: f64) -> bool {
        if self.chunks.contains_key(chunk) {
            return false;
        }
        self.chunks.insert(chunk.to_owned(), pt);
        true
    }

    /// Processing time of `chunk`, if known.
    pub fn pt(&self, chunk: &str) -> Option<f64> {
        self.chunks.get(chunk).copied()
    }

    pub fn contains(&self, chunk: &str) -> bool {
        self.chunks.contains_key(chunk)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunks and their processing times, in the order they were learned.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.chunks.iter().map(|(chunk, &pt)| (chunk.as_str(), pt))
    }

    pub(crate) fn require_pt(&self, chunk: &str) -> Result<f64, MemoryError> {
        self.pt(chunk)
            .ok_or_else(|| MemoryError::UnknownChunk(chunk.to_owned()))
    }

    pub(crate) fn set_pt(&mut self, chunk: &str, pt: f64) {
        if let Some(entry) = self.chunks.get_mut(chunk) {
            *entry = pt;
        }
    }
}
