use thiserror::Error;

use crate::engine::segmentation::{find_chunks, join_labels};
use crate::memory::LongTermMemory;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("items contain unfamiliar elements: {0:?}")]
    UnfamiliarElements(Vec<String>),
}

/// How one item was parsed against a frozen long-term store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedItem {
    /// The original item text.
    pub item: String,
    /// Bracketed rendering of the chunking, e.g. `[a b] [c]`.
    pub parse: String,
    /// Number of chunks the item resolved into.
    pub chunks: usize,
    /// Sum of the chunks' processing times.
    pub pt: f64,
}

/// Parses each item against `ltm` without learning.
///
/// Every whitespace-separated token across all items must already be a known
/// element; otherwise the call fails up front, naming all offending tokens in
/// first-occurrence order, and produces no output. The store is never
/// mutated.
pub fn process<S: AsRef<str>>(
    items: &[S],
    ltm: &LongTermMemory,
) -> Result<Vec<ProcessedItem>, ProcessError> {
    let mut unfamiliar: Vec<String> = Vec::new();
    for item in items {
        for token in item.as_ref().split_whitespace() {
            if !ltm.contains(token) && !unfamiliar.iter().any(|seen| seen == token) {
                unfamiliar.push(token.to_owned());
            }
        }
    }
    if !unfamiliar.is_empty() {
        return Err(ProcessError::UnfamiliarElements(unfamiliar));
    }

    let mut results = Vec::with_capacity(items.len());
    for item in items {
        let item = item.as_ref();
        let stream: Vec<&str> = item.split_whitespace().collect();
        let recode = find_chunks(&stream, ltm);

        let mut parse_parts: Vec<String> = Vec::new();
        let mut pt = 0.0;
        let mut seen: Vec<u32> = Vec::new();
        for &id in &recode {
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            let group: Vec<&str> = (0..recode.len())
                .filter(|&j| recode[j] == id)
                .map(|j| stream[j])
                .collect();
            let chunk = join_labels(&group);
            pt += ltm
                .pt(&chunk)
                .ok_or_else(|| ProcessError::UnfamiliarElements(vec![chunk.clone()]))?;
            parse_parts.push(format!("[{chunk}]"));
        }
        results.push(ProcessedItem {
            item: item.to_owned(),
            parse: parse_parts.join(" "),
            chunks: seen.len(),
            pt,
        });
    }
    Ok(results)
}
