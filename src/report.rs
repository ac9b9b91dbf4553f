//! Read-only text-table renderings of memory contents and parse results.

use crate::memory::LongTermMemory;
use crate::process::ProcessedItem;

/// Renders the long-term store as a two-column table (chunk, pt) in the order
/// the chunks were learned.
pub fn ltm_table(ltm: &LongTermMemory) -> String {
    let chunk_width = width_of(ltm.iter().map(|(chunk, _)| chunk.len()), "chunk");
    let mut out = format!("{:<chunk_width$}  {}\n", "chunk", "pt");
    for (chunk, pt) in ltm.iter() {
        out.push_str(&format!("{chunk:<chunk_width$}  {pt:.2}\n"));
    }
    out
}

/// Renders parse results as a four-column table (item, parse, chunks, pt).
pub fn process_table(results: &[ProcessedItem]) -> String {
    let item_width = width_of(results.iter().map(|r| r.item.len()), "item");
    let parse_width = width_of(results.iter().map(|r| r.parse.len()), "parse");
    let mut out = format!(
        "{:<item_width$}  {:<parse_width$}  {:>6}  {}\n",
        "item", "parse", "chunks", "pt"
    );
    for row in results {
        out.push_str(&format!(
            "{:<item_width$}  {:<parse_width$}  {:>6}  {:.2}\n",
            row.item, row.parse, row.chunks, row.pt
        ));
    }
    out
}

fn width_of(lengths: impl Iterator<Item = usize>, header: &str) -> usize {
    lengths.chain([header.len()]).max().unwrap_or(header.len())
}
