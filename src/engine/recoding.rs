use super::segmentation::join_labels;
use crate::memory::{LongTermMemory, MemoryError, ShortTermMemory, StmEntry};

/// Collapses a working buffer onto the segmentation described by `recode`,
/// returning a new, smaller buffer.
///
/// Positions with the same group id merge into one entry whose label is their
/// labels joined in positional order. Groups are emitted in the order their id
/// first appears in `recode`, which recovers the left-to-right chunking. A
/// singleton group carries its original timings through unchanged; a merged
/// group is rescheduled with `ready_at = ltm[label] + now` and takes the decay
/// deadline of its last position (positional, not the furthest-future
/// deadline).
pub fn compress(
    recode: &[u32],
    stm: &ShortTermMemory,
    ltm: &LongTermMemory,
    now: f64,
) -> Result<ShortTermMemory, MemoryError> {
    let entries = stm.entries();
    let mut recoded = Vec::new();
    let mut seen = Vec::new();
    for &id in recode {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);

        let positions: Vec<usize> = (0..recode.len()).filter(|&j| recode[j] == id).collect();
        let labels: Vec<&str> = positions.iter().map(|&j| entries[j].label.as_str()).collect();
        let label = join_labels(&labels);
        let entry = if positions.len() == 1 {
            entries[positions[0]].clone()
        } else {
            let last = positions[positions.len() - 1];
            let ready_at = ltm.require_pt(&label)? + now;
            StmEntry::new(label, ready_at, entries[last].decay_at)
        };
        recoded.push(entry);
    }
    Ok(ShortTermMemory::from_entries(recoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::segmentation::find_chunks;

    fn store_with(chunks: &[&str]) -> LongTermMemory {
        let mut ltm = LongTermMemory::new();
        for chunk in chunks {
            ltm.learn_element(chunk, 100.0);
        }
        ltm
    }

    fn buffer(labels: &[&str], ready_at: f64, decay_at: f64) -> ShortTermMemory {
        ShortTermMemory::from_entries(
            labels
                .iter()
                .map(|&label| StmEntry::new(label, ready_at, decay_at)),
        )
    }

    #[test]
    fn test_singletons_pass_through_untouched() {
        let elements = ["a", "b", "c", "d", "e", "f"];
        let ltm = store_with(&elements);
        let stm = buffer(&elements, 200.0, 200.0);
        let recode = find_chunks(&elements, &ltm);
        let compressed = compress(&recode, &stm, &ltm, 100.0).unwrap();
        let labels: Vec<&str> = compressed.labels().collect();
        assert_eq!(labels, elements);
        assert!(compressed
            .entries()
            .iter()
            .all(|e| e.ready_at == 200.0 && e.decay_at == 200.0));
    }

    #[test]
    fn test_bigram_groups_merge_and_reschedule() {
        let elements = ["a", "b", "c", "d", "e", "f"];
        let ltm = store_with(&["a", "b", "c", "d", "e", "f", "a b", "c d", "e f"]);
        let stm = buffer(&elements, 200.0, 200.0);
        let recode = find_chunks(&elements, &ltm);
        let compressed = compress(&recode, &stm, &ltm, 100.0).unwrap();
        let labels: Vec<&str> = compressed.labels().collect();
        assert_eq!(labels, ["a b", "c d", "e f"]);
        // ltm pt 100 + now 100
        assert!(compressed.entries().iter().all(|e| e.ready_at == 200.0));
    }

    #[test]
    fn test_merged_group_takes_last_position_decay() {
        // Deadlines deliberately non-monotone: the merged group must take the
        // last position's deadline, not the furthest-future one.
        let ltm = store_with(&["a", "b", "c", "a b"]);
        let stm = ShortTermMemory::from_entries([
            StmEntry::new("a", 50.0, 900.0),
            StmEntry::new("b", 60.0, 400.0),
            StmEntry::new("c", 70.0, 600.0),
        ]);
        let recode = find_chunks(&["a", "b", "c"], &ltm);
        assert_eq!(recode, [1, 1, 2]);
        let compressed = compress(&recode, &stm, &ltm, 300.0).unwrap();
        let entries = compressed.entries();
        assert_eq!(entries[0].label, "a b");
        assert_eq!(entries[0].ready_at, 400.0);
        assert_eq!(entries[0].decay_at, 400.0);
        assert_eq!(entries[1].label, "c");
        assert_eq!(entries[1].decay_at, 600.0);
    }
}
