use crate::memory::{LongTermMemory, MemoryError, ShortTermMemory};

/// Promotes adjacent pairs of fully-processed working-memory chunks into new
/// permanent chunks.
///
/// Pairs are scanned from the most recent end of the buffer toward the
/// oldest. A pair qualifies when both positions are still unconsumed this
/// call and both have `ready_at <= now`. The candidate key is
/// `older + " " + newer`; if it is already known nothing changes and the
/// positions stay in play for an earlier pair. On insert the new chunk's
/// processing time is the mean of its two sub-chunks' current times, and both
/// positions are consumed. This is the only place multi-token keys enter the
/// long-term store.
pub fn learn_chunks(
    ltm: &mut LongTermMemory,
    stm: &ShortTermMemory,
    now: f64,
) -> Result<(), MemoryError> {
    let entries = stm.entries();
    let mut available = vec![true; entries.len()];
    for newer in (1..entries.len()).rev() {
        let older = newer - 1;
        if available[newer]
            && available[older]
            && entries[newer].is_ready(now)
            && entries[older].is_ready(now)
        {
            let chunk = format!("{} {}", entries[older].label, entries[newer].label);
            if !ltm.contains(&chunk) {
                let older_pt = ltm.require_pt(&entries[older].label)?;
                let newer_pt = ltm.require_pt(&entries[newer].label)?;
                let pt = (older_pt + newer_pt) / 2.0;
                ltm.learn_element(&chunk, pt);
                tracing::trace!(chunk = %chunk, pt, "created chunk");
                available[newer] = false;
                available[older] = false;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recoding::compress;
    use crate::engine::segmentation::find_chunks;
    use crate::memory::StmEntry;

    fn elements_store() -> LongTermMemory {
        let mut ltm = LongTermMemory::new();
        for element in ["a", "b", "c", "d", "e"] {
            ltm.learn_element(element, 200.0);
        }
        ltm
    }

    fn buffer(ready: [f64; 5]) -> ShortTermMemory {
        ShortTermMemory::from_entries(
            ["a", "b", "c", "d", "e"]
                .into_iter()
                .zip(ready)
                .enumerate()
                .map(|(i, (label, ready_at))| {
                    StmEntry::new(label, ready_at, 200.0 + 100.0 * i as f64)
                }),
        )
    }

    #[test]
    fn test_unprocessed_buffer_learns_nothing() {
        let mut ltm = elements_store();
        let stm = buffer([300.0, 400.0, 500.0, 600.0, 700.0]);
        learn_chunks(&mut ltm, &stm, 100.0).unwrap();
        assert_eq!(ltm.len(), 5);
    }

    #[test]
    fn test_first_pass_learns_bc_and_de() {
        let mut ltm = elements_store();
        let stm = buffer([100.0, 200.0, 300.0, 400.0, 500.0]);
        learn_chunks(&mut ltm, &stm, 1000.0).unwrap();
        assert!(ltm.contains("b c"));
        assert!(ltm.contains("d e"));
        assert_eq!(ltm.len(), 7);
    }

    #[test]
    fn test_second_pass_learns_ab_and_cd() {
        let mut ltm = elements_store();
        let stm = buffer([100.0, 200.0, 300.0, 400.0, 500.0]);
        for _ in 0..2 {
            learn_chunks(&mut ltm, &stm, 1000.0).unwrap();
        }
        assert!(ltm.contains("a b"));
        assert!(ltm.contains("c d"));
        assert_eq!(ltm.len(), 9);
    }

    #[test]
    fn test_unready_position_is_skipped() {
        let mut ltm = elements_store();
        let stm = buffer([100.0, 100.0, 5000.0, 100.0, 100.0]);
        learn_chunks(&mut ltm, &stm, 1000.0).unwrap();
        assert!(ltm.contains("a b"));
        assert!(ltm.contains("d e"));
        assert_eq!(ltm.len(), 7);
    }

    #[test]
    fn test_new_chunk_pt_is_the_pair_mean() {
        let mut ltm = LongTermMemory::new();
        ltm.learn_element("a", 100.0);
        ltm.learn_element("b", 300.0);
        let stm = ShortTermMemory::from_entries([
            StmEntry::new("a", 10.0, 20.0),
            StmEntry::new("b", 10.0, 20.0),
        ]);
        learn_chunks(&mut ltm, &stm, 1000.0).unwrap();
        assert_eq!(ltm.pt("a b"), Some(200.0));
    }

    #[test]
    fn test_recoding_lifts_learning_one_level() {
        // Two passes over [a..e] yield "b c"/"d e" then "a b"/"c d";
        // compressing onto the known covering and learning again builds
        // "b c d e", then "a b c d e".
        let mut ltm = elements_store();
        let mut stm = buffer([100.0, 200.0, 300.0, 400.0, 500.0]);
        for _ in 0..2 {
            learn_chunks(&mut ltm, &stm, 1000.0).unwrap();
        }
        let labels: Vec<String> = stm.labels().map(str::to_owned).collect();
        let recode = find_chunks(&labels, &ltm);
        stm = compress(&recode, &stm, &ltm, 1000.0).unwrap();
        let labels: Vec<&str> = stm.labels().collect();
        assert_eq!(labels, ["a", "b c", "d e"]);

        learn_chunks(&mut ltm, &stm, 2000.0).unwrap();
        assert!(ltm.contains("b c d e"));
        assert_eq!(ltm.len(), 10);

        let labels: Vec<String> = stm.labels().map(str::to_owned).collect();
        let recode = find_chunks(&labels, &ltm);
        stm = compress(&recode, &stm, &ltm, 1000.0).unwrap();
        let labels: Vec<&str> = stm.labels().collect();
        assert_eq!(labels, ["a", "b c d e"]);

        learn_chunks(&mut ltm, &stm, 2000.0).unwrap();
        assert!(ltm.contains("a b c d e"));
        assert_eq!(ltm.len(), 11);
    }
}
