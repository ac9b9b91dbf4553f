use crate::memory::LongTermMemory;

/// Marks a position that no chunk group has claimed yet. Group ids start at 1,
/// so the sentinel never survives into a finished recode map.
const UNASSIGNED: u32 = 0;

/// The four outcomes of examining the current window, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchStep {
    /// Window holds a single unclaimed position: claim it, slide frontward.
    Base,
    /// Window is a known chunk covering only unclaimed positions: claim the
    /// whole span.
    Match,
    /// Window is anchored at the front and failed: restart a full-length scan
    /// anchored one position further in.
    FrontRestart,
    /// Slide the same-width window one step toward the front and retry.
    Shift,
}

/// Segments `sequence` into a maximal covering by chunks known to `ltm`,
/// returning one group id per position.
///
/// Ids are assigned in the order the search resolves groups, which is not
/// left-to-right; callers recover the positional chunking by grouping ids in
/// order of first occurrence. When the sequence admits several valid
/// coverings, the case precedence below decides which one wins.
pub fn find_chunks<S: AsRef<str>>(sequence: &[S], ltm: &LongTermMemory) -> Vec<u32> {
    let n = sequence.len();
    let mut recode = vec![UNASSIGNED; n];
    let mut start = 0;
    let mut end = n;
    let mut next_id = 1;
    let mut front_shift = 0;

    while recode.contains(&UNASSIGNED) {
        match classify(sequence, ltm, &recode, start, end) {
            SearchStep::Base => {
                recode[start] = next_id;
                next_id += 1;
                if start == 0 {
                    // Nothing left of the front; the loop condition ends the
                    // search.
                    continue;
                }
                start -= 1;
                end -= 1;
            }
            SearchStep::Match => {
                for id in &mut recode[start..end] {
                    *id = next_id;
                }
                next_id += 1;
                // Window bounds stay put; the now-claimed span forces a
                // restart or shift on the next pass.
            }
            SearchStep::FrontRestart => {
                front_shift += 1;
                start = front_shift;
                end = n;
            }
            SearchStep::Shift => {
                start -= 1;
                end -= 1;
            }
        }
    }
    recode
}

fn classify<S: AsRef<str>>(
    sequence: &[S],
    ltm: &LongTermMemory,
    recode: &[u32],
    start: usize,
    end: usize,
) -> SearchStep {
    if end - start == 1 && recode[start] == UNASSIGNED {
        return SearchStep::Base;
    }
    let span = join_labels(&sequence[start..end]);
    if ltm.contains(&span) && recode[start..end].iter().all(|&id| id == UNASSIGNED) {
        return SearchStep::Match;
    }
    if start == 0 {
        return SearchStep::FrontRestart;
    }
    SearchStep::Shift
}

/// Canonical key for a span of labels: joined left-to-right by single spaces.
pub(crate) fn join_labels<S: AsRef<str>>(labels: &[S]) -> String {
    let mut key = String::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            key.push(' ');
        }
        key.push_str(label.as_ref());
    }
    key
}
