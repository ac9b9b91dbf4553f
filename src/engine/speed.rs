use crate::memory::{LongTermMemory, MemoryError, ShortTermMemory};

/// Logistic weighting of a speed adjustment by current processing time.
///
/// Approaches 0.2 as `pt` goes to zero and 1.0 as `pt` grows without bound,
/// and is exactly 0.6 at `pt == mid`; strictly increasing in `pt`, so slower
/// chunks receive proportionally larger adjustments.
pub fn pt_sigmoid(pt: f64, mid: f64) -> f64 {
    0.8 / (1.0 + ((mid - pt) / (mid * 0.2)).exp()) + 0.2
}

/// Speeds up every chunk currently held in working memory.
///
/// Each occupant's stored processing time drops by
/// `|pt_adjust| * pt_sigmoid(pt, pt_initial / 2)`, floored at `pt_ceiling`.
/// The sign of `pt_adjust` is ignored. Chunks not in the buffer are left
/// untouched. Applied per buffer occurrence, in positional order.
pub fn adjust_pt(
    ltm: &mut LongTermMemory,
    stm: &ShortTermMemory,
    pt_adjust: f64,
    pt_initial: f64,
    pt_ceiling: f64,
) -> Result<(), MemoryError> {
    for entry in stm.entries() {
        let pt = ltm.require_pt(&entry.label)?;
        let adjusted = (pt - pt_adjust.abs() * pt_sigmoid(pt, pt_initial / 2.0)).max(pt_ceiling);
        ltm.set_pt(&entry.label, adjusted);
    }
    Ok(())
}
