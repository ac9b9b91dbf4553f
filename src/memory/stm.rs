use super::{LongTermMemory, MemoryError};

/// One chunk currently held in working memory.
///
/// `ready_at` is the simulated time at which the chunk finishes being
/// processed and becomes available for combination; `decay_at` is the time at
/// which it is forgotten.
#[derive(Debug, Clone, PartialEq)]
pub struct StmEntry {
    pub label: String,
    pub ready_at: f64,
    pub decay_at: f64,
}

impl StmEntry {
    pub fn new(label: impl Into<String>, ready_at: f64, decay_at: f64) -> Self {
        Self {
            label: label.into(),
            ready_at,
            decay_at,
        }
    }

    /// Whether the chunk has finished processing at time `now`.
    pub fn is_ready(&self, now: f64) -> bool {
        self.ready_at <= now
    }
}

/// Ephemeral working buffer of chunks currently "in mind".
///
/// Entries are kept in the left-to-right positional order of the token stream
/// they represent, not recency order. A buffer lives for a single utterance
/// and is never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortTermMemory {
    entries: Vec<StmEntry>,
}

impl ShortTermMemory {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = StmEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Appends `label` with `ready_at = ltm[label] + now` and
    /// `decay_at = decay_rate + now`. The label must already be known to the
    /// long-term store.
    pub fn add_chunk(
        &mut self,
        label: &str,
        ltm: &LongTermMemory,
        now: f64,
        decay_rate: f64,
    ) -> Result<(), MemoryError> {
        let pt = ltm.require_pt(label)?;
        self.entries.push(StmEntry::new(label, pt + now, decay_rate + now));
        Ok(())
    }

    /// Forgets every entry whose decay deadline has been reached. An entry
    /// with `decay_at == now` is removed, not kept. Survivor order is
    /// preserved.
    pub fn decay(&mut self, now: f64) {
        self.entries.retain(|entry| entry.decay_at > now);
    }

    pub fn entries(&self) -> &[StmEntry] {
        &self.entries
    }

    /// Labels in positional order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
