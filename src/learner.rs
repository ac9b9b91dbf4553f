use crate::engine::{adjust_pt, compress, find_chunks, learn_chunks};
use crate::memory::{LongTermMemory, MemoryError, ShortTermMemory};

/// Tuning parameters for a learning pass.
///
/// Times are in the simulated clock's units; the clock advances in
/// `speech_rate` steps and is reset to zero for each utterance.
#[derive(Debug, Clone)]
pub struct LearnerConfig {
    /// Interval between token presentations.
    pub speech_rate: f64,
    /// How long an entry survives in working memory after it is added.
    pub decay_rate: f64,
    /// Magnitude of the per-step speed-up applied to held chunks; the sign is
    /// ignored.
    pub pt_adjust: f64,
    /// Processing time assigned to a never-seen element.
    pub pt_initial: f64,
    /// Fastest processing time a chunk can reach.
    pub pt_ceiling: f64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            speech_rate: 160.0,
            decay_rate: 800.0,
            pt_adjust: 5.0,
            pt_initial: 1200.0,
            pt_ceiling: 10.0,
        }
    }
}

/// Drives utterances through working memory, evolving a long-term store.
#[derive(Debug, Clone, Default)]
pub struct Learner {
    config: LearnerConfig,
}

impl Learner {
    pub fn new(config: LearnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Presents each utterance of `corpus` to the learner in order.
    ///
    /// Per utterance: a fresh working buffer and a clock running from zero in
    /// `speech_rate` steps until `decay_rate` past the last token. Each step
    /// appends the next unconsumed token (learning it as an element first if
    /// it is new); whenever more than one chunk is held, it then attempts
    /// chunk creation and recodes the buffer onto the best known covering;
    /// finally it expires decayed entries and speeds up the survivors. The
    /// long-term store accumulates across utterances and across calls.
    pub fn learn<S: AsRef<str>>(
        &self,
        corpus: &[S],
        ltm: &mut LongTermMemory,
    ) -> Result<(), MemoryError> {
        let cfg = &self.config;
        for utterance in corpus {
            let utterance = utterance.as_ref();
            let stream: Vec<&str> = utterance.split_whitespace().collect();
            let horizon = stream.len() as f64 * cfg.speech_rate + cfg.decay_rate;
            tracing::debug!(utterance, tokens = stream.len(), "presenting utterance");

            let mut stm = ShortTermMemory::new();
            let mut step = 0usize;
            loop {
                let now = step as f64 * cfg.speech_rate;
                if now >= horizon {
                    break;
                }
                if let Some(&token) = stream.get(step) {
                    ltm.learn_element(token, cfg.pt_initial);
                    stm.add_chunk(token, ltm, now, cfg.decay_rate)?;
                }
                if stm.len() > 1 {
                    learn_chunks(ltm, &stm, now)?;
                    let recode = {
                        let labels: Vec<&str> = stm.labels().collect();
                        find_chunks(&labels, ltm)
                    };
                    stm = compress(&recode, &stm, ltm, now)?;
                }
                stm.decay(now);
                adjust_pt(ltm, &stm, cfg.pt_adjust, cfg.pt_initial, cfg.pt_ceiling)?;
                step += 1;
            }
        }
        tracing::debug!(chunks = ltm.len(), "corpus pass complete");
        Ok(())
    }
}
