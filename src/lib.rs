//! Chunk-based incremental processing and learning.
//!
//! A simulated learner observes whitespace-tokenized utterances over a
//! simulated clock, accumulates reusable chunks in a persistent long-term
//! memory, and learns how quickly each chunk can be retrieved. Repeated
//! exposure to the same sequences produces progressively larger, faster
//! chunks; the same segmentation engine can then parse novel material against
//! a frozen memory without learning.

pub mod engine;
pub mod learner;
pub mod memory;
pub mod process;
pub mod report;
pub mod storage;

pub use learner::{Learner, LearnerConfig};
pub use memory::{LongTermMemory, MemoryError, ShortTermMemory, StmEntry};
pub use process::{process, ProcessError, ProcessedItem};
