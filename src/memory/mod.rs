//! The two memory stores: a persistent long-term store of learned chunks and
//! an ephemeral short-term working buffer with timed decay.

pub mod ltm;
pub mod stm;

pub use ltm::LongTermMemory;
pub use stm::{ShortTermMemory, StmEntry};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("chunk not present in long-term memory: {0:?}")]
    UnknownChunk(String),
}
