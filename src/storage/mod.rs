//! Checksummed snapshot save/load for a long-term store.
//!
//! The key→pt mapping is serialized verbatim (learning order preserved) and
//! wrapped in a block carrying a CRC32 of the payload; the checksum is
//! verified on load.

use std::fs;
use std::io;
use std::path::Path;

use bincode::{deserialize, serialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::memory::LongTermMemory;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("checksum mismatch: memory snapshot is corrupted")]
    ChecksumMismatch,
}

#[derive(Serialize, Deserialize)]
struct SnapshotBlock {
    payload: Vec<u8>,
    checksum: u32,
}

impl SnapshotBlock {
    fn new(ltm: &LongTermMemory) -> Result<Self, StorageError> {
        let payload = serialize(ltm)?;
        let checksum = crc32fast::hash(&payload);
        Ok(Self { payload, checksum })
    }

    fn verify(&self) -> bool {
        self.checksum == crc32fast::hash(&self.payload)
    }
}

/// Writes a snapshot of `ltm` to `path`, replacing any existing file.
pub fn save_ltm(ltm: &LongTermMemory, path: &Path) -> Result<(), StorageError> {
    let block = SnapshotBlock::new(ltm)?;
    fs::write(path, serialize(&block)?)?;
    Ok(())
}

/// Restores a store previously written by [`save_ltm`].
pub fn load_ltm(path: &Path) -> Result<LongTermMemory, StorageError> {
    let block: SnapshotBlock = deserialize(&fs::read(path)?)?;
    if !block.verify() {
        return Err(StorageError::ChecksumMismatch);
    }
    Ok(deserialize(&block.payload)?)
}
