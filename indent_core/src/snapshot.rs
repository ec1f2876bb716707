//! Session snapshot for deterministic parity testing

use crate::buffer::Position;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Complete editing-session state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct SessionSnapshot {
    pub cursor: Position,
    pub buffer_lines: Vec<String>,
    pub cycle_row: Option<usize>,
    pub dirty: bool,
}

impl SessionSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        // Hash cursor
        hasher.update(self.cursor.row.to_le_bytes());
        hasher.update(self.cursor.col.to_le_bytes());

        // Hash buffer
        for line in &self.buffer_lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        // Hash cycle state
        match self.cycle_row {
            Some(row) => {
                hasher.update([1u8]);
                hasher.update(row.to_le_bytes());
            }
            None => hasher.update([0u8]),
        }

        // Hash dirty flag
        hasher.update([self.dirty as u8]);

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
