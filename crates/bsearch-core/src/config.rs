//! Build-time configuration: the `RIGHT` / `FAILED` constants and the image
//!
//! A [`SearchImage`] bundles everything the guest reads besides its input.
//! Images are persisted either as pretty JSON (human-editable) or as compact
//! bincode (`.bin` extension).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

use crate::{Error, Result, SearchTable};

/// The two build-time constants consumed by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Exclusive upper bound of the search window
    pub right: u32,
    /// Returned when the target is absent
    pub failed: u32,
}

/// Validated table plus its search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImage")]
pub struct SearchImage {
    config: SearchConfig,
    table: SearchTable,
}

/// Unchecked wire form of an image
#[derive(Deserialize)]
struct RawImage {
    config: SearchConfig,
    table: SearchTable,
}

impl TryFrom<RawImage> for SearchImage {
    type Error = Error;

    fn try_from(raw: RawImage) -> Result<Self> {
        Self::new(raw.config, raw.table)
    }
}

impl SearchImage {
    /// Combine a table with its constants.
    ///
    /// `right` must be `len` or `len - 1`; both keep every element reachable.
    /// `failed` must not be an index the search could also return.
    pub fn new(config: SearchConfig, table: SearchTable) -> Result<Self> {
        let len = table.len();
        let right = config.right as usize;

        if right != len && right + 1 != len {
            return Err(Error::RightOutOfRange {
                right: config.right,
                len,
            });
        }

        if (config.failed as usize) < len {
            return Err(Error::SentinelCollision {
                failed: config.failed,
                len,
            });
        }

        Ok(Self { config, table })
    }

    /// Image for the table `0..size` with `RIGHT = size - 1` and `FAILED = size`
    pub fn sequential(size: u32) -> Result<Self> {
        let table = SearchTable::sequential(size)?;
        let config = SearchConfig {
            right: size - 1,
            failed: size,
        };
        Self::new(config, table)
    }

    /// Image searching the whole table, `RIGHT = len`
    pub fn with_exclusive_bound(table: SearchTable, failed: u32) -> Result<Self> {
        let config = SearchConfig {
            right: table.len() as u32,
            failed,
        };
        Self::new(config, table)
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn right(&self) -> u32 {
        self.config.right
    }

    pub fn failed(&self) -> u32 {
        self.config.failed
    }

    pub fn table(&self) -> &SearchTable {
        &self.table
    }

    /// Keccak-256 over `right || failed || len || values`, all little-endian
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        hasher.update(&self.config.right.to_le_bytes());
        hasher.update(&self.config.failed.to_le_bytes());
        hasher.update(&(self.table.len() as u64).to_le_bytes());
        for value in self.table.as_slice() {
            hasher.update(&value.to_le_bytes());
        }

        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);
        hash
    }

    /// Hex form of [`Self::digest`]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }

    /// Compact bincode encoding
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a bincode image
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(data)?)
    }

    /// Load from file: bincode for `.bin`, JSON otherwise
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        if is_binary(path) {
            Self::from_bytes(&data)
        } else {
            Ok(serde_json::from_slice(&data)?)
        }
    }

    /// Save to file: bincode for `.bin`, pretty JSON otherwise
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = if is_binary(path) {
            self.to_bytes()?
        } else {
            serde_json::to_vec_pretty(self)?
        };
        std::fs::write(path, data)?;
        Ok(())
    }
}

fn is_binary(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}
