//! Backing table: the sorted array the guest searches
//!
//! The table is validated once when it is built or deserialized and is
//! read-only afterwards, so every search can rely on:
//! - at least one element
//! - ascending order (duplicates allowed)
//! - every index fits in a `u32`

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Immutable, ascending-sorted sequence of `u64`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct SearchTable {
    values: Vec<u64>,
}

impl SearchTable {
    /// Validate and wrap a sorted vector
    pub fn new(values: Vec<u64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyTable);
        }
        if values.len() > u32::MAX as usize {
            return Err(Error::TableTooLarge { len: values.len() });
        }
        if let Some(pos) = values.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(Error::Unsorted { index: pos + 1 });
        }

        Ok(Self { values })
    }

    /// Build the table `0, 1, ..., size - 1`
    pub fn sequential(size: u32) -> Result<Self> {
        Self::new((0..size as u64).collect())
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated table
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, `None` past the end
    pub fn get(&self, index: u32) -> Option<u64> {
        self.values.get(index as usize).copied()
    }

    pub fn first(&self) -> u64 {
        self.values[0]
    }

    pub fn last(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }
}

impl TryFrom<Vec<u64>> for SearchTable {
    type Error = Error;

    fn try_from(values: Vec<u64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<SearchTable> for Vec<u64> {
    fn from(table: SearchTable) -> Self {
        table.values
    }
}
