//! Core error types

use thiserror::Error;

use crate::Provenance;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Search table is empty")]
    EmptyTable,

    #[error("Search table is not sorted: element {index} is smaller than its predecessor")]
    Unsorted { index: usize },

    #[error("Search table has {len} entries, more than a u32 index can address")]
    TableTooLarge { len: usize },

    #[error("RIGHT bound {right} must equal table length {len} or one less")]
    RightOutOfRange { right: u32, len: usize },

    #[error("FAILED sentinel {failed} collides with a valid index (table length {len})")]
    SentinelCollision { failed: u32, len: usize },

    #[error("Invalid input flag: {0} (expected 1 = public, 0 = private)")]
    InvalidProvenance(i32),

    #[error("No {0} input left")]
    InputExhausted(Provenance),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}
