//! bsearch-core: Lower-bound binary search over a host-supplied table
//!
//! This crate defines the guest side of the bsearch program:
//! - Image: the build-time table plus the `RIGHT` / `FAILED` constants
//! - Input channel: host values tagged as public or private
//! - Search: one public read, one half-open lower-bound search, index or sentinel
//!
//! # Provenance
//!
//! | Flag | Channel | Read by `bsearch` |
//! |------|---------|-------------------|
//! | `1`  | Public  | **YES** - exactly once per call |
//! | `0`  | Private | NO |
//!
//! # Bounds
//!
//! The search window is `[0, RIGHT)`. The loop may converge on `l == RIGHT`,
//! so the final comparison reads `array[RIGHT]` when it exists. Images built
//! with [`SearchImage::sequential`] use `RIGHT = len - 1`, which keeps the last
//! element reachable. When `RIGHT == len` and the target exceeds every element,
//! the final read is guarded and the result is `FAILED`.

mod config;
mod error;
pub mod header;
mod input;
pub mod search;
mod table;

pub use config::{SearchConfig, SearchImage};
pub use error::Error;
pub use header::render_header;
pub use input::{HostInput, Provenance, QueuedInput};
pub use search::{bsearch, bsearch_traced, lower_bound, Probe, SearchRun};
pub use table::SearchTable;

pub type Result<T> = std::result::Result<T, Error>;

/// Constants shared by the guest and its host
pub mod constants {
    /// Name of the only export a host can invoke
    pub const ENTRY_POINT: &str = "bsearch";

    /// Raw flag selecting the public input channel
    pub const PUBLIC_FLAG: i32 = 1;

    /// Raw flag selecting the private input channel
    pub const PRIVATE_FLAG: i32 = 0;

    /// Conventional sentinel for hand-written images
    pub const DEFAULT_FAILED: u32 = u32::MAX;
}
