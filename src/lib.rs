//! bsearch: bsearch guest and its host harness
//!
//! Re-exports the workspace crates so end-to-end tests and embedders can
//! depend on a single package.

pub use bsearch_core as guest;
pub use bsearch_host as host;
