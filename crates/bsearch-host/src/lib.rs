//! bsearch-host: Host harness for the bsearch guest
//!
//! Primes the public/private input queues, invokes the guest export by name
//! and reports what happened.

pub mod env;
pub mod error;

pub use env::{Execution, HostEnv};
pub use error::HostError;
