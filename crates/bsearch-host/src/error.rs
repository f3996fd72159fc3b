//! Host error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Unknown export: {0}")]
    UnknownExport(String),

    #[error("Core error: {0}")]
    Core(#[from] bsearch_core::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;
