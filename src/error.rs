//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while configuring a benchmark run.
///
/// Everything here is fatal: the binary logs it and exits before any
/// workload starts, so no partial report is ever printed.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Operation name outside of `add`, `erase` and `find`.
    #[error("Unknown operation {0}")]
    UnknownOperation(String),

    #[error("Unknown clock source {0}, expected nanos or cycles")]
    UnknownClock(String),

    #[error("Unknown report format {0}, expected text or json")]
    UnknownFormat(String),

    /// Keys must hold at least one character, `mutate` picks a position
    /// modulo the key length.
    #[error("Key size must be at least 1")]
    InvalidKeySize,

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create latency histogram: {0}")]
    Histogram(#[from] hdrhistogram::CreationError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
