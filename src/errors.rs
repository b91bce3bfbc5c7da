//! Error types for the binary surface.
//!
//! The scoring pipeline itself is total and never returns an error; only
//! reading and decoding an intake file, and writing the report, can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read intake file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("intake file {} is not a valid record", path.display())]
    InvalidIntake {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
