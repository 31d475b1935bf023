//! Scan error taxonomy
//!
//! Every failure aborts the whole run: there is no per-file skip and no
//! partial report.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8")]
    Decode { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ScanError>;
