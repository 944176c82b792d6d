//! Codec error types
//!
//! Decode failures:
//! - Open: the data file cannot be opened
//! - MissingHeader: the file is empty
//! - Row: the CSV reader rejected a row
//! - InvalidAmount: a cost/price column is not a number (fatal for the read)
//!
//! Encode failures cover every step of the temp-file-then-rename commit.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading products from CSV.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open data file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data file has no header row")]
    MissingHeader,

    #[error("failed to read row: {0}")]
    Row(#[from] csv::Error),

    #[error("invalid {field} {value:?} on line {line}: {source}")]
    InvalidAmount {
        field: &'static str,
        value: String,
        line: u64,
        #[source]
        source: ParseFloatError,
    },
}

/// Failure while writing products to CSV.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write row: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to commit {}: {source}", path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
