//! Error types for the ingest-and-report pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A record line without a tab separator, with a non-integer size field,
    /// or with an empty path. Always fatal; there is no skip-and-continue
    /// mode and no partial output.
    #[error("line {line}: malformed record {content:?}: {reason}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// The input file cannot be opened. Raised before any output exists.
    #[error("cannot open input '{}': {source}", .path.display())]
    InputUnavailable { path: PathBuf, source: io::Error },

    /// The output destination cannot be created or written. The destination
    /// is only touched after the report is fully rendered, so a failed run
    /// never leaves a partial file behind.
    #[error("cannot write output '{}': {source}", .path.display())]
    OutputUnwritable { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
