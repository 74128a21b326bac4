use thiserror::Error;

use cvtracks_core::CoreError;

/// Error type for VCF reading.
#[derive(Error, Debug)]
pub enum VcfError {
    /// The file could not be opened.
    #[error(transparent)]
    Open(#[from] CoreError),

    /// IO error while reading a line.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line that can't be turned into a record.
    #[error("Malformed VCF record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// Result type alias for VCF reading.
pub type Result<T> = std::result::Result<T, VcfError>;
