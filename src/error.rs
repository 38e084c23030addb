//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file missing or unreadable
    #[error("input I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Row whose pipe-split does not yield the 6 expected fields
    #[error("malformed record {record}: expected 6 fields, found {fields}")]
    MalformedRecord { record: u64, fields: usize },

    /// Row whose price field does not parse as a decimal number
    #[error("record {record}: cannot parse price {value:?}")]
    PriceParse { record: u64, value: String },

    /// Report file or directory could not be created or written
    #[error("failed to write report {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn output_write(
    path: impl Into<PathBuf>,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> Error {
    Error::OutputWrite {
        path: path.into(),
        source: std::io::Error::other(source),
    }
}
