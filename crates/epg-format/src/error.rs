//! Error types for feed, allow-list and output document handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading inputs or writing schedules.
#[derive(Error, Debug)]
pub enum FormatError {
    /// A file or directory could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The feed was not well-formed XMLTV.
    #[error("Feed parse error: {0}")]
    Feed(#[from] quick_xml::de::DeError),

    /// The allow-list was not valid CSV.
    #[error("Channel list parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV row did not hold a usable `id,display name` pair.
    /// Includes the 1-based line number of the row.
    #[error("Channel list error at line {line}: {message}")]
    ChannelRow { line: u64, message: String },

    /// Feed selection produced nothing to read.
    #[error("No source feeds selected")]
    NoFeeds,

    /// A schedule could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// A channel id cannot be used as an output file name.
    #[error("Channel id '{0}' cannot be used as a file name")]
    UnsafeFileName(String),
}

impl FormatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout epg-format.
pub type Result<T> = std::result::Result<T, FormatError>;
