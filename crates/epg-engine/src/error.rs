//! Error types for epg-engine operations.

use thiserror::Error;

/// Malformed-input errors. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid timestamp '{value}' on channel '{channel}': {reason}")]
    InvalidTimestamp {
        channel: String,
        value: String,
        reason: String,
    },

    #[error("Invalid interval on channel '{channel}': start {start} is not before end {end}")]
    InvalidSpan {
        channel: String,
        start: String,
        end: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
