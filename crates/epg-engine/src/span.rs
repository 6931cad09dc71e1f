//! Half-open `[start, end)` time spans and feed timestamp parsing.
//!
//! Two spans overlap when `a.start < b.end && b.start < a.end`. Adjacent spans
//! (where one ends exactly when the other starts) do NOT overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, Result};

/// Lexical layout of feed timestamps, e.g. `20170701080000 +0300`.
pub const FEED_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S %z";

/// Layout used when rendering instants in output documents.
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A non-empty `[start, end)` interval of absolute instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    /// Build a span, rejecting empty or inverted intervals.
    ///
    /// `channel` only feeds the error message.
    pub fn new(channel: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(EngineError::InvalidSpan {
                channel: channel.to_string(),
                start: start.format(OUTPUT_TIMESTAMP_FORMAT).to_string(),
                end: end.format(OUTPUT_TIMESTAMP_FORMAT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse both feed timestamps and normalize them to UTC.
    pub fn parse(channel: &str, start: &str, end: &str) -> Result<Self> {
        let start = parse_feed_timestamp(channel, start)?;
        let end = parse_feed_timestamp(channel, end)?;
        Self::new(channel, start, end)
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.format(OUTPUT_TIMESTAMP_FORMAT),
            self.end.format(OUTPUT_TIMESTAMP_FORMAT)
        )
    }
}

/// Parse a `YYYYMMDDhhmmss ±hhmm` timestamp into a UTC instant.
///
/// # Errors
/// Returns `EngineError::InvalidTimestamp` if the value does not match
/// [`FEED_TIMESTAMP_FORMAT`].
pub fn parse_feed_timestamp(channel: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_str(value.trim(), FEED_TIMESTAMP_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EngineError::InvalidTimestamp {
            channel: channel.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

