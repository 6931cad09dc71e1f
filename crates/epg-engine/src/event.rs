//! Raw and normalized broadcast events.
//!
//! A [`RawEvent`] is what a feed decoder hands in: timestamps are still
//! strings and descriptive fields may carry several localized variants.
//! An [`EventRecord`] is the normalized form the engine accepts into a
//! channel's timeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::span::Span;

/// Separator used when flattening multi-valued fields (actors, countries, ...).
pub const LIST_SEPARATOR: &str = ", ";

/// A text value with an optional language tag (`<title lang="bg">`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub lang: Option<String>,
    pub text: String,
}

impl LocalizedText {
    pub fn new(lang: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.map(str::to_string),
            text: text.into(),
        }
    }
}

/// One programme entry as it appears in a source feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawEvent {
    /// The feed's channel reference; joined against the allow-list display name.
    pub channel_key: String,
    /// `YYYYMMDDhhmmss ±hhmm`
    pub start: String,
    /// `YYYYMMDDhhmmss ±hhmm`
    pub stop: String,
    pub titles: Vec<LocalizedText>,
    pub descriptions: Vec<LocalizedText>,
    pub actors: Vec<String>,
    /// XMLTV lists these as `credits/producer`.
    pub directors: Vec<String>,
    pub countries: Vec<String>,
    /// Production year as written in the feed.
    pub date: Option<String>,
    pub category: Option<String>,
    pub episode_num: Option<String>,
}

/// Stable identity of a broadcast slot: start instant (whole seconds) plus
/// channel key.
///
/// Ordering compares the start first, so sorting by identity within one
/// channel is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId {
    pub start: i64,
    pub channel_key: String,
}

impl EventId {
    pub fn new(span: &Span, channel_key: &str) -> Self {
        Self {
            start: span.start.timestamp(),
            channel_key: channel_key.to_string(),
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.channel_key)
    }
}

/// A normalized event, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub identity: EventId,
    pub channel_key: String,
    pub span: Span,
    pub title: String,
    pub description: String,
    pub actors: String,
    pub directors: String,
    pub production_year: String,
    pub production_countries: String,
}

impl EventRecord {
    /// Normalize a raw event.
    ///
    /// # Errors
    /// Returns an error if either timestamp is unparseable or the interval is
    /// empty or inverted.
    pub fn from_raw(raw: &RawEvent, preferred_language: Option<&str>) -> Result<Self> {
        let span = Span::parse(&raw.channel_key, &raw.start, &raw.stop)?;
        Ok(Self {
            identity: EventId::new(&span, &raw.channel_key),
            channel_key: raw.channel_key.clone(),
            span,
            title: select_text(&raw.titles, preferred_language),
            description: select_text(&raw.descriptions, preferred_language),
            actors: join_values(&raw.actors),
            directors: join_values(&raw.directors),
            production_year: raw.date.clone().unwrap_or_default(),
            production_countries: join_values(&raw.countries),
        })
    }
}

/// Pick one variant out of a set of localized texts.
///
/// The first variant tagged with `preferred` (ASCII case-insensitive) wins;
/// otherwise the first variant; no variants at all yields an empty string.
pub fn select_text(variants: &[LocalizedText], preferred: Option<&str>) -> String {
    preferred
        .and_then(|lang| {
            variants.iter().find(|v| {
                v.lang
                    .as_deref()
                    .is_some_and(|tag| tag.eq_ignore_ascii_case(lang))
            })
        })
        .or_else(|| variants.first())
        .map(|v| v.text.clone())
        .unwrap_or_default()
}

/// Flatten a multi-valued field, preserving source order.
pub fn join_values(values: &[String]) -> String {
    values.join(LIST_SEPARATOR)
}

/// One allow-list entry: the stable output identifier and the display name
/// that raw events reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: String,
    pub display_name: String,
}

impl ChannelRef {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
