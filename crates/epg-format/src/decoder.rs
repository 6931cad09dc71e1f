//! XMLTV feed decoding.
//!
//! Maps `<channel>` and `<programme>` elements onto [`FeedChannel`] and
//! [`RawEvent`]. Timestamps stay as written; the engine normalizes them.
//! Elements the engine has no use for are skipped.
//!
//! ```xml
//! <tv>
//!   <channel id="Alfa"><display-name lang="bg">Алфа</display-name></channel>
//!   <programme start="20170701080000 +0300" stop="20170701100000 +0300" channel="Alfa">
//!     <title lang="bg">Добро утро, българи</title>
//!   </programme>
//! </tv>
//! ```

use epg_engine::{LocalizedText, RawEvent};
use serde::Deserialize;
use std::path::Path;

use crate::error::{FormatError, Result};

/// A channel declared by a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedChannel {
    pub id: String,
    pub display_names: Vec<LocalizedText>,
    pub url: Option<String>,
}

/// One decoded source feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub channels: Vec<FeedChannel>,
    /// Programmes in document order.
    pub programmes: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct TvElement {
    #[serde(rename = "channel", default)]
    channels: Vec<ChannelElement>,
    #[serde(rename = "programme", default)]
    programmes: Vec<ProgrammeElement>,
}

#[derive(Deserialize)]
struct ChannelElement {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "display-name", default)]
    display_names: Vec<TextElement>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Deserialize)]
struct ProgrammeElement {
    #[serde(rename = "@start")]
    start: String,
    #[serde(rename = "@stop")]
    stop: String,
    #[serde(rename = "@channel")]
    channel: String,
    #[serde(rename = "title", default)]
    titles: Vec<TextElement>,
    #[serde(rename = "desc", default)]
    descriptions: Vec<TextElement>,
    #[serde(default)]
    credits: Option<CreditsElement>,
    #[serde(default)]
    date: Option<String>,
    #[serde(rename = "category", default)]
    categories: Vec<TextElement>,
    #[serde(rename = "country", default)]
    countries: Vec<TextElement>,
    #[serde(rename = "episode-num", default)]
    episode_num: Option<TextElement>,
}

#[derive(Deserialize, Default)]
struct CreditsElement {
    #[serde(rename = "actor", default)]
    actors: Vec<TextElement>,
    #[serde(rename = "producer", default)]
    producers: Vec<TextElement>,
}

/// Any element whose payload is text plus an optional `lang` attribute.
/// Other attributes (`role`, `system`, ...) are ignored.
#[derive(Deserialize)]
struct TextElement {
    #[serde(rename = "@lang", default)]
    lang: Option<String>,
    #[serde(rename = "$text", default)]
    text: String,
}

impl From<TextElement> for LocalizedText {
    fn from(e: TextElement) -> Self {
        LocalizedText {
            lang: e.lang,
            text: e.text,
        }
    }
}

fn texts(elements: Vec<TextElement>) -> Vec<String> {
    elements.into_iter().map(|e| e.text).collect()
}

impl From<ProgrammeElement> for RawEvent {
    fn from(p: ProgrammeElement) -> Self {
        let credits = p.credits.unwrap_or_default();
        RawEvent {
            channel_key: p.channel,
            start: p.start,
            stop: p.stop,
            titles: p.titles.into_iter().map(LocalizedText::from).collect(),
            descriptions: p.descriptions.into_iter().map(LocalizedText::from).collect(),
            actors: texts(credits.actors),
            directors: texts(credits.producers),
            countries: texts(p.countries),
            date: p.date.filter(|d| !d.trim().is_empty()),
            category: p.categories.into_iter().next().map(|c| c.text),
            episode_num: p.episode_num.map(|e| e.text),
        }
    }
}

/// Decode an XMLTV document.
///
/// # Errors
/// Returns `FormatError::Feed` if the document is not well-formed or a
/// programme lacks its `start`, `stop` or `channel` attribute.
pub fn decode_feed(xml: &str) -> Result<Feed> {
    let tv: TvElement = quick_xml::de::from_str(xml)?;
    Ok(Feed {
        channels: tv
            .channels
            .into_iter()
            .map(|c| FeedChannel {
                id: c.id,
                display_names: c.display_names.into_iter().map(LocalizedText::from).collect(),
                url: c.url,
            })
            .collect(),
        programmes: tv.programmes.into_iter().map(RawEvent::from).collect(),
    })
}

/// Read and decode an XMLTV file.
pub fn decode_feed_file(path: &Path) -> Result<Feed> {
    let xml = std::fs::read_to_string(path).map_err(|e| FormatError::io(path, e))?;
    decode_feed(&xml)
}
