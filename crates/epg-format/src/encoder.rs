//! Per-channel schedule documents.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <channel name="Alfa" id="101">
//!   <events>
//!     <event>
//!       <id>1498885200:Alfa</id>
//!       <name>Добро утро, българи</name>
//!       <time_from>2017-07-01T05:00:00Z</time_from>
//!       <time_till>2017-07-01T07:00:00Z</time_till>
//!     </event>
//!   </events>
//! </channel>
//! ```
//!
//! Optional fields are left out when empty.

use epg_engine::span::OUTPUT_TIMESTAMP_FORMAT;
use epg_engine::{ChannelSchedule, EventRecord};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{FormatError, Result};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const INDENT_SIZE: usize = 2;

#[derive(Serialize)]
struct ChannelDocument<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@id")]
    id: &'a str,
    events: EventList<'a>,
}

#[derive(Serialize)]
struct EventList<'a> {
    #[serde(rename = "event")]
    events: Vec<EventElement<'a>>,
}

#[derive(Serialize)]
struct EventElement<'a> {
    id: String,
    name: &'a str,
    time_from: String,
    time_till: String,
    #[serde(skip_serializing_if = "is_blank")]
    description: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    actors: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    directors: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    production_year: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    production_countries: &'a str,
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

impl<'a> From<&'a EventRecord> for EventElement<'a> {
    fn from(e: &'a EventRecord) -> Self {
        EventElement {
            id: e.identity.to_string(),
            name: &e.title,
            time_from: e.span.start.format(OUTPUT_TIMESTAMP_FORMAT).to_string(),
            time_till: e.span.end.format(OUTPUT_TIMESTAMP_FORMAT).to_string(),
            description: &e.description,
            actors: &e.actors,
            directors: &e.directors,
            production_year: &e.production_year,
            production_countries: &e.production_countries,
        }
    }
}

fn encode_error(e: impl std::fmt::Display) -> FormatError {
    FormatError::Encode(e.to_string())
}

/// Serialize a channel schedule to an XML document.
pub fn encode_schedule(schedule: &ChannelSchedule) -> Result<String> {
    let document = ChannelDocument {
        name: &schedule.channel.display_name,
        id: &schedule.channel.id,
        events: EventList {
            events: schedule.events.iter().map(EventElement::from).collect(),
        },
    };

    let mut xml = String::from(XML_DECLARATION);
    let mut serializer =
        quick_xml::se::Serializer::with_root(&mut xml, Some("channel")).map_err(encode_error)?;
    serializer.indent(' ', INDENT_SIZE);
    document.serialize(serializer).map_err(encode_error)?;
    xml.push('\n');
    Ok(xml)
}

/// Output file name for a channel: `<id>.xml`.
///
/// # Errors
/// Returns `FormatError::UnsafeFileName` for ids that are empty, contain a
/// path separator, or are a relative path component.
pub fn schedule_file_name(channel_id: &str) -> Result<String> {
    let unsafe_name = channel_id.is_empty()
        || channel_id == "."
        || channel_id == ".."
        || channel_id.contains(['/', '\\']);
    if unsafe_name {
        return Err(FormatError::UnsafeFileName(channel_id.to_string()));
    }
    Ok(format!("{channel_id}.xml"))
}

/// Encode `schedule` and write it to `<dir>/<channel id>.xml`, creating `dir`
/// when missing. Returns the written path.
pub fn write_schedule(dir: &Path, schedule: &ChannelSchedule) -> Result<PathBuf> {
    let path = dir.join(schedule_file_name(&schedule.channel.id)?);
    let xml = encode_schedule(schedule)?;

    std::fs::create_dir_all(dir).map_err(|e| FormatError::io(dir, e))?;
    std::fs::write(&path, xml).map_err(|e| FormatError::io(&path, e))?;
    Ok(path)
}
