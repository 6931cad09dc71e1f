//! Channel allow-list: CSV rows of `id,display name`, no header.
//!
//! Fields are trimmed, blank lines and `#` comment lines are skipped, and
//! row order is kept since it is the output order. Ids name the output files,
//! so each id may appear only once.

use epg_engine::ChannelRef;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{FormatError, Result};

/// Parse an allow-list from any reader.
///
/// # Errors
/// Returns `FormatError::ChannelRow` for a row that does not hold exactly two
/// non-empty fields or repeats an earlier id, and `FormatError::Csv` for
/// malformed CSV.
pub fn read_channels<R: Read>(reader: R) -> Result<Vec<ChannelRef>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut channels = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != 2 {
            return Err(FormatError::ChannelRow {
                line,
                message: format!("expected 2 fields, found {}", record.len()),
            });
        }
        let (id, name) = (&record[0], &record[1]);
        if id.is_empty() || name.is_empty() {
            return Err(FormatError::ChannelRow {
                line,
                message: "id and display name must not be empty".to_string(),
            });
        }
        if !seen_ids.insert(id.to_string()) {
            return Err(FormatError::ChannelRow {
                line,
                message: format!("duplicate channel id '{id}'"),
            });
        }
        channels.push(ChannelRef::new(id, name));
    }

    Ok(channels)
}

/// Read an allow-list file.
pub fn read_channels_file(path: &Path) -> Result<Vec<ChannelRef>> {
    let file = std::fs::File::open(path).map_err(|e| FormatError::io(path, e))?;
    read_channels(file)
}
