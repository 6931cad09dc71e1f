//! Feed selection: decides which feeds are read and in which order.
//!
//! The order returned here is the authority order the engine relies on: the
//! first feed wins every identity or overlap conflict.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{FormatError, Result};

/// Extension (case-insensitive) of feeds picked up from a directory.
pub const FEED_EXTENSION: &str = "xml";

/// Build the ordered feed list.
///
/// Explicit feeds come first, in the order given. Feeds discovered in `dir`
/// follow, newest first (see [`discover_feeds`]). A path listed twice keeps
/// its first position.
///
/// # Errors
/// Returns `FormatError::NoFeeds` when nothing was selected, and
/// `FormatError::Io` when `dir` cannot be listed.
pub fn select_feeds(explicit: &[PathBuf], dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut selected: Vec<PathBuf> = Vec::new();
    let discovered = match dir {
        Some(dir) => discover_feeds(dir)?,
        None => Vec::new(),
    };

    for path in explicit.iter().cloned().chain(discovered) {
        if !selected.contains(&path) {
            selected.push(path);
        }
    }

    if selected.is_empty() {
        return Err(FormatError::NoFeeds);
    }
    Ok(selected)
}

/// List the `*.xml` regular files in `dir`, most recently modified first.
/// Files with the same modification time are ordered by path.
pub fn discover_feeds(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| FormatError::io(dir, e))?;

    let mut found: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| FormatError::io(dir, e))?.path();
        let is_feed = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FEED_EXTENSION));
        if !is_feed {
            continue;
        }

        let metadata = std::fs::metadata(&path).map_err(|e| FormatError::io(&path, e))?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(|e| FormatError::io(&path, e))?;
        found.push((modified, path));
    }

    found.sort_by(|(time_a, path_a), (time_b, path_b)| {
        time_b.cmp(time_a).then_with(|| path_a.cmp(path_b))
    });
    Ok(found.into_iter().map(|(_, path)| path).collect())
}
