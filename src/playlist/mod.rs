//! M3U playlist generation.
//!
//! The manifest is a flat list of track references: a `#EXTM3U` header, then
//! an `#EXTINF` line and a path line per entry. Durations are unknown, so every
//! entry carries `-1`.

use std::path::Path;

use tracing::debug;
use vidserve_common::Result;

/// First line of every playlist.
pub const HEADER: &str = "#EXTM3U";

/// Duration written for every entry.
pub const UNKNOWN_DURATION: i32 = -1;

/// Render playlist text for the given entries, in order.
///
/// Lines are separated by `\n`; there is no newline after the last line.
pub fn render_playlist<S: AsRef<str>>(entries: &[S]) -> String {
    let mut lines = Vec::with_capacity(1 + entries.len() * 2);
    lines.push(HEADER.to_string());

    for entry in entries {
        let entry = entry.as_ref();
        lines.push(format!("#EXTINF:{UNKNOWN_DURATION},{entry}"));
        lines.push(entry.to_string());
    }

    lines.join("\n")
}

/// Write the playlist to `path`, replacing any previous file.
///
/// An empty entry list writes nothing and returns `Ok(false)`; the previous
/// file, if any, is left untouched.
pub fn write_playlist<S: AsRef<str>>(path: &Path, entries: &[S]) -> Result<bool> {
    if entries.is_empty() {
        debug!("No entries, skipping playlist write to {:?}", path);
        return Ok(false);
    }

    std::fs::write(path, render_playlist(entries))?;
    debug!("Wrote {} playlist entries to {:?}", entries.len(), path);
    Ok(true)
}
