//! Video file scanner.
//!
//! Walks a root directory (optionally recursing) and collects files whose
//! extension is on the video allowlist. A single unreadable entry is logged
//! and skipped; only an unreadable root aborts the scan.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};
use vidserve_common::paths::{is_video_name, slash_path};
use vidserve_common::{Error, Result};
use walkdir::WalkDir;

/// A discovered video file, relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    manifest_path: String,
}

impl VideoFile {
    /// The `/`-separated form written to the manifest.
    pub fn as_str(&self) -> &str {
        &self.manifest_path
    }
}

impl AsRef<str> for VideoFile {
    fn as_ref(&self) -> &str {
        &self.manifest_path
    }
}

impl fmt::Display for VideoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.manifest_path)
    }
}

/// Scan `root` for video files.
///
/// Results follow directory-enumeration order, depth-first: the matches of a
/// subdirectory come right after the point where it was encountered. When
/// `recursive` is false, subdirectories are skipped entirely. Symlinks are
/// followed only when their target lies inside the root, so every listed file
/// is one the server will serve.
pub fn scan(root: &Path, recursive: bool) -> Result<Vec<VideoFile>> {
    // An unreadable root must fail the scan rather than be skipped like an
    // ordinary entry.
    std::fs::read_dir(root).map_err(|e| Error::scan_root(root, e))?;
    let canonical_root = std::fs::canonicalize(root).map_err(|e| Error::scan_root(root, e))?;

    info!("Scanning directory: {:?} (recursive: {})", root, recursive);

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut videos = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| link_stays_inside(e, &canonical_root))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    path = ?err.path(),
                    error = %err,
                    "Skipping entry that could not be read"
                );
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            debug!("Skipping non UTF-8 file name: {:?}", entry.path());
            continue;
        };
        if !is_video_name(file_name) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let Some(manifest_path) = slash_path(relative) else {
            debug!("Skipping path that cannot be written to the playlist: {:?}", relative);
            continue;
        };

        debug!(path = %manifest_path, "Found video file");
        videos.push(VideoFile { manifest_path });
    }

    info!("Scan complete: {} video files in {:?}", videos.len(), root);
    Ok(videos)
}

/// Symlinks whose target resolves outside the root are pruned. A link that
/// cannot be resolved passes through so the walk reports it as an error.
fn link_stays_inside(entry: &walkdir::DirEntry, canonical_root: &Path) -> bool {
    if !entry.path_is_symlink() {
        return true;
    }
    match std::fs::canonicalize(entry.path()) {
        Ok(target) if !target.starts_with(canonical_root) => {
            debug!("Skipping symlink leaving the root: {:?} -> {:?}", entry.path(), target);
            false
        }
        _ => true,
    }
}
