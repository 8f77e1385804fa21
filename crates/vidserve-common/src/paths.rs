//! Path utilities for detecting video files by extension.
//!
//! Matching is exact and case-sensitive: `movie.mp4` is a video file,
//! `movie.MP4` is not.

use std::path::{Component, Path};

/// Extensions recognized as video files.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "flv", "avi", "mov", "wmv", "webm"];

/// Return the substring after the final `.` of a file name.
///
/// A name without a dot has no extension. A leading dot counts, so
/// `.mp4` has the extension `mp4`.
///
/// # Examples
///
/// ```
/// use vidserve_common::paths::file_extension;
///
/// assert_eq!(file_extension("movie.1080p.mkv"), Some("mkv"));
/// assert_eq!(file_extension("README"), None);
/// ```
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Check if a file name carries an allowlisted video extension.
///
/// # Examples
///
/// ```
/// use vidserve_common::paths::is_video_name;
///
/// assert!(is_video_name("movie.mkv"));
/// assert!(is_video_name(".webm"));
/// assert!(!is_video_name("movie.MP4"));
/// assert!(!is_video_name("notes.txt"));
/// ```
pub fn is_video_name(file_name: &str) -> bool {
    file_extension(file_name)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Format a relative path with `/` separators for use in a manifest or URL.
///
/// Returns `None` when a component is not valid UTF-8. `.` components are
/// dropped.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vidserve_common::paths::slash_path;
///
/// assert_eq!(slash_path(Path::new("extras/movie2.webm")).as_deref(), Some("extras/movie2.webm"));
/// ```
pub fn slash_path(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::ParentDir => parts.push(".."),
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts.join("/"))
}
