//! Request path decoding and root containment.
//!
//! A URL path such as `/extras/my%20movie.webm` becomes the relative path
//! `./extras/my movie.webm`, which is then resolved against the served root.
//! Resolution is lexical: `..` segments may not climb above the root, and
//! absolute components are refused.

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;
use vidserve_common::{Error, Result};

/// Decode the path component of a request URL into a `.`-prefixed relative
/// path.
///
/// Percent-escapes are decoded and `\` separators become `/`. Decoded bytes
/// that are not valid UTF-8 are rejected.
pub fn decode_request_path(raw: &str) -> Result<String> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| Error::invalid_path(format!("{raw} is not valid UTF-8 once decoded")))?;

    Ok(format!(".{}", decoded.replace('\\', "/")))
}

/// Resolve a decoded request path against `root`.
///
/// Fails with [`Error::OutsideRoot`] when the path would leave `root`.
pub fn resolve_within(root: &Path, request_path: &str) -> Result<PathBuf> {
    let mut resolved = root.to_path_buf();
    let mut depth = 0usize;

    for component in Path::new(request_path).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::ParentDir => {
                if depth == 0 {
                    return Err(Error::OutsideRoot(request_path.to_string()));
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::OutsideRoot(request_path.to_string()));
            }
        }
    }

    Ok(resolved)
}
