//! Vidserve-Common: Shared error type and path utilities.
//!
//! - **Path Utilities**: the video extension allowlist and manifest path
//!   formatting
//! - **Error Handling**: the common error type and result alias
//!
//! # Examples
//!
//! ```
//! use vidserve_common::paths::{file_extension, is_video_name};
//! use vidserve_common::{Error, Result};
//!
//! assert_eq!(file_extension("movie.mkv"), Some("mkv"));
//! assert!(is_video_name("movie.mkv"));
//! assert!(!is_video_name("movie.MKV"));
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_path("not utf-8"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
