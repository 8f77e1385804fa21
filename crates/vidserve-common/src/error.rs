//! Common error types used throughout vidserve.
//!
//! One enum covers the scan, request and configuration failures. The server
//! maps each variant onto an HTTP status and a stable machine-readable code.

use std::io;
use std::path::PathBuf;

/// Common error type for vidserve.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The scan root itself could not be read.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ScanRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A requested file could not be opened or inspected.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The requested path names a directory.
    #[error("Is a directory: {0}")]
    IsDirectory(String),

    /// The requested path resolves outside the served root.
    #[error("Path is outside the served root: {0}")]
    OutsideRoot(String),

    /// The request path could not be decoded.
    #[error("Invalid request path: {0}")]
    InvalidPath(String),

    /// The configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a new ScanRoot error.
    pub fn scan_root<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ScanRoot {
            path: path.into(),
            source,
        }
    }

    /// Create a new Read error.
    pub fn read<S: Into<String>>(path: S, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new InvalidPath error.
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ScanRoot { .. } => "scan_root_error",
            Self::Read { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => "not_found",
                io::ErrorKind::PermissionDenied => "permission_denied",
                _ => "read_error",
            },
            Self::IsDirectory(_) => "is_directory",
            Self::OutsideRoot(_) => "outside_root",
            Self::InvalidPath(_) => "invalid_path",
            Self::Config(_) => "config_error",
            Self::Io(_) => "io_error",
        }
    }

    /// HTTP status code used when this error answers a request.
    ///
    /// Every request-path failure is reported as 404.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Read { .. }
            | Self::IsDirectory(_)
            | Self::OutsideRoot(_)
            | Self::InvalidPath(_) => 404,
            Self::ScanRoot { .. } | Self::Config(_) | Self::Io(_) => 500,
        }
    }

    /// The request path this error refers to, if any.
    pub fn request_path(&self) -> Option<&str> {
        match self {
            Self::Read { path, .. } => Some(path),
            Self::IsDirectory(path) | Self::OutsideRoot(path) => Some(path),
            _ => None,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
