use serde::Deserialize;
use std::path::PathBuf;

/// Default manifest file name.
pub const DEFAULT_PLAYLIST_FILE: &str = "playlist.m3u";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Verbose per-file and per-request logging
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub playlist: PlaylistConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    2222
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanConfig {
    /// Directory that is scanned and served
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            recursive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaylistConfig {
    /// Manifest file name, written into the scan root
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_PLAYLIST_FILE.to_string()
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Apply command-line overrides. Flags can only switch features on.
    pub fn with_overrides(mut self, port: Option<u16>, recursive: bool, verbose: bool) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self.scan.recursive |= recursive;
        self.verbose |= verbose;
        self
    }

    /// Path of the manifest file on disk.
    pub fn playlist_path(&self) -> PathBuf {
        self.scan.root.join(&self.playlist.file_name)
    }
}
