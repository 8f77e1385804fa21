//! Configuration loading.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags. The result is immutable for the rest of the run.

mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Component, Path};
use vidserve_common::Error;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./vidserve.toml", "~/.config/vidserve/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<(), Error> {
    if config.server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }

    let file_name = Path::new(&config.playlist.file_name);
    let mut components = file_name.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => {
            return Err(Error::config(format!(
                "Playlist file name must be a plain file name, got {:?}",
                config.playlist.file_name
            )))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 2222);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.scan.recursive);
        assert!(!config.verbose);
        assert_eq!(config.playlist.file_name, "playlist.m3u");
        assert_eq!(config.playlist_path(), Path::new("./playlist.m3u"));
    }

    #[test]
    fn overrides_apply_on_top_of_file_values() {
        let config = Config::default().with_overrides(Some(8000), true, false);
        assert_eq!(config.server.port, 8000);
        assert!(config.scan.recursive);
        assert!(!config.verbose);

        let mut base = Config::default();
        base.verbose = true;
        let config = base.with_overrides(None, false, false);
        assert_eq!(config.server.port, 2222);
        assert!(config.verbose);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.scan, ScanConfig::default());
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_nested_playlist_name() {
        for name in ["", "sub/list.m3u", "../list.m3u", "/tmp/list.m3u"] {
            let mut config = Config::default();
            config.playlist.file_name = name.to_string();
            assert!(validate_config(&config).is_err(), "{name:?}");
        }
    }
}
