//! Integration tests for configuration loading.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use vidserve::config::{load_config, load_config_or_default, Config};

#[test]
fn full_config_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("vidserve.toml");
    fs::write(
        &path,
        r#"
verbose = true

[server]
host = "127.0.0.1"
port = 8080

[scan]
root = "/srv/videos"
recursive = true

[playlist]
file_name = "all.m3u"
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert!(config.verbose);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.scan.root, PathBuf::from("/srv/videos"));
    assert!(config.scan.recursive);
    assert_eq!(config.playlist.file_name, "all.m3u");
    assert_eq!(config.playlist_path(), PathBuf::from("/srv/videos/all.m3u"));
}

#[test]
fn empty_file_yields_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(load_config(&path).unwrap(), Config::default());
}

#[test]
fn explicit_path_is_used() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[server]\nport = 3000\n").unwrap();

    let config = load_config_or_default(Some(&path)).unwrap();
    assert_eq!(config.server.port, 3000);
}

#[test]
fn missing_explicit_path_is_an_error() {
    let temp = tempdir().unwrap();
    let err = load_config_or_default(Some(&temp.path().join("nope.toml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn malformed_toml_is_an_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn invalid_values_are_rejected() {
    let temp = tempdir().unwrap();

    let path = temp.path().join("port.toml");
    fs::write(&path, "[server]\nport = 0\n").unwrap();
    assert!(load_config(&path).is_err());

    let path = temp.path().join("name.toml");
    fs::write(&path, "[playlist]\nfile_name = \"../escape.m3u\"\n").unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn cli_overrides_win() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("vidserve.toml");
    fs::write(&path, "[server]\nport = 3000\n[scan]\nrecursive = false\n").unwrap();

    let config = load_config(&path)
        .unwrap()
        .with_overrides(Some(4000), true, true);
    assert_eq!(config.server.port, 4000);
    assert!(config.scan.recursive);
    assert!(config.verbose);
}
