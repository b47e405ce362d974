//! Configuration loading tests
//!
//! Tests that the config file is created with defaults on first load
//! and that user edits are picked up

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use vocalize::config::{Config, DEFAULT_USER_AGENT};

#[test]
fn test_config_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocalize.cfg");

    let config = Config::load_from(&path).expect("Failed to load config");

    // First load writes the default file
    assert!(path.exists());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[speech]"));
    assert!(written.contains("[network]"));
    assert!(written.contains("[output]"));

    assert_eq!(config.path(), path.as_path());
    assert_eq!(config.tld(), "com");
    assert!(!config.slow());
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    assert_eq!(config.output_dir(), PathBuf::from("."));
}

#[test]
fn test_config_reads_user_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocalize.cfg");
    fs::write(
        &path,
        "[speech]\ntld = es\nslow = true\n\n[network]\ntimeout = 5\n\n[output]\ndirectory = /tmp/audio\n",
    )
    .unwrap();

    let config = Config::load_from(&path).expect("Failed to load config");

    assert_eq!(config.tld(), "es");
    assert!(config.slow());
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.output_dir(), PathBuf::from("/tmp/audio"));
    // Missing keys fall back to defaults
    assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
}

#[test]
fn test_config_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocalize.cfg");

    let mut config = Config::load_from(&path).unwrap();
    config.set("speech", "tld", "fr");
    config.set("network", "timeout", "12");
    config.save().expect("Failed to save config");

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.tld(), "fr");
    assert_eq!(reloaded.timeout(), Duration::from_secs(12));
}

#[test]
fn test_config_in_unwritable_location_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("vocalize.cfg");

    assert!(Config::load_from(path).is_err());
}
