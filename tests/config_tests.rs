// tests/config_tests.rs
mod common;
use common::KNOWN_CREDENTIAL;

use std::fs;

use usercake_hasher::{HasherConfig, HasherError, PasswordHasher, UserCakeHasher};

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hasher.toml");
    fs::write(&path, "[summary]\nvisible_chars = 4\nmask_char = \"x\"\n").unwrap();

    let config = HasherConfig::from_path(&path).unwrap();
    let hasher = UserCakeHasher::with_config(config);
    let summary = hasher.safe_summary(KNOWN_CREDENTIAL).unwrap();

    assert_eq!(summary.salt, format!("860b{}", "x".repeat(21)));
    assert_eq!(summary.hash, format!("5e01{}", "x".repeat(36)));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HasherConfig::from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, HasherError::Io(_)));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = HasherConfig::from_toml_str("[summary\n").unwrap_err();
    assert!(matches!(err, HasherError::Config(_)));
}

#[test]
fn test_config_cannot_widen_redaction() {
    let config = HasherConfig::from_toml_str("[summary]\nvisible_chars = 65\n").unwrap();
    let summary = UserCakeHasher::with_config(config)
        .safe_summary(KNOWN_CREDENTIAL)
        .unwrap();
    assert_eq!(summary.hash, format!("5e0158{}", "*".repeat(34)));
}

