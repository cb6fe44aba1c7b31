// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for layered configuration loading.

use gitdeck::config::Config;
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write_toml(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write config file");
    path
}

#[test]
fn test_load_from_file() {
    let temp = temp_dir();
    let path = write_toml(
        &temp,
        "gitdeck.toml",
        r#"
        [git]
        remote = "upstream"

        [paths]
        data = "/tmp/deck-data"
        "#,
    );

    let config = Config::from_file(&path).expect("valid configuration");
    assert_eq!(config.git.remote, "upstream");
    assert_eq!(
        config.paths.database().unwrap(),
        std::path::Path::new("/tmp/deck-data/gitdeck.db")
    );
}

#[test]
fn test_later_files_override_earlier_ones() {
    let temp = temp_dir();
    let base = write_toml(&temp, "base.toml", "[graph]\ntrunk = \"master\"\nlimit = 50\n");
    let local = write_toml(&temp, "local.toml", "[graph]\ntrunk = \"main\"\n");

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .expect("valid configuration");

    assert_eq!(config.graph.trunk, "main");
    // Keys absent from the later file keep the earlier value.
    assert_eq!(config.graph.limit, 50);
}

#[test]
fn test_missing_required_file_fails() {
    let temp = temp_dir();
    let result = Config::builder()
        .add_toml_file(temp.path().join("nope.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_missing_optional_file_is_fine() {
    let temp = temp_dir();
    let config = Config::builder()
        .add_toml_file_optional(temp.path().join("nope.toml"))
        .build()
        .expect("optional files may be absent");
    assert_eq!(config.git.remote, "origin");
}

#[test]
fn test_invalid_toml_fails() {
    let temp = temp_dir();
    let path = write_toml(&temp, "broken.toml", "[graph\ntrunk = ");
    assert!(Config::from_file(&path).is_err());
}
