// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use super::paths::PathsConfig;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.git.remote, "origin");
    assert_eq!(config.graph.trunk, "master");
    assert_eq!(config.graph.limit, 50);
}

#[test]
fn test_parse_toml_overrides() {
    let config = Config::parse(
        r#"
        [global]
        dry = true
        output_log_level = 4

        [git]
        remote = "upstream"

        [graph]
        trunk = "main"
        limit = 10

        [paths]
        data = "/tmp/deck-data"
        "#,
    )
    .expect("valid configuration");

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.git.remote, "upstream");
    assert_eq!(config.graph.trunk, "main");
    assert_eq!(config.graph.limit, 10);
    assert_eq!(config.paths.data, Some(PathBuf::from("/tmp/deck-data")));
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse("[global]\nno_such_key = true\n");
    assert!(result.is_err());
}

#[test]
fn test_paths_resolve_derives_from_data() {
    let mut paths = PathsConfig {
        data: Some(PathBuf::from("/tmp/deck-data")),
        ..Default::default()
    };
    paths.resolve().expect("resolution succeeds");

    assert_eq!(
        paths.database().unwrap(),
        PathBuf::from("/tmp/deck-data/gitdeck.db")
    );
    assert_eq!(
        paths.portable_git().unwrap(),
        PathBuf::from("/tmp/deck-data/git")
    );
}

#[test]
fn test_paths_resolve_keeps_explicit_values() {
    let mut paths = PathsConfig {
        data: Some(PathBuf::from("/tmp/deck-data")),
        database: Some(PathBuf::from("/elsewhere/deck.db")),
        portable_git: None,
    };
    paths.resolve().expect("resolution succeeds");

    assert_eq!(
        paths.database().unwrap(),
        PathBuf::from("/elsewhere/deck.db")
    );
    assert_eq!(
        paths.portable_git().unwrap(),
        PathBuf::from("/tmp/deck-data/git")
    );
}

#[test]
fn test_loader_set_override_wins() {
    let config = Config::builder()
        .add_toml_str("[git]\nremote = \"upstream\"\n")
        .set("git.remote", "fork")
        .expect("valid override")
        .build()
        .expect("valid configuration");
    assert_eq!(config.git.remote, "fork");
}

#[test]
fn test_format_options_is_sorted_and_complete() {
    let config = Config::parse("[paths]\ndata = \"/tmp/deck-data\"\n").unwrap();
    let options = config.format_options();

    let mut sorted = options.clone();
    sorted.sort();
    assert_eq!(options, sorted);
    assert!(options.iter().any(|o| o == "git.remote = origin"));
    assert!(options.iter().any(|o| o == "graph.trunk = master"));
    assert!(
        options
            .iter()
            .any(|o| o == "paths.database = /tmp/deck-data/gitdeck.db")
    );
}
