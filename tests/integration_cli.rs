// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the CLI surface.

use gitdeck::cli::{Command, parse_from};

#[test]
fn test_no_command_is_accepted() {
    let cli = parse_from(["gitdeck"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(parse_from(["gitdeck", "frobnicate"]).is_err());
}

#[test]
fn test_add_requires_a_path() {
    assert!(parse_from(["gitdeck", "add"]).is_err());
}

#[test]
fn test_checkout_requires_a_target() {
    assert!(parse_from(["gitdeck", "checkout"]).is_err());
}

#[test]
fn test_config_files_accumulate_in_order() {
    let cli = parse_from([
        "gitdeck",
        "--config",
        "a.toml",
        "--config",
        "b.toml",
        "repos",
    ])
    .unwrap();
    let configs: Vec<String> = cli
        .global
        .configs
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(configs, vec!["a.toml", "b.toml"]);
}

#[test]
fn test_status_count_flag() {
    let cli = parse_from(["gitdeck", "status", "web", "-n", "3"]).unwrap();
    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status command");
    };
    assert_eq!(args.repo.as_deref(), Some("web"));
    assert_eq!(args.count, 3);
}

#[test]
fn test_branches_all_flag() {
    let cli = parse_from(["gitdeck", "branches", "--all"]).unwrap();
    let Some(Command::Branches(args)) = cli.command else {
        panic!("expected branches command");
    };
    assert!(args.all);
    assert!(args.repo.is_none());
}

#[test]
fn test_version_command() {
    let cli = parse_from(["gitdeck", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}
