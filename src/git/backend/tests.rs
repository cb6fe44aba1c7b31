// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ShellBackend, split_lines};
use crate::error::{DeckError, GitError};

#[test]
fn test_split_lines_empty_output() {
    assert!(split_lines("").is_empty());
}

#[test]
fn test_split_lines_multiline_output() {
    let lines = split_lines("one\ntwo\nthree");
    assert_eq!(lines, vec!["one", "two", "three"]);
}

#[test]
fn test_git_command_version() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let output = ShellBackend::git_command(&["--version"], tmp.path())
        .expect("git --version should succeed");
    assert!(output.contains("git version"));
}

#[test]
fn test_git_command_failure_carries_stderr() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    // `git log` outside any repository fails with a non-zero exit.
    let result = ShellBackend::git_command(&["log"], tmp.path());
    let err = result.expect_err("git log outside a repo must fail");
    match err {
        DeckError::Git(boxed) => match *boxed {
            GitError::CommandFailed { command, message } => {
                assert_eq!(command, "git log");
                assert!(!message.is_empty());
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        },
        other => panic!("expected DeckError::Git, got {other:?}"),
    }
}
