// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, DeckError, GitError, NetworkError, RegistryError, SetupError};

#[test]
fn test_git_command_failed_display() {
    let err = GitError::CommandFailed {
        command: "git fetch origin".to_string(),
        message: "could not resolve host".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "git command failed: git fetch origin - could not resolve host"
    );
}

#[test]
fn test_git_error_boxed_into_deck_error() {
    let err: DeckError = GitError::NotARepository {
        path: "/tmp/nope".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "git error: not a git repository: /tmp/nope");
}

#[test]
fn test_registry_not_found_display() {
    let err: DeckError = RegistryError::NotFound("repo 'web'".to_string()).into();
    assert_eq!(err.to_string(), "registry error: not found: repo 'web'");
}

#[test]
fn test_network_http_error_display() {
    let err = NetworkError::HttpError {
        status: 404,
        url: "https://example.com/git.tar.gz".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "http error 404: https://example.com/git.tar.gz"
    );
}

#[test]
fn test_setup_unsupported_platform_display() {
    let err = SetupError::UnsupportedPlatform {
        os: "freebsd".to_string(),
        arch: "riscv64".to_string(),
    };
    assert_eq!(err.to_string(), "no portable git available for freebsd-riscv64");
}

#[test]
fn test_config_invalid_value_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "output_log_level".to_string(),
        message: "log level must be 0-5, got 9".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "invalid value for global.output_log_level: log level must be 0-5, got 9"
    );
}

#[test]
fn test_io_error_boxed_into_deck_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: DeckError = io.into();
    assert!(matches!(err, DeckError::Io(_)));
}

#[test]
fn test_deck_error_stays_small() {
    // Boxed variants keep the top-level enum pointer-sized plus discriminant.
    assert!(std::mem::size_of::<DeckError>() <= 24);
}
