// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the network module using wiremock.

use gitdeck::error::{DeckError, NetworkError};
use gitdeck::net::Downloader;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[tokio::test]
async fn test_download_file_success() {
    let mock_server = MockServer::start().await;
    let body = b"portable git archive bytes".to_vec();

    Mock::given(method("GET"))
        .and(path("/git.tar.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&mock_server)
        .await;

    let temp = temp_dir();
    let output = temp.path().join("downloads").join("git.tar.gz");

    Downloader::new()
        .url(format!("{}/git.tar.gz", mock_server.uri()))
        .file(&output)
        .silent()
        .download()
        .await
        .expect("download succeeds");

    let written = std::fs::read(&output).expect("output file exists");
    assert_eq!(written, body);
}

#[tokio::test]
async fn test_download_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.tar.gz"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let temp = temp_dir();
    let output = temp.path().join("git.tar.gz");

    let result = Downloader::new()
        .url(format!("{}/missing.tar.gz", mock_server.uri()))
        .file(&output)
        .silent()
        .download()
        .await;

    match result.expect_err("404 must fail") {
        DeckError::Network(boxed) => match *boxed {
            NetworkError::HttpError { status, .. } => assert_eq!(status, 404),
            other => panic!("expected HttpError, got {other:?}"),
        },
        other => panic!("expected DeckError::Network, got {other:?}"),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_download_without_url_fails() {
    let temp = temp_dir();
    let result = Downloader::new()
        .file(temp.path().join("out.bin"))
        .silent()
        .download()
        .await;

    match result.expect_err("missing URL must fail") {
        DeckError::Network(boxed) => {
            assert!(matches!(*boxed, NetworkError::InvalidUrl(_)));
        }
        other => panic!("expected DeckError::Network, got {other:?}"),
    }
}

#[tokio::test]
async fn test_download_without_output_file_fails() {
    let result = Downloader::new()
        .url("http://localhost/never-sent")
        .silent()
        .download()
        .await;
    assert!(result.is_err());
}
