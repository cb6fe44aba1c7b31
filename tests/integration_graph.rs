// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the log-graph reconstruction pipeline, from raw
//! log text (static and produced by a real git repository) to rendered
//! lanes.

use gitdeck::cmd::graph::render_lanes;
use gitdeck::git::query::graph_log;
use gitdeck::graph::{self, DEFAULT_LANE};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn init_repo(path: &Path) {
    git(path, &["init", "--quiet"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test"]);
}

fn commit(path: &Path, message: &str) {
    git(
        path,
        &["commit", "--allow-empty", "-m", message, "--quiet"],
    );
}

// A captured merge-shaped graph log. Connector lines carry no hash and are
// dropped; lane assignment comes from the decorations alone.
const MERGE_LOG: &[&str] = &[
    "*   3f9e2d1 (HEAD -> master, origin/master) Merge branch 'feature/login'",
    "|\\",
    "| * 8c4b7a2 (feature/login) Add login form",
    "| * 5d6e9f0 Validate credentials",
    "|/",
    "* 2a1b3c4 Initial commit",
];

#[test]
fn test_static_merge_log_parse() {
    let commits = graph::parse(MERGE_LOG);

    // Two connector lines are dropped, four commit lines survive.
    assert_eq!(commits.len(), 4);
    assert_eq!(commits[0].branch, "HEAD -> master");
    assert_eq!(commits[1].branch, "feature/login");
    assert_eq!(commits[2].branch, DEFAULT_LANE);
    assert_eq!(commits[3].branch, DEFAULT_LANE);
    assert_eq!(
        commits[0].refs,
        vec!["HEAD -> master", "origin/master"]
    );
}

#[test]
fn test_static_merge_log_projection() {
    let commits = graph::parse(MERGE_LOG);
    let lanes = graph::project(&commits);

    let names: Vec<&str> = lanes.lanes().map(graph::BranchLane::name).collect();
    assert_eq!(names, vec!["HEAD -> master", "feature/login", DEFAULT_LANE]);

    // "HEAD -> master" is created before any lane literally named "master"
    // exists, so both it and "feature/login" are roots.
    assert!(lanes.get("HEAD -> master").unwrap().parent().is_none());
    assert!(lanes.get("feature/login").unwrap().parent().is_none());
    assert!(lanes.get(DEFAULT_LANE).unwrap().parent().is_none());

    assert_eq!(lanes.get(DEFAULT_LANE).unwrap().commits().len(), 2);
    assert_eq!(lanes.get("feature/login").unwrap().commits().len(), 1);
}

#[test]
fn test_static_merge_log_rendering() {
    let commits = graph::parse(MERGE_LOG);
    let lanes = graph::project(&commits);
    let rendered = render_lanes(&lanes);

    assert!(rendered.contains("feature/login"));
    assert!(rendered.contains("* 2a1b3c4 Initial commit (Unknown)"));
    // The trunk lane header comes before the commits placed on it.
    let header = rendered.find("\nmaster\n").unwrap();
    let commit = rendered.find("2a1b3c4").unwrap();
    assert!(header < commit);
}

#[test]
fn test_branch_lanes_parent_on_trunk_when_trunk_seen_first() {
    let log = [
        "* 1111111 (master) base",
        "* 2222222 (feature/x) branched",
    ];
    let commits = graph::parse(log);
    let lanes = graph::project(&commits);

    let feature = lanes.get("feature/x").unwrap();
    let parent = feature.parent().expect("feature branches off trunk");
    assert_eq!(lanes.lane(parent).name(), "master");
}

#[test]
fn test_real_repository_round_trip() {
    let temp = temp_dir();
    init_repo(temp.path());
    commit(temp.path(), "Initial commit");
    commit(temp.path(), "Second commit");

    let lines = graph_log(temp.path(), None).expect("graph log succeeds");
    assert_eq!(lines.len(), 2);

    let commits = graph::parse(&lines);
    assert_eq!(commits.len(), 2);
    // Newest first: the tip is decorated, its parent is bare.
    assert_eq!(commits[0].message, "Second commit");
    assert!(!commits[0].refs.is_empty());
    assert!(commits[1].refs.is_empty());
    assert_eq!(commits[1].branch, DEFAULT_LANE);

    let lanes = graph::project(&commits);
    let total: usize = lanes.lanes().map(|l| l.commits().len()).sum();
    assert_eq!(total, 2);

    let rendered = render_lanes(&lanes);
    assert!(rendered.contains("Second commit"));
    assert!(rendered.contains("Initial commit"));
}

#[test]
fn test_real_repository_json_shape() {
    let temp = temp_dir();
    init_repo(temp.path());
    commit(temp.path(), "Initial commit");

    let lines = graph_log(temp.path(), None).expect("graph log succeeds");
    let lanes = graph::project(&graph::parse(&lines));

    let json = serde_json::to_value(&lanes).expect("lanes serialize");
    assert!(json["trunk"].is_string());
    assert!(json["lanes"].is_array());
    let first = &json["lanes"][0];
    assert!(first["name"].is_string());
    assert_eq!(first["commits"][0]["subject"], "Initial commit");
    assert_eq!(first["commits"][0]["author"], "Unknown");
}
