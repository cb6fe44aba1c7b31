// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Database;
use crate::error::RegistryError;

fn db() -> Database {
    Database::in_memory().expect("in-memory database")
}

#[test]
fn test_open_at_creates_file_and_schema() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("nested").join("deck.db");

    let db = Database::open_at(&path).expect("database creation");
    assert!(path.exists());
    assert!(db.list_repos().unwrap().is_empty());
}

#[test]
fn test_add_and_list_repos() {
    let db = db();
    assert!(db.add_repo("web", "/home/u/src/web").unwrap());
    assert!(db.add_repo("api", "/home/u/src/api").unwrap());

    let repos = db.list_repos().unwrap();
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "web");
    assert_eq!(repos[1].name, "api");
    assert!(repos[0].id < repos[1].id);
}

#[test]
fn test_add_repo_same_path_is_noop() {
    let db = db();
    assert!(db.add_repo("web", "/home/u/src/web").unwrap());
    assert!(!db.add_repo("renamed", "/home/u/src/web").unwrap());

    let repos = db.list_repos().unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "web");
}

#[test]
fn test_remove_repo() {
    let db = db();
    db.add_repo("web", "/home/u/src/web").unwrap();
    let id = db.list_repos().unwrap()[0].id;

    db.remove_repo(id).expect("removal succeeds");
    assert!(db.list_repos().unwrap().is_empty());
}

#[test]
fn test_remove_missing_repo_is_not_found() {
    let db = db();
    let err = db.remove_repo(42).expect_err("nothing to remove");
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[test]
fn test_find_by_name() {
    let db = db();
    db.add_repo("web", "/home/u/src/web").unwrap();

    let found = db.find_by_name("web").unwrap().expect("record exists");
    assert_eq!(found.path, "/home/u/src/web");
    assert!(db.find_by_name("nope").unwrap().is_none());
}
