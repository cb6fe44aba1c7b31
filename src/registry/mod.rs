// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository registry.
//!
//! ```text
//! Database (sqlite)
//!   repos: id | name | path (UNIQUE)
//!
//! add_repo     INSERT OR IGNORE (re-adding a path is a no-op)
//! list_repos   ordered by id
//! remove_repo  NotFound when no row matched
//! find_by_name first match by name
//! ```
//!
//! The registry only stores which repositories the user tracks; everything
//! else is re-derived from the repositories themselves on demand.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;
use tracing::debug;

use crate::error::RegistryError;

type Result<T> = std::result::Result<T, RegistryError>;

/// One tracked repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRecord {
    pub id: i64,
    pub name: String,
    pub path: String,
}

impl RepoRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            path: row.get(2)?,
        })
    }
}

/// Database handle.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the default location.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the user data directory cannot be
    /// determined or the database cannot be opened.
    pub fn open() -> Result<Self> {
        let path = Self::default_path()?;
        Self::open_at(&path)
    }

    /// Open or create a database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the parent directory cannot be created
    /// or the database cannot be opened.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                RegistryError::Io(format!("failed to create database directory: {e}"))
            })?;
        }

        debug!(path = %path.display(), "opening registry");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create an in-memory database for testing.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if sqlite fails to open the database.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Default database path under the user data directory.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the data directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join("gitdeck").join("gitdeck.db"))
            .ok_or_else(|| RegistryError::Io("could not determine data directory".to_string()))
    }

    /// Initialize the schema.
    fn initialize(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS repos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                path TEXT NOT NULL UNIQUE
            )",
            [],
        )?;
        Ok(())
    }

    /// Track a repository. Re-adding an already-tracked path is a no-op.
    ///
    /// Returns `true` when a new row was inserted.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the insert fails.
    pub fn add_repo(&self, name: &str, path: &str) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO repos (name, path) VALUES (?1, ?2)",
            params![name, path],
        )?;
        Ok(inserted > 0)
    }

    /// All tracked repositories, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the query fails.
    pub fn list_repos(&self) -> Result<Vec<RepoRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, path FROM repos ORDER BY id")?;
        let repos = stmt
            .query_map([], RepoRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(repos)
    }

    /// Stop tracking a repository by id.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` when no repository has that id.
    pub fn remove_repo(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM repos WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(RegistryError::NotFound(format!("repository with id {id}")));
        }
        Ok(())
    }

    /// Find a tracked repository by name.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the query fails.
    pub fn find_by_name(&self, name: &str) -> Result<Option<RepoRecord>> {
        self.conn
            .query_row(
                "SELECT id, name, path FROM repos WHERE name = ?1 ORDER BY id LIMIT 1",
                params![name],
                RepoRecord::from_row,
            )
            .optional()
            .map_err(RegistryError::Sqlite)
    }
}

#[cfg(test)]
mod tests;
