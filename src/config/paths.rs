// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! data/                 (user data dir / "gitdeck" unless set)
//!   gitdeck.db          (registry)
//!   git/                (portable git installations)
//!     <os>-<arch>/bin/
//! ```
//!
//! All paths are optional in the file and resolved from `data` if not set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Data and installation paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Application data root (all other paths relative to this).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    /// Registry database file (default: data/gitdeck.db).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// Portable git root (default: data/git).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portable_git: Option<PathBuf>,
}

impl PathsConfig {
    /// Fill unset paths from `data`, deriving `data` itself from the user
    /// data directory when missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when `data` is unset and no user
    /// data directory can be determined.
    pub fn resolve(&mut self) -> Result<(), ConfigError> {
        if self.data.is_none() {
            self.data = dirs::data_dir().map(|d| d.join("gitdeck"));
        }
        let data = self.data.as_ref().ok_or_else(|| ConfigError::MissingKey {
            section: "paths".to_string(),
            key: "data".to_string(),
        })?;

        if self.database.is_none() {
            self.database = Some(data.join("gitdeck.db"));
        }
        if self.portable_git.is_none() {
            self.portable_git = Some(data.join("git"));
        }
        Ok(())
    }

    /// Registry database path. Available after [`Self::resolve`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when unresolved.
    pub fn database(&self) -> Result<&Path, ConfigError> {
        self.database
            .as_deref()
            .ok_or_else(|| ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "database".to_string(),
            })
    }

    /// Portable git root. Available after [`Self::resolve`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when unresolved.
    pub fn portable_git(&self) -> Result<&Path, ConfigError> {
        self.portable_git
            .as_deref()
            .ok_or_else(|| ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "portable_git".to_string(),
            })
    }
}
