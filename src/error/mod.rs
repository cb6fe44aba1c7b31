// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               DeckError
//!                   |
//!   +------+-------+-------+-------+------+
//!   v      v       v       v       v      v
//!  Git  Registry  Net    Setup   Config  Io/Other
//!  Box    Box     Box     Box     Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, NotARepository
//!   Registry Sqlite, NotFound
//!   Network  Reqwest, HttpError, Interrupted
//!   Setup    UnsupportedPlatform, ExtractFailed
//!   Config   ParseError, MissingKey, InvalidValue
//!
//! All variants boxed so DeckError stays small on the stack.
//! The graph module has no error type: it is total over its input.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DeckError`].
pub type DeckResult<T> = std::result::Result<T, DeckError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Repository registry error.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Portable git provisioning error.
    #[error("setup error: {0}")]
    Setup(#[from] Box<SetupError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DeckError {
                fn from(err: $error) -> Self {
                    DeckError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    RegistryError => Registry,
    NetworkError => Network,
    SetupError => Setup,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path and not registered.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Path exists but holds no git repository.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Git command execution failed. `message` carries stderr verbatim.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Registry Errors ---

/// Repository registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Error from the underlying sqlite database.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Filesystem error while locating or creating the database.
    #[error("io error: {0}")]
    Io(String),
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// Download was interrupted by user or signal.
    #[error("download interrupted")]
    Interrupted,

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// No or malformed URL configured.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

// --- Setup Errors ---

/// Portable git provisioning errors.
#[derive(Debug, Error)]
pub enum SetupError {
    /// No portable git archive is published for this platform.
    #[error("no portable git available for {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    /// Archive extraction failed.
    #[error("failed to extract {archive}: {message}")]
    ExtractFailed { archive: String, message: String },
}

// --- Config Errors ---

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be parsed.
    #[error("failed to parse configuration: {message}")]
    ParseError { message: String },

    /// A required key is missing and has no derivable default.
    #[error("missing configuration key: {section}.{key}")]
    MissingKey { section: String, key: String },

    /// A key holds a value outside its accepted range or format.
    #[error("invalid value for {section}.{key}: {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
