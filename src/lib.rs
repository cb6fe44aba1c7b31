// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           repo / git / graph / setup
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+------+-------+-----+---'
//!                 |      |       |     |
//!                 v      v       v     v
//!             registry  git    graph  setup
//!              sqlite  gix/CLI  lanes  net/DL
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, net       |
//!   +-----------------------------------------+
//! ```
//!
//! The `graph` module is the reusable core: a total, pure reconstruction of
//! branch lanes from decorated `git log --graph` text. Everything else is
//! the surrounding tool — registry persistence, git subprocess plumbing,
//! and portable git provisioning.

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod graph;
pub mod logging;
pub mod net;
pub mod registry;
pub mod setup;
