// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Add | Remove | Repos | Status | Fetch | Pull | Push
//!   Branches | Checkout | Graph | SetupGit | Options | Version
//! ```

use std::process::ExitCode;

use gitdeck::cli::global::GlobalOptions;
use gitdeck::cli::{self, Command};
use gitdeck::cmd::config::run_options_command;
use gitdeck::cmd::git::{
    run_branches_command, run_checkout_command, run_fetch_command, run_pull_command,
    run_push_command, run_status_command,
};
use gitdeck::cmd::graph::run_graph_command;
use gitdeck::cmd::repo::{run_add_command, run_remove_command, run_repos_command};
use gitdeck::cmd::setup::run_setup_command;
use gitdeck::config::Config;
use gitdeck::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Pin the git program once: portable install when provisioned, else PATH.
    gitdeck::setup::init_git_program(config.paths.portable_git().ok());

    dispatch_command(&cli, &config).await
}

fn load_config(global: &GlobalOptions) -> gitdeck::error::Result<Config> {
    let mut loader = Config::builder().add_toml_file_optional("gitdeck.toml");
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("GITDECK");

    if let Some(database) = &global.database {
        loader = loader.set("paths.database", database.display().to_string())?;
    }
    if global.dry {
        loader = loader.set("global.dry", true)?;
    }
    loader.build()
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.output_log_level);

    // File level falls back to the console override, then the config.
    let file_level = global
        .file_log_level
        .or(global.log_level)
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.file_log_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| config.global.log_file.clone());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let dry_run = config.global.dry;

    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Add(args)) => run_add_command(args, config),
        Some(Command::Remove(args)) => run_remove_command(args, config),
        Some(Command::Repos(args)) => run_repos_command(args, config),
        Some(Command::Status(args)) => run_status_command(args, config),
        Some(Command::Fetch(args)) => run_fetch_command(args, config, dry_run),
        Some(Command::Pull(args)) => run_pull_command(args, config, dry_run),
        Some(Command::Push(args)) => run_push_command(args, config, dry_run),
        Some(Command::Branches(args)) => run_branches_command(args, config),
        Some(Command::Checkout(args)) => run_checkout_command(args, config, dry_run),
        Some(Command::Graph(args)) => run_graph_command(args, config),
        Some(Command::SetupGit(args)) => run_setup_command(args, config, dry_run).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
