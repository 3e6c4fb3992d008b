//! Registrar CLI
//!
//! Usage: registrar [--data PATH] [-v] [COMMAND]
//!
//! Commands:
//!   menu   Interactive sign-in menu (default)
//!   check  Load and reconcile the store, then print a summary

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use registrar::config::{Config, LogLevel};

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Logs go to stderr; stdout belongs to the menu and to `check` output.
fn init_tracing(level: LogLevel, verbose: u8) {
    let explicit = verbose > 0 || std::env::var_os("REGISTRAR_LOG").is_some();
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !explicit => EnvFilter::new(directives),
        _ => EnvFilter::new(level.as_str()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(Some(cwd.as_path()))?;

    init_tracing(config.logging.level.raised_by(cli.verbose), cli.verbose);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let data_file = cli.data.unwrap_or(config.storage.data_file);
    tracing::debug!(path = %data_file.display(), "using store");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::cmd_menu(&data_file),
        Commands::Check { repair } => commands::check::cmd_check(&data_file, repair),
    }
}
