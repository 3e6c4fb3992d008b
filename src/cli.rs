use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Registrar - course, assignment and grade records in a single JSON store
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'registrar' without arguments for the interactive menu.")]
pub struct Cli {
    /// Store file (overrides REGISTRAR_DATA_FILE and config)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive sign-in menu (default)
    Menu,

    /// Load and reconcile the store, then print a summary
    Check {
        /// Write the reconciled store back when repairs were needed
        #[arg(long)]
        repair: bool,
    },
}
